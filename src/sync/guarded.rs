//! A value bound to its own lock
//!
//! [`Guarded<T>`] owns exactly one `T` and the mutex protecting it. The only
//! way to reach the value is [`Guarded::lock`], which returns a scoped
//! [`Guard`]; the lock is released when the guard goes out of scope, on the
//! unwind path included. Moving the container moves lock and value together.

use parking_lot::{Condvar, Mutex, MutexGuard};
use std::ops::{Deref, DerefMut};

/// Owns a value and the lock that protects it.
#[derive(Debug, Default)]
pub struct Guarded<T> {
    inner: Mutex<T>,
}

impl<T> Guarded<T> {
    /// Wrap a value with its own lock
    pub fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(value),
        }
    }

    /// Block until the lock is free, then return exclusive access.
    ///
    /// No timeout and no fairness guarantee beyond what the underlying
    /// parking_lot mutex provides.
    pub fn lock(&self) -> Guard<'_, T> {
        Guard {
            inner: self.inner.lock(),
        }
    }

    /// Consume the container and return the value (no locking needed)
    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }

    /// Access the value through exclusive ownership (no locking needed)
    pub fn get_mut(&mut self) -> &mut T {
        self.inner.get_mut()
    }
}

/// Scoped exclusive access to a [`Guarded`] value.
///
/// Dereferences to the protected value; dropping it unlocks.
pub struct Guard<'a, T> {
    inner: MutexGuard<'a, T>,
}

impl<T> Guard<'_, T> {
    /// Atomically release the lock, wait on `condvar` while `condition`
    /// holds, and reacquire before returning.
    ///
    /// This is the seam that lets composite structures (the blocking queue,
    /// the wait group) key a wait predicate to the guarded state without
    /// exposing the raw mutex.
    pub fn wait_while<F>(&mut self, condvar: &Condvar, condition: F)
    where
        F: FnMut(&mut T) -> bool,
    {
        condvar.wait_while(&mut self.inner, condition);
    }
}

impl<T> Deref for Guard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> DerefMut for Guard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}
