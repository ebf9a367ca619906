//! Poison-tolerant locking.
//!
//! The only shared state in this crate is the hex parse cache. Every value
//! it can hold is a fully constructed [`crate::Color`], so data left behind
//! by a thread that panicked mid-update is still valid and the lock is
//! recovered instead of propagating the panic.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock a mutex, recovering from poison if necessary.
///
/// # Example
///
/// ```rust
/// use std::sync::Mutex;
/// use dynamic_color::sync::lock_recover;
///
/// let mutex = Mutex::new(42);
/// let guard = lock_recover(&mutex);
/// assert_eq!(*guard, 42);
/// ```
#[inline]
pub fn lock_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        log::warn!("recovering poisoned mutex");
        PoisonError::into_inner(poisoned)
    })
}
