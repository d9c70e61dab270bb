//! In-memory state and operations backing the two screens, independent of
//! any rendering technology. Each model caches a subset of remote rows;
//! the cache may be stale at any time and is never refreshed on change.

mod validation;

pub mod expenses;
pub mod groups;

use std::sync::{Mutex, MutexGuard, PoisonError};

// State is mutated only between awaits, never across them, so the guard is
// held briefly and a poisoned lock can safely yield its inner value.
fn lock<T>(state: &Mutex<T>) -> MutexGuard<'_, T> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
