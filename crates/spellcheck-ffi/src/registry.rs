// Live-handle registry.
//
// Every handle returned by `spellcheck_create` is recorded here until
// `spellcheck_destroy` removes it. Lookups let the boundary turn a double
// destroy or a query on a destroyed handle into a no-op instead of touching
// freed memory. An address reused by a later session is indistinguishable
// from the original handle.

use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use hashbrown::HashSet;

static LIVE_HANDLES: LazyLock<Mutex<HashSet<usize>>> =
    LazyLock::new(|| Mutex::new(HashSet::new()));

fn live_handles() -> MutexGuard<'static, HashSet<usize>> {
    // The set holds plain addresses; a panic while holding the lock cannot
    // leave it half-updated.
    LIVE_HANDLES.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Record a freshly created handle.
pub(crate) fn register<T>(handle: *const T) {
    live_handles().insert(handle.addr());
}

/// Forget a handle. Returns `false` if it was not live.
pub(crate) fn unregister<T>(handle: *const T) -> bool {
    live_handles().remove(&handle.addr())
}

/// Whether a handle was created and not yet destroyed.
pub(crate) fn is_live<T>(handle: *const T) -> bool {
    !handle.is_null() && live_handles().contains(&handle.addr())
}
