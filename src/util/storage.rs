//! Best-effort browser localStorage access for small string slots.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the hydrate-only web-sys glue so callers never deal with the
//! nested `Result<Option<..>>` shape. A missing window, a storage backend
//! disabled by private-browsing policy, or a quota failure all degrade to
//! "slot absent" / dropped write; SSR builds are deterministic no-ops.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Read a string slot from `localStorage`.
#[must_use]
pub fn read_string(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a string slot to `localStorage`, silently dropping the write when
/// storage is unavailable.
pub fn write_string(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(key, value);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}
