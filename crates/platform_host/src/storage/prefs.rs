//! Read-only preference lookup for runtime shell configuration.
//!
//! The shell never writes preferences; overrides are placed in the host store out of band (for
//! example through browser devtools) and read once at boot.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::de::DeserializeOwned;

/// Object-safe boxed future used by [`PrefsStore`].
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service resolving a preference key to its raw JSON text.
pub trait PrefsStore {
    /// Returns the JSON stored under `key`, or `None` when the key is unset.
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Store with no preferences set; every lookup misses.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref<'a>(
        &'a self,
        _key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }
}

#[derive(Debug, Clone, Default)]
/// Preferences held in memory, seeded with [`MemoryPrefsStore::insert`].
pub struct MemoryPrefsStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Sets the raw JSON for `key`, replacing any earlier value.
    pub fn insert(&self, key: impl Into<String>, raw_json: impl Into<String>) {
        self.entries.borrow_mut().insert(key.into(), raw_json.into());
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.entries.borrow().get(key).cloned()) })
    }
}

/// Loads `key` and decodes it as `T`. An unset key is `Ok(None)`.
///
/// # Errors
///
/// Returns an error naming `key` when the store fails or the stored JSON does not match `T`.
pub async fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let raw = store
        .load_pref(key)
        .await
        .map_err(|e| format!("pref `{key}` could not be read: {e}"))?;
    match raw {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| format!("pref `{key}` is not valid: {e}")),
        None => Ok(None),
    }
}
