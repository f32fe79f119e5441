//! `localStorage`-backed preference store.
//!
//! The browser API is synchronous; lookups resolve as ready futures.

use platform_host::{PrefsStore, PrefsStoreFuture};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser preference store backed by `window.localStorage`.
pub struct WebPrefsStore;

impl PrefsStore for WebPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { bridge::local_storage_get(key) })
    }
}
