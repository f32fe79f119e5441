//! Browser API glue shared by the `platform_host_web` adapters.
//!
//! Calls route to target-specific implementations so adapters keep one API on every target.

use platform_host::HttpResponse;
use serde_json::Value;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub fn open_in_new_browsing_context(url: &str) -> Result<(), String> {
    imp::open_in_new_browsing_context(url)
}

pub fn local_storage_get(key: &str) -> Result<Option<String>, String> {
    imp::local_storage_get(key)
}

pub fn local_storage_set(key: &str, value: &str) -> Result<(), String> {
    imp::local_storage_set(key, value)
}

pub async fn post_json(url: &str, body: &Value) -> Result<HttpResponse, String> {
    imp::post_json(url, body).await
}
