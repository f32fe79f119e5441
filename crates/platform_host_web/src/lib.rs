//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Browser API calls are isolated in `bridge`, which falls back to inert shims on non-wasm
//! targets so the adapters stay buildable and testable natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod adapters;
pub mod assistant;
mod bridge;
pub mod external_url;
pub mod storage;

pub use adapters::{
    assistant_transport, build_host_services, desktop_item_position_store, external_url_service,
    prefs_store, selected_host_strategy,
};
pub use assistant::WebAssistantTransport;
pub use external_url::WebExternalUrlService;
pub use storage::desktop_items::{WebDesktopItemPositionStore, DESKTOP_ITEM_POSITIONS_KEY};
pub use storage::local_prefs::WebPrefsStore;
