//! Typed host-service contracts shared by the desktop runtime and browser adapters.
//!
//! Every contract is an object-safe trait returning boxed futures, with a `Noop*` implementation
//! for unsupported targets and an in-memory or recording implementation for tests. Concrete
//! browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod assistant;
pub mod external_url;
pub mod host;
pub mod storage;

pub use assistant::{
    AssistantTransport, AssistantTransportFuture, HttpResponse, NoopAssistantTransport,
    RecordedRequest, ScriptedAssistantTransport,
};
pub use external_url::{
    ExternalUrlFuture, ExternalUrlService, NoopExternalUrlService, RecordingExternalUrlService,
};
pub use host::{HostServices, HostStrategy};
pub use storage::desktop_items::{
    DesktopItemPositionStore, DesktopItemStoreFuture, MemoryDesktopItemPositionStore,
    NoopDesktopItemPositionStore, StoredItemPosition,
};
pub use storage::prefs::{
    load_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture,
};
