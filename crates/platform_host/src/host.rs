//! Host service bundle injected into the desktop runtime.

use std::rc::Rc;

use crate::{
    AssistantTransport, DesktopItemPositionStore, ExternalUrlService, NoopAssistantTransport,
    NoopDesktopItemPositionStore, NoopExternalUrlService, NoopPrefsStore, PrefsStore,
};

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed adapters.
    Browser,
    /// Placeholder adapters for non-browser builds and tests.
    Stub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Stub => "stub",
        }
    }
}

/// Runtime-selected host services.
///
/// Environment-specific selection happens before the bundle reaches `desktop_runtime`, which
/// keeps the runtime free of browser adapter types.
#[derive(Clone)]
pub struct HostServices {
    /// Preference store used for runtime configuration overrides.
    pub prefs: Rc<dyn PrefsStore>,
    /// Opens app URLs in a new browsing context.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// Receives desktop-item positions after icon drags.
    pub desktop_items: Rc<dyn DesktopItemPositionStore>,
    /// Posts assistant requests.
    pub assistant: Rc<dyn AssistantTransport>,
    /// Strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds a bundle where every service is a no-op.
    pub fn noop() -> Self {
        Self {
            prefs: Rc::new(NoopPrefsStore),
            external_urls: Rc::new(NoopExternalUrlService),
            desktop_items: Rc::new(NoopDesktopItemPositionStore),
            assistant: Rc::new(NoopAssistantTransport),
            host_strategy: HostStrategy::Stub,
        }
    }
}
