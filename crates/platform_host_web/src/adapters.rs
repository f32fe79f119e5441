//! Compile-time host-strategy selection and adapter factories for runtime wiring.

use std::rc::Rc;

use platform_host::{
    AssistantTransport, DesktopItemPositionStore, ExternalUrlService, HostServices, HostStrategy,
    NoopAssistantTransport, NoopDesktopItemPositionStore, NoopExternalUrlService, NoopPrefsStore,
    PrefsStore,
};

use crate::{
    WebAssistantTransport, WebDesktopItemPositionStore, WebExternalUrlService, WebPrefsStore,
};

/// Returns the host strategy selected for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "desktop-host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "desktop-host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected preference store.
pub fn prefs_store() -> Rc<dyn PrefsStore> {
    match selected_host_strategy() {
        HostStrategy::Browser => Rc::new(WebPrefsStore),
        HostStrategy::Stub => Rc::new(NoopPrefsStore),
    }
}

/// Returns the selected external URL service.
pub fn external_url_service() -> Rc<dyn ExternalUrlService> {
    match selected_host_strategy() {
        HostStrategy::Browser => Rc::new(WebExternalUrlService),
        HostStrategy::Stub => Rc::new(NoopExternalUrlService),
    }
}

/// Returns the selected desktop-item position store.
pub fn desktop_item_position_store() -> Rc<dyn DesktopItemPositionStore> {
    match selected_host_strategy() {
        HostStrategy::Browser => Rc::new(WebDesktopItemPositionStore),
        HostStrategy::Stub => Rc::new(NoopDesktopItemPositionStore),
    }
}

/// Returns the selected assistant transport.
pub fn assistant_transport() -> Rc<dyn AssistantTransport> {
    match selected_host_strategy() {
        HostStrategy::Browser => Rc::new(WebAssistantTransport),
        HostStrategy::Stub => Rc::new(NoopAssistantTransport),
    }
}

/// Assembles the full [`HostServices`] bundle for the selected strategy.
pub fn build_host_services() -> HostServices {
    match selected_host_strategy() {
        HostStrategy::Browser => HostServices {
            prefs: prefs_store(),
            external_urls: external_url_service(),
            desktop_items: desktop_item_position_store(),
            assistant: assistant_transport(),
            host_strategy: HostStrategy::Browser,
        },
        HostStrategy::Stub => HostServices::noop(),
    }
}
