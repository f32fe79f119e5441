//! Host-side runtime helpers for executing reducer effects.
//!
//! Reducer effects are plain data; this module maps each one onto the injected
//! [`HostServices`], the [`RenderTarget`], or a spawned task that dispatches a follow-up action.

mod assistant_effects;
mod boot;
mod host_ui;
mod persistence_effects;

use std::{cell::RefCell, rc::Rc};

use futures::future::{AbortHandle, FutureExt, LocalBoxFuture};
use leptos::spawn_local;
use platform_host::HostServices;

pub use host_ui::{DESKTOP_SURFACE_DOM_ID, DOCK_DOM_ID};

use crate::{
    config::AssistantConfig,
    dock::DockGeometry,
    model::{IconDragBounds, PointerPosition, WindowRect},
    reducer::RuntimeEffect,
    render::{DomRenderTarget, RenderTarget},
    runtime_context::DesktopRuntimeContext,
};

/// Abort handles for assistant requests that have not completed yet.
#[derive(Default)]
pub(crate) struct PendingRequests {
    next_id: u64,
    handles: Vec<(u64, AbortHandle)>,
}

impl PendingRequests {
    fn track(&mut self, handle: AbortHandle) -> u64 {
        self.next_id += 1;
        self.handles.push((self.next_id, handle));
        self.next_id
    }

    fn finish(&mut self, id: u64) {
        self.handles.retain(|(pending_id, _)| *pending_id != id);
    }

    fn abort_all(&mut self) -> usize {
        let count = self.handles.len();
        for (_, handle) in self.handles.drain(..) {
            handle.abort();
        }
        count
    }
}

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
    render: Rc<dyn RenderTarget>,
    assistant_config: Rc<RefCell<AssistantConfig>>,
    pending_requests: Rc<RefCell<PendingRequests>>,
}

impl DesktopHostContext {
    /// Builds a host context rendering into the live document.
    pub fn new(services: HostServices) -> Self {
        Self::with_render_target(services, Rc::new(DomRenderTarget))
    }

    pub fn with_render_target(services: HostServices, render: Rc<dyn RenderTarget>) -> Self {
        Self {
            services,
            render,
            assistant_config: Rc::new(RefCell::new(AssistantConfig::default())),
            pending_requests: Rc::new(RefCell::new(PendingRequests::default())),
        }
    }

    pub fn services(&self) -> &HostServices {
        &self.services
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    pub fn assistant_config(&self) -> AssistantConfig {
        self.assistant_config.borrow().clone()
    }

    pub fn set_assistant_config(&self, config: AssistantConfig) {
        *self.assistant_config.borrow_mut() = config;
    }

    /// Area a maximized window fills: the browser viewport minus the dock.
    pub fn desktop_viewport_rect(&self, dock_height_px: i32) -> WindowRect {
        host_ui::desktop_viewport_rect(dock_height_px)
    }

    /// Current desktop container and icon sizes for clamping icon drags.
    pub fn icon_drag_bounds(&self) -> IconDragBounds {
        host_ui::icon_drag_bounds()
    }

    pub fn desktop_surface_origin(&self) -> PointerPosition {
        host_ui::desktop_surface_origin()
    }

    pub fn dock_geometry(&self) -> Option<DockGeometry> {
        host_ui::dock_geometry()
    }

    /// Loads runtime configuration overrides in the background.
    pub fn install_boot_hydration(&self) {
        boot::install_boot_hydration(self.clone());
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::ScheduleClickTimeout { token, delay_ms } => {
                host_ui::schedule_click_timeout(runtime.dispatch, token, delay_ms)
            }
            RuntimeEffect::RequestAssistantReply { prompt } => {
                assistant_effects::request_reply(self.clone(), runtime.dispatch, prompt)
            }
            effect => {
                if let Some(task) = self.run_host_effect(effect) {
                    spawn_local(task);
                }
            }
        }
    }

    /// Runs an effect that needs no dispatch callback. Render and cancellation effects complete
    /// immediately; service calls come back as a task for the caller to spawn.
    ///
    /// Click timers and assistant requests report back through dispatch and are ignored here.
    fn run_host_effect(&self, effect: RuntimeEffect) -> Option<LocalBoxFuture<'static, ()>> {
        match effect {
            RuntimeEffect::OpenExternalUrl(url) => {
                Some(host_ui::open_external_url(self.clone(), url).boxed_local())
            }
            RuntimeEffect::PersistDesktopItemPosition { item_id, position } => Some(
                persistence_effects::persist_desktop_item_position(self.clone(), item_id, position)
                    .boxed_local(),
            ),
            RuntimeEffect::CancelAssistantRequests => {
                assistant_effects::cancel_all(self);
                None
            }
            RuntimeEffect::ScrollConversationToLatest => {
                self.render.scroll_conversation_to_latest();
                None
            }
            RuntimeEffect::SetSelectionSuppressed(suppressed) => {
                self.render.set_selection_suppressed(suppressed);
                None
            }
            RuntimeEffect::ScheduleClickTimeout { .. }
            | RuntimeEffect::RequestAssistantReply { .. } => None,
        }
    }
}
