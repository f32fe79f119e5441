//! DOM-facing render hooks the reducer cannot express as state.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::model::{WindowRecord, WindowState};

/// DOM id of the assistant panel's scrolling conversation container.
pub const CONVERSATION_LOG_DOM_ID: &str = "assistant-conversation";
/// Body class that disables text selection while a drag is active.
pub const NO_SELECT_CLASS: &str = "no-select";

/// Imperative rendering hooks executed by the host after reducer effects.
pub trait RenderTarget {
    /// Scrolls the conversation container so the newest entry is visible.
    fn scroll_conversation_to_latest(&self);
    /// Adds or removes document-wide text-selection suppression.
    fn set_selection_suppressed(&self, suppressed: bool);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderTarget;

impl RenderTarget for NoopRenderTarget {
    fn scroll_conversation_to_latest(&self) {}

    fn set_selection_suppressed(&self, _suppressed: bool) {}
}

/// [`RenderTarget`] backed by the live document. Does nothing off wasm.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomRenderTarget;

impl RenderTarget for DomRenderTarget {
    fn scroll_conversation_to_latest(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(document) = web_sys::window().and_then(|window| window.document()) else {
                return;
            };
            let Some(element) = document.get_element_by_id(CONVERSATION_LOG_DOM_ID) else {
                return;
            };
            let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
                return;
            };
            element.set_scroll_top(element.scroll_height());
        }
    }

    fn set_selection_suppressed(&self, suppressed: bool) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(body) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.body())
            else {
                return;
            };
            let classes = body.class_list();
            let _ = if suppressed {
                classes.add_1(NO_SELECT_CLASS)
            } else {
                classes.remove_1(NO_SELECT_CLASS)
            };
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = suppressed;
    }
}

/// CSS classes for a window frame, derived from its state variant and focus.
pub fn window_css_classes(window: &WindowRecord) -> String {
    let mut classes = String::from("desktop-window");
    match window.state {
        WindowState::Normal => {}
        WindowState::Maximized => classes.push_str(" maximized"),
        WindowState::Minimized => classes.push_str(" minimized"),
    }
    if window.is_focused {
        classes.push_str(" active-window");
    }
    classes
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{AppId, WindowContent, WindowId, WindowRect};

    fn window(state: WindowState, is_focused: bool) -> WindowRecord {
        WindowRecord {
            id: WindowId(1),
            content: WindowContent::App(AppId::new("notes-app")),
            title: "Notes".to_string(),
            rect: WindowRect::default(),
            restore_rect: None,
            z_index: 1,
            state,
            is_focused,
        }
    }

    #[test]
    fn classes_follow_state_variant() {
        assert_eq!(
            window_css_classes(&window(WindowState::Normal, true)),
            "desktop-window active-window"
        );
        assert_eq!(
            window_css_classes(&window(WindowState::Maximized, false)),
            "desktop-window maximized"
        );
        assert_eq!(
            window_css_classes(&window(WindowState::Minimized, false)),
            "desktop-window minimized"
        );
    }
}
