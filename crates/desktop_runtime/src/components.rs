//! Desktop shell UI composition and interaction surfaces.
//!
//! Pointer input is captured once at the shell root: the target's `data-hit` ancestry becomes a
//! [`crate::gesture::HitRegion`] chain and the reducer decides what the press means.

mod assistant_panel;
mod command_center;
mod dock;
mod hit_test;
mod menus;
mod window;

use leptos::*;

use self::{
    assistant_panel::AssistantPanel,
    command_center::CommandCenter,
    dock::Dock,
    hit_test::{
        control_token, hit_regions_for_event, pointer_from_pointer_event,
        try_set_pointer_capture, HIT_BACKGROUND, HIT_DESKTOP_ICON, HIT_TITLE_BAR, HIT_WINDOW,
        HIT_WINDOW_CONTROL,
    },
    menus::{DesktopContextMenu, DesktopContextMenuState},
    window::DesktopWindow,
};

use crate::{
    conversation::Sender,
    desktop_items::DesktopItemKind,
    dock::{dock_item_scales, resting_scales},
    gesture::WindowControl,
    host::{DESKTOP_SURFACE_DOM_ID, DOCK_DOM_ID},
    model::{AppId, DesktopState, ItemPosition, PointerPosition, Theme, WindowContent, WindowId},
    reducer::DesktopAction,
    render::{window_css_classes, CONVERSATION_LOG_DOM_ID},
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

const DOCK_HEIGHT_PX: i32 = 72;

/// Actions for one primary press. A drag still active at press time lost its release (the
/// pointer came up over an iframe or outside the page), so it is ended before the new press.
fn press_actions(drag_active: bool, press: DesktopAction) -> Vec<DesktopAction> {
    if drag_active {
        vec![DesktopAction::PointerUp, press]
    } else {
        vec![press]
    }
}

#[component]
fn DesktopIcons() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <For
            each=move || state.with(|s| s.desktop_items.items().to_vec())
            key=|item| item.id.clone()
            let:item
        >
            {{
                let item_id = item.id.clone();
                let style = move || {
                    state.with(|s| {
                        s.desktop_items
                            .item(&item_id)
                            .map(|current| {
                                format!(
                                    "left:{}px;top:{}px;",
                                    current.position.x, current.position.y
                                )
                            })
                            .unwrap_or_default()
                    })
                };
                let kind_class = match item.kind {
                    DesktopItemKind::AppShortcut(_) => "desktop-icon desktop-icon-app",
                    DesktopItemKind::Folder => "desktop-icon desktop-icon-folder",
                };
                view! {
                    <div
                        class=kind_class
                        style=style
                        data-hit=HIT_DESKTOP_ICON
                        data-item-id=item.id.to_string()
                    >
                        <span class="desktop-icon-glyph" aria-hidden="true"></span>
                        <span class="desktop-icon-label">{item.label.clone()}</span>
                    </div>
                }
            }}
        </For>
    }
}

#[component]
fn TopBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let theme = Signal::derive(move || runtime.state.with(|s| s.theme));

    view! {
        <header class="top-bar">
            <button
                type="button"
                class="top-bar-button"
                on:click=move |_| runtime.dispatch_action(DesktopAction::OpenCommandCenter)
            >
                "Search"
            </button>
            <button
                type="button"
                class="top-bar-button"
                aria-label="Toggle theme"
                on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleTheme)
            >
                {move || match theme.get() {
                    Theme::Light => "Dark mode",
                    Theme::Dark => "Light mode",
                }}
            </button>
            <button
                type="button"
                class="top-bar-button"
                on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleAssistantPanel)
            >
                "Assistant"
            </button>
        </header>
    }
}

#[component]
/// Renders the full desktop shell UI.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let context_menu = create_rw_signal(None::<DesktopContextMenuState>);

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }
        if ev.key() == "Escape" {
            context_menu.set(None);
            runtime.dispatch_action(DesktopAction::Escape);
        } else if (ev.ctrl_key() || ev.meta_key()) && ev.key().eq_ignore_ascii_case("k") {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::OpenCommandCenter);
        }
    });
    on_cleanup(move || keydown.remove());

    let on_pointer_down = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        context_menu.set(None);
        let hits = hit_regions_for_event(&ev);
        if hits.is_empty() {
            return;
        }
        let host = runtime.host.get_value();
        let press = DesktopAction::PointerDown {
            hits,
            pointer: pointer_from_pointer_event(&ev),
            bounds: host.icon_drag_bounds(),
            viewport: host.desktop_viewport_rect(DOCK_HEIGHT_PX),
        };
        let stale_drag = runtime.interaction.with_untracked(|i| i.dragging.is_some());
        for action in press_actions(stale_drag, press) {
            runtime.dispatch_action(action);
        }
        if runtime.interaction.with_untracked(|i| i.dragging.is_some()) {
            try_set_pointer_capture(&ev);
        }
    };
    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.with_untracked(|i| i.dragging.is_some()) {
            runtime.dispatch_action(DesktopAction::PointerMove {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |_| {
        let active = runtime
            .interaction
            .with_untracked(|i| i.dragging.is_some() || i.selection_suppressed);
        if active {
            runtime.dispatch_action(DesktopAction::PointerUp);
        }
    };
    let on_context_menu = move |ev: web_sys::MouseEvent| {
        if ev.target() != ev.current_target() {
            return;
        }
        ev.prevent_default();
        context_menu.set(Some(DesktopContextMenuState {
            pointer: PointerPosition {
                x: ev.client_x(),
                y: ev.client_y(),
            },
        }));
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            data-theme=move || state.with(|s| s.theme.as_str())
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
            on:lostpointercapture=on_pointer_end
        >
            <TopBar />
            <main
                id=DESKTOP_SURFACE_DOM_ID
                class="desktop-surface"
                data-hit=HIT_BACKGROUND
                on:contextmenu=on_context_menu
            >
                <DesktopIcons />
                <For
                    each=move || state.with(|s| s.windows.iter().map(|w| w.id).collect::<Vec<_>>())
                    key=|window_id| window_id.0
                    let:window_id
                >
                    <DesktopWindow window_id=window_id />
                </For>
            </main>
            <DesktopContextMenu menu=context_menu />
            <Dock />
            <AssistantPanel />
            <CommandCenter />
        </div>
    }
}
