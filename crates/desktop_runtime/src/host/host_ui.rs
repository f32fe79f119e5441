use leptos::{logging, Callback};
#[cfg(target_arch = "wasm32")]
use leptos::Callable;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    dock::DockGeometry,
    host::DesktopHostContext,
    model::{IconDragBounds, PointerPosition, Size, WindowRect},
    reducer::DesktopAction,
};

pub(super) async fn open_external_url(host: DesktopHostContext, url: String) {
    if let Err(err) = host.services().external_urls.open_url(&url).await {
        logging::warn!("open external url failed for `{url}`: {err}");
    }
}

pub(super) fn schedule_click_timeout(
    dispatch: Callback<DesktopAction>,
    token: u64,
    delay_ms: u32,
) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            logging::warn!("click timeout not scheduled: no window");
            return;
        };
        let callback = Closure::once_into_js(move || {
            dispatch.call(DesktopAction::ClickTimeout { token });
        });
        let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        if let Err(err) = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), timeout)
        {
            logging::warn!("click timeout not scheduled: {err:?}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (dispatch, token, delay_ms);
}

pub const DESKTOP_SURFACE_DOM_ID: &str = "desktop-surface";
pub const DOCK_DOM_ID: &str = "desktop-dock";
const DEFAULT_ICON_SIZE: Size = Size { w: 80, h: 90 };

pub(super) fn desktop_viewport_rect(dock_height_px: i32) -> WindowRect {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(1024);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(768);

            return WindowRect {
                x: 0,
                y: 0,
                w: width.max(320),
                h: (height - dock_height_px).max(220),
            };
        }
    }

    WindowRect {
        x: 0,
        y: 0,
        w: 1024,
        h: 768 - dock_height_px,
    }
}

#[cfg(target_arch = "wasm32")]
fn element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

/// Desktop container client size plus the rendered size of one icon.
pub(super) fn icon_drag_bounds() -> IconDragBounds {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(surface) = element_by_id(DESKTOP_SURFACE_DOM_ID) {
            let item = surface
                .query_selector("[data-hit=\"desktop-icon\"]")
                .ok()
                .flatten()
                .and_then(|icon| icon.dyn_into::<web_sys::HtmlElement>().ok())
                .map(|icon| Size {
                    w: icon.offset_width(),
                    h: icon.offset_height(),
                })
                .unwrap_or(DEFAULT_ICON_SIZE);
            return IconDragBounds {
                container: Size {
                    w: surface.client_width(),
                    h: surface.client_height(),
                },
                item,
            };
        }
    }

    let viewport = desktop_viewport_rect(0);
    IconDragBounds {
        container: Size {
            w: viewport.w,
            h: viewport.h,
        },
        item: DEFAULT_ICON_SIZE,
    }
}

/// Client coordinates of the desktop container's top-left corner.
pub(super) fn desktop_surface_origin() -> PointerPosition {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(surface) = element_by_id(DESKTOP_SURFACE_DOM_ID) {
            let rect = surface.get_bounding_client_rect();
            return PointerPosition {
                x: rect.left() as i32,
                y: rect.top() as i32,
            };
        }
    }

    PointerPosition { x: 0, y: 0 }
}

/// Dock width and item centers in client coordinates, or `None` when the dock is not rendered.
pub(super) fn dock_geometry() -> Option<DockGeometry> {
    #[cfg(target_arch = "wasm32")]
    {
        let dock = element_by_id(DOCK_DOM_ID)?;
        let items = dock.children();
        let item_centers = (0..items.length())
            .filter_map(|index| items.item(index))
            .map(|item| {
                let rect = item.get_bounding_client_rect();
                rect.left() + rect.width() / 2.0
            })
            .collect();
        return Some(DockGeometry {
            width: dock.get_bounding_client_rect().width(),
            item_centers,
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    None
}
