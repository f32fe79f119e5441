//! Translates DOM ancestry into [`HitRegion`] chains for the gesture classifier.
//!
//! Interactive elements carry a `data-hit` kind plus the ids the region needs. The chain is
//! collected from the event target outward.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::{
    gesture::{HitRegion, WindowControl},
    model::{DesktopItemId, PointerPosition, WindowId},
};

#[cfg(any(test, target_arch = "wasm32"))]
pub(super) const HIT_ATTR: &str = "data-hit";
pub(super) const HIT_DESKTOP_ICON: &str = "desktop-icon";
pub(super) const HIT_WINDOW_CONTROL: &str = "window-control";
pub(super) const HIT_TITLE_BAR: &str = "titlebar";
pub(super) const HIT_WINDOW: &str = "window";
pub(super) const HIT_BACKGROUND: &str = "desktop";

pub(super) fn control_token(control: WindowControl) -> &'static str {
    match control {
        WindowControl::Close => "close",
        WindowControl::Minimize => "minimize",
        WindowControl::Maximize => "maximize",
    }
}

#[cfg(any(test, target_arch = "wasm32"))]
fn parse_control(token: &str) -> Option<WindowControl> {
    match token {
        "close" => Some(WindowControl::Close),
        "minimize" => Some(WindowControl::Minimize),
        "maximize" => Some(WindowControl::Maximize),
        _ => None,
    }
}

/// Builds a region from one element's `data-hit` kind and attribute lookup. Elements with
/// missing or malformed ids are skipped.
#[cfg(any(test, target_arch = "wasm32"))]
pub(super) fn parse_hit_region(
    kind: &str,
    attr: impl Fn(&str) -> Option<String>,
) -> Option<HitRegion> {
    let window_id = || {
        attr("data-window-id")
            .and_then(|raw| raw.parse::<u64>().ok())
            .map(WindowId)
    };
    match kind {
        HIT_DESKTOP_ICON => attr("data-item-id").map(|id| HitRegion::DesktopIcon(DesktopItemId::new(id))),
        HIT_WINDOW_CONTROL => {
            let control = attr("data-control").as_deref().and_then(parse_control)?;
            Some(HitRegion::WindowControl(window_id()?, control))
        }
        HIT_TITLE_BAR => window_id().map(HitRegion::TitleBar),
        HIT_WINDOW => window_id().map(HitRegion::WindowBody),
        HIT_BACKGROUND => Some(HitRegion::Background),
        _ => None,
    }
}

#[cfg(target_arch = "wasm32")]
pub(super) fn hit_regions_for_event(ev: &web_sys::PointerEvent) -> Vec<HitRegion> {
    let mut regions = Vec::new();
    let mut current = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok());
    while let Some(element) = current {
        if let Some(kind) = element.get_attribute(HIT_ATTR) {
            if let Some(region) = parse_hit_region(&kind, |name| element.get_attribute(name)) {
                regions.push(region);
            }
        }
        current = element.parent_element();
    }
    regions
}

#[cfg(not(target_arch = "wasm32"))]
pub(super) fn hit_regions_for_event(_: &web_sys::PointerEvent) -> Vec<HitRegion> {
    Vec::new()
}

/// Routes the rest of this pointer's events to the pressed element, so a release over an iframe
/// or outside the page still ends the drag.
#[cfg(target_arch = "wasm32")]
pub(super) fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(super) fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

pub(super) fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn window_regions_need_numeric_ids() {
        assert_eq!(
            parse_hit_region(HIT_TITLE_BAR, attrs(&[("data-window-id", "4")])),
            Some(HitRegion::TitleBar(WindowId(4)))
        );
        assert_eq!(
            parse_hit_region(HIT_WINDOW, attrs(&[("data-window-id", "four")])),
            None
        );
    }

    #[test]
    fn controls_round_trip_through_their_tokens() {
        for control in [
            WindowControl::Close,
            WindowControl::Minimize,
            WindowControl::Maximize,
        ] {
            let lookup = attrs(&[
                ("data-window-id", "2"),
                ("data-control", control_token(control)),
            ]);
            assert_eq!(
                parse_hit_region(HIT_WINDOW_CONTROL, lookup),
                Some(HitRegion::WindowControl(WindowId(2), control))
            );
        }
    }

    #[test]
    fn icons_and_background_parse_and_unknown_kinds_are_skipped() {
        assert_eq!(
            parse_hit_region(HIT_DESKTOP_ICON, attrs(&[("data-item-id", "notes-shortcut")])),
            Some(HitRegion::DesktopIcon(DesktopItemId::new("notes-shortcut")))
        );
        assert_eq!(
            parse_hit_region(HIT_BACKGROUND, attrs(&[])),
            Some(HitRegion::Background)
        );
        assert_eq!(parse_hit_region("dock", attrs(&[])), None);
    }
}
