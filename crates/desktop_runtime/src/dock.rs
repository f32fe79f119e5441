//! Dock pin state and the pointer-driven magnification curve.

use crate::{apps::AppEntry, model::AppId};

/// Extra scale applied to an item directly under the pointer.
pub const DOCK_MAX_SCALE_BOOST: f64 = 0.8;

/// Scale for one dock item given its horizontal distance from the pointer.
///
/// Items closer than `max_distance` grow linearly up to `1 + DOCK_MAX_SCALE_BOOST`; everything
/// else stays at 1.
pub fn magnify_scale(distance: f64, max_distance: f64) -> f64 {
    let distance = distance.abs();
    if max_distance <= 0.0 || distance >= max_distance {
        return 1.0;
    }
    1.0 + (1.0 - distance / max_distance) * DOCK_MAX_SCALE_BOOST
}

/// Rendered dock geometry sampled by the DOM adapter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DockGeometry {
    pub width: f64,
    /// Horizontal center of each dock item, in the same coordinate space as the pointer.
    pub item_centers: Vec<f64>,
}

impl DockGeometry {
    pub fn max_distance(&self) -> f64 {
        self.width / 3.0
    }
}

/// Per-item scales for a pointer at `pointer_x`. Runs on every pointer-move over the dock.
pub fn dock_item_scales(pointer_x: f64, geometry: &DockGeometry) -> Vec<f64> {
    let max_distance = geometry.max_distance();
    geometry
        .item_centers
        .iter()
        .map(|center| magnify_scale(pointer_x - center, max_distance))
        .collect()
}

/// Scales after the pointer leaves the dock.
pub fn resting_scales(item_count: usize) -> Vec<f64> {
    vec![1.0; item_count]
}

/// Dock controls offered to the command router. Each call returns a confirmation message for
/// the conversation log.
pub trait DockControls {
    fn add_app_to_dock(&mut self, app: &AppEntry) -> String;
    fn remove_app_from_dock(&mut self, app: &AppEntry) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DockState {
    pinned: Vec<AppId>,
}

impl DockState {
    pub fn new(pinned: Vec<AppId>) -> Self {
        let mut dock = Self::default();
        for app_id in pinned {
            if !dock.is_pinned(&app_id) {
                dock.pinned.push(app_id);
            }
        }
        dock
    }

    pub fn pinned(&self) -> &[AppId] {
        &self.pinned
    }

    pub fn is_pinned(&self, app_id: &AppId) -> bool {
        self.pinned.contains(app_id)
    }
}

impl DockControls for DockState {
    fn add_app_to_dock(&mut self, app: &AppEntry) -> String {
        if self.is_pinned(&app.id) {
            return format!("**{}** is already in your dock.", app.name);
        }
        self.pinned.push(app.id.clone());
        format!("Added **{}** to your dock.", app.name)
    }

    fn remove_app_from_dock(&mut self, app: &AppEntry) -> String {
        let before = self.pinned.len();
        self.pinned.retain(|id| id != &app.id);
        if self.pinned.len() == before {
            format!("**{}** isn't in your dock.", app.name)
        } else {
            format!("Removed **{}** from your dock.", app.name)
        }
    }
}
