//! Desktop-item position adapter storing one JSON map in `localStorage`.

use std::collections::BTreeMap;

use platform_host::{DesktopItemPositionStore, DesktopItemStoreFuture, StoredItemPosition};

use crate::bridge;

/// `localStorage` key holding the item-id to position map.
pub const DESKTOP_ITEM_POSITIONS_KEY: &str = "desktop.item_positions.v1";

#[derive(Debug, Clone, Copy, Default)]
/// Browser desktop-item position store.
pub struct WebDesktopItemPositionStore;

impl WebDesktopItemPositionStore {
    fn load_map(self) -> Result<BTreeMap<String, StoredItemPosition>, String> {
        let Some(raw) = bridge::local_storage_get(DESKTOP_ITEM_POSITIONS_KEY)? else {
            return Ok(BTreeMap::new());
        };
        // A corrupt map is replaced rather than blocking further updates.
        Ok(serde_json::from_str(&raw).unwrap_or_default())
    }
}

impl DesktopItemPositionStore for WebDesktopItemPositionStore {
    fn update_desktop_item_position<'a>(
        &'a self,
        item_id: &'a str,
        x: i32,
        y: i32,
    ) -> DesktopItemStoreFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move {
            let mut positions = store.load_map()?;
            positions.insert(item_id.to_string(), StoredItemPosition { x, y });
            let raw = serde_json::to_string(&positions).map_err(|e| e.to_string())?;
            bridge::local_storage_set(DESKTOP_ITEM_POSITIONS_KEY, &raw)
        })
    }
}
