//! Desktop icon layout store.
//!
//! Positions are keyed by item id and always clamped to the desktop container. There is no
//! conflict detection: only one drag can be active, so the last write wins.

use serde::{Deserialize, Serialize};

use crate::model::{AppId, DesktopItemId, IconDragBounds, ItemPosition};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DesktopItemKind {
    AppShortcut(AppId),
    Folder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopItem {
    pub id: DesktopItemId,
    pub label: String,
    pub kind: DesktopItemKind,
    pub position: ItemPosition,
}

/// Clamps an icon's top-left corner so the whole icon stays inside the container.
///
/// Each axis is clamped independently to `[0, container - item]`, with a floor of 0 when the
/// icon is larger than the container.
pub fn clamp_icon_position(x: i32, y: i32, bounds: IconDragBounds) -> ItemPosition {
    let max_x = (bounds.container.w - bounds.item.w).max(0);
    let max_y = (bounds.container.h - bounds.item.h).max(0);
    ItemPosition {
        x: x.clamp(0, max_x),
        y: y.clamp(0, max_y),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesktopItemLayout {
    items: Vec<DesktopItem>,
    folders_created: u32,
}

impl DesktopItemLayout {
    pub fn new(items: Vec<DesktopItem>) -> Self {
        Self {
            items,
            folders_created: 0,
        }
    }

    pub fn items(&self) -> &[DesktopItem] {
        &self.items
    }

    pub fn item(&self, item_id: &DesktopItemId) -> Option<&DesktopItem> {
        self.items.iter().find(|item| &item.id == item_id)
    }

    /// Stores a clamped position for `item_id` and returns it, or `None` for an unknown item.
    /// Repeating the same update is harmless.
    pub fn update_position(
        &mut self,
        item_id: &DesktopItemId,
        x: i32,
        y: i32,
        bounds: IconDragBounds,
    ) -> Option<ItemPosition> {
        let item = self.items.iter_mut().find(|item| &item.id == item_id)?;
        item.position = clamp_icon_position(x, y, bounds);
        Some(item.position)
    }

    /// Adds a folder icon (context-menu "New Folder") and returns its id.
    pub fn create_folder(&mut self, x: i32, y: i32, bounds: IconDragBounds) -> DesktopItemId {
        self.folders_created += 1;
        let mut n = self.folders_created;
        let mut id = DesktopItemId::new(format!("folder-{n}"));
        while self.item(&id).is_some() {
            n += 1;
            id = DesktopItemId::new(format!("folder-{n}"));
        }
        self.folders_created = n;

        let label = if n == 1 {
            "New Folder".to_string()
        } else {
            format!("New Folder ({n})")
        };
        self.items.push(DesktopItem {
            id: id.clone(),
            label,
            kind: DesktopItemKind::Folder,
            position: clamp_icon_position(x, y, bounds),
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::Size;

    fn bounds() -> IconDragBounds {
        IconDragBounds {
            container: Size { w: 800, h: 600 },
            item: Size { w: 80, h: 90 },
        }
    }

    fn layout() -> DesktopItemLayout {
        DesktopItemLayout::new(vec![DesktopItem {
            id: DesktopItemId::new("notes-shortcut"),
            label: "Notes".to_string(),
            kind: DesktopItemKind::AppShortcut(AppId::new("notes-app")),
            position: ItemPosition { x: 24, y: 24 },
        }])
    }

    #[test]
    fn clamp_keeps_icon_fully_inside_on_each_axis() {
        assert_eq!(
            clamp_icon_position(-15, 900, bounds()),
            ItemPosition { x: 0, y: 510 }
        );
        assert_eq!(
            clamp_icon_position(5000, -1, bounds()),
            ItemPosition { x: 720, y: 0 }
        );
        assert_eq!(
            clamp_icon_position(300, 200, bounds()),
            ItemPosition { x: 300, y: 200 }
        );
    }

    #[test]
    fn clamp_floors_at_zero_when_icon_exceeds_container() {
        let tiny = IconDragBounds {
            container: Size { w: 40, h: 40 },
            item: Size { w: 80, h: 90 },
        };
        assert_eq!(clamp_icon_position(25, 25, tiny), ItemPosition::default());
    }

    #[test]
    fn update_position_is_idempotent_and_last_write_wins() {
        let mut layout = layout();
        let id = DesktopItemId::new("notes-shortcut");

        layout.update_position(&id, 100, 100, bounds());
        layout.update_position(&id, 100, 100, bounds());
        assert_eq!(layout.item(&id).unwrap().position, ItemPosition { x: 100, y: 100 });

        layout.update_position(&id, 150, 40, bounds());
        assert_eq!(layout.item(&id).unwrap().position, ItemPosition { x: 150, y: 40 });
    }

    #[test]
    fn update_position_ignores_unknown_items() {
        let mut layout = layout();
        assert_eq!(
            layout.update_position(&DesktopItemId::new("ghost"), 1, 1, bounds()),
            None
        );
    }

    #[test]
    fn new_folders_get_distinct_ids_and_labels() {
        let mut layout = layout();
        let first = layout.create_folder(10, 10, bounds());
        let second = layout.create_folder(900, 900, bounds());

        assert_ne!(first, second);
        let second_item = layout.item(&second).unwrap();
        assert_eq!(second_item.label, "New Folder (2)");
        assert_eq!(second_item.position, ItemPosition { x: 720, y: 510 });
    }
}
