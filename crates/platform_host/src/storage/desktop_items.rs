//! Desktop-item position persistence contract.
//!
//! The shell reports the final clamped position of a dragged desktop icon through this service.
//! The call is fire-and-forget from the runtime's point of view; failures are only logged.

use std::{cell::RefCell, collections::BTreeMap, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`DesktopItemPositionStore`].
pub type DesktopItemStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Stored top-left position of one desktop item, in container pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredItemPosition {
    /// Horizontal offset from the container's left edge.
    pub x: i32,
    /// Vertical offset from the container's top edge.
    pub y: i32,
}

/// Host service receiving desktop-item position updates.
pub trait DesktopItemPositionStore {
    /// Records the position of `item_id`. Last write wins.
    fn update_desktop_item_position<'a>(
        &'a self,
        item_id: &'a str,
        x: i32,
        y: i32,
    ) -> DesktopItemStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Position store that discards every update.
pub struct NoopDesktopItemPositionStore;

impl DesktopItemPositionStore for NoopDesktopItemPositionStore {
    fn update_desktop_item_position<'a>(
        &'a self,
        _item_id: &'a str,
        _x: i32,
        _y: i32,
    ) -> DesktopItemStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory position store keyed by item id.
pub struct MemoryDesktopItemPositionStore {
    positions: Rc<RefCell<BTreeMap<String, StoredItemPosition>>>,
}

impl MemoryDesktopItemPositionStore {
    /// Returns the last recorded position for `item_id`.
    pub fn position(&self, item_id: &str) -> Option<StoredItemPosition> {
        self.positions.borrow().get(item_id).copied()
    }

    /// Returns every recorded position ordered by item id.
    pub fn snapshot(&self) -> BTreeMap<String, StoredItemPosition> {
        self.positions.borrow().clone()
    }
}

impl DesktopItemPositionStore for MemoryDesktopItemPositionStore {
    fn update_desktop_item_position<'a>(
        &'a self,
        item_id: &'a str,
        x: i32,
        y: i32,
    ) -> DesktopItemStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.positions
                .borrow_mut()
                .insert(item_id.to_string(), StoredItemPosition { x, y });
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn last_write_wins_per_item() {
        let store = MemoryDesktopItemPositionStore::default();
        let store_obj: &dyn DesktopItemPositionStore = &store;

        block_on(store_obj.update_desktop_item_position("trash", 10, 20)).expect("first");
        block_on(store_obj.update_desktop_item_position("trash", 40, 8)).expect("second");
        block_on(store_obj.update_desktop_item_position("docs", 0, 0)).expect("other");

        assert_eq!(
            store.position("trash"),
            Some(StoredItemPosition { x: 40, y: 8 })
        );
        assert_eq!(store.snapshot().len(), 2);
    }
}
