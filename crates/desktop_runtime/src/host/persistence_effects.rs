use leptos::logging;

use crate::{
    host::DesktopHostContext,
    model::{DesktopItemId, ItemPosition},
};

pub(super) async fn persist_desktop_item_position(
    host: DesktopHostContext,
    item_id: DesktopItemId,
    position: ItemPosition,
) {
    if let Err(err) = host
        .services()
        .desktop_items
        .update_desktop_item_position(item_id.as_str(), position.x, position.y)
        .await
    {
        logging::warn!("persist desktop item `{item_id}` position failed: {err}");
    }
}
