use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct DesktopContextMenuState {
    /// Client coordinates of the opening right-click.
    pub(super) pointer: PointerPosition,
}

#[component]
pub(super) fn DesktopContextMenu(menu: RwSignal<Option<DesktopContextMenuState>>) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let new_folder = move |_| {
        let Some(opened) = menu.get_untracked() else {
            return;
        };
        menu.set(None);
        let host = runtime.host.get_value();
        let origin = host.desktop_surface_origin();
        runtime.dispatch_action(DesktopAction::CreateFolder {
            position: ItemPosition {
                x: opened.pointer.x - origin.x,
                y: opened.pointer.y - origin.y,
            },
            bounds: host.icon_drag_bounds(),
        });
    };

    view! {
        <Show when=move || menu.get().is_some() fallback=|| ()>
            {move || {
                let Some(opened) = menu.get() else {
                    return ().into_view();
                };
                view! {
                    <div
                        id="desktop-context-menu"
                        class="context-menu"
                        role="menu"
                        style=format!("left:{}px;top:{}px;", opened.pointer.x, opened.pointer.y)
                        on:pointerdown=|ev: web_sys::PointerEvent| ev.stop_propagation()
                    >
                        <button type="button" role="menuitem" on:click=new_folder>
                            "New Folder"
                        </button>
                    </div>
                }
                .into_view()
            }}
        </Show>
    }
}
