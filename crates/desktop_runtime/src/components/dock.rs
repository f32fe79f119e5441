use super::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct DockEntry {
    app_id: AppId,
    name: String,
    running: bool,
    focused: bool,
}

/// Pinned apps in pin order, then running apps that are not pinned.
fn dock_entries(state: &DesktopState) -> Vec<DockEntry> {
    let mut app_ids: Vec<AppId> = state.dock.pinned().to_vec();
    for window in &state.windows {
        if let Some(app_id) = window.content.app_id() {
            if !app_ids.contains(app_id) {
                app_ids.push(app_id.clone());
            }
        }
    }

    app_ids
        .into_iter()
        .filter_map(|app_id| {
            let app = state.catalog.get(&app_id)?;
            let mut windows = state
                .windows
                .iter()
                .filter(|w| w.content.app_id() == Some(&app_id))
                .peekable();
            let running = windows.peek().is_some();
            let focused = windows.any(|w| w.is_focused);
            Some(DockEntry {
                app_id,
                name: app.name.clone(),
                running,
                focused,
            })
        })
        .collect()
}

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let entries = Signal::derive(move || runtime.state.with(dock_entries));
    let scales = create_rw_signal(Vec::<f64>::new());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if let Some(geometry) = runtime.host.get_value().dock_geometry() {
            scales.set(dock_item_scales(f64::from(ev.client_x()), &geometry));
        }
    };
    let on_pointer_leave = move |_| scales.set(resting_scales(entries.get_untracked().len()));

    view! {
        <nav
            id=DOCK_DOM_ID
            class="dock"
            aria-label="Dock"
            on:pointermove=on_pointer_move
            on:pointerleave=on_pointer_leave
        >
            <For
                each=move || entries.get().into_iter().enumerate()
                key=|(_, entry)| entry.clone()
                let:item
            >
                {{
                    let (index, entry) = item;
                    let app_id = entry.app_id.clone();
                    let scale = move || scales.with(|s| s.get(index).copied().unwrap_or(1.0));
                    view! {
                        <button
                            type="button"
                            class="dock-item"
                            class:running=entry.running
                            class:focused=entry.focused
                            title=entry.name.clone()
                            style=move || format!("transform:scale({:.3});", scale())
                            on:click=move |_| {
                                runtime.dispatch_action(DesktopAction::DockItemClicked {
                                    app_id: app_id.clone(),
                                });
                            }
                        >
                            <span class="dock-item-label">{entry.name.clone()}</span>
                        </button>
                    }
                }}
            </For>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        apps::{AppCatalog, AppEntry},
        desktop_items::DesktopItemLayout,
        model::OpenWindowRequest,
        window_manager::open_window,
    };

    #[test]
    fn running_apps_follow_pinned_apps() {
        let mut state = DesktopState::with_catalog(
            AppCatalog::new(vec![
                AppEntry::new("notes-app", "Notes", "https://notes.example"),
                AppEntry::new("mail-app", "Mail", "https://mail.example"),
            ]),
            DesktopItemLayout::default(),
            vec![AppId::new("notes-app")],
        );
        open_window(
            &mut state,
            OpenWindowRequest {
                content: WindowContent::App(AppId::new("mail-app")),
                title: "Mail".to_string(),
                rect: None,
            },
        );

        let entries = dock_entries(&state);
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Notes", "Mail"]);
        assert!(!entries[0].running);
        assert!(entries[1].running && entries[1].focused);
    }
}
