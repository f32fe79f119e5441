use super::*;

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let window = Signal::derive(move || runtime.state.with(|s| s.window(window_id).cloned()));
    let catalog_url = move |content: &WindowContent| {
        content.app_id().and_then(|app_id| {
            runtime
                .state
                .with_untracked(|state| state.catalog.get(app_id).map(|app| app.url.clone()))
        })
    };

    view! {
        <Show when=move || window.get().is_some() fallback=|| ()>
            {move || {
                let Some(win) = window.get() else {
                    return ().into_view();
                };
                let style = format!(
                    "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                    win.rect.x, win.rect.y, win.rect.w, win.rect.h, win.z_index
                );
                let id = win.id.0.to_string();
                let body = match catalog_url(&win.content) {
                    Some(url) => view! {
                        <iframe
                            class="window-app-frame"
                            src=url
                            title=win.title.clone()
                            style:pointer-events=move || {
                                if runtime.interaction.with(|i| i.dragging.is_some()) {
                                    "none"
                                } else {
                                    "auto"
                                }
                            }
                        ></iframe>
                    }
                    .into_view(),
                    None => view! {
                        <p class="window-folder-empty">"This folder is empty."</p>
                    }
                    .into_view(),
                };

                view! {
                    <section
                        class=window_css_classes(&win)
                        style=style
                        role="dialog"
                        aria-label=win.title.clone()
                        data-hit=HIT_WINDOW
                        data-window-id=id.clone()
                    >
                        <header class="titlebar" data-hit=HIT_TITLE_BAR data-window-id=id.clone()>
                            <span class="titlebar-title">{win.title.clone()}</span>
                            <div class="titlebar-controls">
                                <WindowControlButton window_id=win.id control=WindowControl::Minimize label="Minimize window" />
                                <WindowControlButton window_id=win.id control=WindowControl::Maximize label="Maximize window" />
                                <WindowControlButton window_id=win.id control=WindowControl::Close label="Close window" />
                            </div>
                        </header>
                        <div class="window-body">{body}</div>
                    </section>
                }
                .into_view()
            }}
        </Show>
    }
}

#[component]
fn WindowControlButton(
    window_id: WindowId,
    control: WindowControl,
    label: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=format!("window-control window-control-{}", control_token(control))
            aria-label=label
            data-hit=HIT_WINDOW_CONTROL
            data-control=control_token(control)
            data-window-id=window_id.0.to_string()
        ></button>
    }
}
