use super::*;

#[component]
pub(super) fn CommandCenter() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let open = Signal::derive(move || state.with(|s| s.command_center.open));
    let query = Signal::derive(move || state.with(|s| s.command_center.query.clone()));
    let results = Signal::derive(move || {
        state.with(|s| {
            s.catalog
                .search(&s.command_center.query)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::SubmitCommandCenter);
    };

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div
                class="command-center-backdrop"
                on:click=move |_| runtime.dispatch_action(DesktopAction::CloseCommandCenter)
            >
                <div
                    class="command-center"
                    role="dialog"
                    aria-label="Command center"
                    on:click=|ev| ev.stop_propagation()
                >
                    <form on:submit=submit>
                        <input
                            type="search"
                            placeholder="Search apps or type a command"
                            autofocus=true
                            prop:value=move || query.get()
                            on:input=move |ev| {
                                runtime.dispatch_action(DesktopAction::SetCommandCenterQuery {
                                    query: event_target_value(&ev),
                                });
                            }
                        />
                    </form>
                    <ul class="command-center-results">
                        <For each=move || results.get() key=|app| app.id.clone() let:app>
                            {{
                                let app_id = app.id.clone();
                                view! {
                                    <li>
                                        <button
                                            type="button"
                                            on:click=move |_| {
                                                runtime.dispatch_action(DesktopAction::CloseCommandCenter);
                                                runtime.dispatch_action(DesktopAction::LaunchApp {
                                                    app_id: app_id.clone(),
                                                });
                                            }
                                        >
                                            {app.name.clone()}
                                        </button>
                                    </li>
                                }
                            }}
                        </For>
                    </ul>
                </div>
            </div>
        </Show>
    }
}
