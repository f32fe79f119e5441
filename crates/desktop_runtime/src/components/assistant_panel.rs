use super::*;

#[component]
pub(super) fn AssistantPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let draft = create_rw_signal(String::new());

    let open = Signal::derive(move || state.with(|s| s.assistant_panel.open));
    let waiting = Signal::derive(move || state.with(|s| s.assistant_panel.typing_indicator_visible()));
    let submit_enabled = Signal::derive(move || state.with(|s| s.assistant_panel.submit_enabled()));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !submit_enabled.get_untracked() {
            return;
        }
        let text = draft.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        draft.set(String::new());
        runtime.dispatch_action(DesktopAction::SubmitText { text });
    };

    view! {
        <aside class="assistant-panel" class:open=open aria-label="Assistant" aria-hidden=move || (!open.get()).to_string()>
            <header class="assistant-panel-header">
                <span>"Assistant"</span>
                <button
                    type="button"
                    aria-label="Close assistant"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleAssistantPanel)
                >
                    "×"
                </button>
            </header>
            <div id=CONVERSATION_LOG_DOM_ID class="assistant-conversation" role="log" aria-live="polite">
                <For
                    each=move || state.with(|s| s.conversation.entries().to_vec())
                    key=|entry| entry.order
                    let:entry
                >
                    {{
                        let class = match entry.sender {
                            Sender::User => "chat-entry chat-entry-user",
                            Sender::Ai => "chat-entry chat-entry-ai",
                        };
                        view! { <div class=class inner_html=entry.html()></div> }
                    }}
                </For>
                <Show when=move || waiting.get() fallback=|| ()>
                    <div class="typing-indicator" aria-label="Assistant is typing">
                        <span></span>
                        <span></span>
                        <span></span>
                    </div>
                </Show>
            </div>
            <form class="assistant-input" on:submit=submit>
                <input
                    type="text"
                    placeholder="Ask anything, or try \"open Notes\""
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || !submit_enabled.get()>
                    "Send"
                </button>
                <Show when=move || waiting.get() fallback=|| ()>
                    <button
                        type="button"
                        on:click=move |_| {
                            runtime.dispatch_action(DesktopAction::CancelAssistantRequests);
                        }
                    >
                        "Stop"
                    </button>
                </Show>
            </form>
        </aside>
    }
}
