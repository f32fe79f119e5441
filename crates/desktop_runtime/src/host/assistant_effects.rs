use leptos::{logging, spawn_local, Callable, Callback};

use crate::{
    assistant::{AssistantClient, AssistantErrorKind, PendingReply},
    host::DesktopHostContext,
    reducer::DesktopAction,
};

/// Runs one assistant request. Exactly one `AssistantReplyReceived` is dispatched for it, even
/// when the task is aborted or dropped.
pub(super) fn request_reply(
    host: DesktopHostContext,
    dispatch: Callback<DesktopAction>,
    prompt: String,
) {
    let client = AssistantClient::new(host.assistant_config(), host.services().assistant.clone());
    let (task, handle) = client.ask_cancellable(prompt);
    let request_id = host.pending_requests.borrow_mut().track(handle);

    let reply = PendingReply::new(move |result| {
        dispatch.call(DesktopAction::AssistantReplyReceived { result });
    });
    spawn_local(async move {
        let result = task.await;
        host.pending_requests.borrow_mut().finish(request_id);
        if let Err(err) = &result {
            if err.kind() != AssistantErrorKind::Cancelled {
                logging::warn!("{err}");
            }
        }
        reply.complete(result);
    });
}

pub(super) fn cancel_all(host: &DesktopHostContext) {
    let aborted = host.pending_requests.borrow_mut().abort_all();
    if aborted > 0 {
        logging::log!("cancelled {aborted} assistant request(s)");
    }
}
