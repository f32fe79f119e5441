//! Assistant transport adapter posting JSON with `fetch` through `gloo-net`.

use platform_host::{AssistantTransport, AssistantTransportFuture, HttpResponse};
use serde_json::Value;

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser assistant transport.
pub struct WebAssistantTransport;

impl AssistantTransport for WebAssistantTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: &'a Value,
    ) -> AssistantTransportFuture<'a, Result<HttpResponse, String>> {
        Box::pin(async move { bridge::post_json(url, body).await })
    }
}
