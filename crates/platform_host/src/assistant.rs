//! HTTP transport contract for the generative-language assistant service.
//!
//! The transport only moves JSON over the wire. Credential checks, request shaping, and response
//! classification live in the runtime's assistant client so they stay testable without a network.

use std::{cell::RefCell, collections::VecDeque, future::Future, pin::Pin, rc::Rc};

use serde_json::Value;

/// Object-safe boxed future used by [`AssistantTransport`].
pub type AssistantTransportFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Raw HTTP response returned by an [`AssistantTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as received.
    pub body: String,
}

impl HttpResponse {
    /// Returns whether the status code is in the 2xx range.
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Host service posting JSON requests to the assistant endpoint.
pub trait AssistantTransport {
    /// Posts `body` as JSON to `url`.
    ///
    /// `Err` is reserved for failures where no HTTP response was received.
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: &'a Value,
    ) -> AssistantTransportFuture<'a, Result<HttpResponse, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Transport for targets without network access.
pub struct NoopAssistantTransport;

impl AssistantTransport for NoopAssistantTransport {
    fn post_json<'a>(
        &'a self,
        _url: &'a str,
        _body: &'a Value,
    ) -> AssistantTransportFuture<'a, Result<HttpResponse, String>> {
        Box::pin(async { Err("assistant transport is unavailable on this host".to_string()) })
    }
}

/// A request observed by [`ScriptedAssistantTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// Target URL.
    pub url: String,
    /// JSON body.
    pub body: Value,
}

#[derive(Debug, Clone, Default)]
/// Transport replaying queued responses and recording every request it receives.
pub struct ScriptedAssistantTransport {
    responses: Rc<RefCell<VecDeque<Result<HttpResponse, String>>>>,
    requests: Rc<RefCell<Vec<RecordedRequest>>>,
}

impl ScriptedAssistantTransport {
    /// Queues a response for the next request.
    pub fn push_response(&self, response: Result<HttpResponse, String>) {
        self.responses.borrow_mut().push_back(response);
    }

    /// Returns every request received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }
}

impl AssistantTransport for ScriptedAssistantTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: &'a Value,
    ) -> AssistantTransportFuture<'a, Result<HttpResponse, String>> {
        Box::pin(async move {
            self.requests.borrow_mut().push(RecordedRequest {
                url: url.to_string(),
                body: body.clone(),
            });
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err("no scripted response queued".to_string()))
        })
    }
}
