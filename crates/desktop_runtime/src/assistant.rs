//! Client for the generative-language assistant service.
//!
//! Every request ends in exactly one `Result<String, AssistantError>`; the reducer turns either
//! side into a single assistant chat entry.

use std::{future::Future, rc::Rc};

use futures::future::{AbortHandle, Abortable};
use platform_host::AssistantTransport;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::config::AssistantConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistantErrorKind {
    Configuration,
    Transport,
    Protocol,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssistantError {
    #[error("assistant API key is not configured")]
    MissingCredential,
    #[error("assistant request failed: {0}")]
    Network(String),
    #[error("assistant request failed with status {status}")]
    Http {
        status: u16,
        /// `error.message` from the service body, when present.
        message: Option<String>,
    },
    #[error("assistant response could not be parsed: {0}")]
    Protocol(String),
    #[error("assistant request was cancelled")]
    Cancelled,
}

impl AssistantError {
    pub fn kind(&self) -> AssistantErrorKind {
        match self {
            Self::MissingCredential => AssistantErrorKind::Configuration,
            Self::Network(_) | Self::Http { .. } => AssistantErrorKind::Transport,
            Self::Protocol(_) => AssistantErrorKind::Protocol,
            Self::Cancelled => AssistantErrorKind::Cancelled,
        }
    }

    /// Text shown in the conversation log.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingCredential => {
                "The assistant is not configured yet. Add an API key to get replies.".to_string()
            }
            Self::Network(detail) => format!("I couldn't reach the assistant service: {detail}"),
            Self::Http {
                message: Some(message),
                ..
            } => format!("The assistant service returned an error: {message}"),
            Self::Http {
                status,
                message: None,
            } => format!("The assistant request failed with status {status}."),
            Self::Protocol(_) => "I couldn't understand the assistant's response.".to_string(),
            Self::Cancelled => "The assistant request was cancelled.".to_string(),
        }
    }
}

/// `generateContent` request body for a single-turn prompt.
pub fn build_request_body(prompt: &str) -> Value {
    json!({
        "contents": [{
            "parts": [{ "text": prompt }]
        }]
    })
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    error: ServiceError,
}

#[derive(Debug, Deserialize)]
struct ServiceError {
    message: String,
}

/// Concatenates the text parts of the first candidate.
///
/// # Errors
///
/// Returns [`AssistantError::Protocol`] for malformed JSON or a reply without text.
pub fn parse_reply(body: &str) -> Result<String, AssistantError> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| AssistantError::Protocol(e.to_string()))?;
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(AssistantError::Protocol(
            "response contained no candidate text".to_string(),
        ));
    }
    Ok(text)
}

fn service_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ServiceErrorBody>(body)
        .ok()
        .map(|body| body.error.message)
        .filter(|message| !message.trim().is_empty())
}

#[derive(Clone)]
pub struct AssistantClient {
    config: AssistantConfig,
    transport: Rc<dyn AssistantTransport>,
}

impl AssistantClient {
    pub fn new(config: AssistantConfig, transport: Rc<dyn AssistantTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    /// Sends `prompt` and returns the reply text.
    ///
    /// A missing credential fails before the transport is touched.
    ///
    /// # Errors
    ///
    /// Returns the [`AssistantError`] describing why no reply text is available.
    pub async fn ask(&self, prompt: &str) -> Result<String, AssistantError> {
        let api_key = self
            .config
            .credential()
            .ok_or(AssistantError::MissingCredential)?;
        let url = self.config.generate_content_url(api_key);
        let body = build_request_body(prompt);

        let response = self
            .transport
            .post_json(&url, &body)
            .await
            .map_err(AssistantError::Network)?;
        if !response.is_success() {
            return Err(AssistantError::Http {
                status: response.status,
                message: service_error_message(&response.body),
            });
        }
        parse_reply(&response.body)
    }

    /// Like [`Self::ask`] but owned, returning a handle that resolves the request to
    /// [`AssistantError::Cancelled`] when aborted.
    pub fn ask_cancellable(
        &self,
        prompt: String,
    ) -> (
        impl Future<Output = Result<String, AssistantError>> + 'static,
        AbortHandle,
    ) {
        let (handle, registration) = AbortHandle::new_pair();
        let client = self.clone();
        let task = async move {
            Abortable::new(client.ask(&prompt), registration)
                .await
                .unwrap_or(Err(AssistantError::Cancelled))
        };
        (task, handle)
    }
}

/// Delivers the outcome of one assistant request exactly once.
///
/// If the guard is dropped before [`PendingReply::complete`] runs (the task was torn down),
/// it delivers [`AssistantError::Cancelled`] so the typing indicator never sticks.
pub struct PendingReply<F>
where
    F: FnOnce(Result<String, AssistantError>),
{
    deliver: Option<F>,
}

impl<F> PendingReply<F>
where
    F: FnOnce(Result<String, AssistantError>),
{
    pub fn new(deliver: F) -> Self {
        Self {
            deliver: Some(deliver),
        }
    }

    pub fn complete(mut self, result: Result<String, AssistantError>) {
        if let Some(deliver) = self.deliver.take() {
            deliver(result);
        }
    }
}

impl<F> Drop for PendingReply<F>
where
    F: FnOnce(Result<String, AssistantError>),
{
    fn drop(&mut self) {
        if let Some(deliver) = self.deliver.take() {
            deliver(Err(AssistantError::Cancelled));
        }
    }
}
