//! Append-only conversation log for the assistant panel and its inline markup renderer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub sender: Sender,
    pub text: String,
    /// Zero-based position in the log.
    pub order: usize,
}

impl ConversationEntry {
    pub fn spans(&self) -> Vec<TextSpan> {
        render_markup(&self.text)
    }

    pub fn html(&self) -> String {
        render_html(&self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSpan {
    Plain(String),
    Emphasis(String),
}

/// Splits `text` on `**` pairs. A trailing unpaired `**` is kept as literal text.
pub fn render_markup(text: &str) -> Vec<TextSpan> {
    let mut spans = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find("**") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("**") else {
            break;
        };
        push_span(&mut spans, TextSpan::Plain(rest[..open].to_string()));
        push_span(&mut spans, TextSpan::Emphasis(after_open[..close].to_string()));
        rest = &after_open[close + 2..];
    }
    push_span(&mut spans, TextSpan::Plain(rest.to_string()));
    spans
}

fn push_span(spans: &mut Vec<TextSpan>, span: TextSpan) {
    let text = match &span {
        TextSpan::Plain(text) | TextSpan::Emphasis(text) => text,
    };
    if text.is_empty() {
        return;
    }
    if let (Some(TextSpan::Plain(previous)), TextSpan::Plain(next)) = (spans.last_mut(), &span) {
        previous.push_str(next);
        return;
    }
    spans.push(span);
}

/// HTML rendition of [`render_markup`] with all text escaped.
pub fn render_html(text: &str) -> String {
    render_markup(text)
        .into_iter()
        .map(|span| match span {
            TextSpan::Plain(text) => escape_html(&text),
            TextSpan::Emphasis(text) => format!("<strong>{}</strong>", escape_html(&text)),
        })
        .collect()
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConversationLog {
    entries: Vec<ConversationEntry>,
}

impl ConversationLog {
    /// Appends an entry and returns its order. Entries are never edited or removed.
    pub fn append(&mut self, sender: Sender, text: impl Into<String>) -> usize {
        let order = self.entries.len();
        self.entries.push(ConversationEntry {
            sender,
            text: text.into(),
            order,
        });
        order
    }

    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&ConversationEntry> {
        self.entries.last()
    }
}
