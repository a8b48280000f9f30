//! Wire DTOs for the chat, news, and lead endpoints.
//!
//! DESIGN
//! ======
//! Response bodies are loosely shaped (`reply`/`answer`/`error`, any of which
//! may be missing or empty). Decoding collapses them into `Reply` or
//! `LeadOutcome` once, here, so widget state never inspects raw JSON.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Fallback text when a chat response has neither `reply` nor `error`.
pub const CHAT_NO_RESPONSE: &str = "No response.";

/// Fallback text when a news response has neither `answer` nor `error`.
pub const NEWS_NO_RESPONSE: &str = "No response received.";

/// Fallback text when a lead response is rejected without an `error` field.
pub const LEAD_SUBMISSION_FAILED: &str = "Submission failed";

/// Field whose checkbox values are collected into a list.
pub const PRIMARY_INTERESTS_FIELD: &str = "primary_interests";

/// Author of a transcript message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single role-tagged transcript entry as sent to the endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// Body of `POST` to the chat endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
}

/// Body of `POST` to the news endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewsRequest {
    pub query: String,
    /// Transcript before `query` was appended.
    pub history: Vec<Message>,
}

/// Body of `POST` to the leads endpoint: scalar fields plus the interests list.
pub type LeadPayload = serde_json::Map<String, serde_json::Value>;

/// Decoded assistant response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// The endpoint produced its primary field (`reply` or `answer`).
    Answer(String),
    /// The endpoint returned an `error` field, or nothing usable.
    Fallback(String),
}

impl Reply {
    /// Text to render and record, regardless of variant.
    pub fn text(&self) -> &str {
        match self {
            Self::Answer(text) | Self::Fallback(text) => text,
        }
    }

    pub fn is_answer(&self) -> bool {
        matches!(self, Self::Answer(_))
    }
}

/// Decoded lead submission result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LeadOutcome {
    /// Accepted; carries the created lead id when the server returns one.
    Accepted { id: Option<i64> },
    /// Rejected with the server-provided or generic message.
    Rejected(String),
}

fn parse(body: &str) -> Result<serde_json::Value, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Falsy fields (missing, `null`, `false`, `0`, `""`) count as absent.
fn is_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;

    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text of a truthy field; non-string values render as their JSON text.
fn text_field(body: &serde_json::Value, key: &str) -> Option<String> {
    let value = body.get(key).filter(|v| is_truthy(v))?;
    Some(match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    })
}

/// Decode a chat endpoint body: `reply`, then `error`, then the fixed fallback.
///
/// # Errors
///
/// Returns `ApiError::Decode` when the body is not JSON.
pub fn decode_chat_reply(body: &str) -> Result<Reply, ApiError> {
    let parsed = parse(body)?;
    Ok(pick_reply(text_field(&parsed, "reply"), text_field(&parsed, "error"), CHAT_NO_RESPONSE))
}

/// Decode a news endpoint body: `answer`, then `error`, then the fixed fallback.
///
/// # Errors
///
/// Returns `ApiError::Decode` when the body is not JSON.
pub fn decode_news_reply(body: &str) -> Result<Reply, ApiError> {
    let parsed = parse(body)?;
    Ok(pick_reply(text_field(&parsed, "answer"), text_field(&parsed, "error"), NEWS_NO_RESPONSE))
}

fn pick_reply(primary: Option<String>, error: Option<String>, fallback: &str) -> Reply {
    match (primary, error) {
        (Some(text), _) => Reply::Answer(text),
        (None, Some(text)) => Reply::Fallback(text),
        (None, None) => Reply::Fallback(fallback.to_owned()),
    }
}

/// Decode a lead endpoint response. Acceptance needs both a 2xx status and
/// a truthy `success` flag.
///
/// # Errors
///
/// Returns `ApiError::Decode` when the body is not JSON.
pub fn decode_lead_outcome(status_ok: bool, body: &str) -> Result<LeadOutcome, ApiError> {
    let parsed = parse(body)?;
    let success = parsed.get("success").is_some_and(is_truthy);
    if status_ok && success {
        let id = parsed.get("id").and_then(serde_json::Value::as_i64);
        return Ok(LeadOutcome::Accepted { id });
    }
    let message = text_field(&parsed, "error").unwrap_or_else(|| LEAD_SUBMISSION_FAILED.to_owned());
    Ok(LeadOutcome::Rejected(message))
}

/// Build the lead payload from form entries in document order.
///
/// Every field except `primary_interests` becomes a scalar string (a repeated
/// name keeps its last value). `primary_interests` always becomes a list of
/// every checked value, empty when none are checked.
pub fn build_lead_payload<K, V>(entries: &[(K, V)]) -> LeadPayload
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut payload = LeadPayload::new();
    let mut interests = Vec::new();
    for (name, value) in entries {
        let (name, value) = (name.as_ref(), value.as_ref());
        if name == PRIMARY_INTERESTS_FIELD {
            interests.push(serde_json::Value::String(value.to_owned()));
        } else {
            payload.insert(name.to_owned(), serde_json::Value::String(value.to_owned()));
        }
    }
    payload.insert(PRIMARY_INTERESTS_FIELD.to_owned(), serde_json::Value::Array(interests));
    payload
}
