//! Endpoint helpers for the chat, news, and lead widgets.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. A transport failure or an
//! undecodable body is an `ApiError`; anything the server said in JSON,
//! including an `error` field on a non-2xx reply, decodes to a value.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::transport::JsonTransport;
use super::types::{
    ChatRequest, LeadOutcome, LeadPayload, NewsRequest, Reply, decode_chat_reply, decode_lead_outcome,
    decode_news_reply,
};

fn to_body<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send the full chat transcript and decode the assistant reply.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not JSON.
pub async fn send_chat<T: JsonTransport>(
    transport: &T,
    url: &str,
    request: &ChatRequest,
) -> Result<Reply, ApiError> {
    let reply = transport.post_json(url, &to_body(request)?).await?;
    decode_chat_reply(&reply.body)
}

/// Send a news query with its prior history and decode the answer.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not JSON.
pub async fn send_news<T: JsonTransport>(
    transport: &T,
    url: &str,
    request: &NewsRequest,
) -> Result<Reply, ApiError> {
    let reply = transport.post_json(url, &to_body(request)?).await?;
    decode_news_reply(&reply.body)
}

/// Submit a lead payload and decode the outcome.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not JSON.
pub async fn submit_lead<T: JsonTransport>(
    transport: &T,
    url: &str,
    payload: &LeadPayload,
) -> Result<LeadOutcome, ApiError> {
    let body = serde_json::Value::Object(payload.clone());
    let reply = transport.post_json(url, &body).await?;
    decode_lead_outcome(reply.ok(), &reply.body)
}
