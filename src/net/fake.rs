//! Scripted transport for exercising request flows without a browser.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::error::ApiError;
use super::transport::{HttpReply, JsonTransport};

/// Replays queued replies in order and records every request it sees.
#[derive(Debug, Default)]
pub struct FakeTransport {
    replies: RefCell<VecDeque<Result<HttpReply, ApiError>>>,
    sent: RefCell<Vec<(String, serde_json::Value)>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply with the given status and JSON body.
    pub fn reply(self, status: u16, body: serde_json::Value) -> Self {
        self.replies.borrow_mut().push_back(Ok(HttpReply { status, body: body.to_string() }));
        self
    }

    /// Queue a reply with a raw, possibly non-JSON, body.
    pub fn raw(self, status: u16, body: &str) -> Self {
        self.replies.borrow_mut().push_back(Ok(HttpReply { status, body: body.to_owned() }));
        self
    }

    /// Queue a transport failure.
    pub fn fail(self, message: &str) -> Self {
        self.replies.borrow_mut().push_back(Err(ApiError::Network(message.to_owned())));
        self
    }

    /// Requests seen so far as `(url, body)` pairs.
    pub fn sent(&self) -> Vec<(String, serde_json::Value)> {
        self.sent.borrow().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl JsonTransport for FakeTransport {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpReply, ApiError> {
        self.sent.borrow_mut().push((url.to_owned(), body.clone()));
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".to_owned())))
    }
}
