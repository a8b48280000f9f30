//! News & regulatory intelligence widget state.
//!
//! Same send cycle as the chat widget, but the endpoint receives the query
//! separately from the history that preceded it, and failures are reported
//! with the underlying error and the endpoint URL.

#[cfg(test)]
#[path = "news_test.rs"]
mod news_test;

use super::composer::Composer;
use super::transcript::Transcript;
use crate::net::error::ApiError;
use crate::net::types::{Message, NewsRequest, Reply};

/// Intro line shown in the empty news transcript.
pub const NEWS_PLACEHOLDER: &str =
    "Ask about DOE grants, PG&E fleet programs, LCFS 2026, V2X standards, or CaaS market trends.";

#[derive(Clone, Debug)]
pub struct NewsState {
    pub history: Vec<Message>,
    pub transcript: Transcript,
    pub composer: Composer,
}

impl Default for NewsState {
    fn default() -> Self {
        Self {
            history: Vec::new(),
            transcript: Transcript::with_placeholder(NEWS_PLACEHOLDER),
            composer: Composer::default(),
        }
    }
}

impl NewsState {
    /// Start a query from the current draft.
    ///
    /// The returned request's `history` excludes the query itself.
    pub fn begin_send(&mut self) -> Option<NewsRequest> {
        let query = self.composer.take_submission()?;
        let history = self.history.clone();
        self.transcript.append_user(query.clone());
        self.history.push(Message::user(query.clone()));
        self.transcript.show_typing();
        Some(NewsRequest { query, history })
    }

    /// Finish the in-flight query. `endpoint` is echoed in failure text.
    pub fn finish_send(&mut self, outcome: Result<Reply, ApiError>, endpoint: &str) {
        self.transcript.remove_typing();
        match outcome {
            Ok(reply) => {
                let text = reply.text().to_owned();
                self.transcript.append_bot(text.clone());
                self.history.push(Message::assistant(text));
            }
            Err(err) => self.transcript.append_bot(news_failure_message(&err, endpoint)),
        }
        self.composer.settle();
    }
}

/// Diagnostic failure text: error message plus the endpoint that failed.
pub fn news_failure_message(err: &ApiError, endpoint: &str) -> String {
    let detail = err.to_string();
    let detail = if detail.is_empty() { "fetch failed".to_owned() } else { detail };
    format!("Error: {detail} — URL: {endpoint}")
}
