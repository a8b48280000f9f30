//! Chat assistant widget state.
//!
//! DESIGN
//! ======
//! `history` is the exact transcript the chat endpoint receives on every
//! send. It grows for the lifetime of the page and is never trimmed.
//! The greeting is rendered but not recorded, and so are transport failure
//! bubbles.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use super::composer::Composer;
use super::transcript::Transcript;
use crate::net::error::ApiError;
use crate::net::types::{ChatRequest, Message, Reply};

/// Welcome line shown the first time the panel opens.
pub const CHAT_GREETING: &str = "Hi! I'm the Prezent.Energy assistant. Ask me anything about VoltBot charging, pricing, compatibility (CCS1/CCS2), or our Virtual Power Plant programme.";

/// Shown when the chat endpoint cannot be reached or answers with non-JSON.
pub const CHAT_UNAVAILABLE: &str =
    "Service temporarily unavailable. Please email info@prezent.energy for immediate assistance.";

/// State for the floating chat widget.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub visible: bool,
    pub greeted: bool,
    pub history: Vec<Message>,
    pub transcript: Transcript,
    pub composer: Composer,
}

impl ChatState {
    /// Flip panel visibility. The first toggle also posts the greeting.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        if !self.greeted {
            self.greeted = true;
            self.transcript.append_bot(CHAT_GREETING);
        }
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Start a send cycle from the current draft.
    ///
    /// Returns the request to post, or `None` when the draft is blank or a
    /// request is already in flight (nothing is mutated in that case).
    pub fn begin_send(&mut self) -> Option<ChatRequest> {
        let text = self.composer.take_submission()?;
        self.transcript.append_user(text.clone());
        self.history.push(Message::user(text));
        self.transcript.show_typing();
        Some(ChatRequest { messages: self.history.clone() })
    }

    /// Finish the in-flight send with the decoded reply or the failure.
    pub fn finish_send(&mut self, outcome: Result<Reply, ApiError>) {
        self.transcript.remove_typing();
        match outcome {
            Ok(reply) => {
                let text = reply.text().to_owned();
                self.transcript.append_bot(text.clone());
                self.history.push(Message::assistant(text));
            }
            Err(_) => self.transcript.append_bot(CHAT_UNAVAILABLE),
        }
        self.composer.settle();
    }
}
