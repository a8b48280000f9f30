//! Rendered bubble list shared by the chat and news widgets.
//!
//! DESIGN
//! ======
//! The transcript is what the user sees, not what the endpoint receives:
//! fallback bubbles and the typing placeholder live here but never in a
//! widget's message history. `scroll_seq` bumps on every mutation so the
//! view can pin the container to the bottom.

#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

/// Visual kind of a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubbleKind {
    User,
    Bot,
    /// Animated "typing" placeholder while a request is in flight.
    Typing,
}

/// A single rendered entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bubble {
    pub id: String,
    pub kind: BubbleKind,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    bubbles: Vec<Bubble>,
    typing_id: Option<String>,
    placeholder: Option<String>,
    scroll_seq: u64,
}

impl Transcript {
    /// Transcript showing `text` until the first bubble is appended.
    pub fn with_placeholder(text: impl Into<String>) -> Self {
        Self { placeholder: Some(text.into()), ..Self::default() }
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn is_typing(&self) -> bool {
        self.typing_id.is_some()
    }

    pub fn scroll_seq(&self) -> u64 {
        self.scroll_seq
    }

    /// Number of bubbles of `kind`.
    pub fn count(&self, kind: BubbleKind) -> usize {
        self.bubbles.iter().filter(|b| b.kind == kind).count()
    }

    pub fn append_user(&mut self, text: impl Into<String>) {
        self.push(BubbleKind::User, text.into());
    }

    pub fn append_bot(&mut self, text: impl Into<String>) {
        self.push(BubbleKind::Bot, text.into());
    }

    /// Insert the typing placeholder. At most one exists at a time.
    pub fn show_typing(&mut self) {
        if self.typing_id.is_some() {
            return;
        }
        let id = self.push(BubbleKind::Typing, String::new());
        self.typing_id = Some(id);
    }

    /// Remove the typing placeholder by id. No-op when none is shown.
    pub fn remove_typing(&mut self) {
        let Some(id) = self.typing_id.take() else {
            return;
        };
        self.bubbles.retain(|b| b.id != id);
        self.scroll_seq += 1;
    }

    fn push(&mut self, kind: BubbleKind, text: String) -> String {
        self.placeholder = None;
        let id = uuid::Uuid::new_v4().to_string();
        self.bubbles.push(Bubble { id: id.clone(), kind, text });
        self.scroll_seq += 1;
        id
    }
}
