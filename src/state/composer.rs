//! Input box + send control shared by the chat and news widgets.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

/// Draft text and the in-flight flag guarding a widget's send control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Composer {
    pub draft: String,
    sending: bool,
    focus_seq: u64,
}

impl Composer {
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Bumped whenever the input should regain focus.
    pub fn focus_seq(&self) -> u64 {
        self.focus_seq
    }

    /// Take the trimmed draft for sending.
    ///
    /// Returns `None` without touching the draft when it is blank or a
    /// request is already in flight. Otherwise clears the draft and marks
    /// the composer as sending.
    pub fn take_submission(&mut self) -> Option<String> {
        if self.sending {
            return None;
        }
        let text = self.draft.trim();
        if text.is_empty() {
            return None;
        }
        let text = text.to_owned();
        self.draft.clear();
        self.sending = true;
        Some(text)
    }

    /// Re-enable sending and refocus the input.
    pub fn settle(&mut self) {
        self.sending = false;
        self.focus_seq += 1;
    }
}

/// Enter without Shift submits; Shift+Enter is left to the input.
pub fn is_submit_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}
