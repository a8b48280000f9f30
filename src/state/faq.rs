//! FAQ accordion state: at most one answer panel open at a time.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

/// Icon glyph and rotation for a trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqIcon {
    pub glyph: &'static str,
    pub transform: &'static str,
}

pub const ICON_CLOSED: FaqIcon = FaqIcon { glyph: "+", transform: "rotate(0deg)" };
pub const ICON_OPEN: FaqIcon = FaqIcon { glyph: "×", transform: "rotate(180deg)" };

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn icon(&self, index: usize) -> FaqIcon {
        if self.is_open(index) { ICON_OPEN } else { ICON_CLOSED }
    }

    /// Handle a click on trigger `index`: close everything, then reopen
    /// `index` only if it was closed. Out-of-range indexes are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        let was_open = self.is_open(index);
        self.open = None;
        if !was_open {
            self.open = Some(index);
        }
    }
}
