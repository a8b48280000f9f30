//! Binds the page's pre-rendered FAQ markup to `Accordion` state.
//!
//! Expected markup: each `.faq-trigger` is immediately followed by its
//! `.faq-answer` panel and contains one `.faq-icon`. Panels are hidden with
//! the `hidden` class.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

use crate::state::faq::{Accordion, FaqIcon};

pub const TRIGGER_SELECTOR: &str = ".faq-trigger";
pub const ANSWER_SELECTOR: &str = ".faq-answer";
pub const ICON_SELECTOR: &str = ".faq-icon";
pub const HIDDEN_CLASS: &str = "hidden";

/// Per-entry presentation derived from the accordion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryView {
    pub answer_hidden: bool,
    pub icon: FaqIcon,
}

/// Presentation for every entry, in trigger order.
pub fn entry_views(faq: &Accordion) -> Vec<EntryView> {
    (0..faq.len())
        .map(|i| EntryView { answer_hidden: !faq.is_open(i), icon: faq.icon(i) })
        .collect()
}

/// Attach click handlers to every FAQ trigger in the document.
///
/// Returns the number of triggers bound.
pub fn bind_faq() -> usize {
    #[cfg(feature = "csr")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use super::dom::{listen, query_all};

        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return 0;
        };
        let triggers = query_all(&root, TRIGGER_SELECTOR);
        let state = Rc::new(RefCell::new(Accordion::new(triggers.len())));

        for (index, trigger) in triggers.iter().enumerate() {
            let state = Rc::clone(&state);
            let root = root.clone();
            listen(trigger, "click", move |_| {
                let mut faq = state.borrow_mut();
                faq.toggle(index);
                apply(&root, &faq);
            });
        }
        triggers.len()
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}

#[cfg(feature = "csr")]
fn apply(root: &web_sys::Element, faq: &Accordion) {
    use wasm_bindgen::JsCast;

    use super::dom::query_all;

    let triggers = query_all(root, TRIGGER_SELECTOR);
    // Close every panel on the page first, including any not paired with a trigger.
    for answer in query_all(root, ANSWER_SELECTOR) {
        let _ = answer.class_list().add_1(HIDDEN_CLASS);
    }
    for (trigger, view) in triggers.iter().zip(entry_views(faq)) {
        if let Some(answer) = trigger.next_element_sibling() {
            let classes = answer.class_list();
            let _ = if view.answer_hidden { classes.add_1(HIDDEN_CLASS) } else { classes.remove_1(HIDDEN_CLASS) };
        }
        let icon = trigger
            .query_selector(ICON_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        if let Some(icon) = icon {
            icon.set_text_content(Some(view.icon.glyph));
            let _ = icon.style().set_property("transform", view.icon.transform);
        }
    }
}
