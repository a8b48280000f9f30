use super::*;
use crate::state::faq::{ICON_CLOSED, ICON_OPEN};

#[test]
fn entry_views_all_hidden_initially() {
    let views = entry_views(&Accordion::new(3));
    assert_eq!(views.len(), 3);
    assert!(views.iter().all(|v| v.answer_hidden && v.icon == ICON_CLOSED));
}

#[test]
fn entry_views_reveal_only_open_entry() {
    let mut faq = Accordion::new(3);
    faq.toggle(0);
    faq.toggle(2);

    let views = entry_views(&faq);

    assert_eq!(views[2], EntryView { answer_hidden: false, icon: ICON_OPEN });
    assert!(views[0].answer_hidden);
    assert!(views[1].answer_hidden);
}

#[test]
fn bind_faq_outside_browser_binds_nothing() {
    assert_eq!(bind_faq(), 0);
}
