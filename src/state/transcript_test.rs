use super::*;

// =============================================================
// Appending
// =============================================================

#[test]
fn transcript_default_is_empty() {
    let transcript = Transcript::default();
    assert!(transcript.bubbles().is_empty());
    assert!(!transcript.is_typing());
    assert_eq!(transcript.placeholder(), None);
}

#[test]
fn append_keeps_insertion_order_and_kinds() {
    let mut transcript = Transcript::default();
    transcript.append_user("hi");
    transcript.append_bot("hello");

    let kinds: Vec<_> = transcript.bubbles().iter().map(|b| b.kind).collect();
    assert_eq!(kinds, vec![BubbleKind::User, BubbleKind::Bot]);
    assert_eq!(transcript.bubbles()[1].text, "hello");
}

#[test]
fn every_mutation_requests_scroll() {
    let mut transcript = Transcript::default();
    transcript.append_user("a");
    transcript.show_typing();
    transcript.remove_typing();
    transcript.append_bot("b");
    assert_eq!(transcript.scroll_seq(), 4);
}

#[test]
fn bubble_ids_are_unique() {
    let mut transcript = Transcript::default();
    transcript.append_user("same");
    transcript.append_user("same");
    assert_ne!(transcript.bubbles()[0].id, transcript.bubbles()[1].id);
}

// =============================================================
// Typing placeholder
// =============================================================

#[test]
fn show_typing_inserts_single_placeholder() {
    let mut transcript = Transcript::default();
    transcript.show_typing();
    transcript.show_typing();

    assert!(transcript.is_typing());
    assert_eq!(transcript.count(BubbleKind::Typing), 1);
}

#[test]
fn remove_typing_removes_only_the_placeholder() {
    let mut transcript = Transcript::default();
    transcript.append_user("q");
    transcript.show_typing();
    transcript.remove_typing();

    assert!(!transcript.is_typing());
    assert_eq!(transcript.bubbles().len(), 1);
    assert_eq!(transcript.bubbles()[0].kind, BubbleKind::User);
}

#[test]
fn remove_typing_without_placeholder_is_noop() {
    let mut transcript = Transcript::default();
    transcript.append_bot("x");
    let before = transcript.clone();

    transcript.remove_typing();
    transcript.remove_typing();

    assert_eq!(transcript, before);
}

// =============================================================
// Placeholder text
// =============================================================

#[test]
fn placeholder_cleared_by_first_bubble() {
    let mut transcript = Transcript::with_placeholder("Ask about incentives...");
    assert_eq!(transcript.placeholder(), Some("Ask about incentives..."));

    transcript.append_user("LCFS?");

    assert_eq!(transcript.placeholder(), None);
}
