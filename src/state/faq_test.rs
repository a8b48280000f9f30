use super::*;

#[test]
fn accordion_starts_all_closed() {
    let faq = Accordion::new(3);
    assert_eq!(faq.open_index(), None);
    assert_eq!(faq.icon(0), ICON_CLOSED);
    assert!(!faq.is_empty());
}

#[test]
fn toggle_opens_clicked_panel() {
    let mut faq = Accordion::new(3);
    faq.toggle(1);

    assert!(faq.is_open(1));
    assert_eq!(faq.icon(1), ICON_OPEN);
    assert_eq!(faq.icon(0), ICON_CLOSED);
}

#[test]
fn opening_second_closes_first() {
    let mut faq = Accordion::new(3);
    faq.toggle(0);
    faq.toggle(1);

    assert!(!faq.is_open(0));
    assert!(faq.is_open(1));
    assert_eq!(faq.icon(0), ICON_CLOSED);
}

#[test]
fn clicking_open_trigger_closes_everything() {
    let mut faq = Accordion::new(2);
    faq.toggle(0);
    faq.toggle(0);

    assert_eq!(faq.open_index(), None);
    assert_eq!(faq.icon(0), ICON_CLOSED);
}

#[test]
fn out_of_range_toggle_is_ignored() {
    let mut faq = Accordion::new(2);
    faq.toggle(0);
    faq.toggle(5);
    assert_eq!(faq.open_index(), Some(0));
    assert!(Accordion::new(0).is_empty());
}
