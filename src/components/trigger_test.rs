use super::*;
use crate::net::error::ApiError;
use crate::net::types::LeadOutcome;
use crate::state::lead_form::LeadFormState;

const ENTRIES: [(&str, &str); 2] = [("full_name", "Jane"), ("email", "jane@example.com")];

/// Counts how often a memo's value moved between observations, which is
/// how often an effect subscribed to it would rerun.
struct Watch {
    memo: Memo<u64>,
    last: u64,
    moved: usize,
}

impl Watch {
    fn new(memo: Memo<u64>) -> Self {
        Self { memo, last: memo.get_untracked(), moved: 0 }
    }

    fn observe(&mut self) {
        let now = self.memo.get_untracked();
        if now != self.last {
            self.moved += 1;
            self.last = now;
        }
    }
}

fn begin(form: RwSignal<LeadFormState>) {
    form.update(|f| {
        f.begin_submit(&ENTRIES);
    });
}

fn finish(form: RwSignal<LeadFormState>, outcome: Result<LeadOutcome, ApiError>) {
    form.update(|f| f.finish_submit(outcome));
}

fn accepted() -> Result<LeadOutcome, ApiError> {
    Ok(LeadOutcome::Accepted { id: Some(1) })
}

fn rejected() -> Result<LeadOutcome, ApiError> {
    Ok(LeadOutcome::Rejected("full_name and email are required".to_owned()))
}

#[test]
fn reset_trigger_fires_once_across_success_then_failure() {
    let form = RwSignal::new(LeadFormState::default());
    let mut reset = Watch::new(seq_memo(form, LeadFormState::reset_seq));

    begin(form);
    reset.observe();
    finish(form, accepted());
    reset.observe();
    assert_eq!(reset.moved, 1);

    begin(form);
    reset.observe();
    finish(form, rejected());
    reset.observe();

    assert_eq!(reset.moved, 1, "a failed submission must not clear the fields");
    assert_eq!(reset.memo.get_untracked(), 1);
}

#[test]
fn reveal_trigger_ignores_failures_and_unrelated_updates() {
    let form = RwSignal::new(LeadFormState::default());
    let mut reveal = Watch::new(seq_memo(form, LeadFormState::reveal_seq));

    finish(form, accepted());
    reveal.observe();
    finish(form, Err(ApiError::Network("Failed to fetch".to_owned())));
    reveal.observe();
    begin(form);
    reveal.observe();
    finish(form, rejected());
    reveal.observe();

    assert_eq!(reveal.moved, 1);
}

#[test]
fn has_fired_skips_initial_value() {
    assert!(!has_fired(0));
    assert!(has_fired(1));
}
