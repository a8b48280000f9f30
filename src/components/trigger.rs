//! Counter-driven effect triggers.
//!
//! Widget state bumps a `*_seq` counter when the DOM needs a one-shot
//! imperative action such as a form reset. Effects must subscribe to the
//! counter alone: reading the whole state signal would rerun them on every
//! keystroke and status change.

#[cfg(test)]
#[path = "trigger_test.rs"]
mod trigger_test;

use leptos::prelude::*;

/// Memo over one counter of `source`. It notifies only when the counter moves.
pub fn seq_memo<S>(source: S, seq: fn(&S::Value) -> u64) -> Memo<u64>
where
    S: With + Send + Sync + 'static,
    S::Value: 'static,
{
    Memo::new(move |_| source.with(seq))
}

/// True when the counter has fired at least once since mount.
pub fn has_fired(seq: u64) -> bool {
    seq > 0
}
