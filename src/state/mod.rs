//! Per-widget client-side state.
//!
//! DESIGN
//! ======
//! Each widget owns one state struct, held in an `RwSignal` for the page
//! lifetime. Request flows are split into `begin_*` (sync, returns the body
//! to post) and `finish_*` (sync, applies the outcome) so the async `fetch`
//! in between never holds a borrow of the state.

pub mod chat;
pub mod composer;
pub mod faq;
pub mod lead_form;
pub mod news;
pub mod transcript;
