//! Browser glue shared by the widgets.

pub mod dom;
pub mod faq;
