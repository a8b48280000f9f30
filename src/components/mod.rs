//! Leptos widget components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each top-level component owns its widget state and is mounted into its
//! own host element by `app::mount_widgets`. `transcript_view` is the shared
//! bubble renderer; `trigger` scopes one-shot DOM effects to their counters.

pub mod chat_widget;
pub mod lead_form;
pub mod news_panel;
pub mod transcript_view;
pub mod trigger;
