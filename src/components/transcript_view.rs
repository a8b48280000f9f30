//! Scrollable bubble list shared by the chat and news widgets.

use leptos::prelude::*;

use super::trigger::seq_memo;
use crate::state::transcript::{Bubble, BubbleKind, Transcript};

/// CSS classes for one widget's bubbles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BubbleStyle {
    pub container: &'static str,
    pub user: &'static str,
    pub bot: &'static str,
    /// Right-align user bubbles inside a flex row.
    pub wrap_user: bool,
}

pub const CHAT_BUBBLES: BubbleStyle = BubbleStyle {
    container: "chat-messages",
    user: "chat-bubble-user",
    bot: "chat-bubble-bot",
    wrap_user: true,
};

pub const NEWS_BUBBLES: BubbleStyle = BubbleStyle {
    container: "news-messages",
    user: "news-bubble-user",
    bot: "news-bubble-agent",
    wrap_user: false,
};

fn bubble_view(bubble: Bubble, style: BubbleStyle) -> AnyView {
    match bubble.kind {
        BubbleKind::User if style.wrap_user => view! {
            <div class="flex justify-end">
                <div class=style.user>{bubble.text}</div>
            </div>
        }
        .into_any(),
        BubbleKind::User => view! { <div class=style.user>{bubble.text}</div> }.into_any(),
        BubbleKind::Bot => view! { <div class=style.bot>{bubble.text}</div> }.into_any(),
        BubbleKind::Typing => view! {
            <div class=format!("{} typing-indicator", style.bot)>
                <span></span>
                <span></span>
                <span></span>
            </div>
        }
        .into_any(),
    }
}

/// Renders a transcript and keeps the container scrolled to the newest bubble.
#[component]
pub fn TranscriptView(#[prop(into)] transcript: Signal<Transcript>, style: BubbleStyle) -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();

    let scroll = seq_memo(transcript, Transcript::scroll_seq);

    Effect::new(move || {
        scroll.track();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = container_ref.get_untracked() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    view! {
        <div class=style.container node_ref=container_ref>
            {move || {
                transcript
                    .with(|t| t.placeholder().map(str::to_owned))
                    .map(|text| view! { <p class="italic">{text}</p> })
            }}
            <For
                each=move || transcript.with(|t| t.bubbles().to_vec())
                key=|bubble| bubble.id.clone()
                children=move |bubble| bubble_view(bubble, style)
            />
        </div>
    }
}
