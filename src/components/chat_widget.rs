//! Floating chat assistant (bottom-right toggle + panel).
//!
//! SYSTEM CONTEXT
//! ==============
//! Posts the whole conversation to the chat endpoint on every send and
//! renders the reply. State lives in a component-local `RwSignal`; nothing
//! outlives the page.

use leptos::prelude::*;

use super::transcript_view::{CHAT_BUBBLES, TranscriptView};
use super::trigger::{has_fired, seq_memo};
use crate::net::types::ChatRequest;
use crate::state::chat::ChatState;
use crate::state::composer::is_submit_key;

fn dispatch(chat: RwSignal<ChatState>, url: String, request: ChatRequest) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::send_chat(&crate::net::transport::BrowserTransport, &url, &request).await;
        if let Err(err) = &outcome {
            log::warn!("chat request to {url} failed: {err}");
        }
        chat.update(|c| c.finish_send(outcome));
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, request);
        chat.update(|c| c.finish_send(Err(crate::net::error::ApiError::Unavailable)));
    }
}

/// Chat toggle button and panel posting to `endpoint`.
#[component]
pub fn ChatWidget(endpoint: String) -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    let endpoint = StoredValue::new(endpoint);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let focus = seq_memo(chat, |c| c.composer.focus_seq());

    Effect::new(move || {
        if !has_fired(focus.get()) {
            return;
        }

        #[cfg(feature = "csr")]
        {
            if let Some(input_el) = input_ref.get_untracked() {
                let _ = input_el.focus();
            }
        }
    });

    let do_send = move || {
        let Some(request) = chat.try_update(ChatState::begin_send).flatten() else {
            return;
        };
        dispatch(chat, endpoint.get_value(), request);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            do_send();
        }
    };

    let transcript = Memo::new(move |_| chat.with(|c| c.transcript.clone()));

    view! {
        <div class="chat-widget">
            <button
                id="chat-toggle"
                class="chat-toggle"
                aria-label="Chat with our assistant"
                on:click=move |_| chat.update(ChatState::toggle)
            >
                "💬"
            </button>
            <div id="chat-window" class="chat-window" class:hidden=move || !chat.with(|c| c.visible)>
                <div class="chat-header">
                    <span class="chat-title">"Prezent.Energy Assistant"</span>
                    <button
                        id="chat-close"
                        class="chat-close"
                        aria-label="Close chat"
                        on:click=move |_| chat.update(ChatState::close)
                    >
                        "×"
                    </button>
                </div>
                <TranscriptView transcript=transcript style=CHAT_BUBBLES/>
                <div class="chat-input-row">
                    <input
                        id="chat-input"
                        class="chat-input"
                        type="text"
                        placeholder="Ask about pricing, CCS1/CCS2, VPP..."
                        node_ref=input_ref
                        prop:value=move || chat.with(|c| c.composer.draft.clone())
                        on:input=move |ev| chat.update(|c| c.composer.draft = event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                    <button
                        id="chat-send"
                        class="chat-send"
                        on:click=move |_| do_send()
                        disabled=move || chat.with(|c| c.composer.is_sending())
                    >
                        "Send"
                    </button>
                </div>
            </div>
        </div>
    }
}
