//! News & regulatory intelligence panel embedded in the page.

use leptos::prelude::*;

use super::transcript_view::{NEWS_BUBBLES, TranscriptView};
use super::trigger::{has_fired, seq_memo};
use crate::net::types::NewsRequest;
use crate::state::composer::is_submit_key;
use crate::state::news::NewsState;

fn dispatch(news: RwSignal<NewsState>, url: String, request: NewsRequest) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::send_news(&crate::net::transport::BrowserTransport, &url, &request).await;
        if let Err(err) = &outcome {
            log::warn!("news query to {url} failed: {err}");
        }
        news.update(|n| n.finish_send(outcome, &url));
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        news.update(|n| n.finish_send(Err(crate::net::error::ApiError::Unavailable), &url));
    }
}

/// News query panel posting to `endpoint`.
#[component]
pub fn NewsPanel(endpoint: String) -> impl IntoView {
    let news = RwSignal::new(NewsState::default());
    let endpoint = StoredValue::new(endpoint);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let focus = seq_memo(news, |n| n.composer.focus_seq());

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
        let Some(request) = news.try_update(NewsState::begin_send).flatten() else {
            return;
        };
        dispatch(news, endpoint.get_value(), request);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            do_send();
        }
    };

    let transcript = Memo::new(move |_| news.with(|n| n.transcript.clone()));

    view! {
        <div class="news-widget">
            <TranscriptView transcript=transcript style=NEWS_BUBBLES/>
            <div class="news-input-row">
                <input
                    id="news-input"
                    class="news-input"
                    type="text"
                    placeholder="e.g. What changed in LCFS 2026?"
                    node_ref=input_ref
                    prop:value=move || news.with(|n| n.composer.draft.clone())
                    on:input=move |ev| news.update(|n| n.composer.draft = event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    id="news-send"
                    class="news-send"
                    on:click=move |_| do_send()
                    disabled=move || news.with(|n| n.composer.is_sending())
                >
                    "Ask"
                </button>
            </div>
        </div>
    }
}
