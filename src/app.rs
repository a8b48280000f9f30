//! Mounts each widget into its host element on the marketing page.
//!
//! The page is rendered by the site's own server; this crate only enhances
//! it. A page may carry any subset of the host elements, and missing hosts
//! are skipped.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::config::EndpointConfig;

pub const CHAT_HOST_ID: &str = "chat-widget";
pub const NEWS_HOST_ID: &str = "news-widget";
pub const LEAD_FORM_HOST_ID: &str = "demo-form-host";

/// Which widgets were mounted; useful for logging and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mounted {
    pub chat: bool,
    pub news: bool,
    pub lead_form: bool,
    pub faq_entries: usize,
}

/// Mount every widget whose host element exists and bind the FAQ list.
pub fn mount_widgets(config: &EndpointConfig) -> Mounted {
    let mounted = Mounted {
        chat: mount_chat(config.chat.clone()),
        news: mount_news(config.news.clone()),
        lead_form: mount_lead_form(config.leads.clone()),
        faq_entries: crate::util::faq::bind_faq(),
    };
    #[cfg(feature = "csr")]
    log::debug!("widgets mounted: {mounted:?}");
    mounted
}

#[cfg(feature = "csr")]
fn host(id: &str) -> Option<web_sys::HtmlElement> {
    use wasm_bindgen::JsCast;

    let el = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    if el.is_none() {
        log::info!("no #{id} on this page; skipping");
    }
    el
}

fn mount_chat(endpoint: String) -> bool {
    #[cfg(feature = "csr")]
    {
        use crate::components::chat_widget::ChatWidget;
        use leptos::prelude::*;

        let Some(parent) = host(CHAT_HOST_ID) else {
            return false;
        };
        leptos::mount::mount_to(parent, move || view! { <ChatWidget endpoint=endpoint/> }).forget();
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = endpoint;
        false
    }
}

fn mount_news(endpoint: String) -> bool {
    #[cfg(feature = "csr")]
    {
        use crate::components::news_panel::NewsPanel;
        use leptos::prelude::*;

        let Some(parent) = host(NEWS_HOST_ID) else {
            return false;
        };
        leptos::mount::mount_to(parent, move || view! { <NewsPanel endpoint=endpoint/> }).forget();
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = endpoint;
        false
    }
}

fn mount_lead_form(endpoint: String) -> bool {
    #[cfg(feature = "csr")]
    {
        use crate::components::lead_form::LeadForm;
        use leptos::prelude::*;

        let Some(parent) = host(LEAD_FORM_HOST_ID) else {
            return false;
        };
        leptos::mount::mount_to(parent, move || view! { <LeadForm endpoint=endpoint/> }).forget();
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = endpoint;
        false
    }
}
