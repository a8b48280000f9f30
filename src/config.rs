//! Endpoint configuration injected by the hosting page.
//!
//! The page sets `window.API_CHAT`, `window.API_LEADS` and `window.API_NEWS`
//! before the WASM bundle starts. Missing or blank globals fall back to the
//! site's default routes.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_CHAT_ENDPOINT: &str = "/api/chat";
pub const DEFAULT_LEADS_ENDPOINT: &str = "/api/leads";
pub const DEFAULT_NEWS_ENDPOINT: &str = "/api/news-query";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointConfig {
    pub chat: String,
    pub leads: String,
    pub news: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            chat: DEFAULT_CHAT_ENDPOINT.to_owned(),
            leads: DEFAULT_LEADS_ENDPOINT.to_owned(),
            news: DEFAULT_NEWS_ENDPOINT.to_owned(),
        }
    }
}

impl EndpointConfig {
    /// Build from a global lookup (`name -> value`).
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let pick = |name: &str, fallback: &str| {
            lookup(name)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| fallback.to_owned())
        };
        Self {
            chat: pick("API_CHAT", DEFAULT_CHAT_ENDPOINT),
            leads: pick("API_LEADS", DEFAULT_LEADS_ENDPOINT),
            news: pick("API_NEWS", DEFAULT_NEWS_ENDPOINT),
        }
    }

    /// Read the endpoint globals from `window`. Defaults outside the browser.
    pub fn from_window() -> Self {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                return Self::default();
            };
            Self::resolve(|name| {
                js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(name))
                    .ok()
                    .and_then(|v| v.as_string())
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}
