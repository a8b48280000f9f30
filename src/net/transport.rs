//! HTTP transport seam for the widget endpoints.
//!
//! Client-side (csr): real `fetch` calls via `gloo-net`.
//! Native builds: `BrowserTransport` reports `ApiError::Unavailable` so the
//! widgets still compile and render without a browser.

use std::future::Future;

use super::error::ApiError;

/// Raw HTTP response: status plus the undecoded body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    /// Mirrors `Response.ok`: any 2xx status.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can `POST` a JSON body and hand back the raw reply.
pub trait JsonTransport {
    fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> impl Future<Output = Result<HttpReply, ApiError>>;
}

/// `fetch`-backed transport used by the mounted widgets.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl JsonTransport for BrowserTransport {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpReply, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(url)
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(HttpReply { status, body: text })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, body);
            Err(ApiError::Unavailable)
        }
    }
}
