//! Thin event-subscription helpers over `web-sys`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos components wire their own `on:` handlers. These helpers cover
//! markup the hosting page renders itself (the FAQ list), where handlers
//! are attached to existing elements for the lifetime of the page.

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Collect every element matching `selector` under `root`, in document order.
#[cfg(feature = "csr")]
pub fn query_all(root: &web_sys::Element, selector: &str) -> Vec<web_sys::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// Invoke `handler` on every `event` dispatched to `target`.
///
/// The listener is never removed; the closure is leaked to JS so it lives
/// as long as the page.
#[cfg(feature = "csr")]
pub fn listen(target: &web_sys::EventTarget, event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .is_ok()
    {
        cb.forget();
    } else {
        log::warn!("failed to attach {event} listener");
    }
}
