//! Browser cookie helpers for the persisted credential pair.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticator persists the `id` and `apiKey` cookies through these
//! helpers. Parsing is a pure function so it tests natively; only the
//! `document.cookie` access itself requires a browser.
//!
//! TRADE-OFFS
//! ==========
//! Values are stored verbatim (ids are integers, keys are url-safe
//! tokens), so no percent-encoding is applied. No expiry is set on write;
//! removal rewrites the cookie with an epoch expiry.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

#[cfg(feature = "browser")]
use wasm_bindgen::JsCast;

/// Look up `name` in a raw `document.cookie` string.
#[cfg(any(test, feature = "browser"))]
pub(crate) fn parse(raw: &str, name: &str) -> Option<String> {
    raw.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_owned())
}

/// The `document.cookie` assignment that stores `name=value`.
#[cfg(any(test, feature = "browser"))]
pub(crate) fn store_string(name: &str, value: &str) -> String {
    format!("{name}={value}; path=/")
}

/// The `document.cookie` assignment that expires `name`.
#[cfg(any(test, feature = "browser"))]
pub(crate) fn removal_string(name: &str) -> String {
    format!("{name}=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT")
}

#[cfg(feature = "browser")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

/// Read the cookie `name`, if set. Always `None` outside the browser.
pub fn get(name: &str) -> Option<String> {
    #[cfg(feature = "browser")]
    {
        let raw = html_document()?.cookie().ok()?;
        parse(&raw, name)
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = name;
        None
    }
}

/// Write the cookie `name=value`. No-op outside the browser.
pub fn set(name: &str, value: &str) {
    #[cfg(feature = "browser")]
    {
        if let Some(document) = html_document() {
            let _ = document.set_cookie(&store_string(name, value));
        }
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (name, value);
    }
}

/// Expire the cookie `name`. No-op outside the browser.
pub fn remove(name: &str) {
    #[cfg(feature = "browser")]
    {
        if let Some(document) = html_document() {
            let _ = document.set_cookie(&removal_string(name));
        }
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = name;
    }
}
