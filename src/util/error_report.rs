//! Process-wide panic reporting to the error-log endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! Installed once at startup. Any uncaught panic is logged to the console
//! and shipped, best effort, as a structured JSON report so client-side
//! failures are visible server-side. Delivery failures are logged locally
//! and never propagate.

#[cfg(test)]
#[path = "error_report_test.rs"]
mod error_report_test;

use serde::Serialize;

/// Fixed sink for client error reports.
pub const ERROR_LOG_ENDPOINT: &str = "http://localhost:3030/error-log";

/// Payload posted to [`ERROR_LOG_ENDPOINT`]. Field names are part of the
/// logging sink's wire format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    #[serde(rename = "errorUrl")]
    pub error_url: String,
    #[serde(rename = "errorMessage")]
    pub error_message: String,
    #[serde(rename = "stackTrace")]
    pub stack_trace: String,
    pub cause: String,
    pub browser: String,
}

/// Human-readable description of a panic from its payload and location.
#[cfg(any(test, feature = "browser"))]
pub(crate) fn describe_panic(payload: Option<&str>, location: Option<&str>) -> String {
    match (payload, location) {
        (Some(payload), Some(location)) => format!("panicked at {location}: {payload}"),
        (Some(payload), None) => format!("panicked: {payload}"),
        (None, Some(location)) => format!("panicked at {location}"),
        (None, None) => "panicked".to_owned(),
    }
}

/// Assemble a report; `cause` is empty when unknown.
#[cfg(any(test, feature = "browser"))]
pub(crate) fn build_report(
    url: &str,
    message: &str,
    stack: &str,
    cause: Option<&str>,
    browser: &str,
) -> ErrorReport {
    ErrorReport {
        error_url: url.to_owned(),
        error_message: message.to_owned(),
        stack_trace: stack.to_owned(),
        cause: cause.unwrap_or("").to_owned(),
        browser: browser.to_owned(),
    }
}

/// Install the panic hook. Chains `console_error_panic_hook` so the
/// browser console keeps its readable trace, then posts the report.
/// No-op outside the browser.
pub fn install() {
    #[cfg(feature = "browser")]
    {
        std::panic::set_hook(Box::new(|info| {
            console_error_panic_hook::hook(info);

            let payload = panic_payload(info);
            let location = info.location().map(ToString::to_string);
            let message = describe_panic(payload, location.as_deref());
            log::error!("uncaught panic: {message}");

            let report = build_report(
                &current_url(),
                &message,
                &stack_trace(),
                None,
                &user_agent(),
            );
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = deliver(&report).await {
                    log::warn!("error report delivery failed: {err}");
                }
            });
        }));
    }
}

#[cfg(feature = "browser")]
fn panic_payload<'a>(info: &'a std::panic::PanicHookInfo<'_>) -> Option<&'a str> {
    if let Some(message) = info.payload().downcast_ref::<&str>() {
        return Some(message);
    }
    info.payload().downcast_ref::<String>().map(String::as_str)
}

#[cfg(feature = "browser")]
fn current_url() -> String {
    web_sys::window()
        .and_then(|window| window.location().href().ok())
        .unwrap_or_default()
}

#[cfg(feature = "browser")]
fn user_agent() -> String {
    web_sys::window()
        .and_then(|window| window.navigator().user_agent().ok())
        .unwrap_or_default()
}

/// A JS-side stack trace captured at report time. `Error.stack` is
/// non-standard, so this may be empty on some engines.
#[cfg(feature = "browser")]
fn stack_trace() -> String {
    let error = js_sys::Error::new("");
    js_sys::Reflect::get(error.as_ref(), &wasm_bindgen::JsValue::from_str("stack"))
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_default()
}

#[cfg(feature = "browser")]
async fn deliver(report: &ErrorReport) -> Result<(), String> {
    let resp = gloo_net::http::Request::post(ERROR_LOG_ENDPOINT)
        .json(report)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("error log responded {}", resp.status()));
    }
    Ok(())
}
