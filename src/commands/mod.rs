//! Backend Command Wrappers
//!
//! Frontend bindings to the task API and to browser dialogs, organized by domain.

mod task;
mod dialog;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

// Re-export all public items
pub use task::*;
pub use dialog::*;

/// Failures talking to the task API
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// fetch rejected, or a JS call on the way failed
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

fn js_error(value: JsValue) -> ApiError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    ApiError::Network(message)
}

/// Issue a request and fail on anything but a 2xx status.
///
/// `body` is sent as JSON when present.
async fn fetch(method: &str, url: &str, body: Option<String>) -> ApiResult<Response> {
    let opts = RequestInit::new();
    opts.set_method(method);

    if let Some(body) = body {
        let headers = Headers::new().map_err(js_error)?;
        headers.set("Content-Type", "application/json").map_err(js_error)?;
        opts.set_headers(&headers);
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;

    log::debug!("[API] {} {}", method, url);
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = value.dyn_into().map_err(js_error)?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

/// Read the whole response body as text
async fn response_text(response: &Response) -> ApiResult<String> {
    let promise = response.text().map_err(js_error)?;
    let value = JsFuture::from(promise).await.map_err(js_error)?;
    value
        .as_string()
        .ok_or_else(|| ApiError::Decode("response body is not text".to_string()))
}
