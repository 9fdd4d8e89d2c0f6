//! Minimal JSON client for the host's list REST endpoints.

use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

#[derive(Debug, Error)]
/// Failures of one REST round trip, stringified at the store boundary.
pub enum RestError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("request setup failed: {0}")]
    Request(String),
    #[error("request to {url} failed with status {status}")]
    Status { url: String, status: u16 },
    #[error("response body unreadable: {0}")]
    Body(String),
    #[error("response was not valid JSON: {0}")]
    Decode(String),
}

/// GET a JSON document.
pub async fn get_json(url: &str) -> Result<serde_json::Value, RestError> {
    let response = send(url, "GET", None, &[]).await?;
    decode_json(url, response).await
}

/// POST a JSON document; used for item creation.
pub async fn post_json(url: &str, body: &serde_json::Value) -> Result<(), RestError> {
    send(url, "POST", Some(body), &[]).await?;
    Ok(())
}

/// POST with MERGE semantics; used for in-place item updates.
pub async fn merge_json(url: &str, body: &serde_json::Value) -> Result<(), RestError> {
    send(
        url,
        "POST",
        Some(body),
        &[("IF-MATCH", "*"), ("X-HTTP-Method", "MERGE")],
    )
    .await?;
    Ok(())
}

async fn send(
    url: &str,
    method: &str,
    body: Option<&serde_json::Value>,
    extra_headers: &[(&str, &str)],
) -> Result<Response, RestError> {
    let window = web_sys::window().ok_or(RestError::NoWindow)?;

    let init = RequestInit::new();
    init.set_method(method);
    if let Some(body) = body {
        init.set_body(&wasm_bindgen::JsValue::from_str(&body.to_string()));
    }

    let request = Request::new_with_str_and_init(url, &init)
        .map_err(|err| RestError::Request(format!("{err:?}")))?;
    let headers = request.headers();
    set_header(&headers, "Accept", "application/json;odata=nometadata")?;
    if body.is_some() {
        set_header(&headers, "Content-Type", "application/json;odata=nometadata")?;
        if let Some(digest) = request_digest() {
            set_header(&headers, "X-RequestDigest", &digest)?;
        }
    }
    for (name, value) in extra_headers {
        set_header(&headers, name, value)?;
    }

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| RestError::Request(format!("{err:?}")))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| RestError::Request("fetch did not return a response".to_string()))?;

    if !response.ok() {
        return Err(RestError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }
    Ok(response)
}

fn set_header(headers: &web_sys::Headers, name: &str, value: &str) -> Result<(), RestError> {
    headers
        .set(name, value)
        .map_err(|err| RestError::Request(format!("{err:?}")))
}

async fn decode_json(url: &str, response: Response) -> Result<serde_json::Value, RestError> {
    let text = JsFuture::from(
        response
            .text()
            .map_err(|err| RestError::Body(format!("{err:?}")))?,
    )
    .await
    .map_err(|err| RestError::Body(format!("{err:?}")))?;
    let raw = text
        .as_string()
        .ok_or_else(|| RestError::Body(format!("non-text body from {url}")))?;
    serde_json::from_str(&raw).map_err(|err| RestError::Decode(err.to_string()))
}

/// Classic host pages carry a request digest in a well-known hidden input;
/// writes reuse it when present and are sent without one otherwise.
fn request_digest() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let input = document.get_element_by_id("__REQUESTDIGEST")?;
    let input: web_sys::HtmlInputElement = input.dyn_into().ok()?;
    let value = input.value();
    (!value.is_empty()).then_some(value)
}

/// Percent-encodes an OData query fragment for use in a URL.
pub fn encode_query(fragment: &str) -> String {
    js_sys::encode_uri_component(fragment).into()
}
