//! Fetching the deal list at startup.
use deals_core::{DealRecord, DealsError, index_deals};

#[cfg(target_arch = "wasm32")]
use crate::dom::{fetch_response, js_error_message};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::JsFuture;

/// Fetch and index the deal list.
///
/// # Errors
/// Returns an error if the request fails, the server answers with a non-2xx
/// status, or the body is not an array of deals.
#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_deals(url: &str) -> Result<Vec<DealRecord>, DealsError> {
    let response = fetch_response(url)
        .await
        .map_err(|err| DealsError::Network(js_error_message(&err)))?;
    if !response.ok() {
        return Err(DealsError::Status(response.status()));
    }
    let body = response
        .json()
        .map_err(|err| DealsError::Decode(js_error_message(&err)))?;
    let value = JsFuture::from(body)
        .await
        .map_err(|err| DealsError::Decode(js_error_message(&err)))?;
    decode_deals(value)
}

/// Deserialize an already-parsed JSON array of deals.
///
/// # Errors
/// Returns an error if the value is not an array of deal objects.
pub fn decode_deals(value: wasm_bindgen::JsValue) -> Result<Vec<DealRecord>, DealsError> {
    let deals: Vec<DealRecord> = serde_wasm_bindgen::from_value(value)
        .map_err(|err| DealsError::Decode(err.to_string()))?;
    Ok(index_deals(deals))
}
