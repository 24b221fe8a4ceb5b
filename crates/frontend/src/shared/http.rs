use contracts::shared::error::FetchError;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// GET a JSON document, mapping transport and status failures to [`FetchError`].
///
/// `resource` names the requested thing in `NotFound` errors.
pub async fn get_json<T: DeserializeOwned>(url: &str, resource: &str) -> Result<T, FetchError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| FetchError::network(format!("Request failed: {}", e)))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| FetchError::network(format!("Failed to read response: {}", e)))?;

    if !response.ok() {
        return Err(FetchError::from_status(status, resource, text));
    }

    Ok(serde_json::from_str(&text)?)
}
