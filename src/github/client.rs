use crate::error::{HublookError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use serde_json::Value;

/// Builds the shared HTTP client. GitHub rejects requests without a
/// User-Agent; the bearer header is attached only when a token is configured.
pub fn build_client(token: Option<&str>) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static("hublook"));
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.github.v3+json"),
    );

    if let Some(token) = token {
        let value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| HublookError::Http(format!("invalid token value: {e}")))?;
        headers.insert(AUTHORIZATION, value);
    }

    Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| HublookError::Http(e.to_string()))
}

/// The request wrapper: one GET, no retries, no timeout. Transport failures,
/// non-2xx statuses, and unparseable bodies all collapse into the one
/// generic network error.
pub async fn request(client: &Client, url: &str) -> Result<Value> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|_| HublookError::Network)?;

    if !response.status().is_success() {
        return Err(HublookError::Network);
    }

    response
        .json::<Value>()
        .await
        .map_err(|_| HublookError::Network)
}
