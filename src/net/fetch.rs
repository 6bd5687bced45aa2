use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

/// Error during a backend request
#[derive(Debug, Clone)]
pub struct FetchError {
    pub message: String,
    /// HTTP status when the server answered with a failure
    pub status: Option<u16>,
}

impl FetchError {
    fn new(message: String) -> Self {
        Self {
            message,
            status: None,
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FetchError {}

/// Blocking JSON-over-HTTP client rooted at a base URL.
#[derive(Clone)]
pub struct JsonClient {
    base: Url,
    client: reqwest::blocking::Client,
}

impl JsonClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let base = Url::parse(base_url)
            .map_err(|e| FetchError::new(format!("Invalid URL: {}", e)))?;

        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("polaris-explorer/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| FetchError::new(format!("Client error: {}", e)))?;

        Ok(Self { base, client })
    }

    /// POST `body` as JSON to `base/segments...` and decode the JSON reply.
    pub fn post_json<B, R>(&self, segments: &[&str], body: &B) -> Result<R, FetchError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = endpoint_url(&self.base, segments)?;
        log::debug!("POST {}", url);

        let response = self
            .client
            .post(url.as_str())
            .header("Accept", "application/json")
            .json(body)
            .send()
            .map_err(|e| FetchError::new(format!("Request failed: {}", e)))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .map_err(|e| FetchError::new(format!("Failed to read body: {}", e)))?;

        if !(200..300).contains(&status) {
            return Err(FetchError {
                message: error_message(status, &text),
                status: Some(status),
            });
        }

        serde_json::from_str(&text)
            .map_err(|e| FetchError::new(format!("Invalid response from {}: {}", url, e)))
    }
}

/// Append path segments to a base URL. Each segment is percent-encoded, so a
/// role name like `UX/UI Designer` stays a single segment.
pub fn endpoint_url(base: &Url, segments: &[&str]) -> Result<Url, FetchError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| FetchError::new(format!("Base URL cannot take a path: {}", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Message for a failed response: the body's `error` field if any, else the status.
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| format!("HTTP {}", status))
}
