//! HTTP transport for the text-generation service.
//!
//! One POST per assessment against a `generateContent`-style endpoint; the
//! credential travels as the `key` query parameter. A shared client keeps
//! connection pooling across requests.

use std::time::Duration;

use once_cell::sync::Lazy;
use serde_json::{json, Value};

use crate::config::AdvisorConfig;
use crate::error::AdvisorError;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(8)
        .build()
        .expect("Failed to build HTTP client")
});

/// Sends `prompt` to the generation endpoint and returns the narrative text.
pub(crate) async fn generate(
    cfg: &AdvisorConfig,
    credential: &str,
    prompt: &str,
) -> Result<String, AdvisorError> {
    let payload = json!({
        "contents": [{ "parts": [{ "text": prompt }] }]
    });

    let response = HTTP_CLIENT
        .post(&cfg.api_url)
        .query(&[("key", credential)])
        .timeout(Duration::from_secs(cfg.timeout_secs))
        .json(&payload)
        .send()
        .await
        .map_err(|err| AdvisorError::Unavailable(format!("HTTP request failed: {err}")))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(AdvisorError::Unavailable(format!(
            "HTTP error {status}: {body}"
        )));
    }

    let value: Value = response
        .json()
        .await
        .map_err(|err| AdvisorError::Unavailable(format!("Invalid JSON response: {err}")))?;

    parse_narrative(value)
}

/// Extracts the generated text from a `generateContent` response body.
fn parse_narrative(value: Value) -> Result<String, AdvisorError> {
    value
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| {
            AdvisorError::Unavailable("response did not contain generated text".into())
        })
}
