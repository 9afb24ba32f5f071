//! Single GET requests whose body is parsed as JSON.
//!
//! Redirects follow reqwest's default policy; the final status must be 2xx or the
//! call fails with [`ToolsError::HttpStatus`]. No retries and no custom headers.

use crate::utils::error::{Result, ToolsError};
use crate::utils::validation::validate_url;
use serde_json::Value;

/// Sent on every request; some public APIs reject requests without one.
pub const USER_AGENT: &str = concat!("roshtools/", env!("CARGO_PKG_VERSION"));

/// Blocking GET of `url`, returning the parsed JSON body.
///
/// Must not be called from inside an async runtime; use [`get_json_async`] there.
pub fn get_json(url: &str) -> Result<Value> {
    let url = validate_url("url", url)?;

    tracing::debug!("Making API request to: {}", url);
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build()?;
    let response = client.get(url.clone()).send()?;
    tracing::debug!("API response status: {}", response.status());

    check_status(response.status(), url.as_str())?;
    let body = response.bytes()?;
    Ok(serde_json::from_slice(&body)?)
}

pub async fn get_json_async(url: &str) -> Result<Value> {
    let url = validate_url("url", url)?;

    tracing::debug!("Making API request to: {}", url);
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    let response = client.get(url.clone()).send().await?;
    tracing::debug!("API response status: {}", response.status());

    check_status(response.status(), url.as_str())?;
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

fn check_status(status: reqwest::StatusCode, url: &str) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    tracing::debug!("Rejecting non-success status {} from {}", status, url);
    Err(ToolsError::HttpStatus {
        status,
        url: url.to_string(),
    })
}
