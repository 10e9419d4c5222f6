//! HTTP record source
//!
//! Fetches user and post collections as JSON arrays from a pair of configured
//! endpoints (JSONPlaceholder-shaped directories).

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value as JsonValue;
use url::Url;

use crate::domain::result::{Error, Result};
use crate::ports::RecordSource;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP record source backed by two JSON endpoints
#[derive(Debug)]
pub struct HttpRecordSource {
    client: Client,
    users_url: String,
    posts_url: String,
}

impl HttpRecordSource {
    /// Create a new HTTP source for the given endpoints
    pub fn new(users_url: &str, posts_url: &str) -> Result<Self> {
        let users_url = validate_endpoint(users_url)?;
        let posts_url = validate_endpoint(posts_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::fetch(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            users_url,
            posts_url,
        })
    }

    fn fetch(&self, url: &str) -> Result<JsonValue> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| map_request_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::fetch(format!(
                "{} answered HTTP {}",
                url,
                status.as_u16()
            )));
        }

        response
            .json()
            .map_err(|e| Error::fetch(format!("Failed to parse response from {}: {}", url, e)))
    }
}

impl RecordSource for HttpRecordSource {
    fn name(&self) -> &str {
        "http"
    }

    fn fetch_users(&self) -> Result<JsonValue> {
        self.fetch(&self.users_url)
    }

    fn fetch_posts(&self) -> Result<JsonValue> {
        self.fetch(&self.posts_url)
    }
}

/// Parse and validate an endpoint URL
fn validate_endpoint(raw: &str) -> Result<String> {
    let parsed =
        Url::parse(raw).map_err(|e| Error::Config(format!("Invalid endpoint {:?}: {}", raw, e)))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(Error::Config(format!(
            "Endpoint {:?} must use http or https",
            raw
        )));
    }

    Ok(parsed.into())
}

/// Map request errors to user-friendly messages
fn map_request_error(url: &str, error: reqwest::Error) -> Error {
    if error.is_timeout() {
        Error::fetch(format!(
            "Connection to {} timed out after {} seconds",
            url, REQUEST_TIMEOUT_SECS
        ))
    } else if error.is_connect() {
        Error::fetch(format!("Unable to connect to {}", url))
    } else {
        Error::fetch(format!("Request to {} failed: {}", url, error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https_endpoints() {
        let source = HttpRecordSource::new(
            "https://jsonplaceholder.typicode.com/users",
            "https://jsonplaceholder.typicode.com/posts",
        );
        assert!(source.is_ok());
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let result = HttpRecordSource::new(
            "ftp://example.com/users",
            "https://example.com/posts",
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }

    #[test]
    fn test_rejects_unparseable_url() {
        let result = HttpRecordSource::new("not a url", "also not a url");
        assert!(matches!(result.unwrap_err(), Error::Config(_)));
    }
}
