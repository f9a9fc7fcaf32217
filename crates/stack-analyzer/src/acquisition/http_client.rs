//! Async HTTP client wrapping reqwest.
//!
//! Not a browser — just HTTP GETs. Follows a bounded number of redirects and
//! sends a browser-like user-agent. Each request carries its own timeout and
//! is attempted exactly once.

use std::time::Duration;

use crate::types::{AnalyzerError, AnalyzerResult};

/// Response from an HTTP GET request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Original requested URL.
    pub url: String,
    /// Final URL after redirects.
    pub final_url: String,
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl HttpResponse {
    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client for the acquisition engine.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a client sending `user_agent` and following up to
    /// `max_redirects` redirects.
    pub fn new(user_agent: &str, max_redirects: usize) -> Self {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(max_redirects))
            .user_agent(user_agent)
            .build()
            .unwrap_or_default();

        Self { client }
    }

    /// Perform a single GET bounded by `timeout`.
    ///
    /// Non-success statuses are returned as a normal response; only transport
    /// failures and timeouts are errors.
    pub async fn get(&self, url: &str, timeout: Duration) -> AnalyzerResult<HttpResponse> {
        let resp = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(classify_error)?;

        let status = resp.status().as_u16();
        let final_url = resp.url().to_string();
        let body = resp.text().await.map_err(classify_error)?;

        Ok(HttpResponse {
            url: url.to_string(),
            final_url,
            status,
            body,
        })
    }
}

fn classify_error(e: reqwest::Error) -> AnalyzerError {
    if e.is_timeout() {
        AnalyzerError::Timeout(e.to_string())
    } else {
        AnalyzerError::Network(e.to_string())
    }
}
