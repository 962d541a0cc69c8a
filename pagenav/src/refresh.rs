//! Cache-refresh ping: tells the backend to rebuild its cache for a page.

use std::time::Duration;

use url::Url;

use crate::Error;

const CSRF_HEADER: &str = "X-CSRFToken";
const REFRESH_BODY: &str = "refresh";

/// Client for the backend's cache-refresh endpoint.
///
/// A ping is a POST of the literal body `refresh` to the page URL stripped
/// of its query string, carrying the CSRF token header. Each ping builds a
/// fresh `reqwest::Client` with a short timeout; the response body is read
/// and discarded.
#[derive(Debug, Clone, Copy)]
pub struct RefreshClient {
    timeout: Duration,
}

impl Default for RefreshClient {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }
}

impl RefreshClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sends the refresh ping and reports the outcome.
    pub async fn ping(&self, page_url: &Url, csrf_token: &str) -> Result<(), Error> {
        let mut target = page_url.clone();
        target.set_query(None);
        target.set_fragment(None);

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .post(target)
            .header(CSRF_HEADER, csrf_token)
            .body(REFRESH_BODY)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Refresh ping failed: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if !status.is_success() {
            tracing::error!("Refresh ping rejected with status {}", status);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    /// Like [`ping`](Self::ping) but fire-and-forget: the UI never surfaces
    /// refresh failures and there is no retry.
    pub async fn ping_and_forget(&self, page_url: &Url, csrf_token: &str) {
        if let Err(e) = self.ping(page_url, csrf_token).await {
            tracing::debug!("Ignoring failed refresh ping: {}", e);
        }
    }
}
