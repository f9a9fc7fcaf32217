//! Page strategy: one fetch, then HTML-to-text normalization.

use url::Url;

use crate::acquisition::html::html_to_text;
use crate::acquisition::http_client::HttpClient;
use crate::acquisition::AcquirerConfig;
use crate::types::{AnalyzerError, AnalyzerResult};

/// Fetch `url` and return its visible text.
///
/// Non-success statuses fail with [`AnalyzerError::UpstreamStatus`];
/// transport failures and timeouts propagate as-is.
pub async fn fetch_page_text(
    client: &HttpClient,
    config: &AcquirerConfig,
    url: &Url,
) -> AnalyzerResult<String> {
    let resp = match client.get(url.as_str(), config.page_timeout).await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(%url, error = ?e, "page fetch failed");
            return Err(e);
        }
    };

    if !resp.is_success() {
        tracing::debug!(%url, status = resp.status, "page returned non-success status");
        return Err(AnalyzerError::UpstreamStatus(resp.status));
    }

    tracing::debug!(
        %url,
        final_url = %resp.final_url,
        bytes = resp.body.len(),
        "fetched page"
    );
    Ok(html_to_text(&resp.body))
}
