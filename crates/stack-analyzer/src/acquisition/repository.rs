//! Repository strategy: manifest and README from the raw-content mirror.
//!
//! Each file is looked up independently across the candidate branches;
//! the first successful branch wins. Per-attempt failures are swallowed
//! and never surface to the caller.

use crate::acquisition::http_client::HttpClient;
use crate::acquisition::AcquirerConfig;

/// Gather manifest and README text for `owner/repo`.
///
/// Returns an empty string when no file could be fetched on any branch;
/// the caller turns that into an empty-content error.
pub async fn fetch_repository_text(
    client: &HttpClient,
    config: &AcquirerConfig,
    owner: &str,
    repo: &str,
) -> String {
    let mut parts = Vec::with_capacity(config.repository_files.len());

    for file in &config.repository_files {
        if let Some(body) = fetch_first_branch(client, config, owner, repo, file).await {
            parts.push(body);
        }
    }

    parts.join("\n")
}

/// Try `file` on each branch in order and return the first success.
async fn fetch_first_branch(
    client: &HttpClient,
    config: &AcquirerConfig,
    owner: &str,
    repo: &str,
    file: &str,
) -> Option<String> {
    for branch in &config.branches {
        let url = config.raw_file_url(owner, repo, branch, file);

        match client.get(&url, config.repository_timeout).await {
            Ok(resp) if resp.is_success() => {
                tracing::debug!(%url, bytes = resp.body.len(), "fetched repository file");
                return Some(resp.body);
            }
            Ok(resp) => {
                tracing::debug!(%url, status = resp.status, "repository file not available");
            }
            Err(e) => {
                tracing::debug!(%url, error = ?e, "repository file fetch failed");
            }
        }
    }

    None
}
