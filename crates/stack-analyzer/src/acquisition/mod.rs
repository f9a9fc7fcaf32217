//! Content acquisition: turn a project URL into a text blob.
//!
//! Two strategies, picked by host:
//!
//! 1. **Repository** — for code-host URLs with an owner and repository
//!    segment, fetch the manifest and README from the raw-content mirror,
//!    trying each candidate branch in priority order.
//! 2. **Page** — for anything else, fetch the URL once and normalize the
//!    HTML to plain text.
//!
//! Every network attempt is individually time-bounded and made once. The
//! branch/file list is the only retry budget.

pub mod html;
pub mod http_client;
pub mod page;
pub mod repository;

use std::time::Duration;

use url::Url;

use crate::types::{AcquiredContent, AnalyzerError, AnalyzerResult, SourceKind};
use http_client::HttpClient;

/// Raw-content mirror for repository files.
pub const DEFAULT_RAW_BASE_URL: &str = "https://raw.githubusercontent.com";

/// Host whose URLs are treated as repositories (exact match).
pub const DEFAULT_REPOSITORY_HOST: &str = "github.com";

/// Host fragment identifying hackathon submission pages.
pub const DEFAULT_SUBMISSION_HOST_FRAGMENT: &str = "devpost.com";

/// Candidate default branches, in priority order.
pub const DEFAULT_BRANCHES: [&str; 2] = ["main", "master"];

/// Repository files fetched, in accumulation order.
pub const DEFAULT_REPOSITORY_FILES: [&str; 2] = ["package.json", "README.md"];

/// Per-attempt timeout for raw-content fetches.
pub const REPOSITORY_TIMEOUT: Duration = Duration::from_secs(5);

/// Timeout for the single page fetch.
pub const PAGE_TIMEOUT: Duration = Duration::from_secs(8);

/// Browser-like user-agent; some hosts block obvious bots.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                                      AppleWebKit/537.36 (KHTML, like Gecko) \
                                      Chrome/131.0.0.0 Safari/537.36";

const MAX_REDIRECTS: usize = 5;

/// Acquisition settings. Defaults are fixed at build time; tests override
/// the base URL and timeouts to point at a local mock server.
#[derive(Debug, Clone)]
pub struct AcquirerConfig {
    pub raw_base_url: String,
    pub repository_host: String,
    pub submission_host_fragment: String,
    pub branches: Vec<String>,
    pub repository_files: Vec<String>,
    pub repository_timeout: Duration,
    pub page_timeout: Duration,
    pub user_agent: String,
    pub max_redirects: usize,
}

impl Default for AcquirerConfig {
    fn default() -> Self {
        Self {
            raw_base_url: DEFAULT_RAW_BASE_URL.to_string(),
            repository_host: DEFAULT_REPOSITORY_HOST.to_string(),
            submission_host_fragment: DEFAULT_SUBMISSION_HOST_FRAGMENT.to_string(),
            branches: DEFAULT_BRANCHES.iter().map(|b| b.to_string()).collect(),
            repository_files: DEFAULT_REPOSITORY_FILES
                .iter()
                .map(|f| f.to_string())
                .collect(),
            repository_timeout: REPOSITORY_TIMEOUT,
            page_timeout: PAGE_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: MAX_REDIRECTS,
        }
    }
}

impl AcquirerConfig {
    /// Point repository fetches at a different raw-content mirror.
    pub fn with_raw_base_url(mut self, base: impl Into<String>) -> Self {
        self.raw_base_url = base.into();
        self
    }

    /// Override both per-attempt timeouts.
    pub fn with_timeouts(mut self, repository: Duration, page: Duration) -> Self {
        self.repository_timeout = repository;
        self.page_timeout = page;
        self
    }

    /// Raw-content URL of `file` on `branch`.
    pub fn raw_file_url(&self, owner: &str, repo: &str, branch: &str, file: &str) -> String {
        format!(
            "{}/{owner}/{repo}/{branch}/{file}",
            self.raw_base_url.trim_end_matches('/')
        )
    }
}

/// What to fetch for a given URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Repository { owner: String, repo: String },
    Page { url: Url, source: SourceKind },
}

impl Target {
    pub fn source(&self) -> SourceKind {
        match self {
            Target::Repository { .. } => SourceKind::Repository,
            Target::Page { source, .. } => *source,
        }
    }
}

/// Validate caller input as an absolute http(s) URL.
///
/// Surrounding whitespace is ignored. No network access happens here.
pub fn parse_url(input: &str) -> AnalyzerResult<Url> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AnalyzerError::InvalidUrl("empty URL".to_string()));
    }

    let url = Url::parse(trimmed).map_err(|e| AnalyzerError::InvalidUrl(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AnalyzerError::InvalidUrl(format!(
            "unsupported scheme '{}'",
            url.scheme()
        )));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(AnalyzerError::InvalidUrl("missing host".to_string()));
    }

    Ok(url)
}

/// Decide between the repository and page strategies.
pub fn classify(url: &Url, config: &AcquirerConfig) -> Target {
    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();

    if host == config.repository_host {
        let segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.filter(|seg| !seg.is_empty()).collect())
            .unwrap_or_default();

        if let [owner, repo, ..] = segments[..] {
            let repo = repo.strip_suffix(".git").unwrap_or(repo);
            if !repo.is_empty() {
                return Target::Repository {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                };
            }
        }
    }

    let source = if host.contains(&config.submission_host_fragment) {
        SourceKind::SubmissionPage
    } else {
        SourceKind::GenericPage
    };

    Target::Page {
        url: url.clone(),
        source,
    }
}

/// Fetches text for a URL according to its [`Target`].
#[derive(Clone)]
pub struct ContentAcquirer {
    client: HttpClient,
    config: AcquirerConfig,
}

impl Default for ContentAcquirer {
    fn default() -> Self {
        Self::new(AcquirerConfig::default())
    }
}

impl ContentAcquirer {
    pub fn new(config: AcquirerConfig) -> Self {
        let client = HttpClient::new(&config.user_agent, config.max_redirects);
        Self { client, config }
    }

    pub fn config(&self) -> &AcquirerConfig {
        &self.config
    }

    /// Parse `url` and acquire its content.
    pub async fn acquire(&self, url: &str) -> AnalyzerResult<AcquiredContent> {
        let url = parse_url(url)?;
        self.acquire_url(&url).await
    }

    /// Acquire content for an already-validated URL.
    ///
    /// Fails with [`AnalyzerError::EmptyContent`] when nothing but
    /// whitespace was gathered.
    pub async fn acquire_url(&self, url: &Url) -> AnalyzerResult<AcquiredContent> {
        let target = classify(url, &self.config);
        let source = target.source();
        tracing::debug!(%url, %source, "acquiring content");

        let text = match &target {
            Target::Repository { owner, repo } => {
                repository::fetch_repository_text(&self.client, &self.config, owner, repo).await
            }
            Target::Page { url, .. } => {
                page::fetch_page_text(&self.client, &self.config, url).await?
            }
        };

        if text.trim().is_empty() {
            return Err(AnalyzerError::EmptyContent);
        }

        Ok(AcquiredContent { text, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(input: &str) -> Target {
        classify(&parse_url(input).unwrap(), &AcquirerConfig::default())
    }

    #[test]
    fn test_parse_url_rejects_bad_input() {
        for bad in ["", "   ", "not a url", "ftp://example.com/x", "/relative/path"] {
            assert!(
                matches!(parse_url(bad), Err(AnalyzerError::InvalidUrl(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_url_trims_whitespace() {
        let url = parse_url("  https://example.com/x \n").unwrap();
        assert_eq!(url.as_str(), "https://example.com/x");
    }

    #[test]
    fn test_classify_repository() {
        assert_eq!(
            target("https://github.com/acme/demo"),
            Target::Repository {
                owner: "acme".into(),
                repo: "demo".into()
            }
        );
        assert_eq!(
            target("https://github.com/acme/demo.git"),
            Target::Repository {
                owner: "acme".into(),
                repo: "demo".into()
            }
        );
        assert_eq!(
            target("https://GitHub.com/acme/demo/tree/develop/src"),
            Target::Repository {
                owner: "acme".into(),
                repo: "demo".into()
            }
        );
    }

    #[test]
    fn test_classify_github_without_repo_is_page() {
        assert_eq!(target("https://github.com/acme").source(), SourceKind::GenericPage);
        assert_eq!(target("https://github.com/").source(), SourceKind::GenericPage);
    }

    #[test]
    fn test_classify_host_must_match_exactly() {
        assert_eq!(
            target("https://gist.github.com/acme/demo").source(),
            SourceKind::GenericPage
        );
        assert_eq!(
            target("https://www.github.com/acme/demo").source(),
            SourceKind::GenericPage
        );
    }

    #[test]
    fn test_classify_submission_page() {
        assert_eq!(
            target("https://devpost.com/software/demo").source(),
            SourceKind::SubmissionPage
        );
        assert_eq!(
            target("https://hack-2025.devpost.com/").source(),
            SourceKind::SubmissionPage
        );
        assert_eq!(
            target("https://example.com/some-project").source(),
            SourceKind::GenericPage
        );
    }

    #[test]
    fn test_raw_file_url() {
        let config = AcquirerConfig::default();
        assert_eq!(
            config.raw_file_url("acme", "demo", "main", "package.json"),
            "https://raw.githubusercontent.com/acme/demo/main/package.json"
        );
        let config = config.with_raw_base_url("http://127.0.0.1:8080/");
        assert_eq!(
            config.raw_file_url("acme", "demo", "master", "README.md"),
            "http://127.0.0.1:8080/acme/demo/master/README.md"
        );
    }

    #[test]
    fn test_default_policy() {
        let config = AcquirerConfig::default();
        assert_eq!(config.branches, vec!["main", "master"]);
        assert_eq!(config.repository_files, vec!["package.json", "README.md"]);
        assert_eq!(config.repository_timeout, Duration::from_secs(5));
        assert_eq!(config.page_timeout, Duration::from_secs(8));
    }
}
