//! Core data types for components, analysis results, and errors.

use serde::{Deserialize, Serialize};

/// A curated component from the bundled catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub category: String,
    pub description: String,
    pub github_url: String,
    pub docs_url: String,
    pub setup_time_minutes: u32,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// How much experience a component takes to integrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// One alias table row: a component name and the lowercase substrings that
/// indicate its presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    pub component: String,
    pub patterns: Vec<String>,
}

/// Where the analyzed text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    /// Manifest and README pulled from a code-hosting repository.
    #[serde(rename = "github")]
    Repository,
    /// A hackathon submission page.
    #[serde(rename = "devpost")]
    SubmissionPage,
    /// Any other web page.
    #[serde(rename = "page")]
    GenericPage,
}

impl SourceKind {
    /// Wire name used in API responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Repository => "github",
            SourceKind::SubmissionPage => "devpost",
            SourceKind::GenericPage => "page",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text retrieved by the acquirer, tagged with its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquiredContent {
    pub text: String,
    pub source: SourceKind,
}

/// Result of a single `analyze` call. Never cached or persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub matched: Vec<Component>,
    pub total_setup_minutes: u32,
    pub source: SourceKind,
    pub text_length: usize,
}

impl AnalysisResult {
    /// Names of the matched components, in result order.
    pub fn names(&self) -> Vec<&str> {
        self.matched.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Errors surfaced by the analyzer.
///
/// `Display` strings are short and user-facing; transport detail stays in
/// the variant payload and in logs.
#[derive(thiserror::Error, Debug)]
pub enum AnalyzerError {
    #[error("Invalid URL")]
    InvalidUrl(String),

    #[error("Could not fetch page (HTTP {0})")]
    UpstreamStatus(u16),

    #[error("Could not reach that URL")]
    Network(String),

    #[error("Timed out fetching that URL")]
    Timeout(String),

    #[error("No content found at that URL")]
    EmptyContent,

    #[error("Catalog error: {0}")]
    Catalog(#[from] serde_json::Error),
}

impl AnalyzerError {
    /// True for failures caused by the caller's input rather than upstream.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AnalyzerError::InvalidUrl(_))
    }
}

/// Convenience result type.
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
