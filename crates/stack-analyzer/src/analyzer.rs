//! Caller-facing orchestration: validate, acquire, match.

use std::sync::Arc;

use crate::acquisition::{parse_url, AcquirerConfig, ContentAcquirer};
use crate::catalog::Catalog;
use crate::matcher::{match_components, total_setup_minutes};
use crate::types::{AnalysisResult, AnalyzerResult};

/// Stateless per request; cheap to clone and safe to share.
#[derive(Clone)]
pub struct StackAnalyzer {
    acquirer: ContentAcquirer,
    catalog: Arc<Catalog>,
}

impl Default for StackAnalyzer {
    fn default() -> Self {
        Self::new(
            ContentAcquirer::default(),
            Arc::new(Catalog::bundled().clone()),
        )
    }
}

impl StackAnalyzer {
    pub fn new(acquirer: ContentAcquirer, catalog: Arc<Catalog>) -> Self {
        Self { acquirer, catalog }
    }

    /// Analyzer using the bundled catalog and a custom acquisition config.
    pub fn with_config(config: AcquirerConfig) -> Self {
        Self::new(
            ContentAcquirer::new(config),
            Arc::new(Catalog::bundled().clone()),
        )
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Analyze a project URL.
    ///
    /// Invalid input fails before any network access. An empty `matched`
    /// list is a successful result, not an error.
    pub async fn analyze(&self, url: &str) -> AnalyzerResult<AnalysisResult> {
        let url = parse_url(url)?;
        let content = self.acquirer.acquire_url(&url).await?;

        let matched = match_components(&content.text, &self.catalog);
        let total_setup_minutes = total_setup_minutes(&matched);
        let text_length = content.text.chars().count();

        tracing::info!(
            %url,
            source = %content.source,
            text_length,
            matched = matched.len(),
            "analysis complete"
        );

        Ok(AnalysisResult {
            matched,
            total_setup_minutes,
            source: content.source,
            text_length,
        })
    }
}
