//! HTTP request body types.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/analyze`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Missing is treated the same as an unparsable URL.
    #[serde(default)]
    pub url: Option<String>,
}
