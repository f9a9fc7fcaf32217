//! Stack Analyzer — detect which curated components a project uses from its
//! repository or submission page.

pub mod acquisition;
pub mod analyzer;
pub mod catalog;
pub mod matcher;
pub mod types;

pub use acquisition::{parse_url, AcquirerConfig, ContentAcquirer};
pub use analyzer::StackAnalyzer;
pub use catalog::{Catalog, CatalogIssue};
pub use matcher::{match_components, total_setup_minutes};
pub use types::*;
