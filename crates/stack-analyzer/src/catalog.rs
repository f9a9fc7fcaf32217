//! Read-only component catalog and alias table.
//!
//! The bundled catalog is embedded at compile time and parsed once per
//! process. Custom catalogs can be built from JSON or in-memory parts and
//! injected into the analyzer; nothing here is ever mutated after load.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use serde::Deserialize;

use crate::types::{AliasEntry, AnalyzerResult, Component};

/// Raw JSON content of the bundled catalog, embedded at compile time.
const CATALOG_JSON: &str = include_str!("../data/catalog.json");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    components: Vec<Component>,
    #[serde(default)]
    aliases: Vec<AliasEntry>,
}

/// Components plus the ordered alias table that points at them.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    components: Vec<Component>,
    aliases: Vec<AliasEntry>,
    by_name: HashMap<String, usize>,
}

/// A data-integrity problem found by [`Catalog::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    /// An alias entry names a component that is not in the catalog.
    UnknownComponent(String),
    /// Two catalog entries share a name.
    DuplicateComponent(String),
    /// An alias entry has no patterns and can never match.
    NoPatterns(String),
    /// A pattern contains uppercase characters; text is lower-cased before
    /// matching, so it can never match.
    NotLowercase { component: String, pattern: String },
    /// An empty pattern matches every text.
    EmptyPattern(String),
}

impl std::fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogIssue::UnknownComponent(name) => {
                write!(f, "alias entry '{name}' has no matching component")
            }
            CatalogIssue::DuplicateComponent(name) => {
                write!(f, "component '{name}' is defined more than once")
            }
            CatalogIssue::NoPatterns(name) => write!(f, "alias entry '{name}' has no patterns"),
            CatalogIssue::NotLowercase { component, pattern } => {
                write!(f, "pattern '{pattern}' for '{component}' is not lowercase")
            }
            CatalogIssue::EmptyPattern(name) => {
                write!(f, "alias entry '{name}' contains an empty pattern")
            }
        }
    }
}

impl Catalog {
    /// Build a catalog from components and an ordered alias table.
    ///
    /// On duplicate names the first entry wins for lookups.
    pub fn new(components: Vec<Component>, aliases: Vec<AliasEntry>) -> Self {
        let mut by_name = HashMap::with_capacity(components.len());
        for (idx, component) in components.iter().enumerate() {
            by_name.entry(component.name.clone()).or_insert(idx);
        }
        Self {
            components,
            aliases,
            by_name,
        }
    }

    /// Parse a catalog from its JSON representation.
    pub fn from_json(json: &str) -> AnalyzerResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(Self::new(file.components, file.aliases))
    }

    /// The catalog bundled with the crate, parsed on first use.
    pub fn bundled() -> &'static Catalog {
        static BUNDLED: OnceLock<Catalog> = OnceLock::new();
        BUNDLED.get_or_init(|| match Catalog::from_json(CATALOG_JSON) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!("bundled catalog is unreadable: {e}");
                Catalog::default()
            }
        })
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn aliases(&self) -> &[AliasEntry] {
        &self.aliases
    }

    /// Look up a component by exact name.
    pub fn get(&self, name: &str) -> Option<&Component> {
        self.by_name.get(name).map(|&idx| &self.components[idx])
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Check the alias table against the component list.
    ///
    /// Issues are reported, never fixed: the matcher tolerates every one of
    /// them at runtime.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        let mut seen = HashSet::new();
        for component in &self.components {
            if !seen.insert(component.name.as_str()) {
                issues.push(CatalogIssue::DuplicateComponent(component.name.clone()));
            }
        }

        for entry in &self.aliases {
            if self.get(&entry.component).is_none() {
                issues.push(CatalogIssue::UnknownComponent(entry.component.clone()));
            }
            if entry.patterns.is_empty() {
                issues.push(CatalogIssue::NoPatterns(entry.component.clone()));
            }
            for pattern in &entry.patterns {
                if pattern.is_empty() {
                    issues.push(CatalogIssue::EmptyPattern(entry.component.clone()));
                } else if pattern.to_lowercase() != *pattern {
                    issues.push(CatalogIssue::NotLowercase {
                        component: entry.component.clone(),
                        pattern: pattern.clone(),
                    });
                }
            }
        }

        issues
    }
}
