//! Keyword matcher: text blob in, ordered component list out.
//!
//! Matching is literal substring search over lower-cased text. No stemming,
//! no fuzzy matching, no weighting beyond presence/absence.

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::types::Component;

/// Find every catalog component whose alias patterns occur in `text`.
///
/// Results are deduplicated by name and sorted by `setup_time_minutes`
/// ascending; ties keep alias-table order. Alias entries naming a
/// component missing from the catalog are skipped.
pub fn match_components(text: &str, catalog: &Catalog) -> Vec<Component> {
    let haystack = text.to_lowercase();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut matched: Vec<Component> = Vec::new();

    for entry in catalog.aliases() {
        let hit = entry
            .patterns
            .iter()
            .any(|pattern| haystack.contains(pattern.as_str()));
        if !hit || seen.contains(entry.component.as_str()) {
            continue;
        }

        match catalog.get(&entry.component) {
            Some(component) => {
                seen.insert(entry.component.as_str());
                matched.push(component.clone());
            }
            None => {
                tracing::trace!(component = %entry.component, "alias has no catalog entry");
            }
        }
    }

    // sort_by_key is stable
    matched.sort_by_key(|c| c.setup_time_minutes);
    matched
}

/// Sum of setup minutes over a match list.
pub fn total_setup_minutes(components: &[Component]) -> u32 {
    components.iter().map(|c| c.setup_time_minutes).sum()
}
