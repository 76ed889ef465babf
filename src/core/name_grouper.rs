//! Name Grouper
//!
//! Greedy, order-dependent clustering of near-duplicate institution names.
//! Each name is scored against every name seen before it; if the best score
//! clears the threshold the name joins that name's group, otherwise it starts
//! a new group. Assignments are never revisited.

use crate::utils::fuzzy::{find_best_match, full_process, Scorer};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// Default similarity a name must exceed to join an existing group
pub const DEFAULT_THRESHOLD: u8 = 87;

/// Distinct values in order of first occurrence
pub fn unique_in_order<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

/// Mapping from every input name to its canonical representative
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grouping {
    canonical: HashMap<String, String>,
    representatives: Vec<String>,
}

impl Grouping {
    /// Canonical name for an input name, if it was grouped
    pub fn canonical(&self, name: &str) -> Option<&str> {
        self.canonical.get(name).map(String::as_str)
    }

    /// Representatives in the order they were created
    pub fn representatives(&self) -> &[String] {
        &self.representatives
    }

    /// Number of input names
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.canonical.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Clusters names with a fixed scorer and threshold
#[derive(Debug, Clone, Copy)]
pub struct NameGrouper {
    threshold: u8,
    scorer: Scorer,
}

impl Default for NameGrouper {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, Scorer::default())
    }
}

impl NameGrouper {
    pub fn new(threshold: u8, scorer: Scorer) -> Self {
        Self { threshold, scorer }
    }

    /// Group names in the order given
    ///
    /// Duplicate inputs are skipped; only the first occurrence counts.
    pub fn group<S: AsRef<str>>(&self, names: &[S]) -> Grouping {
        let mut grouping = Grouping::default();
        // Every name seen so far, in order; the candidates for the next name
        let mut seen: Vec<&str> = Vec::with_capacity(names.len());

        for name in names {
            let name = name.as_ref();
            if grouping.canonical.contains_key(name) {
                continue;
            }

            if full_process(name).is_empty() && !seen.is_empty() {
                warn!(
                    "Institution '{}' has no word characters, it only matches names that also have none",
                    name
                );
            }

            let matched = find_best_match(name, &seen, self.scorer, self.threshold)
                .and_then(|m| grouping.canonical.get(&m.value).cloned());

            let canonical = match matched {
                Some(canonical) => {
                    debug!("Grouped '{}' under '{}'", name, canonical);
                    canonical
                }
                None => {
                    grouping.representatives.push(name.to_string());
                    name.to_string()
                }
            };

            grouping.canonical.insert(name.to_string(), canonical);
            seen.push(name);
        }

        info!(
            "🔗 Grouped {} names into {} institutions (threshold {})",
            grouping.len(),
            grouping.representatives.len(),
            self.threshold
        );
        grouping
    }
}
