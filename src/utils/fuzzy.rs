//! Fuzzy matching utilities for institution names
//!
//! Token-order-insensitive scoring on a 0-100 scale. Both strings are
//! reduced to lowercase ASCII words, the words are sorted, and the sorted
//! strings are compared.

use serde::{Deserialize, Serialize};
use strsim::normalized_levenshtein;

/// Which similarity measure to run over the sorted token strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Scorer {
    /// Indel similarity (`2 * LCS / total length`)
    #[default]
    TokenSortRatio,
    /// Normalized Levenshtein similarity
    TokenSortLevenshtein,
}

impl Scorer {
    /// Score two raw strings, 0-100
    pub fn score(self, a: &str, b: &str) -> u8 {
        let a = sort_tokens(a);
        let b = sort_tokens(b);
        match self {
            Scorer::TokenSortRatio => ratio(&a, &b),
            Scorer::TokenSortLevenshtein => levenshtein_ratio(&a, &b),
        }
    }
}

/// Result of a fuzzy match with the matched value and score
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch {
    pub index: usize,
    pub value: String,
    pub score: u8,
}

/// Strip non-ASCII, turn anything that is not a word character into a
/// space, lowercase and trim.
pub fn full_process(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii())
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();
    cleaned.trim().to_string()
}

/// Process a string and sort its whitespace-delimited tokens
pub fn sort_tokens(text: &str) -> String {
    let processed = full_process(text);
    let mut tokens: Vec<&str> = processed.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Indel similarity between two already-processed strings, 0-100
pub fn ratio(a: &str, b: &str) -> u8 {
    if a == b {
        return 100;
    }
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let lcs = longest_common_subsequence(&a, &b);
    let total = (a.len() + b.len()) as f64;
    to_percent(2.0 * lcs as f64 / total)
}

fn levenshtein_ratio(a: &str, b: &str) -> u8 {
    if a == b {
        return 100;
    }
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    to_percent(normalized_levenshtein(a, b))
}

fn to_percent(similarity: f64) -> u8 {
    (similarity * 100.0).round_ties_even().clamp(0.0, 100.0) as u8
}

fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    // Single rolling row over `b`
    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        let mut diagonal = 0;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}

/// Find the highest-scoring candidate
///
/// Ties go to the earliest candidate. Returns None only when there are no
/// candidates at all.
pub fn extract_one<S: AsRef<str>>(
    search_term: &str,
    candidates: &[S],
    scorer: Scorer,
) -> Option<FuzzyMatch> {
    let mut best: Option<FuzzyMatch> = None;

    for (index, candidate) in candidates.iter().enumerate() {
        let candidate = candidate.as_ref();
        let score = scorer.score(search_term, candidate);
        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(FuzzyMatch {
                index,
                value: candidate.to_string(),
                score,
            });
            if score == 100 {
                break;
            }
        }
    }

    best
}

/// Find the best match strictly above `threshold`
pub fn find_best_match<S: AsRef<str>>(
    search_term: &str,
    candidates: &[S],
    scorer: Scorer,
    threshold: u8,
) -> Option<FuzzyMatch> {
    extract_one(search_term, candidates, scorer).filter(|m| m.score > threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn similarity(a: &str, b: &str) -> u8 {
        Scorer::default().score(a, b)
    }

    #[test]
    fn test_full_process() {
        assert_eq!(full_process("  M.I.T. "), "m i t");
        assert_eq!(full_process("École Polytechnique"), "cole polytechnique");
        assert_eq!(full_process("snake_case-name"), "snake_case name");
        assert_eq!(full_process("---"), "");
    }

    #[test]
    fn test_sort_tokens_ignores_order_and_spacing() {
        assert_eq!(
            sort_tokens("University of  Colorado, Boulder"),
            "boulder colorado of university"
        );
    }

    #[test]
    fn test_token_sort_ratio_scores() {
        assert_eq!(similarity("MIT", "M.I.T."), 50);
        assert_eq!(similarity("MIT", "Massachusetts Inst of Tech"), 14);
        assert_eq!(
            similarity(
                "Massachusetts Institute of Technology",
                "Massachusetts Institute Technology"
            ),
            96
        );
        assert_eq!(
            similarity("University of Colorado Boulder", "Boulder University of Colorado"),
            100
        );
        assert_eq!(similarity("Colorado State University", "University of Colorado"), 85);
        assert_eq!(similarity("Peking University", "Peking Univeristy"), 94);
        assert_eq!(similarity("Peking University", "Beijing University"), 86);
    }

    #[test]
    fn test_empty_after_processing() {
        // Two names with no word characters compare equal
        assert_eq!(similarity("---", "***"), 100);
        assert_eq!(similarity("abc", "---"), 0);
    }

    #[test]
    fn test_levenshtein_scorer() {
        let scorer = Scorer::TokenSortLevenshtein;
        assert_eq!(scorer.score("Harvey Mudd College", "Mudd Harvey College"), 100);
        assert_eq!(scorer.score("Harvey Mudd College", "Harvey Mudd Colege"), 95);
    }

    #[test]
    fn test_extract_one_prefers_first_on_tie() {
        let candidates = vec!["Boulder University of Colorado", "University of Colorado Boulder"];
        let best = extract_one("Colorado Boulder University of", &candidates, Scorer::default())
            .expect("candidates are not empty");
        assert_eq!(best.index, 0);
        assert_eq!(best.score, 100);
    }

    #[test]
    fn test_find_best_match_is_strict() {
        let candidates = vec!["Peking University".to_string()];
        assert!(find_best_match("Beijing University", &candidates, Scorer::default(), 86).is_none());
        let hit = find_best_match("Beijing University", &candidates, Scorer::default(), 85);
        assert_eq!(hit.map(|m| m.value), Some("Peking University".to_string()));
    }

    #[test]
    fn test_extract_one_empty_candidates() {
        let candidates: Vec<String> = Vec::new();
        assert!(extract_one("anything", &candidates, Scorer::default()).is_none());
    }
}
