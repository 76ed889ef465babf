//! Utility modules

pub mod fuzzy;

pub use fuzzy::{extract_one, find_best_match, full_process, sort_tokens, FuzzyMatch, Scorer};
