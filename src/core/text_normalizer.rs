//! Text Normalization
//!
//! Cleans free-text columns before the tables are split: trims whitespace,
//! capitalizes, and expands two-letter US state codes.

use crate::core::regions;
use crate::table::{ColumnKind, Table, COUNTRY, STATE_PROVINCE};
use tracing::debug;

/// Uppercase the first character and lowercase the rest
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Normalizes table cells in place
pub struct TextNormalizer {
    /// Placeholder for a missing State/Province
    unknown_region: String,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new("Unknown")
    }
}

impl TextNormalizer {
    pub fn new(unknown_region: impl Into<String>) -> Self {
        Self {
            unknown_region: unknown_region.into(),
        }
    }

    /// Trim a region value and expand it if it is a known state code
    ///
    /// Anything else keeps its original casing.
    pub fn expand_state(&self, text: &str) -> String {
        let trimmed = text.trim();
        match regions::state_name(trimmed) {
            Some(name) => name.to_string(),
            None => trimmed.to_string(),
        }
    }

    /// Trim and capitalize a free-text value
    pub fn normalize_text(&self, text: &str) -> String {
        capitalize(text.trim())
    }

    /// Normalize every column of the table
    ///
    /// Country is never touched. Numeric columns and missing cells pass
    /// through unchanged.
    pub fn normalize_table(&self, table: &mut Table) {
        if let Some(idx) = table.column_index(STATE_PROVINCE) {
            let unknown = &self.unknown_region;
            table.map_column(idx, |cell| cell.or_else(|| Some(unknown.clone())));
        }

        for idx in 0..table.headers().len() {
            let name = table.headers()[idx].clone();
            if name == COUNTRY {
                continue;
            }

            if name == STATE_PROVINCE {
                table.map_column(idx, |cell| cell.map(|v| self.expand_state(&v)));
            } else if table.column_kind(idx) == ColumnKind::Text {
                debug!("Capitalizing column '{}'", name);
                table.map_column(idx, |cell| cell.map(|v| self.normalize_text(&v)));
            }
        }
    }
}
