//! Core processing modules
//!
//! Name grouping, text normalization and the region lookup table.

pub mod name_grouper;
pub mod regions;
pub mod text_normalizer;

pub use name_grouper::{unique_in_order, Grouping, NameGrouper};
pub use text_normalizer::TextNormalizer;
