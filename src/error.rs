//! TeamSplit Error Types
//!
//! Centralized error handling for the split pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Central error type for TeamSplit
#[derive(Error, Debug)]
pub enum SplitError {
    #[error("failed to load {}: {reason}", path.display())]
    Load { path: PathBuf, reason: String },

    #[error("{}", format_missing(.0))]
    MissingColumns(Vec<String>),

    #[error("failed to write {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Result type alias for TeamSplit operations
pub type SplitResult<T> = Result<T, SplitError>;

impl SplitError {
    pub fn load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        SplitError::Load {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        SplitError::Write {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Load and schema failures abandon one attempt; the prompt keeps going.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SplitError::Load { .. } | SplitError::MissingColumns(_))
    }
}

fn format_missing(columns: &[String]) -> String {
    let quoted: Vec<String> = columns.iter().map(|c| format!("'{}'", c)).collect();
    format!("Missing required columns: {{{}}}", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_message_names_every_column() {
        let err = SplitError::MissingColumns(vec!["Problem".into(), "Ranking".into()]);
        assert_eq!(
            err.to_string(),
            "Missing required columns: {'Problem', 'Ranking'}"
        );
    }

    #[test]
    fn test_recoverable_kinds() {
        assert!(SplitError::load("x.csv", "No such file").is_recoverable());
        assert!(SplitError::MissingColumns(vec![]).is_recoverable());
        assert!(!SplitError::write("out.csv", "denied").is_recoverable());
        assert!(!SplitError::Config("bad".into()).is_recoverable());
    }

    #[test]
    fn test_load_message_includes_path() {
        let err = SplitError::load("data/missing.csv", "No such file or directory");
        assert_eq!(
            err.to_string(),
            "failed to load data/missing.csv: No such file or directory"
        );
    }
}
