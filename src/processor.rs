//! Split Processor
//!
//! Runs one input file through the whole pipeline: load, validate, group
//! institution names, normalize, split, and write both tables.

use crate::config::Config;
use crate::core::{unique_in_order, Grouping, NameGrouper, TextNormalizer};
use crate::error::SplitResult;
use crate::output;
use crate::splitter::{self, SplitTables};
use crate::table::{Cell, Table, GROUPED_INSTITUTION, INSTITUTION, REQUIRED_COLUMNS};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

/// In-memory result of splitting a table
#[derive(Debug, Clone)]
pub struct SplitOutput {
    pub tables: SplitTables,
    pub grouping: Grouping,
}

/// Summary of one completed run
#[derive(Debug, Clone)]
pub struct SplitReport {
    pub input: PathBuf,
    pub rows: usize,
    pub distinct_names: usize,
    pub institutions: usize,
    pub teams: usize,
    pub unresolved_teams: usize,
    pub institutions_path: PathBuf,
    pub teams_path: PathBuf,
}

impl fmt::Display for SplitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Files saved: {} {}",
            self.institutions_path.display(),
            self.teams_path.display()
        )
    }
}

/// Group, normalize and split a loaded table
///
/// Fails before doing any work if a required column is missing.
pub fn split_table(mut table: Table, config: &Config) -> SplitResult<SplitOutput> {
    table.validate_required(&REQUIRED_COLUMNS)?;

    // Missing names group under the empty string
    let raw_names: Vec<&str> = table
        .column(INSTITUTION)
        .unwrap_or_default()
        .into_iter()
        .map(|v| v.unwrap_or(""))
        .collect();

    let grouper = NameGrouper::new(config.threshold, config.scorer);
    let grouping = grouper.group(&unique_in_order(raw_names.iter().copied()));

    let grouped: Vec<Cell> = raw_names
        .iter()
        .map(|name| {
            grouping
                .canonical(name)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
        })
        .collect();
    table.set_column(GROUPED_INSTITUTION, grouped);

    TextNormalizer::new(config.unknown_region.clone()).normalize_table(&mut table);

    let tables = splitter::split(&table)?;
    Ok(SplitOutput { tables, grouping })
}

/// Split a CSV file and write both result tables
///
/// Nothing is written unless loading and validation succeed.
pub fn split_file(path: &Path, config: &Config) -> SplitResult<SplitReport> {
    info!("📂 Loading {}", path.display());
    let table = Table::from_path(path)?;
    let rows = table.len();

    let SplitOutput { tables, grouping } = split_table(table, config)?;

    output::ensure_dir(&config.results_dir)?;
    let institutions_path = config.institutions_path();
    let teams_path = config.teams_path();
    output::write_institutions(&institutions_path, &tables.institutions)?;
    output::write_teams(&teams_path, &tables.teams)?;

    let report = SplitReport {
        input: path.to_path_buf(),
        rows,
        distinct_names: grouping.len(),
        institutions: tables.institutions.len(),
        teams: tables.teams.len(),
        unresolved_teams: tables.unresolved_teams(),
        institutions_path,
        teams_path,
    };

    info!(
        "✅ {} rows -> {} institutions ({} distinct names), {} teams",
        report.rows, report.institutions, report.distinct_names, report.teams
    );
    Ok(report)
}
