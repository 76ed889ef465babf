//! CSV writers for the split tables

use crate::error::{SplitError, SplitResult};
use crate::splitter::{InstitutionRow, TeamRow};
use serde::Serialize;
use std::path::Path;

const INSTITUTION_HEADERS: [&str; 5] = [
    "Institution ID",
    "Institution Name",
    "City",
    "State/Province",
    "Country",
];

const TEAM_HEADERS: [&str; 5] = ["Team Number", "Advisor", "Problem", "Ranking", "Institution ID"];

/// Create the results directory if it does not exist yet
pub fn ensure_dir(dir: &Path) -> SplitResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| SplitError::write(dir, e))
}

pub fn write_institutions(path: &Path, rows: &[InstitutionRow]) -> SplitResult<()> {
    write_rows(path, &INSTITUTION_HEADERS, rows)
}

pub fn write_teams(path: &Path, rows: &[TeamRow]) -> SplitResult<()> {
    write_rows(path, &TEAM_HEADERS, rows)
}

fn write_rows<T: Serialize>(path: &Path, headers: &[&str], rows: &[T]) -> SplitResult<()> {
    // Headers are written by hand so an empty table still gets a header row
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| SplitError::write(path, e))?;

    writer.write_record(headers)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
