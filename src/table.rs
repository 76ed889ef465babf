//! In-memory CSV table
//!
//! Loads a delimited file with a header row into string cells, with missing
//! values kept as `None`, and validates the required schema.

use crate::error::{SplitError, SplitResult};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub const INSTITUTION: &str = "Institution";
pub const CITY: &str = "City";
pub const STATE_PROVINCE: &str = "State/Province";
pub const COUNTRY: &str = "Country";
pub const TEAM_NUMBER: &str = "Team Number";
pub const ADVISOR: &str = "Advisor";
pub const PROBLEM: &str = "Problem";
pub const RANKING: &str = "Ranking";

/// Column added after grouping, holding each row's canonical institution name
pub const GROUPED_INSTITUTION: &str = "Grouped Institution";

/// Columns every input file must carry
pub const REQUIRED_COLUMNS: [&str; 8] = [
    INSTITUTION,
    CITY,
    STATE_PROVINCE,
    COUNTRY,
    TEAM_NUMBER,
    ADVISOR,
    PROBLEM,
    RANKING,
];

/// Raw field values treated as missing
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A single cell; `None` is a missing value
pub type Cell = Option<String>;

/// Inferred column type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Every present value parses as a number
    Numeric,
    Text,
}

/// Check whether a raw field is a missing-value marker
pub fn is_missing(raw: &str) -> bool {
    MISSING_MARKERS.contains(&raw)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Load a table from a CSV file on disk
    pub fn from_path(path: &Path) -> SplitResult<Self> {
        let file = File::open(path).map_err(|e| SplitError::load(path, e))?;
        Self::from_reader(file, path)
    }

    /// Load a table from any reader; `source` is only used in error messages
    pub fn from_reader<R: Read>(reader: R, source: &Path) -> SplitResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let raw_headers = rdr.headers().map_err(|e| SplitError::load(source, e))?.clone();
        if raw_headers.is_empty() || (raw_headers.len() == 1 && raw_headers[0].is_empty()) {
            return Err(SplitError::load(source, "No columns to parse from file"));
        }

        let mut table = Self::new(dedup_headers(raw_headers.iter()));
        let width = table.headers.len();

        for result in rdr.records() {
            let record = result.map_err(|e| SplitError::load(source, e))?;
            if record.len() > width {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                return Err(SplitError::load(
                    source,
                    format!(
                        "Error tokenizing data. Expected {} fields in line {}, saw {}",
                        width,
                        line,
                        record.len()
                    ),
                ));
            }

            let mut row: Vec<Cell> = record
                .iter()
                .map(|field| (!is_missing(field)).then(|| field.to_string()))
                .collect();
            row.resize(width, None);
            table.rows.push(row);
        }

        debug!(
            "Loaded {} rows x {} columns from {}",
            table.rows.len(),
            width,
            source.display()
        );
        Ok(table)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row, padding or truncating it to the header width
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.headers.len(), None);
        self.rows.push(row);
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Borrow a cell by row and column name
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)?.as_deref()
    }

    /// All values of a column in row order
    pub fn column(&self, name: &str) -> Option<Vec<Option<&str>>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[idx].as_deref()).collect())
    }

    pub fn column_kind(&self, idx: usize) -> ColumnKind {
        let mut present = self.rows.iter().filter_map(|row| row[idx].as_deref()).peekable();
        if present.peek().is_none() {
            // All-missing columns carry no text
            return ColumnKind::Numeric;
        }
        if present.all(|v| v.trim().parse::<f64>().is_ok()) {
            ColumnKind::Numeric
        } else {
            ColumnKind::Text
        }
    }

    /// Add a column, or replace it if the name already exists
    pub fn set_column(&mut self, name: &str, values: Vec<Cell>) {
        let idx = match self.column_index(name) {
            Some(idx) => idx,
            None => {
                self.headers.push(name.to_string());
                for row in &mut self.rows {
                    row.push(None);
                }
                self.headers.len() - 1
            }
        };
        for (row, value) in self.rows.iter_mut().zip(values) {
            row[idx] = value;
        }
    }

    /// Rewrite every cell of a column in place
    pub fn map_column<F>(&mut self, idx: usize, mut f: F)
    where
        F: FnMut(Cell) -> Cell,
    {
        for row in &mut self.rows {
            let cell = row[idx].take();
            row[idx] = f(cell);
        }
    }

    /// Fail with the sorted list of required columns that are absent
    pub fn validate_required(&self, required: &[&str]) -> SplitResult<()> {
        let present: HashSet<&str> = self.headers.iter().map(String::as_str).collect();
        let mut missing: Vec<String> = required
            .iter()
            .filter(|c| !present.contains(*c))
            .map(|c| c.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            missing.sort();
            Err(SplitError::MissingColumns(missing))
        }
    }
}

/// Repeated header names get a `.1`, `.2`, ... suffix
fn dedup_headers<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut headers = Vec::new();
    for name in raw {
        let mut candidate = name.to_string();
        let mut n = 1;
        while seen.contains(&candidate) {
            candidate = format!("{}.{}", name, n);
            n += 1;
        }
        seen.insert(candidate.clone());
        headers.push(candidate);
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(text: &str) -> SplitResult<Table> {
        Table::from_reader(text.as_bytes(), Path::new("inline.csv"))
    }

    #[test]
    fn test_missing_markers_become_none() {
        let table = load("Institution,State/Province\nMIT,NA\n,CA\nnull,\n").unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.cell(0, "State/Province"), None);
        assert_eq!(table.cell(1, "Institution"), None);
        assert_eq!(table.cell(1, "State/Province"), Some("CA"));
        assert_eq!(table.cell(2, "Institution"), None);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = load("A,B,C\n1,2\n").unwrap();
        assert_eq!(table.rows()[0], vec![Some("1".to_string()), Some("2".to_string()), None]);
    }

    #[test]
    fn test_wide_row_is_a_load_error() {
        let err = load("A,B\n1,2,3\n").unwrap_err();
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("Expected 2 fields"));
    }

    #[test]
    fn test_empty_input_is_a_load_error() {
        let err = load("").unwrap_err();
        assert!(matches!(err, SplitError::Load { .. }));
    }

    #[test]
    fn test_column_kind() {
        let table = load("Team Number,Problem,Empty\n101,A,\n 102 ,B,\n").unwrap();
        assert_eq!(table.column_kind(0), ColumnKind::Numeric);
        assert_eq!(table.column_kind(1), ColumnKind::Text);
        assert_eq!(table.column_kind(2), ColumnKind::Numeric);
    }

    #[test]
    fn test_validate_required_lists_missing_sorted() {
        let table = load("Institution,City,Country,Team Number,Advisor,State/Province\nx,y,z,1,a,b\n")
            .unwrap();
        match table.validate_required(&REQUIRED_COLUMNS) {
            Err(SplitError::MissingColumns(missing)) => {
                assert_eq!(missing, vec!["Problem".to_string(), "Ranking".to_string()]);
            }
            other => panic!("expected missing columns, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_headers_are_suffixed() {
        let table = load("City,City,City\na,b,c\n").unwrap();
        assert_eq!(table.headers(), &["City", "City.1", "City.2"]);
    }

    #[test]
    fn test_set_column_appends() {
        let mut table = load("A\nx\ny\n").unwrap();
        table.set_column("B", vec![Some("1".to_string()), None]);
        assert_eq!(table.headers(), &["A", "B"]);
        assert_eq!(table.cell(0, "B"), Some("1"));
        assert_eq!(table.cell(1, "B"), None);
    }
}
