//! Table Splitter
//!
//! Derives the institution dimension and the team fact table from a grouped,
//! normalized input table.

use crate::error::{SplitError, SplitResult};
use crate::table::{
    Cell, Table, ADVISOR, CITY, COUNTRY, GROUPED_INSTITUTION, PROBLEM, RANKING, STATE_PROVINCE,
    TEAM_NUMBER,
};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

/// One row of the institution dimension
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstitutionRow {
    #[serde(rename = "Institution ID")]
    pub id: usize,
    #[serde(rename = "Institution Name")]
    pub name: Cell,
    #[serde(rename = "City")]
    pub city: Cell,
    #[serde(rename = "State/Province")]
    pub state_province: Cell,
    #[serde(rename = "Country")]
    pub country: Cell,
}

/// One row of the team fact table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamRow {
    #[serde(rename = "Team Number")]
    pub team_number: Cell,
    #[serde(rename = "Advisor")]
    pub advisor: Cell,
    #[serde(rename = "Problem")]
    pub problem: Cell,
    #[serde(rename = "Ranking")]
    pub ranking: Cell,
    #[serde(rename = "Institution ID")]
    pub institution_id: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitTables {
    pub institutions: Vec<InstitutionRow>,
    pub teams: Vec<TeamRow>,
}

impl SplitTables {
    /// Teams whose institution could not be resolved
    pub fn unresolved_teams(&self) -> usize {
        self.teams.iter().filter(|t| t.institution_id.is_none()).count()
    }
}

fn require(table: &Table, name: &str) -> SplitResult<usize> {
    table
        .column_index(name)
        .ok_or_else(|| SplitError::MissingColumns(vec![name.to_string()]))
}

/// Split a table carrying a grouped institution column
///
/// Institutions are deduplicated on the grouped name, keeping the first
/// row's location, and numbered from 0 in order of first appearance.
pub fn split(table: &Table) -> SplitResult<SplitTables> {
    let grouped = require(table, GROUPED_INSTITUTION)?;
    let city = require(table, CITY)?;
    let state = require(table, STATE_PROVINCE)?;
    let country = require(table, COUNTRY)?;
    let team_number = require(table, TEAM_NUMBER)?;
    let advisor = require(table, ADVISOR)?;
    let problem = require(table, PROBLEM)?;
    let ranking = require(table, RANKING)?;

    let mut ids: HashMap<Option<&str>, usize> = HashMap::new();
    let mut institutions = Vec::new();

    for row in table.rows() {
        let key = row[grouped].as_deref();
        if ids.contains_key(&key) {
            continue;
        }
        let id = institutions.len();
        ids.insert(key, id);
        institutions.push(InstitutionRow {
            id,
            name: row[grouped].clone(),
            city: row[city].clone(),
            state_province: row[state].clone(),
            country: row[country].clone(),
        });
    }

    let teams: Vec<TeamRow> = table
        .rows()
        .iter()
        .map(|row| TeamRow {
            team_number: row[team_number].clone(),
            advisor: row[advisor].clone(),
            problem: row[problem].clone(),
            ranking: row[ranking].clone(),
            institution_id: ids.get(&row[grouped].as_deref()).copied(),
        })
        .collect();

    let tables = SplitTables {
        institutions,
        teams,
    };
    let unresolved = tables.unresolved_teams();
    if unresolved > 0 {
        warn!("{} team rows have no matching institution", unresolved);
    }
    debug!(
        "Split into {} institutions and {} teams",
        tables.institutions.len(),
        tables.teams.len()
    );
    Ok(tables)
}
