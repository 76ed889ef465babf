//! TeamSplit Library
//!
//! Splits a CSV of competition records into an institution table and a team
//! table, grouping inconsistently spelled institution names.

pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod processor;
pub mod splitter;
pub mod table;
pub mod utils;
