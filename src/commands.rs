//! Interactive prompt
//!
//! Reads one line at a time: `1` runs the bundled sample file and stops,
//! `2` quits, anything else is taken as a path to split.

use crate::config::Config;
use crate::error::SplitError;
use crate::processor::split_file;
use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

pub const PROMPT: &str =
    "Enter the location of the csv to split, (1) for the test file (2015.csv), and (2) for exit: ";

/// What the user asked for at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptChoice {
    /// Run the sample file once, then stop
    Sample,
    Exit,
    /// Split the file at this path and prompt again
    Path(PathBuf),
}

impl PromptChoice {
    /// Parse one line of input; only the line terminator is stripped
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        match line {
            "1" => PromptChoice::Sample,
            "2" => PromptChoice::Exit,
            other => PromptChoice::Path(PathBuf::from(other)),
        }
    }
}

/// Run the prompt loop until exit, the sample run, or end of input
pub fn run_prompt<R, W>(mut input: R, mut output: W, config: &Config) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("End of input, leaving prompt");
            writeln!(output)?;
            break;
        }

        match PromptChoice::parse(&line) {
            PromptChoice::Sample => {
                run_once(&config.sample_path, config, &mut output)?;
                break;
            }
            PromptChoice::Exit => {
                writeln!(output, "Quitting...")?;
                break;
            }
            PromptChoice::Path(path) => {
                run_once(&path, config, &mut output)?;
            }
        }
    }
    Ok(())
}

/// Split one file and report the outcome to the user
///
/// Failures are printed and absorbed; only errors writing to `output`
/// propagate.
pub fn run_once<W: Write>(path: &Path, config: &Config, output: &mut W) -> Result<bool> {
    match split_file(path, config) {
        Ok(report) => {
            writeln!(output, "{}", report)?;
            Ok(true)
        }
        Err(e) if e.is_recoverable() => {
            warn!("Split of {} abandoned: {}", path.display(), e);
            let message = match &e {
                SplitError::Load { reason, .. } => format!("Failed to load data: {}", reason),
                other => other.to_string(),
            };
            writeln!(output, "{}", message)?;
            Ok(false)
        }
        Err(e) => {
            error!("Split of {} failed: {}", path.display(), e);
            writeln!(output, "Failed to save results: {}", e)?;
            Ok(false)
        }
    }
}
