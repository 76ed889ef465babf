use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use teamsplit::config::Config;

pub const HEADER: &str =
    "Institution,City,State/Province,Country,Team Number,Advisor,Problem,Ranking";

/// Scratch directory with an input file and a results directory inside it
pub struct TestContext {
    pub temp_dir: TempDir,
    pub config: Config,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = Config {
            results_dir: temp_dir.path().join("results"),
            sample_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/2015.csv"),
            ..Config::default()
        };
        Self { temp_dir, config }
    }

    /// Write a CSV body under the standard header
    pub fn write_input(&self, name: &str, body: &str) -> PathBuf {
        self.write_raw(name, &format!("{}\n{}", HEADER, body))
    }

    pub fn write_raw(&self, name: &str, text: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, text).expect("Failed to write input");
        path
    }

    pub fn institutions(&self) -> Vec<Vec<String>> {
        read_csv(&self.config.institutions_path())
    }

    pub fn teams(&self) -> Vec<Vec<String>> {
        read_csv(&self.config.teams_path())
    }
}

/// Read a CSV into rows of fields, header included
pub fn read_csv(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .expect("Failed to open output");
    reader
        .records()
        .map(|r| {
            r.expect("Malformed output row")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}
