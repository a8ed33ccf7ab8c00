//! Job Catalog, the job-name to video-list lookup table.
//!
//! Backed by a headerless two-column CSV in Shift-JIS: column 0 is the job
//! name, column 1 a newline-separated list of video URLs stored as a single
//! string. Loaded wholesale into memory once at startup and immutable for
//! the life of the process.

use std::path::Path;

use anyhow::{bail, Context, Result};

/// One catalog entry: a job name plus its raw newline-delimited video list.
#[derive(Debug, Clone)]
pub struct JobRow {
    pub name: String,
    pub video_urls: String,
}

impl JobRow {
    /// Individual video URLs, split on newline in stored order.
    /// An empty field yields a single empty entry.
    pub fn videos(&self) -> Vec<&str> {
        self.video_urls.split('\n').collect()
    }
}

/// The loaded catalog. Row order is file order, which is also the order the
/// job selector presents.
#[derive(Debug)]
pub struct JobCatalog {
    rows: Vec<JobRow>,
}

impl JobCatalog {
    /// Reads and decodes the catalog file, then parses it as CSV.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read(path)
            .with_context(|| format!("Failed to read job catalog at {}", path.display()))?;
        let (decoded, _, had_errors) = encoding_rs::SHIFT_JIS.decode(&raw);
        if had_errors {
            bail!("Job catalog at {} is not valid Shift-JIS", path.display());
        }
        Self::from_csv(&decoded)
    }

    pub(crate) fn from_csv(text: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.context("Malformed row in job catalog")?;
            rows.push(JobRow {
                name: record.get(0).unwrap_or("").to_string(),
                video_urls: record.get(1).unwrap_or("").to_string(),
            });
        }

        if rows.is_empty() {
            bail!("Job catalog contains no rows");
        }
        Ok(Self { rows })
    }

    /// Job names in file order. Populates the job selector.
    pub fn job_names(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// First row matching `name`.
    pub fn get(&self, name: &str) -> Option<&JobRow> {
        self.rows.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
