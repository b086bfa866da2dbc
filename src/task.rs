//! Build-automation surface: compare two archives and write a report file.

use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::diff::{ComparisonConfig, DifferenceResult, compare_locations};
use crate::error::DiffError;
use crate::output::{OutputFormat, write_report};

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("{0} is required")]
    MissingAttribute(&'static str),

    #[error("Zip comparison failed: {0}")]
    Comparison(#[from] DiffError),

    #[error("Cannot write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A configured comparison whose report goes to `dest_file`, formatted by
/// the file's suffix.
#[derive(Debug, Clone)]
pub struct DiffTask {
    pub filename1: Option<String>,
    pub filename2: Option<String>,
    pub dest_file: Option<String>,
    pub ignore_timestamps: bool,
    pub ignore_cvs_files: bool,
    pub compare_crc_values: bool,
}

impl Default for DiffTask {
    fn default() -> Self {
        Self {
            filename1: None,
            filename2: None,
            dest_file: None,
            ignore_timestamps: false,
            ignore_cvs_files: false,
            compare_crc_values: true,
        }
    }
}

impl DiffTask {
    pub fn new(
        filename1: impl Into<String>,
        filename2: impl Into<String>,
        dest_file: impl Into<String>,
    ) -> Self {
        Self {
            filename1: Some(filename1.into()),
            filename2: Some(filename2.into()),
            dest_file: Some(dest_file.into()),
            ..Self::default()
        }
    }

    /// Check that both archives and the destination are named.
    pub fn validate(&self) -> Result<(), TaskError> {
        self.attributes().map(|_| ())
    }

    fn attributes(&self) -> Result<(&str, &str, &str), TaskError> {
        Ok((
            required(&self.filename1, "filename1")?,
            required(&self.filename2, "filename2")?,
            required(&self.dest_file, "destfile")?,
        ))
    }

    pub fn config(&self) -> ComparisonConfig {
        ComparisonConfig::new()
            .with_ignore_timestamps(self.ignore_timestamps)
            .with_ignore_vcs_files(self.ignore_cvs_files)
            .with_compare_checksums(self.compare_crc_values)
    }

    /// Validate, compare and write the report. Returns the result for callers
    /// that want to act on it further.
    pub async fn execute(&self) -> Result<DifferenceResult, TaskError> {
        let (filename1, filename2, dest_file) = self.attributes()?;

        let result = compare_locations(filename1, filename2, &self.config()).await?;

        write_report(
            &result,
            Path::new(dest_file),
            OutputFormat::from_destination(dest_file),
        )
        .await
        .map_err(|source| TaskError::Write {
            path: dest_file.to_string(),
            source,
        })?;

        info!(
            destination = dest_file,
            differences = result.total_differences(),
            "report written"
        );
        Ok(result)
    }
}

fn required<'a>(value: &'a Option<String>, attribute: &'static str) -> Result<&'a str, TaskError> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(TaskError::MissingAttribute(attribute)),
    }
}
