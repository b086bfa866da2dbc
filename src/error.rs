use thiserror::Error;

/// Failures of a comparison run.
#[derive(Error, Debug)]
pub enum DiffError {
    /// The archive is missing, unreadable or structurally corrupt.
    #[error("Cannot read archive {archive}: {reason}")]
    ArchiveRead { archive: String, reason: String },

    /// An entry with an archive extension could not be read as an archive.
    #[error("Cannot read nested archive {entry}: {reason}")]
    NestedArchiveRead { entry: String, reason: String },

    /// An exclusion pattern is not a valid regular expression.
    #[error("Invalid exclusion pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl DiffError {
    pub(crate) fn archive_read(archive: &str, err: anyhow::Error) -> Self {
        Self::ArchiveRead {
            archive: archive.to_string(),
            reason: format!("{err:#}"),
        }
    }

    pub(crate) fn nested_archive_read(entry: &str, err: anyhow::Error) -> Self {
        Self::NestedArchiveRead {
            entry: entry.to_string(),
            reason: format!("{err:#}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, DiffError>;
