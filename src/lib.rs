//! # zipdiff
//!
//! Compares the contents of two zip-family archives (zip, jar, war, ear, rar)
//! and reports which entries were added, removed or changed.
//!
//! Archives nested inside either archive are expanded recursively, so a
//! change deep inside `WEB-INF/lib/app.jar` shows up under
//! `lib/app.jar/...` rather than only as a changed jar. Entry equivalence is
//! decided from directory flag, sizes and name, plus the modification time
//! and CRC-32 unless turned off. Entries can be excluded with regular
//! expressions or by skipping `CVS/` bookkeeping.
//!
//! Archives are read from local files or, through HTTP Range requests, from
//! remote URLs; only the central directory and the bytes of nested archives
//! are fetched.
//!
//! ## Example
//!
//! ```no_run
//! use zipdiff::{ComparisonConfig, OutputFormat, compare_locations};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ComparisonConfig::new()
//!         .with_ignore_timestamps(true)
//!         .with_exclusion_patterns([r"META-INF/MANIFEST\.MF"])?;
//!
//!     let result = compare_locations("old.war", "new.war", &config).await?;
//!     if result.has_differences() {
//!         OutputFormat::Text.render(&result, &mut std::io::stdout())?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod cli;
pub mod diff;
pub mod error;
pub mod io;
pub mod output;
pub mod task;

#[cfg(test)]
mod test_support;

pub use cli::Cli;
pub use diff::{
    ArchiveEntryRecord, ArchiveIndex, ComparisonConfig, DifferenceEngine, DifferenceResult,
    EntryIndexBuilder, ExclusionFilter, compare_archives, compare_locations,
};
pub use error::DiffError;
pub use io::{ArchiveSource, HttpRangeReader, LocalFileReader, MemoryReader, ReadAt};
pub use output::OutputFormat;
pub use task::{DiffTask, TaskError};
