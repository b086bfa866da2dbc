//! The comparison core.
//!
//! [`EntryIndexBuilder`] flattens each archive (nested archives included)
//! into an [`ArchiveIndex`], using the [`ExclusionFilter`] held by the
//! [`ComparisonConfig`] to prune the walk. [`DifferenceEngine`] then matches
//! the two indices by name and produces a [`DifferenceResult`].

mod config;
mod engine;
mod filter;
mod index;
pub(crate) mod result;

pub use config::ComparisonConfig;
pub use engine::DifferenceEngine;
pub use filter::{ExclusionFilter, VCS_SEGMENT};
pub use index::{
    ARCHIVE_EXTENSIONS, ArchiveEntryRecord, ArchiveIndex, EntryIndexBuilder, is_archive_name,
};
pub use result::DifferenceResult;

use std::sync::Arc;
use tracing::info;

use crate::error::{DiffError, Result};
use crate::io::{ArchiveSource, ReadAt, format_size};

/// Compare two already opened archives.
///
/// The archives are indexed one after the other; `label1` and `label2` name
/// them in errors and in the result.
pub async fn compare_archives<A, B>(
    first: Arc<A>,
    label1: &str,
    second: Arc<B>,
    label2: &str,
    config: &ComparisonConfig,
) -> Result<DifferenceResult>
where
    A: ReadAt + 'static,
    B: ReadAt + 'static,
{
    let builder = EntryIndexBuilder::new(config);
    let index1 = builder.build_index(first, label1).await?;
    let index2 = builder.build_index(second, label2).await?;

    Ok(DifferenceEngine::new(config)
        .compare(index1, index2)
        .with_labels(label1, label2))
}

/// Open two archives by path or HTTP(S) URL and compare them.
pub async fn compare_locations(
    location1: &str,
    location2: &str,
    config: &ComparisonConfig,
) -> Result<DifferenceResult> {
    let first = Arc::new(open(location1).await?);
    let second = Arc::new(open(location2).await?);

    let result = compare_archives(first.clone(), location1, second.clone(), location2, config).await?;

    for (location, source) in [(location1, &first), (location2, &second)] {
        if let Some(transferred) = source.transferred_bytes() {
            info!(location, transferred = %format_size(transferred), "network transfer");
        }
    }

    Ok(result)
}

async fn open(location: &str) -> Result<ArchiveSource> {
    ArchiveSource::open(location)
        .await
        .map_err(|e| DiffError::archive_read(location, e))
}
