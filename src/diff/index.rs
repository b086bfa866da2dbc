//! Flattened, name-addressed view of an archive and everything nested in it.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::debug;

use super::config::ComparisonConfig;
use crate::archive::{DosDateTime, ZipExtractor, ZipFileEntry};
use crate::error::{DiffError, Result};
use crate::io::{MemoryReader, ReadAt};

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Extensions that mark an entry as a nested archive (compared case-insensitively).
pub const ARCHIVE_EXTENSIONS: [&str; 5] = [".zip", ".jar", ".war", ".ear", ".rar"];

pub fn is_archive_name(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    ARCHIVE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// One entry observed while walking an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntryRecord {
    /// Fully-qualified name, including the prefix of any enclosing nested archive.
    pub name: String,
    pub is_directory: bool,
    pub uncompressed_size: u64,
    pub compressed_size: u64,
    pub modified: DosDateTime,
    /// CRC-32 as recorded by the archive.
    pub checksum: u32,
}

impl ArchiveEntryRecord {
    fn from_entry(name: String, entry: &ZipFileEntry) -> Self {
        Self {
            name,
            is_directory: entry.is_directory,
            uncompressed_size: entry.uncompressed_size,
            compressed_size: entry.compressed_size,
            modified: entry.modified,
            checksum: entry.crc32,
        }
    }
}

/// Mapping from fully-qualified name to entry metadata for one archive.
#[derive(Debug, Clone, Default)]
pub struct ArchiveIndex {
    entries: HashMap<String, ArchiveEntryRecord>,
}

impl ArchiveIndex {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ArchiveEntryRecord> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Insert under the record's own name; an existing record of that name is replaced.
    pub(crate) fn insert(&mut self, record: ArchiveEntryRecord) -> Option<ArchiveEntryRecord> {
        self.entries.insert(record.name.clone(), record)
    }

    pub(crate) fn take(&mut self, name: &str) -> Option<ArchiveEntryRecord> {
        self.entries.remove(name)
    }
}

impl FromIterator<ArchiveEntryRecord> for ArchiveIndex {
    fn from_iter<I: IntoIterator<Item = ArchiveEntryRecord>>(iter: I) -> Self {
        let mut index = Self::default();
        for record in iter {
            index.insert(record);
        }
        index
    }
}

/// Builds an [`ArchiveIndex`] by walking an archive, descending into every
/// nested archive it contains.
///
/// Names inside a nested archive are prefixed with the nested entry's own
/// name within its parent plus `/`, so `lib/inner.jar` holding `E` yields
/// `lib/inner.jar/E`. The container entry is recorded as well. When two
/// walk paths produce the same name the one visited last wins.
pub struct EntryIndexBuilder<'a> {
    config: &'a ComparisonConfig,
}

impl<'a> EntryIndexBuilder<'a> {
    pub fn new(config: &'a ComparisonConfig) -> Self {
        Self { config }
    }

    /// Walk the archive behind `source`. `label` names it in errors.
    pub async fn build_index<R: ReadAt + 'static>(
        &self,
        source: Arc<R>,
        label: &str,
    ) -> Result<ArchiveIndex> {
        let extractor = ZipExtractor::new(source);
        let entries = extractor
            .list_files()
            .await
            .map_err(|e| DiffError::archive_read(label, e))?;

        let mut index = ArchiveIndex::default();
        self.walk_entries(&extractor, entries, "", &mut index)
            .await?;
        debug!(archive = label, entries = index.len(), "archive indexed");
        Ok(index)
    }

    fn walk_entries<'w, R: ReadAt + 'static>(
        &'w self,
        extractor: &'w ZipExtractor<R>,
        entries: Vec<ZipFileEntry>,
        prefix: &'w str,
        index: &'w mut ArchiveIndex,
    ) -> BoxFuture<'w, Result<()>> {
        Box::pin(async move {
            for entry in entries {
                let name = format!("{}{}", prefix, entry.file_name);

                if self.config.filter().should_exclude(prefix, &name) {
                    debug!(%name, "ignoring entry");
                    continue;
                }
                debug!(%name, "processing entry");

                if !entry.is_directory && is_archive_name(&name) {
                    self.walk_nested(extractor, &entry, &name, index).await?;
                }

                if let Some(previous) = index.insert(ArchiveEntryRecord::from_entry(name, &entry)) {
                    debug!(name = %previous.name, "entry name collision, keeping the later entry");
                }
            }
            Ok(())
        })
    }

    async fn walk_nested<R: ReadAt + 'static>(
        &self,
        extractor: &ZipExtractor<R>,
        entry: &ZipFileEntry,
        name: &str,
        index: &mut ArchiveIndex,
    ) -> Result<()> {
        let bytes = extractor
            .extract_to_memory(entry)
            .await
            .map_err(|e| DiffError::nested_archive_read(name, e))?;

        let nested = ZipExtractor::new(Arc::new(MemoryReader::new(bytes)));
        let entries = nested
            .list_files()
            .await
            .map_err(|e| DiffError::nested_archive_read(name, e))?;

        let prefix = format!("{}/", entry.file_name);
        self.walk_entries(&nested, entries, &prefix, index).await
    }
}
