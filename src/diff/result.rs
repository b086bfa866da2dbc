use std::collections::BTreeMap;

use super::index::ArchiveEntryRecord;

/// Outcome of comparing two archives.
///
/// Partitions are keyed by fully-qualified entry name and iterate in
/// lexicographic order. `ignored` is kept for consumers that want to report
/// excluded entries; comparisons do not fill it.
#[derive(Debug, Clone, Default)]
pub struct DifferenceResult {
    label1: Option<String>,
    label2: Option<String>,
    added: BTreeMap<String, ArchiveEntryRecord>,
    removed: BTreeMap<String, ArchiveEntryRecord>,
    changed: BTreeMap<String, (ArchiveEntryRecord, ArchiveEntryRecord)>,
    ignored: BTreeMap<String, ArchiveEntryRecord>,
}

impl DifferenceResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_labels(mut self, label1: impl Into<String>, label2: impl Into<String>) -> Self {
        self.label1 = Some(label1.into());
        self.label2 = Some(label2.into());
        self
    }

    pub(crate) fn entry_added(&mut self, name: String, record: ArchiveEntryRecord) {
        self.added.insert(name, record);
    }

    pub(crate) fn entry_removed(&mut self, name: String, record: ArchiveEntryRecord) {
        self.removed.insert(name, record);
    }

    pub(crate) fn entry_changed(
        &mut self,
        name: String,
        first: ArchiveEntryRecord,
        second: ArchiveEntryRecord,
    ) {
        self.changed.insert(name, (first, second));
    }

    #[cfg(test)]
    pub(crate) fn entry_ignored(&mut self, name: String, record: ArchiveEntryRecord) {
        self.ignored.insert(name, record);
    }

    /// Display identifier of the first archive, if one was given.
    pub fn label1(&self) -> Option<&str> {
        self.label1.as_deref()
    }

    pub fn label2(&self) -> Option<&str> {
        self.label2.as_deref()
    }

    /// Entries only in the second archive.
    pub fn added(&self) -> &BTreeMap<String, ArchiveEntryRecord> {
        &self.added
    }

    /// Entries only in the first archive.
    pub fn removed(&self) -> &BTreeMap<String, ArchiveEntryRecord> {
        &self.removed
    }

    /// Entries in both archives that failed the equivalence test, as (first, second).
    pub fn changed(&self) -> &BTreeMap<String, (ArchiveEntryRecord, ArchiveEntryRecord)> {
        &self.changed
    }

    pub fn ignored(&self) -> &BTreeMap<String, ArchiveEntryRecord> {
        &self.ignored
    }

    pub fn has_differences(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty() || !self.changed.is_empty()
    }

    pub fn total_differences(&self) -> usize {
        self.added.len() + self.removed.len() + self.changed.len()
    }
}
