use std::collections::BTreeSet;

use super::config::ComparisonConfig;
use super::index::{ArchiveEntryRecord, ArchiveIndex};
use super::result::DifferenceResult;

/// Matches two archive indices by name and sorts the names into
/// added, removed and changed.
pub struct DifferenceEngine<'a> {
    config: &'a ComparisonConfig,
}

impl<'a> DifferenceEngine<'a> {
    pub fn new(config: &'a ComparisonConfig) -> Self {
        Self { config }
    }

    /// Compare `first` against `second`, consuming both indices.
    ///
    /// Names excluded by the configuration are skipped even if an index
    /// still holds them. Labels are left unset.
    pub fn compare(&self, mut first: ArchiveIndex, mut second: ArchiveIndex) -> DifferenceResult {
        let names: BTreeSet<String> = first
            .names()
            .chain(second.names())
            .map(str::to_string)
            .collect();

        let mut result = DifferenceResult::new();
        for name in names {
            if self.config.filter().should_exclude("", &name) {
                continue;
            }

            match (first.take(&name), second.take(&name)) {
                (Some(removed), None) => result.entry_removed(name, removed),
                (None, Some(added)) => result.entry_added(name, added),
                (Some(old), Some(new)) => {
                    if !self.entries_match(&old, &new) {
                        result.entry_changed(name, old, new);
                    }
                }
                (None, None) => unreachable!("{name} taken from the union of both indices"),
            }
        }
        result
    }

    /// The entry-equivalence test: type, both sizes and name always count;
    /// timestamp and checksum count as configured.
    pub fn entries_match(&self, first: &ArchiveEntryRecord, second: &ArchiveEntryRecord) -> bool {
        first.is_directory == second.is_directory
            && first.uncompressed_size == second.uncompressed_size
            && first.compressed_size == second.compressed_size
            && first.name == second.name
            && (self.config.ignore_timestamps || first.modified == second.modified)
            && (!self.config.compare_checksums || first.checksum == second.checksum)
    }
}
