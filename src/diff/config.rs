use super::filter::ExclusionFilter;
use crate::error::Result;

/// Settings for one comparison run.
///
/// Exclusion patterns are compiled when they are set, so an invalid pattern
/// is reported before any archive is opened.
#[derive(Debug, Clone)]
pub struct ComparisonConfig {
    /// Skip the modification time when deciding whether two entries match.
    pub ignore_timestamps: bool,
    /// Require matching CRC-32 checksums.
    pub compare_checksums: bool,
    filter: ExclusionFilter,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            ignore_timestamps: false,
            compare_checksums: true,
            filter: ExclusionFilter::default(),
        }
    }
}

impl ComparisonConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ignore_timestamps(mut self, ignore: bool) -> Self {
        self.ignore_timestamps = ignore;
        self
    }

    pub fn with_compare_checksums(mut self, compare: bool) -> Self {
        self.compare_checksums = compare;
        self
    }

    /// Leave out anything under a `CVS/` directory.
    pub fn with_ignore_vcs_files(mut self, ignore: bool) -> Self {
        self.filter.set_ignore_vcs_files(ignore);
        self
    }

    /// Replace the exclusion patterns. Each is a regular expression matched
    /// against the whole fully-qualified entry name.
    pub fn with_exclusion_patterns<I, S>(mut self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.filter = ExclusionFilter::new(patterns, self.filter.ignore_vcs_files())?;
        Ok(self)
    }

    pub fn ignore_vcs_files(&self) -> bool {
        self.filter.ignore_vcs_files()
    }

    pub fn filter(&self) -> &ExclusionFilter {
        &self.filter
    }
}
