use regex::Regex;
use std::collections::BTreeSet;
use tracing::debug;

use crate::error::{DiffError, Result};

/// Path segment identifying CVS bookkeeping entries.
pub const VCS_SEGMENT: &str = "CVS/";

/// Decides which entry paths take no part in a comparison.
///
/// An entry is excluded when version-control filtering is on and either its
/// enclosing prefix or its name contains `CVS/`, or when its whole name
/// matches one of the exclusion patterns.
#[derive(Debug, Clone, Default)]
pub struct ExclusionFilter {
    ignore_vcs_files: bool,
    patterns: Vec<String>,
    matcher: Option<Regex>,
}

impl ExclusionFilter {
    /// Compile `patterns` into one anchored alternation.
    ///
    /// Each pattern is checked on its own first so a failure names the
    /// offending pattern rather than the combined expression.
    pub fn new<I, S>(patterns: I, ignore_vcs_files: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<String> = patterns
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        for pattern in &patterns {
            Regex::new(pattern).map_err(|e| DiffError::InvalidPattern {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })?;
        }

        let matcher = if patterns.is_empty() {
            None
        } else {
            let alternation = patterns
                .iter()
                .map(|p| format!("({p})"))
                .collect::<Vec<_>>()
                .join("|");
            let regex = format!("^(?:{alternation})$");
            debug!(%regex, "compiled exclusion patterns");
            Some(Regex::new(&regex).map_err(|e| DiffError::InvalidPattern {
                pattern: alternation,
                reason: e.to_string(),
            })?)
        };

        Ok(Self {
            ignore_vcs_files,
            patterns,
            matcher,
        })
    }

    pub fn ignore_vcs_files(&self) -> bool {
        self.ignore_vcs_files
    }

    pub(crate) fn set_ignore_vcs_files(&mut self, ignore: bool) {
        self.ignore_vcs_files = ignore;
    }

    /// The distinct source patterns, sorted.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn should_exclude(&self, prefix: &str, name: &str) -> bool {
        if self.ignore_vcs_files && (prefix.contains(VCS_SEGMENT) || name.contains(VCS_SEGMENT)) {
            return true;
        }

        match &self.matcher {
            Some(matcher) if matcher.is_match(name) => {
                debug!(name, "name matches an exclusion pattern");
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_excludes_nothing() {
        let filter = ExclusionFilter::default();
        assert!(!filter.should_exclude("", "CVS/Root"));
        assert!(!filter.should_exclude("", "anything.txt"));

        let filter = ExclusionFilter::new(Vec::<String>::new(), false).unwrap();
        assert!(!filter.should_exclude("", "anything.txt"));
    }

    #[test]
    fn test_vcs_segment_in_name_or_prefix() {
        let filter = ExclusionFilter::new(Vec::<String>::new(), true).unwrap();
        assert!(filter.should_exclude("", "CVS/Root"));
        assert!(filter.should_exclude("", "src/CVS/Entries"));
        assert!(filter.should_exclude("lib/CVS/", "x.jar"));
        assert!(!filter.should_exclude("", "CVS"));
        assert!(!filter.should_exclude("", "src/Main.java"));
    }

    #[test]
    fn test_patterns_match_whole_name() {
        let filter = ExclusionFilter::new([r".*\.log", "META-INF/MANIFEST.MF"], false).unwrap();
        assert!(filter.should_exclude("", "build.log"));
        assert!(filter.should_exclude("", "logs/server.log"));
        assert!(filter.should_exclude("", "META-INF/MANIFEST.MF"));

        // Substring hits do not count
        assert!(!filter.should_exclude("", "build.log.bak"));
        assert!(!filter.should_exclude("", "app.jar/META-INF/MANIFEST.MF"));
    }

    #[test]
    fn test_alternation_does_not_leak_anchors() {
        // Without grouping, "a|b" anchored naively would become "^a|b$"
        let filter = ExclusionFilter::new(["a|b"], false).unwrap();
        assert!(filter.should_exclude("", "a"));
        assert!(filter.should_exclude("", "b"));
        assert!(!filter.should_exclude("", "ab"));
        assert!(!filter.should_exclude("", "xb"));
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = ExclusionFilter::new(["ok.*", "broken("], false).unwrap_err();
        match err {
            DiffError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "broken("),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_patterns_collapse() {
        let filter = ExclusionFilter::new(["b", "a", "b"], false).unwrap();
        assert_eq!(filter.patterns(), ["a".to_string(), "b".to_string()]);
    }
}
