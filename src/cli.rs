use clap::Parser;

use crate::diff::ComparisonConfig;
use crate::error::Result;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "zipdiff")]
#[command(version)]
#[command(about = "Compare the entries of two zip/jar/war/ear archives", long_about = None)]
#[command(after_help = "Examples:\n  \
  zipdiff old.jar new.jar                     text report on stdout\n  \
  zipdiff old.war new.war -o report.html      HTML report\n  \
  zipdiff a.zip b.zip -x '.*\\.log' --ignore-timestamps\n  \
  zipdiff https://example.com/v1.zip v2.zip   compare against a remote archive")]
pub struct Cli {
    /// First archive: path or HTTP URL
    #[arg(value_name = "FILE1")]
    pub file1: String,

    /// Second archive: path or HTTP URL
    #[arg(value_name = "FILE2")]
    pub file2: String,

    /// Write the report to FILE (.html or .xml select the format)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<String>,

    /// Report format, overriding the output file suffix
    #[arg(short = 'f', long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Do not compare modification times
    #[arg(long)]
    pub ignore_timestamps: bool,

    /// Leave out entries under CVS/ directories
    #[arg(long = "ignore-cvs-files")]
    pub ignore_cvs_files: bool,

    /// Do not compare CRC-32 checksums
    #[arg(long = "no-compare-crc")]
    pub no_compare_crc: bool,

    /// Exclude entries whose full name matches REGEX (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "REGEX")]
    pub exclude: Vec<String>,

    /// Exit with status 1 when the archives differ
    #[arg(long)]
    pub exit_with_status: bool,

    /// Give up after SECS seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl Cli {
    /// Build the comparison settings, compiling the exclusion patterns.
    pub fn comparison_config(&self) -> Result<ComparisonConfig> {
        ComparisonConfig::new()
            .with_ignore_timestamps(self.ignore_timestamps)
            .with_compare_checksums(!self.no_compare_crc)
            .with_ignore_vcs_files(self.ignore_cvs_files)
            .with_exclusion_patterns(&self.exclude)
    }

    /// Explicit `--format` first, then the output suffix, else text.
    pub fn output_format(&self) -> OutputFormat {
        match (self.format, &self.output) {
            (Some(format), _) => format,
            (None, Some(output)) => OutputFormat::from_destination(output),
            (None, None) => OutputFormat::Text,
        }
    }
}
