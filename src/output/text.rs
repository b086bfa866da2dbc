use std::io::{self, Write};

use super::labels;
use crate::diff::DifferenceResult;

/// Plain-text summary: one section per partition, then the total.
pub fn render<W: Write>(result: &DifferenceResult, out: &mut W) -> io::Result<()> {
    let (_, label2) = labels(result);

    writeln!(out, "{} added to {}", files_were(result.added().len()), label2)?;
    for name in result.added().keys() {
        writeln!(out, "\t[added] {}", name)?;
    }

    writeln!(out, "{} removed from {}", files_were(result.removed().len()), label2)?;
    for name in result.removed().keys() {
        writeln!(out, "\t[removed] {}", name)?;
    }

    match result.changed().len() {
        1 => writeln!(out, "1 file changed")?,
        n => writeln!(out, "{} files changed", n)?,
    }
    for (name, (first, second)) in result.changed() {
        writeln!(
            out,
            "\t[changed] {}  ( size {} : {} )",
            name, first.uncompressed_size, second.uncompressed_size
        )?;
    }

    writeln!(out, "Total differences: {}", result.total_differences())?;
    out.flush()
}

fn files_were(count: usize) -> String {
    if count == 1 {
        "1 file was".to_string()
    } else {
        format!("{} files were", count)
    }
}
