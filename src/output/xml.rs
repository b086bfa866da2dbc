use std::io::{self, Write};

use super::{escape, labels};
use crate::diff::DifferenceResult;

/// XML document rooted at `zipdiff`, one element per difference.
pub fn render<W: Write>(result: &DifferenceResult, out: &mut W) -> io::Result<()> {
    let (label1, label2) = labels(result);

    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#)?;
    writeln!(
        out,
        r#"<zipdiff filename1="{}" filename2="{}">"#,
        escape(label1),
        escape(label2)
    )?;

    if result.has_differences() {
        writeln!(out, "  <differences>")?;
        write_elements(out, "added", result.added().keys())?;
        write_elements(out, "removed", result.removed().keys())?;
        write_elements(out, "changed", result.changed().keys())?;
        writeln!(out, "  </differences>")?;
    } else {
        writeln!(out, "  <differences/>")?;
    }

    writeln!(out, "</zipdiff>")?;
    out.flush()
}

fn write_elements<'a, W: Write>(
    out: &mut W,
    tag: &str,
    names: impl Iterator<Item = &'a String>,
) -> io::Result<()> {
    for name in names {
        writeln!(out, "    <{tag}>{}</{tag}>", escape(name))?;
    }
    Ok(())
}
