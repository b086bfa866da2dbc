use chrono::{DateTime, Local};
use std::io::{self, Write};

use super::{escape, labels};
use crate::diff::DifferenceResult;

const STYLE: &str = r#"<style type="text/css">
 body, p {
 font-family: verdana,arial,helvetica;
 font-size: 80%;
 color:#000000;
 }
 .diffs {
 font-family: verdana,arial,helvetica;
 font-size: 80%;
 font-weight: bold;
 text-align:left;
 background:#a6caf0;
 }
 tr, td {
 font-family: verdana,arial,helvetica;
 font-size: 80%;
 background:#eeeee0;
 }
</style>"#;

/// Styled HTML page stamped with the current local time.
pub fn render<W: Write>(result: &DifferenceResult, out: &mut W) -> io::Result<()> {
    render_at(result, Local::now(), out)
}

pub fn render_at<W: Write>(
    result: &DifferenceResult,
    generated_at: DateTime<Local>,
    out: &mut W,
) -> io::Result<()> {
    let (label1, label2) = labels(result);

    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, r#"<meta http-equiv="Content-Type" content="text/html; charset=UTF-8">"#)?;
    writeln!(out, "<title>File differences</title>")?;
    writeln!(out, "{STYLE}")?;
    writeln!(out, "</head>")?;
    writeln!(
        out,
        r##"<body text="#000000" vlink="#000000" alink="#000000" link="#000000">"##
    )?;

    writeln!(out, "<p>First file: {}<br>", escape(label1))?;
    writeln!(out, "Second file: {}</p>", escape(label2))?;

    write_section(out, "Added", result.added().keys())?;
    write_section(out, "Removed", result.removed().keys())?;
    write_section(out, "Changed", result.changed().keys())?;

    writeln!(out, "<hr>")?;
    writeln!(
        out,
        "<p>Generated at {}</p>",
        generated_at.format("%Y-%m-%d %H:%M:%S %:z")
    )?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    out.flush()
}

fn write_section<'a, W: Write>(
    out: &mut W,
    title: &str,
    names: impl ExactSizeIterator<Item = &'a String>,
) -> io::Result<()> {
    writeln!(
        out,
        r#"<table cellspacing="1" cellpadding="3" width="100%" border="0">"#
    )?;
    writeln!(
        out,
        r#"<tr><td class="diffs" colspan="2">{} ({} entries)</td></tr>"#,
        title,
        names.len()
    )?;
    writeln!(out, r#"<tr><td width="20"></td><td>"#)?;
    if names.len() > 0 {
        writeln!(out, "<ul>")?;
        for name in names {
            writeln!(out, "<li>{}</li>", escape(name))?;
        }
        writeln!(out, "</ul>")?;
    }
    writeln!(out, "</td></tr>")?;
    writeln!(out, "</table>")
}
