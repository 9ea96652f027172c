// src/output.rs
use std::fmt::Write as _;
use std::path::Path;

use crate::error::{ReportError, Result};
use crate::report::ReportRow;

const TITLE: &str = "File Report";
const STYLE: &str = "table, th, td { border: 1px solid black; }";

/// A rendered HTML document, ready to be persisted.
#[derive(Debug)]
pub struct HtmlReport {
    html: String,
}

impl HtmlReport {
    /// The serialized document.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Write the document to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.html).map_err(|source| ReportError::WriteReport {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Render the aggregated rows as a static HTML5 document: a fixed head and
/// one bordered table, with Count and Total Size right-aligned.
pub fn render(rows: &[ReportRow]) -> HtmlReport {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html>\n");
    html.push_str("<head>\n");
    let _ = writeln!(html, "  <title>{}</title>", escape(TITLE));
    let _ = writeln!(html, "  <style>{STYLE}</style>");
    html.push_str("</head>\n");
    html.push_str("<body>\n");
    html.push_str("  <table>\n");
    html.push_str("    <thead>\n");
    html.push_str("      <tr><th>Type</th><th>Count</th><th>Total Size</th></tr>\n");
    html.push_str("    </thead>\n");
    html.push_str("    <tbody>\n");
    for row in rows {
        let _ = writeln!(
            html,
            "      <tr><td>{}</td><td align=\"right\">{}</td><td align=\"right\">{}</td></tr>",
            escape(&row.file_type),
            row.count,
            escape(&row.total_size),
        );
    }
    html.push_str("    </tbody>\n");
    html.push_str("  </table>\n");
    html.push_str("</body>\n");
    html.push_str("</html>\n");

    HtmlReport { html }
}

/// Escape text node content. Attribute values never carry user data here.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
