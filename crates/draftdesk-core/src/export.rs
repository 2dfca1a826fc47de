//! Saving a generated result as a plain-text file or a Word-readable document.

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::sanitize::sanitize_export_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// UTF-8 text, as displayed.
    Txt,
    /// HTML wrapped in Office namespaces; Word opens it as a document.
    Doc,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Doc => "doc",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Txt => "text/plain",
            ExportFormat::Doc => "application/msword",
        }
    }

    /// File contents for `text` in this format.
    pub fn render(self, text: &str) -> String {
        match self {
            ExportFormat::Txt => text.to_string(),
            ExportFormat::Doc => word_html(text),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "txt" | "text" => Ok(ExportFormat::Txt),
            "doc" | "word" => Ok(ExportFormat::Doc),
            other => anyhow::bail!("unknown export format {:?} (expected txt or doc)", other),
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn word_html(text: &str) -> String {
    let body = escape_html(text)
        .replace("\r\n", "\n")
        .replace('\n', "<br>");
    format!(
        "<html xmlns:o='urn:schemas-microsoft-com:office:office' \
xmlns:w='urn:schemas-microsoft-com:office:word' \
xmlns='http://www.w3.org/TR/REC-html40'>\n\
<head><meta charset='utf-8'></head>\n\
<body>{}</body>\n\
</html>\n",
        body
    )
}

/// Path the export of `basename` in `format` is written to inside `dir`.
pub fn export_path(dir: &Path, basename: &str, format: ExportFormat) -> PathBuf {
    let ext = format.extension();
    let stem = sanitize_export_name(basename, ext.len() + 1);
    dir.join(format!("{}.{}", stem, ext))
}

/// Writes `text` to `<dir>/<basename>.<ext>`, replacing any earlier export.
pub fn write_export(dir: &Path, basename: &str, format: ExportFormat, text: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let path = export_path(dir, basename, format);
    fs::write(&path, format.render(text)).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), format = %format, "exported result");
    Ok(path)
}
