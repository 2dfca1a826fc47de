//! Rendered view of a staging list: one row per file, or a placeholder.

use super::{FileKey, StagedFile};
use std::fmt;

/// Shown when nothing is staged.
pub const EMPTY_PLACEHOLDER: &str = "No files attached yet.";

/// One listing row. `key` is what the row's remove control sends back, so a
/// click resolves to the right file even if the list changed since rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingRow {
    pub index: usize,
    pub key: FileKey,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagingDisplay {
    Placeholder(&'static str),
    Rows(Vec<StagingRow>),
}

impl StagingDisplay {
    pub(super) fn from_files(files: &[StagedFile]) -> Self {
        if files.is_empty() {
            return StagingDisplay::Placeholder(EMPTY_PLACEHOLDER);
        }
        let rows = files
            .iter()
            .enumerate()
            .map(|(index, f)| StagingRow {
                index,
                key: f.key(),
                label: format!("📎 {}", f.name()),
            })
            .collect();
        StagingDisplay::Rows(rows)
    }

    pub fn rows(&self) -> &[StagingRow] {
        match self {
            StagingDisplay::Placeholder(_) => &[],
            StagingDisplay::Rows(rows) => rows,
        }
    }
}

impl fmt::Display for StagingDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StagingDisplay::Placeholder(msg) => write!(f, "{}", msg),
            StagingDisplay::Rows(rows) => {
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "[{}] {} ({} bytes)", row.index, row.label, row.key.size)?;
                }
                Ok(())
            }
        }
    }
}
