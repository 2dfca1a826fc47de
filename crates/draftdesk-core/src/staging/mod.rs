//! Attachment staging list.
//!
//! Holds the files a user has picked for one pending submission. Entries are
//! deduplicated by (name, size) and kept in insertion order; the rendered
//! listing is recomputed after every mutation so it never shows stale rows.

mod display;

pub use display::{StagingDisplay, StagingRow, EMPTY_PLACEHOLDER};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Identity of a staged file. Two files with equal name and size are the same
/// attachment as far as staging is concerned; contents are never compared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileKey {
    pub name: String,
    pub size: u64,
}

/// One file attached but not yet submitted. Holds the path, not the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    name: String,
    size: u64,
    path: PathBuf,
}

impl StagedFile {
    pub fn new(name: impl Into<String>, size: u64, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            size,
            path: path.into(),
        }
    }

    /// Stats `path` and builds a candidate named after its final component.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let meta = std::fs::metadata(path).with_context(|| format!("stat {}", path.display()))?;
        if !meta.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .with_context(|| format!("{} has no file name", path.display()))?;
        Ok(Self::new(name, meta.len(), path))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn key(&self) -> FileKey {
        FileKey {
            name: self.name.clone(),
            size: self.size,
        }
    }

    fn same_as(&self, other: &StagedFile) -> bool {
        self.name == other.name && self.size == other.size
    }
}

/// Ordered, duplicate-free set of files pending submission for one form.
#[derive(Debug, Clone)]
pub struct StagingList {
    files: Vec<StagedFile>,
    display: StagingDisplay,
}

impl Default for StagingList {
    fn default() -> Self {
        Self::new()
    }
}

impl StagingList {
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            display: StagingDisplay::Placeholder(EMPTY_PLACEHOLDER),
        }
    }

    /// Appends each candidate in order unless an entry with the same
    /// (name, size) is already staged. Duplicates are skipped silently.
    /// Returns how many candidates were appended.
    pub fn add<I>(&mut self, candidates: I) -> usize
    where
        I: IntoIterator<Item = StagedFile>,
    {
        let mut added = 0;
        for file in candidates {
            if self.files.iter().any(|f| f.same_as(&file)) {
                tracing::debug!(name = %file.name, size = file.size, "skipping duplicate attachment");
                continue;
            }
            tracing::debug!(name = %file.name, size = file.size, "staged attachment");
            self.files.push(file);
            added += 1;
        }
        self.render();
        added
    }

    /// Removes the entry at `index`, shifting later entries left.
    /// Out-of-range indices leave the list untouched and return `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<StagedFile> {
        if index >= self.files.len() {
            tracing::debug!(index, len = self.files.len(), "remove_at out of range");
            return None;
        }
        let removed = self.files.remove(index);
        tracing::debug!(name = %removed.name, index, "unstaged attachment");
        self.render();
        Some(removed)
    }

    /// Removes the entry identified by `key`, wherever it currently sits.
    pub fn remove(&mut self, key: &FileKey) -> Option<StagedFile> {
        let index = self.position(key)?;
        self.remove_at(index)
    }

    pub fn clear(&mut self) {
        self.files.clear();
        self.render();
    }

    /// Empties the list and hands the staged files to the caller.
    pub fn take_all(&mut self) -> Vec<StagedFile> {
        let files = std::mem::take(&mut self.files);
        self.render();
        files
    }

    /// Rebuilds the cached display from the current contents.
    pub fn render(&mut self) -> &StagingDisplay {
        self.display = StagingDisplay::from_files(&self.files);
        &self.display
    }

    /// Display as of the last mutation.
    pub fn display(&self) -> &StagingDisplay {
        &self.display
    }

    pub fn position(&self, key: &FileKey) -> Option<usize> {
        self.files
            .iter()
            .position(|f| f.name == key.name && f.size == key.size)
    }

    pub fn contains(&self, key: &FileKey) -> bool {
        self.position(key).is_some()
    }

    pub fn files(&self) -> &[StagedFile] {
        &self.files
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StagedFile> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
