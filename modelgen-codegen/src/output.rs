//! Output collaborators.
//!
//! File layout is owned by the [`PathResolver`] collaborator, and the
//! actual writes by the [`FileWriter`] collaborator; the emission core
//! only ever sees these opaque interfaces.

use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// One rendered file ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Resolved output location.
    pub path: PathBuf,
    /// Newline-terminated file content.
    pub content: String,
}

/// Maps a logical (sub-folder, file-name) pair to a concrete location.
pub trait PathResolver {
    fn resolve(&self, sub_folder: &str, file_name: &str) -> PathBuf;
}

/// Resolves paths under a fixed output root.
#[derive(Debug, Clone)]
pub struct OutputRoot {
    root: PathBuf,
}

impl OutputRoot {
    /// Create a resolver rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl PathResolver for OutputRoot {
    fn resolve(&self, sub_folder: &str, file_name: &str) -> PathBuf {
        if sub_folder.is_empty() {
            self.root.join(file_name)
        } else {
            self.root.join(sub_folder).join(file_name)
        }
    }
}

/// Writes rendered files. One write per artifact; a failure aborts the run.
pub trait FileWriter {
    fn write(&mut self, file: &GeneratedFile) -> Result<()>;
}

/// Writes to the file system, creating parent directories as needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskWriter;

impl FileWriter for DiskWriter {
    fn write(&mut self, file: &GeneratedFile) -> Result<()> {
        if let Some(parent) = file.path.parent() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&file.path, &file.content)
            .wrap_err_with(|| format!("failed to write {}", file.path.display()))
    }
}

/// Collects writes in memory, for previews and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    files: Vec<GeneratedFile>,
}

impl MemoryWriter {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Files written so far, in write order.
    pub fn files(&self) -> &[GeneratedFile] {
        &self.files
    }

    /// Content of the file at `path`, if written.
    pub fn get(&self, path: &Path) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.path == path)
            .map(|f| f.content.as_str())
    }
}

impl FileWriter for MemoryWriter {
    fn write(&mut self, file: &GeneratedFile) -> Result<()> {
        self.files.push(file.clone());
        Ok(())
    }
}
