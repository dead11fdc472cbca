//! Payload bundle shipped to the remote host alongside the environment
//!
//! INVARIANT: entry paths are unique. A failed add leaves the bundle unchanged.

use std::fs;
use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::PayloadError;

/// Default mode for payload files
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// A single named file in the bundle
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayloadFile {
    /// Logical path relative to the payload root
    pub path: String,
    /// Unix permission bits applied when materialised
    pub mode: u32,
    /// File contents
    pub contents: Vec<u8>,
}

/// Ordered set of named files, keyed by path
#[derive(Clone, Debug, Default)]
pub struct Payload {
    files: IndexMap<String, PayloadFile>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain `reader` fully, then register its contents under `path`.
    ///
    /// Nothing is added if reading fails or the name is taken.
    pub fn add_reader<R: Read>(&mut self, path: impl Into<String>, reader: R) -> Result<(), PayloadError> {
        self.add_reader_with_mode(path, reader, DEFAULT_FILE_MODE)
    }

    pub fn add_reader_with_mode<R: Read>(
        &mut self,
        path: impl Into<String>,
        mut reader: R,
        mode: u32,
    ) -> Result<(), PayloadError> {
        let path = path.into();
        self.ensure_vacant(&path)?;

        let mut contents = Vec::new();
        reader
            .read_to_end(&mut contents)
            .map_err(|source| PayloadError::Read {
                path: path.clone(),
                source,
            })?;

        self.push(path, mode, contents);
        Ok(())
    }

    pub fn add_bytes(&mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) -> Result<(), PayloadError> {
        self.add_bytes_with_mode(path, contents, DEFAULT_FILE_MODE)
    }

    pub fn add_bytes_with_mode(
        &mut self,
        path: impl Into<String>,
        contents: impl Into<Vec<u8>>,
        mode: u32,
    ) -> Result<(), PayloadError> {
        let path = path.into();
        self.ensure_vacant(&path)?;
        self.push(path, mode, contents.into());
        Ok(())
    }

    pub fn add_string(&mut self, path: impl Into<String>, contents: impl Into<String>) -> Result<(), PayloadError> {
        self.add_bytes(path, contents.into().into_bytes())
    }

    pub fn get(&self, path: &str) -> Option<&PayloadFile> {
        self.files.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Files in the order they were added
    pub fn files(&self) -> impl Iterator<Item = &PayloadFile> {
        self.files.values()
    }

    /// Write every file under `dir`, creating parent directories as needed.
    ///
    /// Modes are applied on Unix only.
    pub fn write_to_dir(&self, dir: &Path) -> Result<(), PayloadError> {
        for file in self.files.values() {
            let target = dir.join(&file.path);
            let write_err = |source| PayloadError::Write {
                path: target.display().to_string(),
                source,
            };

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
            fs::write(&target, &file.contents).map_err(write_err)?;
            set_mode(&target, file.mode).map_err(write_err)?;

            debug!(path = %target.display(), bytes = file.contents.len(), "Wrote payload file");
        }
        Ok(())
    }

    fn ensure_vacant(&self, path: &str) -> Result<(), PayloadError> {
        if self.contains(path) {
            return Err(PayloadError::DuplicateEntry {
                path: path.to_string(),
            });
        }
        Ok(())
    }

    fn push(&mut self, path: String, mode: u32, contents: Vec<u8>) {
        debug!(entry = %path, bytes = contents.len(), "Added payload entry");
        self.files
            .insert(path.clone(), PayloadFile { path, mode, contents });
    }
}

/// Equal when both hold the same files in the same order.
impl PartialEq for Payload {
    fn eq(&self, other: &Self) -> bool {
        self.files.values().eq(other.files.values())
    }
}

impl Eq for Payload {}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> std::io::Result<()> {
    Ok(())
}
