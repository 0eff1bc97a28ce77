use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SourceError;

/// Whether an entry may contain further entries.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Directory,
    File,
}

/// One direct entry of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Label carried by every node of a filesystem tree.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FsEntry {
    /// Full path of the entry, as produced by the source.
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl FsEntry {
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Last component of the path, if it is valid unicode.
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|name| name.to_str())
    }
}

impl From<SourceEntry> for FsEntry {
    fn from(entry: SourceEntry) -> Self {
        Self {
            path: entry.path,
            kind: entry.kind,
        }
    }
}

impl fmt::Display for FsEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Lazily enumerated entries of one directory. Each item can fail on its own.
pub type Entries<'a> = Box<dyn Iterator<Item = Result<SourceEntry, SourceError>> + 'a>;

/// A hierarchical source that can list the direct entries of a composite path.
pub trait TreeSource {
    fn read_entries(&self, path: &Path) -> Result<Entries<'_>, SourceError>;
}

/// [`TreeSource`] backed by `std::fs::read_dir`.
///
/// Symlinks are followed when classifying entries, so a link to a directory is a
/// [`EntryKind::Directory`]. A dangling link is a [`EntryKind::File`]. Cycles are not detected.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSource;

impl TreeSource for FsSource {
    fn read_entries(&self, path: &Path) -> Result<Entries<'_>, SourceError> {
        let dir = fs::read_dir(path).map_err(|e| SourceError::from_io(path, e))?;
        let parent = path.to_path_buf();
        Ok(Box::new(dir.map(move |entry| -> Result<SourceEntry, SourceError> {
            let entry = entry.map_err(|e| SourceError::from_io(&parent, e))?;
            let entry_path = entry.path();
            let file_type = entry
                .file_type()
                .map_err(|e| SourceError::from_io(&entry_path, e))?;
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_symlink() {
                match fs::metadata(&entry_path) {
                    Ok(meta) if meta.is_dir() => EntryKind::Directory,
                    _ => EntryKind::File,
                }
            } else {
                EntryKind::File
            };
            Ok(SourceEntry {
                path: entry_path,
                kind,
            })
        })))
    }
}
