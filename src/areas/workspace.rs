use crate::artifacts::core::{StoreError, StoreResult};
use bytes::Bytes;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Name of the repository metadata directory, never part of a snapshot
pub const METADATA_DIR: &str = ".git";

/// What a directory child is, without following symlinks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    Special,
}

#[derive(Debug, Clone)]
pub struct WorkspaceEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Direct children of `dir_path`, sorted byte-wise by name
    ///
    /// The metadata directory is left out. Fails when `dir_path` is missing or
    /// is not a directory.
    pub fn list_dir(&self, dir_path: &Path) -> StoreResult<Vec<WorkspaceEntry>> {
        let metadata =
            std::fs::metadata(dir_path).map_err(|err| StoreError::io(dir_path, err))?;
        if !metadata.is_dir() {
            return Err(StoreError::io(
                dir_path,
                io::Error::from(io::ErrorKind::NotADirectory),
            ));
        }

        WalkDir::new(dir_path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.file_name() != METADATA_DIR)
            .map(|entry| {
                let entry = entry.map_err(|err| {
                    let path = err.path().unwrap_or(dir_path).to_path_buf();
                    StoreError::io(path, err.into())
                })?;

                let name = entry
                    .file_name()
                    .to_str()
                    .ok_or_else(|| {
                        StoreError::InvalidEntryName(entry.file_name().to_string_lossy().into())
                    })?
                    .to_string();

                let file_type = entry.file_type();
                let kind = if file_type.is_symlink() {
                    EntryKind::Symlink
                } else if file_type.is_dir() {
                    EntryKind::Directory
                } else if file_type.is_file() {
                    EntryKind::File
                } else {
                    EntryKind::Special
                };

                Ok(WorkspaceEntry {
                    name,
                    path: entry.into_path(),
                    kind,
                })
            })
            .collect()
    }

    pub fn read_file(&self, file_path: &Path) -> StoreResult<Bytes> {
        let file_path = self.path.join(file_path);

        std::fs::read(&file_path)
            .map(Bytes::from)
            .map_err(|err| StoreError::io(file_path, err))
    }
}
