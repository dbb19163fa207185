use super::backend::{Entry, StorageBackend};
use crate::error::{DaimonError, Result};
use crate::paths;
use std::fs::{self, DirBuilder, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Permission bits for project directories (owner rwx, group rx).
pub const DIR_MODE: u32 = 0o750;

/// Permission bits for newly created notes (owner rw, group r).
pub const NOTE_MODE: u32 = 0o640;

#[derive(Debug, Clone)]
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn mkdir_all(&self, path: &Path) -> Result<()> {
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(DIR_MODE);
        }
        builder.create(path).map_err(|e| DaimonError::io(path, e))
    }

    fn ensure_key(&self, key: &str) -> Result<()> {
        let path = paths::key_to_path(&self.root, key);
        debug!(path = %path.display(), "ensuring project directory");
        self.mkdir_all(&path)
    }
}

impl StorageBackend for FsBackend {
    type Reader = File;
    type Writer = File;

    fn resolve_path(&self, logical: &str) -> Result<PathBuf> {
        paths::resolve(&self.root, logical)
    }

    fn resolve_note_path(&self, logical: &str) -> Result<PathBuf> {
        paths::resolve_note(&self.root, logical)
    }

    fn ensure_dir(&self, project: &str) -> Result<()> {
        let key = paths::project_key(project)?;
        self.ensure_key(&key)
    }

    fn remove_tree(&self, project: &str) -> Result<()> {
        let key = paths::project_key(project)?;
        if key.is_empty() {
            return Err(DaimonError::invalid_name(
                project,
                "refusing to remove the notes directory itself",
            ));
        }

        let path = paths::key_to_path(&self.root, &key);
        match fs::remove_dir_all(&path) {
            Ok(()) => {
                info!(path = %path.display(), "removed project");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "project already absent");
                Ok(())
            }
            Err(e) => Err(DaimonError::io(path, e)),
        }
    }

    fn entries(&self, project: &str) -> Result<Vec<Entry>> {
        let dir = self.resolve_path(project)?;
        let read_dir = fs::read_dir(&dir).map_err(|e| DaimonError::io(&dir, e))?;

        let mut entries = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = dir_entry.map_err(|e| DaimonError::io(&dir, e))?;
            let file_type = dir_entry
                .file_type()
                .map_err(|e| DaimonError::io(dir_entry.path(), e))?;
            let Ok(name) = dir_entry.file_name().into_string() else {
                debug!(path = %dir_entry.path().display(), "skipping non UTF-8 entry");
                continue;
            };

            if file_type.is_dir() {
                entries.push(Entry::project(name));
            } else if let Some(stem) = paths::strip_note_suffix(&name) {
                entries.push(Entry::note(stem));
            }
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name).then(a.kind.cmp(&b.kind)));
        Ok(entries)
    }

    fn open_for_read(&self, note: &str) -> Result<File> {
        let path = self.resolve_note_path(note)?;
        debug!(path = %path.display(), "opening note for read");
        File::open(&path).map_err(|e| DaimonError::io(path, e))
    }

    fn open_for_append(&self, note: &str) -> Result<File> {
        let key = paths::note_key(note)?;
        self.ensure_key(paths::parent_key(&key))?;

        let path = paths::note_key_to_path(&self.root, &key);
        debug!(path = %path.display(), "opening note for append");

        let mut options = OpenOptions::new();
        options.append(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(NOTE_MODE);
        }
        options.open(&path).map_err(|e| DaimonError::io(path, e))
    }

    fn rename(&self, old: &str, new: &str) -> Result<()> {
        let from = self.resolve_note_path(old)?;
        let new_key = paths::note_key(new)?;
        let to = paths::note_key_to_path(&self.root, &new_key);

        // A missing source must not leave a freshly created project behind.
        if !from.is_file() {
            return Err(DaimonError::NotFound { path: from });
        }
        self.ensure_key(paths::parent_key(&new_key))?;

        fs::rename(&from, &to).map_err(|e| DaimonError::io(&from, e))?;
        info!(from = %from.display(), to = %to.display(), "renamed note");
        Ok(())
    }

    fn remove(&self, note: &str) -> Result<()> {
        let path = self.resolve_note_path(note)?;
        fs::remove_file(&path).map_err(|e| DaimonError::io(&path, e))?;
        info!(path = %path.display(), "removed note");
        Ok(())
    }
}
