use super::backend::{Entry, StorageBackend};
use crate::error::{DaimonError, Result};
use crate::paths;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Cursor, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

const MEMORY_ROOT: &str = "memory://";

type NoteMap = Rc<RefCell<BTreeMap<String, Vec<u8>>>>;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since daimon is single-threaded.
/// Notes are shared behind an `Rc` so that append handles can outlive the
/// borrow that created them. Clones share the same state.
#[derive(Clone, Default)]
pub struct MemBackend {
    notes: NoteMap,
    projects: Rc<RefCell<BTreeSet<String>>>,
    simulate_write_error: Rc<RefCell<bool>>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    fn root(&self) -> &Path {
        Path::new(MEMORY_ROOT)
    }

    fn check_writable(&self, key: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(DaimonError::Io {
                path: paths::note_key_to_path(self.root(), key),
                source: io::Error::other("simulated write error"),
            });
        }
        Ok(())
    }

    fn ensure_key(&self, key: &str) {
        let mut projects = self.projects.borrow_mut();
        let mut current = key;
        while !current.is_empty() {
            projects.insert(current.to_string());
            current = paths::parent_key(current);
        }
    }

    fn project_exists(&self, key: &str) -> bool {
        key.is_empty() || self.projects.borrow().contains(key)
    }

    fn note_not_found(&self, key: &str) -> DaimonError {
        DaimonError::NotFound {
            path: paths::note_key_to_path(self.root(), key),
        }
    }
}

/// Append handle into a [`MemBackend`] note.
pub struct MemSink {
    notes: NoteMap,
    key: String,
}

impl Write for MemSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.notes
            .borrow_mut()
            .entry(self.key.clone())
            .or_default()
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    type Reader = Cursor<Vec<u8>>;
    type Writer = MemSink;

    fn resolve_path(&self, logical: &str) -> Result<PathBuf> {
        paths::resolve(self.root(), logical)
    }

    fn resolve_note_path(&self, logical: &str) -> Result<PathBuf> {
        paths::resolve_note(self.root(), logical)
    }

    fn ensure_dir(&self, project: &str) -> Result<()> {
        let key = paths::project_key(project)?;
        self.check_writable(&key)?;
        self.ensure_key(&key);
        Ok(())
    }

    fn remove_tree(&self, project: &str) -> Result<()> {
        let key = paths::project_key(project)?;
        if key.is_empty() {
            return Err(DaimonError::invalid_name(
                project,
                "refusing to remove the notes directory itself",
            ));
        }

        let nested = format!("{}/", key);
        self.projects
            .borrow_mut()
            .retain(|p| p != &key && !p.starts_with(&nested));
        self.notes
            .borrow_mut()
            .retain(|n, _| !n.starts_with(&nested));
        Ok(())
    }

    fn entries(&self, project: &str) -> Result<Vec<Entry>> {
        let key = paths::project_key(project)?;
        if !self.project_exists(&key) {
            return Err(DaimonError::NotFound {
                path: paths::key_to_path(self.root(), &key),
            });
        }

        let child_name = |path: &str| -> Option<String> {
            if paths::parent_key(path) != key {
                return None;
            }
            Some(paths::base_name(path).to_string())
        };

        let mut entries: Vec<Entry> = self
            .notes
            .borrow()
            .keys()
            .filter_map(|n| child_name(n))
            .map(Entry::note)
            .collect();
        entries.extend(
            self.projects
                .borrow()
                .iter()
                .filter_map(|p| child_name(p))
                .map(Entry::project),
        );

        entries.sort_by(|a, b| a.name.cmp(&b.name).then(a.kind.cmp(&b.kind)));
        Ok(entries)
    }

    fn open_for_read(&self, note: &str) -> Result<Self::Reader> {
        let key = paths::note_key(note)?;
        let notes = self.notes.borrow();
        let content = notes.get(&key).ok_or_else(|| self.note_not_found(&key))?;
        Ok(Cursor::new(content.clone()))
    }

    fn open_for_append(&self, note: &str) -> Result<Self::Writer> {
        let key = paths::note_key(note)?;
        self.check_writable(&key)?;
        self.ensure_key(paths::parent_key(&key));
        self.notes.borrow_mut().entry(key.clone()).or_default();
        Ok(MemSink {
            notes: Rc::clone(&self.notes),
            key,
        })
    }

    fn rename(&self, old: &str, new: &str) -> Result<()> {
        let old_key = paths::note_key(old)?;
        let new_key = paths::note_key(new)?;
        self.check_writable(&new_key)?;

        let content = self
            .notes
            .borrow_mut()
            .remove(&old_key)
            .ok_or_else(|| self.note_not_found(&old_key))?;
        self.ensure_key(paths::parent_key(&new_key));
        self.notes.borrow_mut().insert(new_key, content);
        Ok(())
    }

    fn remove(&self, note: &str) -> Result<()> {
        let key = paths::note_key(note)?;
        self.notes
            .borrow_mut()
            .remove(&key)
            .map(|_| ())
            .ok_or_else(|| self.note_not_found(&key))
    }
}
