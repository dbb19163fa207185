use crate::error::{DaimonError, Result};
use std::io::{Read, Write};
use std::path::PathBuf;

/// What a directory entry is, as far as daimon is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntryKind {
    Note,
    Project,
}

/// One immediate child of a project. Note names carry no suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn note(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Note,
        }
    }

    pub fn project(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Project,
        }
    }

    pub fn is_note(&self) -> bool {
        self.kind == EntryKind::Note
    }

    pub fn is_project(&self) -> bool {
        self.kind == EntryKind::Project
    }
}

/// Abstract interface for raw note storage.
///
/// All names are logical paths and are validated by [`crate::paths`] before
/// any I/O happens. The trait handles the "how" of storage (filesystem vs
/// memory) while the command layer handles the "what".
pub trait StorageBackend {
    type Reader: Read;
    type Writer: Write;

    // --- Resolution ---

    /// Physical location of a project (or `"."` for the root).
    fn resolve_path(&self, logical: &str) -> Result<PathBuf>;

    /// Physical location of a note, including the `.md` suffix.
    fn resolve_note_path(&self, logical: &str) -> Result<PathBuf>;

    // --- Projects ---

    /// Creates a project and any missing ancestors. Existing projects are fine.
    fn ensure_dir(&self, project: &str) -> Result<()>;

    /// Removes a project and everything below it. Missing projects are fine.
    fn remove_tree(&self, project: &str) -> Result<()>;

    /// Immediate notes and sub-projects of a project, sorted by name.
    fn entries(&self, project: &str) -> Result<Vec<Entry>>;

    // --- Notes ---

    /// Opens an existing note for reading.
    fn open_for_read(&self, note: &str) -> Result<Self::Reader>;

    /// Opens a note for appending, creating it and its parent project if needed.
    fn open_for_append(&self, note: &str) -> Result<Self::Writer>;

    /// Moves a note, creating the destination's parent project if needed.
    fn rename(&self, old: &str, new: &str) -> Result<()>;

    /// Deletes a single note.
    fn remove(&self, note: &str) -> Result<()>;

    // --- Provided ---

    /// Reads a note's full content.
    fn read_note(&self, note: &str) -> Result<Vec<u8>> {
        let mut reader = self.open_for_read(note)?;
        let mut content = Vec::new();
        reader
            .read_to_end(&mut content)
            .map_err(|e| note_io_error(self, note, e))?;
        Ok(content)
    }

    /// Appends `text` to a note and returns the number of bytes written.
    ///
    /// The handle is dropped at the end of this call on every path, including
    /// a failed write.
    fn write_append(&self, note: &str, text: &[u8]) -> Result<usize> {
        let mut sink = self.open_for_append(note)?;
        sink.write_all(text).map_err(|e| note_io_error(self, note, e))?;
        sink.flush().map_err(|e| note_io_error(self, note, e))?;
        Ok(text.len())
    }
}

fn note_io_error<S: StorageBackend + ?Sized>(
    store: &S,
    note: &str,
    source: std::io::Error,
) -> DaimonError {
    let path = store
        .resolve_note_path(note)
        .unwrap_or_else(|_| PathBuf::from(note));
    DaimonError::io(path, source)
}
