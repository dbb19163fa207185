//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. Both the
//! one-shot CLI and the REPL go through it, so a command behaves the same no
//! matter how it was typed.
//!
//! The facade:
//! - **Dispatches** to the matching `commands::*` function
//! - **Carries the editor** chosen at startup so callers don't have to
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no business logic. `DaimonApi<S>` is generic
//! over [`StorageBackend`]: production uses `DaimonApi<FsBackend>`, tests can
//! use `DaimonApi<MemBackend>`.

use crate::commands::{self, list::Walk};
use crate::error::Result;
use crate::paths::ROOT;
use crate::store::StorageBackend;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct DaimonApi<S: StorageBackend> {
    store: S,
    editor: String,
}

impl<S: StorageBackend> DaimonApi<S> {
    pub fn new(store: S, editor: impl Into<String>) -> Self {
        Self {
            store,
            editor: editor.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn editor(&self) -> &str {
        &self.editor
    }

    pub fn create_note(&self, name: &str, body: &str) -> Result<CmdResult> {
        commands::create::run(&self.store, name, body)
    }

    pub fn read_note(&self, name: &str) -> Result<CmdResult> {
        commands::view::run(&self.store, name)
    }

    pub fn edit_note(&self, name: &str) -> Result<CmdResult> {
        commands::edit::run(&self.store, &self.editor, name)
    }

    pub fn rename_note(&self, old: &str, new: &str) -> Result<CmdResult> {
        commands::rename::run(&self.store, old, new)
    }

    pub fn delete_note(&self, name: &str) -> Result<CmdResult> {
        commands::delete::run(&self.store, name)
    }

    pub fn create_project(&self, name: &str) -> Result<CmdResult> {
        commands::project::create(&self.store, name)
    }

    pub fn delete_project(&self, name: &str) -> Result<CmdResult> {
        commands::project::delete(&self.store, name)
    }

    /// Notes directly inside `project`, or inside the root when `None`.
    pub fn list_notes(&self, project: Option<&str>) -> Result<CmdResult> {
        commands::list::notes(&self.store, project.unwrap_or(ROOT))
    }

    /// Sub-projects directly inside `project`, or inside the root when `None`.
    pub fn list_projects(&self, project: Option<&str>) -> Result<CmdResult> {
        commands::list::projects(&self.store, project.unwrap_or(ROOT))
    }

    pub fn list_all_notes(&self) -> Result<CmdResult> {
        commands::list::all_notes(&self.store)
    }

    pub fn list_all_projects(&self) -> Result<CmdResult> {
        commands::list::all_projects(&self.store)
    }

    pub fn list_all_entries(&self) -> Result<CmdResult> {
        commands::list::all_entries(&self.store)
    }

    /// Raw traversal, used by the REPL completer.
    pub fn walk(&self, policy: Walk) -> Result<Vec<String>> {
        commands::list::walk(&self.store, policy)
    }

    pub fn line(&self) -> CmdResult {
        commands::line::run()
    }
}
