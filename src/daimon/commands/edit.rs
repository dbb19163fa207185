use crate::commands::{CmdMessage, CmdResult};
use crate::editor::open_in_editor;
use crate::error::{Result, ResultExt};
use crate::paths;
use crate::store::StorageBackend;
use tracing::info;

/// Opens a note in `editor` and blocks until the editor exits.
///
/// The parent project is created first so the editor can save a brand new
/// note. The note file itself is left for the editor to create.
pub fn run<S: StorageBackend>(store: &S, editor: &str, name: &str) -> Result<CmdResult> {
    let path = store
        .resolve_note_path(name)
        .context("could not open note")?;
    let key = paths::note_key(name).context("could not open note")?;
    let parent = paths::parent_key(&key);
    if !parent.is_empty() {
        store.ensure_dir(parent).context("could not open note")?;
    }

    open_in_editor(editor, &path).context("could not open note")?;
    info!(note = name, "closed editor");

    Ok(CmdResult::default().with_message(CmdMessage::info(format!("Edited: {}", name))))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::error::DaimonError;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn successful_editor_reports_edit() {
        let store = MemBackend::new();
        let result = run(&store, "true", "todo").unwrap();
        assert_eq!(result.messages, vec![CmdMessage::info("Edited: todo")]);
    }

    #[test]
    fn prepares_parent_project() {
        let store = MemBackend::new();
        run(&store, "true", "work/new-idea").unwrap();
        assert_eq!(list::projects(&store, ".").unwrap().listed, vec!["work"]);
    }

    #[test]
    fn failing_editor_is_an_error() {
        let store = MemBackend::new();
        let err = run(&store, "false", "todo").unwrap_err();
        assert!(matches!(err.root_cause(), DaimonError::Editor(_)));
    }

    #[test]
    fn invalid_name_never_reaches_the_editor() {
        let store = MemBackend::new();
        let err = run(&store, "true", "/etc/passwd").unwrap_err();
        assert!(err.is_invalid_name());
    }
}
