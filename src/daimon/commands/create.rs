use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ResultExt};
use crate::store::StorageBackend;
use tracing::info;

/// Appends `body` plus a newline to a note, creating the note and any missing
/// parent projects on first use. Repeated calls keep appending.
pub fn run<S: StorageBackend>(store: &S, name: &str, body: &str) -> Result<CmdResult> {
    let text = format!("{}\n", body);
    let written = store
        .write_append(name, text.as_bytes())
        .context("could not create note")?;
    info!(note = name, bytes = written, "appended to note");

    Ok(CmdResult::default().with_message(CmdMessage::success(format!("Note saved: {}", name))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{list, view};
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn creates_note_with_trailing_newline() {
        let store = MemBackend::new();
        run(&store, "groceries", "milk").unwrap();

        let result = view::run(&store, "groceries").unwrap();
        assert_eq!(result.content.unwrap(), b"milk\n");
    }

    #[test]
    fn appends_instead_of_overwriting() {
        let store = MemBackend::new();
        run(&store, "log", "first").unwrap();
        run(&store, "log", "second").unwrap();

        let result = view::run(&store, "log").unwrap();
        assert_eq!(result.content.unwrap(), b"first\nsecond\n");
    }

    #[test]
    fn creates_missing_parent_projects() {
        let store = MemBackend::new();
        run(&store, "work/q3/goals", "ship it").unwrap();

        let projects = list::all_projects(&store).unwrap();
        assert_eq!(projects.listed, vec!["work/", "work/q3/"]);
    }

    #[test]
    fn reports_saved_note() {
        let store = MemBackend::new();
        let result = run(&store, "a", "b").unwrap();
        assert_eq!(result.messages, vec![CmdMessage::success("Note saved: a")]);
    }

    #[test]
    fn rejects_hidden_names() {
        let store = MemBackend::new();
        let err = run(&store, "work/.secret", "x").unwrap_err();
        assert!(err.is_invalid_name());
        assert!(err.to_string().starts_with("could not create note"));
    }

    #[test]
    fn surfaces_write_errors() {
        let store = MemBackend::new();
        store.set_simulate_write_error(true);
        let err = run(&store, "a", "b").unwrap_err();
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("simulated write error"));
    }
}
