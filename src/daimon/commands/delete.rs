use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ResultExt};
use crate::store::StorageBackend;

pub fn run<S: StorageBackend>(store: &S, name: &str) -> Result<CmdResult> {
    store.remove(name).context("could not delete note")?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!("Note deleted: {}", name))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, list};
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn removes_note() {
        let store = MemBackend::new();
        create::run(&store, "foo", "x").unwrap();
        create::run(&store, "bar", "y").unwrap();

        run(&store, "foo").unwrap();

        assert_eq!(list::notes(&store, ".").unwrap().listed, vec!["bar"]);
    }

    #[test]
    fn missing_note_is_not_found() {
        let store = MemBackend::new();
        assert!(run(&store, "foo").unwrap_err().is_not_found());
    }

    #[test]
    fn leaves_project_in_place() {
        let store = MemBackend::new();
        create::run(&store, "work/standup", "x").unwrap();
        run(&store, "work/standup").unwrap();

        assert_eq!(list::projects(&store, ".").unwrap().listed, vec!["work"]);
        assert!(list::notes(&store, "work").unwrap().listed.is_empty());
    }
}
