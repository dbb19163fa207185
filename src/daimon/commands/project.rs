use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ResultExt};
use crate::store::StorageBackend;
use tracing::info;

pub fn create<S: StorageBackend>(store: &S, name: &str) -> Result<CmdResult> {
    store.ensure_dir(name).context("could not create project")?;
    info!(project = name, "ensured project");
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Project ready: {}", name))))
}

/// Removes a project with all of its notes and sub-projects. Deleting a
/// project that does not exist succeeds.
pub fn delete<S: StorageBackend>(store: &S, name: &str) -> Result<CmdResult> {
    store
        .remove_tree(name)
        .context("could not delete project")?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Project deleted: {}", name))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create as create_note, list};
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn creates_nested_projects() {
        let store = MemBackend::new();
        create(&store, "a/b/c").unwrap();

        let all = list::all_projects(&store).unwrap();
        assert_eq!(all.listed, vec!["a/", "a/b/", "a/b/c/"]);
    }

    #[test]
    fn create_is_idempotent() {
        let store = MemBackend::new();
        create(&store, "a").unwrap();
        create(&store, "a").unwrap();
        assert_eq!(list::projects(&store, ".").unwrap().listed, vec!["a"]);
    }

    #[test]
    fn delete_removes_everything_below() {
        let store = MemBackend::new();
        create_note::run(&store, "work/standup", "x").unwrap();
        create_note::run(&store, "work/q3/goals", "y").unwrap();
        create_note::run(&store, "workshop", "keep me").unwrap();

        delete(&store, "work").unwrap();

        assert_eq!(list::all_entries(&store).unwrap().listed, vec!["workshop"]);
    }

    #[test]
    fn delete_twice_is_fine() {
        let store = MemBackend::new();
        create(&store, "x").unwrap();
        delete(&store, "x").unwrap();
        delete(&store, "x").unwrap();
    }

    #[test]
    fn refuses_to_delete_the_root() {
        let store = MemBackend::new();
        create_note::run(&store, "precious", "x").unwrap();

        let err = delete(&store, ".").unwrap_err();
        assert!(err.is_invalid_name());
        assert_eq!(list::notes(&store, ".").unwrap().listed, vec!["precious"]);
    }
}
