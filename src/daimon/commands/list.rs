//! Listing commands.
//!
//! The flat listings (`notes`, `projects`) look at one project. The recursive
//! ones share a single depth-first [`walk`] that differs only in what it
//! emits: inside every project the notes come first, then each sub-project
//! (as `name/` when projects are emitted) followed by its own contents.

use crate::commands::CmdResult;
use crate::error::{Result, ResultExt};
use crate::paths;
use crate::store::{Entry, StorageBackend};
use tracing::debug;

/// What a recursive listing emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    Notes,
    Projects,
    All,
}

impl Walk {
    fn emits_notes(self) -> bool {
        matches!(self, Walk::Notes | Walk::All)
    }

    fn emits_projects(self) -> bool {
        matches!(self, Walk::Projects | Walk::All)
    }
}

/// Immediate notes of `project`, without the `.md` suffix.
pub fn notes<S: StorageBackend>(store: &S, project: &str) -> Result<CmdResult> {
    let listed = store
        .entries(project)
        .context("could not list notes")?
        .into_iter()
        .filter(Entry::is_note)
        .map(|e| e.name)
        .collect();
    Ok(CmdResult::default().with_listed(listed))
}

/// Immediate sub-projects of `project`, base names only.
pub fn projects<S: StorageBackend>(store: &S, project: &str) -> Result<CmdResult> {
    let listed = store
        .entries(project)
        .context("could not list projects")?
        .into_iter()
        .filter(Entry::is_project)
        .map(|e| e.name)
        .collect();
    Ok(CmdResult::default().with_listed(listed))
}

/// Depth-first listing of everything below the root, filtered by `policy`.
pub fn walk<S: StorageBackend>(store: &S, policy: Walk) -> Result<Vec<String>> {
    let mut out = Vec::new();
    walk_into(store, "", policy, &mut out)?;
    debug!(?policy, count = out.len(), "walked notes directory");
    Ok(out)
}

fn walk_into<S: StorageBackend>(
    store: &S,
    prefix: &str,
    policy: Walk,
    out: &mut Vec<String>,
) -> Result<()> {
    let logical = if prefix.is_empty() { paths::ROOT } else { prefix };
    let entries = store.entries(logical)?;

    if policy.emits_notes() {
        out.extend(
            entries
                .iter()
                .filter(|e| e.is_note())
                .map(|e| paths::join(prefix, &e.name)),
        );
    }

    for project in entries.iter().filter(|e| e.is_project()) {
        let path = paths::join(prefix, &project.name);
        if policy.emits_projects() {
            out.push(format!("{}/", path));
        }
        walk_into(store, &path, policy, out)?;
    }
    Ok(())
}

pub fn all_notes<S: StorageBackend>(store: &S) -> Result<CmdResult> {
    let listed = walk(store, Walk::Notes).context("could not list notes")?;
    Ok(CmdResult::default().with_listed(listed))
}

pub fn all_projects<S: StorageBackend>(store: &S) -> Result<CmdResult> {
    let listed = walk(store, Walk::Projects).context("could not list projects")?;
    Ok(CmdResult::default().with_listed(listed))
}

pub fn all_entries<S: StorageBackend>(store: &S) -> Result<CmdResult> {
    let listed = walk(store, Walk::All).context("could not list entries")?;
    Ok(CmdResult::default().with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, project};
    use crate::store::mem_backend::MemBackend;

    fn sample() -> MemBackend {
        let store = MemBackend::new();
        create::run(&store, "foo", "x").unwrap();
        create::run(&store, "bar", "x").unwrap();
        create::run(&store, "work/standup", "x").unwrap();
        create::run(&store, "work/q3/goals", "x").unwrap();
        project::create(&store, "empty").unwrap();
        store
    }

    #[test]
    fn flat_notes_are_sorted_and_suffixless() {
        let store = sample();
        assert_eq!(notes(&store, ".").unwrap().listed, vec!["bar", "foo"]);
        assert_eq!(notes(&store, "work").unwrap().listed, vec!["standup"]);
    }

    #[test]
    fn flat_projects_are_base_names() {
        let store = sample();
        assert_eq!(projects(&store, ".").unwrap().listed, vec!["empty", "work"]);
        assert_eq!(projects(&store, "work").unwrap().listed, vec!["q3"]);
    }

    #[test]
    fn missing_project_is_not_found() {
        let store = sample();
        assert!(notes(&store, "nope").unwrap_err().is_not_found());
    }

    #[test]
    fn all_notes_visits_notes_before_sub_projects() {
        let store = sample();
        assert_eq!(
            all_notes(&store).unwrap().listed,
            vec!["bar", "foo", "work/standup", "work/q3/goals"]
        );
    }

    #[test]
    fn all_projects_marks_projects_with_a_slash() {
        let store = sample();
        assert_eq!(
            all_projects(&store).unwrap().listed,
            vec!["empty/", "work/", "work/q3/"]
        );
    }

    #[test]
    fn all_entries_interleaves_projects_and_their_contents() {
        let store = sample();
        assert_eq!(
            all_entries(&store).unwrap().listed,
            vec![
                "bar",
                "foo",
                "empty/",
                "work/",
                "work/standup",
                "work/q3/",
                "work/q3/goals",
            ]
        );
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = MemBackend::new();
        assert!(all_entries(&store).unwrap().listed.is_empty());
        assert!(notes(&store, ".").unwrap().listed.is_empty());
    }
}
