use crate::commands::CmdResult;
use crate::error::{Result, ResultExt};
use crate::store::StorageBackend;

pub fn run<S: StorageBackend>(store: &S, name: &str) -> Result<CmdResult> {
    let content = store.read_note(name).context("could not read note")?;
    Ok(CmdResult::default().with_content(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn returns_full_content() {
        let store = MemBackend::new();
        create::run(&store, "a/b", "hello").unwrap();

        let content = run(&store, "a/b").unwrap().content.unwrap();
        assert!(content.ends_with(b"hello\n"));
    }

    #[test]
    fn missing_note_is_not_found() {
        let store = MemBackend::new();
        let err = run(&store, "nope").unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().starts_with("could not read note"));
    }

    #[test]
    fn project_is_not_a_note() {
        let store = MemBackend::new();
        create::run(&store, "work/standup", "x").unwrap();
        assert!(run(&store, "work").unwrap_err().is_not_found());
    }
}
