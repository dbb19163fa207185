use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ResultExt};
use crate::store::StorageBackend;

/// Moves a note, creating the destination's projects as needed.
pub fn run<S: StorageBackend>(store: &S, old: &str, new: &str) -> Result<CmdResult> {
    store.rename(old, new).context("could not rename note")?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Note moved: {} -> {}", old, new))))
}
