use crate::error::{DaimonError, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Opens a file in the user's editor and waits for it to close.
///
/// `editor` may carry arguments (`"code --wait"`); the path is appended as
/// the last argument. The child inherits the terminal.
pub fn open_in_editor<P: AsRef<Path>>(editor: &str, file_path: P) -> Result<()> {
    let path = file_path.as_ref();
    let mut words = editor.split_whitespace();
    let program = words
        .next()
        .ok_or_else(|| DaimonError::Editor("no editor configured".to_string()))?;

    debug!(editor, path = %path.display(), "launching editor");
    let status = Command::new(program)
        .args(words)
        .arg(path)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| DaimonError::Editor(format!("failed to launch '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(DaimonError::Editor(format!(
            "'{}' exited with {}",
            editor, status
        )));
    }

    Ok(())
}
