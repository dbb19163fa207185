use crate::api::DaimonApi;
use crate::store::fs_backend::FsBackend;
use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway notes directory with an API pointed at it.
pub struct TestEnv {
    // Keeps the directory alive until the test is done
    pub _temp_dir: TempDir,
    pub api: DaimonApi<FsBackend>,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_editor("true")
    }

    pub fn with_editor(editor: &str) -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let api = DaimonApi::new(FsBackend::new(root.clone()), editor);
        Self {
            _temp_dir: temp_dir,
            api,
            root,
        }
    }
}
