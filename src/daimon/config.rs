use crate::error::{DaimonError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Names the directory holding every note and project.
pub const ROOT_ENV: &str = "DAIMON_DIR";
/// Tracing filter directive, e.g. `debug` or `daimon=trace`.
pub const LOG_ENV: &str = "DAIMON_LOG";

const CONFIG_FILENAME: &str = "config.json";
const HISTORY_FILENAME: &str = "history";
const DEFAULT_EDITOR: &str = "vim";
const DEFAULT_HISTORY_LIMIT: usize = 500;
const DEFAULT_PROMPT: &str = "» ";

/// Optional user configuration, stored as `config.json` in the platform
/// config directory. Every field has a default, so the file may be partial
/// or absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DaimonConfig {
    /// Editor used when neither `$EDITOR` nor `$VISUAL` is set
    #[serde(default)]
    pub editor: Option<String>,

    /// Number of REPL lines kept in the history file
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// REPL prompt
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for DaimonConfig {
    fn default() -> Self {
        Self {
            editor: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl DaimonConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(&config_path).map_err(|e| DaimonError::io(&config_path, e))?;
        let config: DaimonConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}

/// Everything the process needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub root: PathBuf,
    pub editor: String,
    pub history_file: Option<PathBuf>,
    pub history_limit: usize,
    pub prompt: String,
}

impl Settings {
    /// Resolves settings from the process environment and the config file.
    pub fn from_env() -> Result<Self> {
        let dirs = ProjectDirs::from("com", "daimon", "daimon");
        let config = match &dirs {
            Some(dirs) => DaimonConfig::load(dirs.config_dir())?,
            None => DaimonConfig::default(),
        };
        let history_file = dirs.map(|d| d.data_dir().join(HISTORY_FILENAME));

        Self::resolve(|key| std::env::var(key).ok(), config, history_file)
    }

    /// Resolves settings from an arbitrary variable lookup.
    pub fn resolve<F>(lookup: F, config: DaimonConfig, history_file: Option<PathBuf>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let root = non_empty(ROOT_ENV)
            .map(PathBuf::from)
            .ok_or_else(|| DaimonError::Config(format!("{} env is not set", ROOT_ENV)))?;

        let editor = non_empty("EDITOR")
            .or_else(|| non_empty("VISUAL"))
            .or_else(|| config.editor.clone().filter(|e| !e.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string());

        Ok(Self {
            root,
            editor,
            history_file,
            history_limit: config.history_limit,
            prompt: config.prompt,
        })
    }
}
