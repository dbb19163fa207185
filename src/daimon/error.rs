use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DaimonError {
    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("{0}")]
    Argument(String),

    #[error("{context}: {source}")]
    Context {
        context: &'static str,
        #[source]
        source: Box<DaimonError>,
    },
}

impl DaimonError {
    pub fn invalid_name(name: impl Into<String>, reason: &'static str) -> Self {
        DaimonError::InvalidName {
            name: name.into(),
            reason,
        }
    }

    /// Maps an I/O failure on `path`, keeping "not found" as its own kind.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            DaimonError::NotFound { path }
        } else {
            DaimonError::Io { path, source }
        }
    }

    /// The innermost error, skipping any `Context` wrappers.
    pub fn root_cause(&self) -> &DaimonError {
        match self {
            DaimonError::Context { source, .. } => source.root_cause(),
            other => other,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.root_cause(), DaimonError::NotFound { .. })
    }

    pub fn is_invalid_name(&self) -> bool {
        matches!(self.root_cause(), DaimonError::InvalidName { .. })
    }
}

pub type Result<T> = std::result::Result<T, DaimonError>;

/// Adds the short human-readable prefix used by the command layer.
pub trait ResultExt<T> {
    fn context(self, context: &'static str) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: &'static str) -> Result<T> {
        self.map_err(|source| DaimonError::Context {
            context,
            source: Box::new(source),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_not_found_becomes_not_found() {
        let err = DaimonError::io(
            "/tmp/x.md",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn context_is_transparent_to_kind_checks() {
        let err: Result<()> = Err(DaimonError::invalid_name(".x", "bad"));
        let wrapped = err.context("could not create note").unwrap_err();
        assert!(wrapped.is_invalid_name());
        assert_eq!(
            wrapped.to_string(),
            "could not create note: invalid name '.x': bad"
        );
    }
}
