//! # Command Layer
//!
//! One module per user-facing operation. Every command is a plain function
//! generic over [`StorageBackend`](crate::store::StorageBackend): it takes
//! Rust values, returns a [`CmdResult`], and never touches stdout, stderr or
//! the process exit code.
//!
//! Failures coming up from storage are passed through with a short prefix
//! (`could not read note: ...`) so the CLI can print them as-is while callers
//! can still match on the underlying kind via
//! [`DaimonError::root_cause`](crate::error::DaimonError::root_cause).

pub mod create;
pub mod delete;
pub mod edit;
pub mod line;
pub mod list;
pub mod project;
pub mod rename;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Logical paths produced by listing commands, in output order.
    pub listed: Vec<String>,
    /// Raw note content produced by `view`.
    pub content: Option<Vec<u8>>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed(mut self, listed: Vec<String>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_content(mut self, content: Vec<u8>) -> Self {
        self.content = Some(content);
        self
    }
}
