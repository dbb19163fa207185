//! # Daimon Architecture
//!
//! Daimon is a small note-taking assistant. Notes are plain `.md` files inside
//! a directory tree rooted at `$DAIMON_DIR`; every directory is a *project*.
//! There is no index and no metadata: the filesystem is the database.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - One-shot commands and the interactive REPL               │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Note and project operations, recursive listings          │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, paths.rs)                           │
//! │  - Logical path validation and resolution                   │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never calls
//! `std::process::exit`. The one exception is [`editor`], which hands the
//! terminal to a child process for the duration of an edit.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: Storage trait and backends
//! - [`paths`]: Logical path rules
//! - [`config`]: Environment and config file resolution
//! - [`editor`]: External editor integration
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Error types
//! - `cli`: Argument parsing, REPL, completion and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod logging;
pub mod paths;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
