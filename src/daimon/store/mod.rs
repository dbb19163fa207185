//! # Storage Layer
//!
//! This module defines the storage abstraction for daimon. The
//! [`backend::StorageBackend`] trait is the capability set the command layer
//! is allowed to use: resolve names, open notes for reading or appending,
//! create projects, rename, remove and enumerate.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production storage rooted at `$DAIMON_DIR`.
//! - [`mem_backend::MemBackend`]: in-memory storage for testing command logic.
//!
//! ## Storage Layout
//!
//! The filesystem tree *is* the whole persisted state. There is no index,
//! no metadata sidecar and no database:
//!
//! ```text
//! $DAIMON_DIR/
//! ├── groceries.md        # note "groceries"
//! └── work/               # project "work"
//!     ├── standup.md      # note "work/standup"
//!     └── q3/             # project "work/q3"
//!         └── goals.md    # note "work/q3/goals"
//! ```
//!
//! Name validation lives in [`crate::paths`] and is shared by every backend.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::{Entry, EntryKind, StorageBackend};
