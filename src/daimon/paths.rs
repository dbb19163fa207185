//! # Logical Paths
//!
//! Notes and projects are addressed by *logical paths*: relative, `/`-separated
//! names such as `work/standup`. This module is the only place that decides
//! whether a logical path is acceptable and what it cleans to. Every backend
//! calls into it before touching storage, so the rules hold regardless of
//! where the bytes end up.
//!
//! ## Rules
//!
//! - `"."` names the root project and cleans to the empty key.
//! - Any other path must start with a word character (letter, digit or `_`).
//!   This blocks absolute paths (`/etc`) and hidden names (`.git`) up front.
//! - Paths are cleaned lexically: empty and `.` segments vanish, `..` pops the
//!   previous segment. A `..` with nothing left to pop would climb above the
//!   root and is rejected. A path may clean down to the root itself (`a/..`).
//! - A note's base name must also start with a word character, then `.md` is
//!   appended to form the file name.
//!
//! Cleaned paths are called *keys*. The empty key is the root.

use crate::error::{DaimonError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

/// The logical path naming the root project.
pub const ROOT: &str = ".";

/// Suffix carried by every note file.
pub const NOTE_SUFFIX: &str = ".md";

static ILLEGAL_LEAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\W").expect("illegal-lead pattern is valid"));

fn has_illegal_lead(name: &str) -> bool {
    ILLEGAL_LEAD.is_match(name)
}

/// Validates and cleans a project (or generic) logical path into its key.
pub fn project_key(logical: &str) -> Result<String> {
    if logical == ROOT {
        return Ok(String::new());
    }
    if logical.is_empty() {
        return Err(DaimonError::invalid_name(logical, "name is empty"));
    }
    if has_illegal_lead(logical) {
        return Err(DaimonError::invalid_name(
            logical,
            "must start with a letter, digit or underscore",
        ));
    }

    let mut segments: Vec<&str> = Vec::new();
    for segment in logical.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.pop().is_none() {
                    return Err(DaimonError::invalid_name(
                        logical,
                        "path escapes the notes directory",
                    ));
                }
            }
            other => segments.push(other),
        }
    }

    Ok(segments.join("/"))
}

/// Validates and cleans a note's logical path into its key (without suffix).
pub fn note_key(logical: &str) -> Result<String> {
    let base = base_name(logical);
    if base.is_empty() || has_illegal_lead(base) {
        return Err(DaimonError::invalid_name(
            logical,
            "note names must start with a letter, digit or underscore",
        ));
    }
    project_key(logical)
}

/// The last segment of a logical path, ignoring trailing separators.
pub fn base_name(logical: &str) -> &str {
    let trimmed = logical.trim_end_matches('/');
    match trimmed.rsplit_once('/') {
        Some((_, base)) => base,
        None => trimmed,
    }
}

/// The key of the project containing `key`. The root's children return `""`.
pub fn parent_key(key: &str) -> &str {
    key.rsplit_once('/').map(|(parent, _)| parent).unwrap_or("")
}

/// Joins a key prefix and a child name into a logical path.
pub fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", prefix, name)
    }
}

/// Strips the note suffix from a file name, if it carries one.
pub fn strip_note_suffix(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(NOTE_SUFFIX)
        .filter(|stem| !stem.is_empty())
}

/// Maps a key onto a directory below `root`.
pub fn key_to_path(root: &Path, key: &str) -> PathBuf {
    if key.is_empty() {
        root.to_path_buf()
    } else {
        root.join(key)
    }
}

/// Maps a note key onto its file below `root`.
pub fn note_key_to_path(root: &Path, key: &str) -> PathBuf {
    root.join(format!("{}{}", key, NOTE_SUFFIX))
}

/// Resolves a logical path to a physical path under `root`.
pub fn resolve(root: &Path, logical: &str) -> Result<PathBuf> {
    Ok(key_to_path(root, &project_key(logical)?))
}

/// Resolves a note's logical path to its physical `.md` file under `root`.
pub fn resolve_note(root: &Path, logical: &str) -> Result<PathBuf> {
    Ok(note_key_to_path(root, &note_key(logical)?))
}
