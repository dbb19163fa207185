//! REPL line history, persisted one line per entry.
//!
//! History is a convenience: failing to read or write the file is logged and
//! otherwise ignored.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug)]
pub struct History {
    path: Option<PathBuf>,
    limit: usize,
    lines: Vec<String>,
}

impl History {
    /// Loads the most recent `limit` lines from `path`. A missing file is empty.
    pub fn load(path: Option<PathBuf>, limit: usize) -> Self {
        let mut lines: Vec<String> = match path.as_deref().map(fs::read_to_string) {
            Some(Ok(content)) => content
                .lines()
                .filter(|l| !l.trim().is_empty())
                .map(str::to_string)
                .collect(),
            Some(Err(e)) if e.kind() != std::io::ErrorKind::NotFound => {
                warn!(error = %e, "could not read history");
                Vec::new()
            }
            _ => Vec::new(),
        };
        if lines.len() > limit {
            lines.drain(..lines.len() - limit);
        }
        debug!(count = lines.len(), "loaded history");

        Self { path, limit, lines }
    }

    /// Records a line. Repeating the previous line is a no-op.
    pub fn push(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() || self.limit == 0 || self.lines.last().map(String::as_str) == Some(line)
        {
            return;
        }

        self.lines.push(line.to_string());
        let trimmed = self.lines.len() > self.limit;
        if trimmed {
            self.lines.drain(..self.lines.len() - self.limit);
        }

        if let Some(path) = &self.path {
            let result = if trimmed {
                rewrite(path, &self.lines)
            } else {
                append(path, line)
            };
            if let Err(e) = result {
                warn!(path = %path.display(), error = %e, "could not save history");
            }
        }
    }

    /// Distinct lines, newest first.
    pub fn recent(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for line in self.lines.iter().rev() {
            if !seen.contains(line) {
                seen.push(line.clone());
            }
        }
        seen
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

fn ensure_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

fn append(path: &Path, line: &str) -> std::io::Result<()> {
    ensure_parent(path)?;
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", line)
}

fn rewrite(path: &Path, lines: &[String]) -> std::io::Result<()> {
    ensure_parent(path)?;
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let history = History::load(Some(temp.path().join("history")), 10);
        assert!(history.lines().is_empty());
    }

    #[test]
    fn test_push_persists_across_loads() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data").join("history");

        let mut history = History::load(Some(path.clone()), 10);
        history.push("la");
        history.push("p todo");

        let reloaded = History::load(Some(path), 10);
        assert_eq!(reloaded.lines(), ["la", "p todo"]);
    }

    #[test]
    fn test_consecutive_duplicates_are_skipped() {
        let mut history = History::load(None, 10);
        history.push("la");
        history.push("la");
        history.push("  ");
        assert_eq!(history.lines(), ["la"]);
    }

    #[test]
    fn test_limit_is_enforced_on_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("history");

        let mut history = History::load(Some(path.clone()), 2);
        history.push("one");
        history.push("two");
        history.push("three");
        assert_eq!(history.lines(), ["two", "three"]);

        let reloaded = History::load(Some(path), 2);
        assert_eq!(reloaded.lines(), ["two", "three"]);
    }

    #[test]
    fn test_recent_is_newest_first_and_distinct() {
        let mut history = History::load(None, 10);
        history.push("la");
        history.push("p a");
        history.push("la");
        assert_eq!(history.recent(), vec!["la", "p a"]);
    }
}
