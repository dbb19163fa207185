//! REPL completion.
//!
//! Suggestions are full input lines. The first word completes against the
//! command table; later words complete against note or project names,
//! depending on the command and the argument position. Names are re-listed
//! on every keystroke so the suggestions always match what is on disk.

use super::setup::command_words;
use daimon::commands::list::{walk, Walk};
use daimon::store::StorageBackend;
use inquire::autocompletion::{Autocomplete, Replacement};
use inquire::CustomUserError;

/// Which names complete a given argument.
fn source_for(command: &str, position: usize) -> Option<Walk> {
    match (command, position) {
        ("n" | "e", 0) => Some(Walk::All),
        ("p" | "d" | "mv", 0) => Some(Walk::Notes),
        ("mv", 1) => Some(Walk::Projects),
        ("l" | "np" | "lp" | "dp", 0) => Some(Walk::Projects),
        _ => None,
    }
}

/// Full-line candidates for `input`. An empty input offers `history`.
pub fn suggestions<S: StorageBackend>(store: &S, history: &[String], input: &str) -> Vec<String> {
    if input.trim().is_empty() {
        return history.to_vec();
    }

    let mut words: Vec<&str> = input.split_whitespace().collect();
    let current = if input.ends_with(char::is_whitespace) {
        ""
    } else {
        words.pop().unwrap_or_default()
    };

    if words.is_empty() {
        let mut names: Vec<String> = command_words()
            .into_iter()
            .filter(|w| w.starts_with(current))
            .collect();
        names.sort();
        return names;
    }

    let Some(policy) = source_for(words[0], words.len() - 1) else {
        return Vec::new();
    };
    // A missing notes directory simply has nothing to offer.
    let names = walk(store, policy).unwrap_or_default();

    let prefix = words.join(" ");
    names
        .into_iter()
        .filter(|name| name.starts_with(current))
        .map(|name| format!("{} {}", prefix, name))
        .collect()
}

fn longest_common_prefix(candidates: &[String]) -> String {
    let Some(first) = candidates.first() else {
        return String::new();
    };
    let mut len = first.len();
    for other in &candidates[1..] {
        len = first
            .char_indices()
            .zip(other.chars())
            .take_while(|((_, a), b)| a == b)
            .map(|((i, a), _)| i + a.len_utf8())
            .last()
            .unwrap_or(0)
            .min(len);
    }
    first[..len].to_string()
}

/// `inquire` adapter over [`suggestions`].
#[derive(Clone)]
pub struct NameCompleter<S> {
    store: S,
    history: Vec<String>,
}

impl<S: StorageBackend + Clone> NameCompleter<S> {
    pub fn new(store: S, history: Vec<String>) -> Self {
        Self { store, history }
    }
}

impl<S: StorageBackend + Clone> Autocomplete for NameCompleter<S> {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, CustomUserError> {
        Ok(suggestions(&self.store, &self.history, input))
    }

    fn get_completion(
        &mut self,
        input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, CustomUserError> {
        if highlighted_suggestion.is_some() {
            return Ok(highlighted_suggestion);
        }

        let candidates = suggestions(&self.store, &self.history, input);
        let completion = longest_common_prefix(&candidates);
        if completion.len() > input.len() {
            Ok(Some(completion))
        } else {
            Ok(None)
        }
    }
}
