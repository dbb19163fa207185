//! Terminal output for command results.
//!
//! Every `render_*` function returns a plain `String` so it can be tested
//! without a terminal; the `print_*` wrappers decide on color and write to
//! stdout.

use colored::Colorize;
use daimon::api::{CmdMessage, MessageLevel};
use std::io::IsTerminal;

pub const NO_NOTES: &str = "<No Notes>";
pub const NO_PROJECTS: &str = "<No Projects>";

const INTRO_TITLE: &str = "daimon: A handy little note-taking assistant";

fn use_color() -> bool {
    std::io::stdout().is_terminal()
}

pub fn render_messages(messages: &[CmdMessage], color: bool) -> String {
    let mut output = String::new();
    for message in messages {
        let line = match (color, &message.level) {
            (false, _) => message.content.clone(),
            (true, MessageLevel::Info) => message.content.dimmed().to_string(),
            (true, MessageLevel::Success) => message.content.green().to_string(),
        };
        output.push_str(&line);
        output.push('\n');
    }
    output
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages, use_color());
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// One logical path per line. Projects (`name/`) stand out when colored.
pub fn render_lines(lines: &[String], placeholder: &str, color: bool) -> String {
    if lines.is_empty() {
        return format!("{}\n", placeholder);
    }

    let mut output = String::new();
    for line in lines {
        if color && line.ends_with('/') {
            output.push_str(&line.blue().bold().to_string());
        } else {
            output.push_str(line);
        }
        output.push('\n');
    }
    output
}

pub fn print_lines(lines: &[String], placeholder: &str) {
    print!("{}", render_lines(lines, placeholder, use_color()));
}

/// A note is printed after an empty line, exactly as stored.
pub fn render_note(content: &[u8]) -> String {
    let text = String::from_utf8_lossy(content);
    let mut output = format!("\n{}", text);
    if !output.ends_with('\n') {
        output.push('\n');
    }
    output
}

pub fn print_note(content: &[u8]) {
    print!("{}", render_note(content));
}

pub fn render_intro() -> String {
    format!("{}\n{}\n", INTRO_TITLE, "=".repeat(INTRO_TITLE.len()))
}

pub fn print_intro() {
    print!("{}", render_intro());
}

pub fn clear_screen() {
    // Best effort: a terminal that can't be cleared is not an error.
    let _ = console::Term::stdout().clear_screen();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_messages_plain() {
        let messages = vec![
            CmdMessage::success("Note saved: a"),
            CmdMessage::info("Edited: b"),
        ];
        assert_eq!(
            render_messages(&messages, false),
            "Note saved: a\nEdited: b\n"
        );
    }

    #[test]
    fn test_render_messages_empty() {
        assert!(render_messages(&[], true).is_empty());
    }

    #[test]
    fn test_render_lines_placeholder() {
        assert_eq!(render_lines(&[], NO_PROJECTS, false), "<No Projects>\n");
        assert_eq!(render_lines(&[], NO_NOTES, true), "<No Notes>\n");
    }

    #[test]
    fn test_render_lines_one_per_line() {
        let lines = vec!["work/".to_string(), "work/standup".to_string()];
        assert_eq!(
            render_lines(&lines, NO_NOTES, false),
            "work/\nwork/standup\n"
        );
    }

    #[test]
    fn test_render_note_leads_with_blank_line() {
        assert_eq!(render_note(b"milk\n"), "\nmilk\n");
        assert_eq!(render_note(b"no newline"), "\nno newline\n");
    }

    #[test]
    fn test_intro_is_underlined() {
        let intro = render_intro();
        let lines: Vec<_> = intro.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), lines[1].len());
    }
}
