use super::commands::{dispatch, AppContext, Flow};
use super::complete::NameCompleter;
use super::history::History;
use super::setup::{parse_args, print_subcommand_help};
use daimon::error::{DaimonError, Result};
use inquire::{InquireError, Text};
use tracing::debug;

/// Splits a REPL line into the words clap sees, after the program name.
pub(crate) fn split_line(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Reads and runs commands until `q` or Ctrl-C. Esc discards the current line.
///
/// A failing command prints its error and the loop carries on.
pub(crate) fn run(ctx: &AppContext) -> Result<()> {
    let settings = &ctx.settings;
    let mut history = History::load(settings.history_file.clone(), settings.history_limit);
    debug!(lines = history.lines().len(), "entering interactive mode");

    loop {
        let completer = NameCompleter::new(ctx.api.store().clone(), history.recent());
        let line = match Text::new(&settings.prompt)
            .with_autocomplete(completer)
            .prompt()
        {
            Ok(line) => line,
            Err(InquireError::OperationCanceled) => continue,
            Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        let words = split_line(&line);
        if words.is_empty() {
            continue;
        }
        history.push(&line);

        let cli = match parse_args(std::iter::once("daimon").chain(words)) {
            Ok(cli) => cli,
            Err(e) => {
                // Usage errors and --version alike
                let _ = e.print();
                continue;
            }
        };
        if cli.help {
            print_subcommand_help(&cli.command);
            continue;
        }
        let Some(command) = cli.command else {
            continue;
        };

        match dispatch(ctx, command) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => report(&e),
        }
    }

    debug!("leaving interactive mode");
    Ok(())
}

fn report(e: &DaimonError) {
    match e {
        DaimonError::Argument(usage) => eprint!("{}", usage),
        other => eprintln!("Error: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::setup::Commands;

    #[test]
    fn test_split_line_collapses_whitespace() {
        assert_eq!(split_line("  n  todo   buy milk "), vec!["n", "todo", "buy", "milk"]);
        assert!(split_line("   ").is_empty());
    }

    #[test]
    fn test_repl_words_parse_like_arguments() {
        let words = split_line("mv old  work/new");
        let cli = parse_args(std::iter::once("daimon").chain(words)).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Move {
                note: "old".to_string(),
                new_name: "work/new".to_string(),
            })
        );
    }
}
