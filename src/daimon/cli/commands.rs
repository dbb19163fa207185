use super::render::{
    clear_screen, print_intro, print_lines, print_messages, print_note, NO_NOTES, NO_PROJECTS,
};
use super::repl;
use super::setup::{
    parse_args, print_grouped_help, print_help_for_command, print_subcommand_help, Commands,
};
use clap::error::ErrorKind;
use daimon::api::DaimonApi;
use daimon::config::Settings;
use daimon::error::{DaimonError, Result};
use daimon::logging::init_logging;
use daimon::store::fs_backend::FsBackend;
use tracing::debug;

pub(crate) struct AppContext {
    pub api: DaimonApi<FsBackend>,
    pub settings: Settings,
}

impl AppContext {
    fn new(settings: Settings) -> Self {
        let store = FsBackend::new(settings.root.clone());
        let api = DaimonApi::new(store, settings.editor.clone());
        Self { api, settings }
    }
}

/// Whether the REPL keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

pub fn run() -> Result<()> {
    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => return handle_parse_error(e),
    };

    // Help never needs a notes directory
    if cli.help {
        print_subcommand_help(&cli.command);
        return Ok(());
    }
    if let Some(Commands::Help { command }) = &cli.command {
        handle_help(command.as_deref());
        return Ok(());
    }

    init_logging();
    let settings = Settings::from_env()?;
    debug!(root = %settings.root.display(), editor = %settings.editor, "resolved settings");
    let ctx = AppContext::new(settings);

    match cli.command {
        Some(command) => dispatch(&ctx, command).map(|_| ()),
        None => {
            print_intro();
            repl::run(&ctx)
        }
    }
}

fn handle_parse_error(e: clap::Error) -> Result<()> {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{}", e);
            Ok(())
        }
        _ => Err(DaimonError::Argument(e.render().to_string())),
    }
}

/// Runs one parsed command against the notes directory.
pub(crate) fn dispatch(ctx: &AppContext, command: Commands) -> Result<Flow> {
    let api = &ctx.api;
    match command {
        Commands::New { note, content } => {
            print_messages(&api.create_note(&note, &content.join(" "))?.messages);
        }
        Commands::Edit { note } => {
            print_messages(&api.edit_note(&note)?.messages);
        }
        Commands::Print { note } => {
            let result = api.read_note(&note)?;
            print_note(result.content.as_deref().unwrap_or_default());
        }
        Commands::Move { note, new_name } => {
            print_messages(&api.rename_note(&note, &new_name)?.messages);
        }
        Commands::List { project } => {
            print_lines(&api.list_notes(project.as_deref())?.listed, NO_NOTES);
        }
        Commands::Delete { note } => {
            print_messages(&api.delete_note(&note)?.messages);
        }
        Commands::NewProject { project } => {
            print_messages(&api.create_project(&project)?.messages);
        }
        Commands::ListProjects { project } => {
            print_lines(&api.list_projects(project.as_deref())?.listed, NO_PROJECTS);
        }
        Commands::DeleteProject { project } => {
            print_messages(&api.delete_project(&project)?.messages);
        }
        Commands::ListAll => print_lines(&api.list_all_entries()?.listed, NO_PROJECTS),
        Commands::ListAllNotes => print_lines(&api.list_all_notes()?.listed, NO_NOTES),
        Commands::ListAllProjects => print_lines(&api.list_all_projects()?.listed, NO_PROJECTS),
        Commands::Line => print_messages(&api.line().messages),
        Commands::Clear => clear_screen(),
        Commands::Quit => return Ok(Flow::Quit),
        Commands::Help { command } => handle_help(command.as_deref()),
    }
    Ok(Flow::Continue)
}

fn handle_help(command: Option<&str>) {
    match command {
        Some(name) => print_help_for_command(name),
        None => {
            print_intro();
            print_grouped_help();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn context(root: &TempDir) -> AppContext {
        AppContext::new(Settings {
            root: root.path().to_path_buf(),
            editor: "true".to_string(),
            history_file: None,
            history_limit: 10,
            prompt: "> ".to_string(),
        })
    }

    fn command(line: &str) -> Commands {
        let words = line.split_whitespace();
        parse_args(std::iter::once("daimon").chain(words))
            .unwrap()
            .command
            .unwrap()
    }

    #[test]
    fn test_context_is_rooted_at_settings_root() {
        let root = TempDir::new().unwrap();
        let ctx = context(&root);
        assert_eq!(ctx.api.store().root(), root.path());
    }

    #[test]
    fn test_quit_words_stop_the_loop() {
        let root = TempDir::new().unwrap();
        let ctx = context(&root);

        for word in ["q", "quit", "exit"] {
            assert_eq!(dispatch(&ctx, command(word)).unwrap(), Flow::Quit);
        }
    }

    #[test]
    fn test_other_commands_continue() {
        let root = TempDir::new().unwrap();
        let ctx = context(&root);

        assert_eq!(dispatch(&ctx, command("line")).unwrap(), Flow::Continue);
        assert_eq!(
            dispatch(&ctx, command("n todo buy milk")).unwrap(),
            Flow::Continue
        );
        assert_eq!(
            std::fs::read_to_string(root.path().join("todo.md")).unwrap(),
            "buy milk\n"
        );
    }

    #[test]
    fn test_failing_command_is_an_error_not_a_quit() {
        let root = TempDir::new().unwrap();
        let ctx = context(&root);

        let err = dispatch(&ctx, command("p ghost")).unwrap_err();
        assert!(err.is_not_found());
    }
}
