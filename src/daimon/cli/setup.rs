use clap::{Arg, Command, CommandFactory, Parser, Subcommand};
use std::ffi::OsString;

/// Returns the version string, with the git hash appended for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "daimon",
    bin_name = "daimon",
    version = get_version(),
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "A handy little note-taking assistant", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Notes,
    Projects,
    Listing,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Notes => "Note Commands:",
            CommandGroup::Projects => "Project Commands:",
            CommandGroup::Listing => "Recursive Listings:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "n" | "e" | "p" | "mv" | "l" | "d" => Some(CommandGroup::Notes),
            "np" | "lp" | "dp" => Some(CommandGroup::Projects),
            "la" | "lan" | "lap" => Some(CommandGroup::Listing),
            "line" | "c" | "q" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Notes,
            CommandGroup::Projects,
            CommandGroup::Listing,
            CommandGroup::Misc,
        ]
    }
}

fn positional_usage(arg: &Arg) -> String {
    let name = arg
        .get_value_names()
        .and_then(|names| names.first())
        .map(|n| n.to_string())
        .unwrap_or_else(|| arg.get_id().as_str().to_uppercase());
    let repeated = arg
        .get_num_args()
        .map(|range| range.max_values() > 1)
        .unwrap_or(false);
    let dots = if repeated { "..." } else { "" };

    if arg.is_required_set() {
        format!("<{}>{}", name, dots)
    } else {
        format!("[{}]{}", name, dots)
    }
}

/// Usage line of a subcommand, e.g. `mv <NOTE_NAME> <NEW_NAME>`.
pub fn command_usage(cmd: &Command) -> String {
    let mut usage = cmd.get_name().to_string();
    for alias in cmd.get_visible_aliases() {
        usage.push('|');
        usage.push_str(alias);
    }
    for arg in cmd.get_positionals() {
        usage.push(' ');
        usage.push_str(&positional_usage(arg));
    }
    usage
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("daimon {version}\n"));
    output.push_str("A handy little note-taking assistant\n");
    output.push('\n');
    output.push_str("Usage: daimon [COMMAND] [ARGS]\n");
    output.push_str("Calling daimon without any arguments starts it in interactive mode.\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| CommandGroup::for_command(sc.get_name()) == Some(*group))
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<28} {}\n", command_usage(sc), about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a command by name or alias
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    if let Some(subcmd) = cmd.find_subcommand_mut(name) {
        let help = subcmd.render_help();
        print!("{}", help);
        return;
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

/// Prints help for the parsed subcommand, or the grouped help without one.
pub fn print_subcommand_help(command: &Option<Commands>) {
    match command {
        Some(cmd) => print_help_for_command(cmd.name()),
        None => print_grouped_help(),
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Creates a new note, or appends to an existing one
    #[command(name = "n", display_order = 1)]
    New {
        #[arg(value_name = "NOTE_NAME")]
        note: String,

        /// Note text (words are joined with spaces)
        #[arg(
            value_name = "NOTE_CONTENT",
            required = true,
            num_args = 1..,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        content: Vec<String>,
    },

    /// Opens a note in the editor
    #[command(name = "e", display_order = 2)]
    Edit {
        #[arg(value_name = "NOTE_NAME")]
        note: String,
    },

    /// Prints a note
    #[command(name = "p", display_order = 3)]
    Print {
        #[arg(value_name = "NOTE_NAME")]
        note: String,
    },

    /// Renames a note
    #[command(name = "mv", display_order = 4)]
    Move {
        #[arg(value_name = "NOTE_NAME")]
        note: String,

        #[arg(value_name = "NEW_NAME")]
        new_name: String,
    },

    /// Lists notes, optionally in a project
    #[command(name = "l", display_order = 5)]
    List {
        #[arg(value_name = "PROJECT_NAME")]
        project: Option<String>,
    },

    /// Deletes a note
    #[command(name = "d", display_order = 6)]
    Delete {
        #[arg(value_name = "NOTE_NAME")]
        note: String,
    },

    /// Creates a new project
    #[command(name = "np", display_order = 10)]
    NewProject {
        #[arg(value_name = "PROJECT_NAME")]
        project: String,
    },

    /// Lists projects in the root, or sub-projects of a project
    #[command(name = "lp", display_order = 11)]
    ListProjects {
        #[arg(value_name = "PROJECT_NAME")]
        project: Option<String>,
    },

    /// Deletes a project and everything in it
    #[command(name = "dp", display_order = 12)]
    DeleteProject {
        #[arg(value_name = "PROJECT_NAME")]
        project: String,
    },

    /// Lists all notes and projects
    #[command(name = "la", display_order = 20)]
    ListAll,

    /// Lists all notes in the root, projects and sub-projects
    #[command(name = "lan", display_order = 21)]
    ListAllNotes,

    /// Lists all projects and sub-projects
    #[command(name = "lap", display_order = 22)]
    ListAllProjects,

    /// Says a line
    #[command(name = "line", display_order = 30)]
    Line,

    /// Clears the terminal
    #[command(name = "c", display_order = 31)]
    Clear,

    /// Quits the program
    #[command(name = "q", visible_aliases = ["quit", "exit"], display_order = 32)]
    Quit,

    /// Displays this help message
    #[command(name = "help", visible_alias = "h", display_order = 33)]
    Help {
        /// Command to get help for
        command: Option<String>,
    },
}

impl Commands {
    /// The canonical command word.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::New { .. } => "n",
            Commands::Edit { .. } => "e",
            Commands::Print { .. } => "p",
            Commands::Move { .. } => "mv",
            Commands::List { .. } => "l",
            Commands::Delete { .. } => "d",
            Commands::NewProject { .. } => "np",
            Commands::ListProjects { .. } => "lp",
            Commands::DeleteProject { .. } => "dp",
            Commands::ListAll => "la",
            Commands::ListAllNotes => "lan",
            Commands::ListAllProjects => "lap",
            Commands::Line => "line",
            Commands::Clear => "c",
            Commands::Quit => "q",
            Commands::Help { .. } => "help",
        }
    }
}

/// Parses program arguments, program name first.
///
/// Every word after the note name of `n` is note text, even one that looks
/// like a flag, so that tail is escaped with `--` before clap sees it.
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() > 3 && args.get(1).is_some_and(|word| word == "n") {
        args.insert(3, OsString::from("--"));
    }
    Cli::try_parse_from(args)
}

/// Every word the dispatcher accepts, aliases included.
pub fn command_words() -> Vec<String> {
    let cmd = Cli::command();
    let mut words = Vec::new();
    for sc in cmd.get_subcommands() {
        words.push(sc.get_name().to_string());
        words.extend(sc.get_all_aliases().map(str::to_string));
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        parse_args(std::iter::once("daimon").chain(args.iter().copied()))
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn new_note_joins_trailing_words() {
        let cli = parse(&["n", "groceries", "milk", "-and", "eggs"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::New {
                note: "groceries".to_string(),
                content: vec!["milk".into(), "-and".into(), "eggs".into()],
            })
        );
    }

    #[test]
    fn new_note_keeps_flag_like_words() {
        let cli = parse(&["n", "todo", "--help", "me"]).unwrap();
        assert!(!cli.help);
        assert_eq!(
            cli.command,
            Some(Commands::New {
                note: "todo".to_string(),
                content: vec!["--help".into(), "me".into()],
            })
        );

        for word in ["-h", "-V", "--"] {
            let cli = parse(&["n", "todo", word]).unwrap();
            assert_eq!(
                cli.command,
                Some(Commands::New {
                    note: "todo".to_string(),
                    content: vec![word.to_string()],
                })
            );
        }
    }

    #[test]
    fn help_flag_outside_note_text() {
        assert!(parse(&["--help"]).unwrap().help);
        assert!(parse(&["p", "todo", "-h"]).unwrap().help);
        assert!(parse(&["mv", "a", "b", "--help"]).unwrap().help);
    }

    #[test]
    fn new_note_requires_content() {
        assert!(parse(&["n", "groceries"]).is_err());
    }

    #[test]
    fn rename_requires_two_names() {
        assert!(parse(&["mv", "old"]).is_err());
        assert!(parse(&["mv", "old", "new"]).is_ok());
    }

    #[test]
    fn listing_project_is_optional() {
        assert_eq!(
            parse(&["l"]).unwrap().command,
            Some(Commands::List { project: None })
        );
        assert_eq!(
            parse(&["lp", "work"]).unwrap().command,
            Some(Commands::ListProjects {
                project: Some("work".to_string())
            })
        );
    }

    #[test]
    fn quit_aliases() {
        for word in ["q", "quit", "exit"] {
            assert_eq!(parse(&[word]).unwrap().command, Some(Commands::Quit));
        }
    }

    #[test]
    fn help_alias() {
        assert_eq!(
            parse(&["h", "mv"]).unwrap().command,
            Some(Commands::Help {
                command: Some("mv".to_string())
            })
        );
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(parse(&["frobnicate"]).is_err());
    }

    #[test]
    fn no_arguments_means_interactive() {
        assert!(parse(&[]).unwrap().command.is_none());
    }

    #[test]
    fn grouped_help_lists_every_command() {
        let help = get_grouped_help();
        for word in ["n ", "mv ", "np ", "lap", "line", "q|quit|exit", "help|h"] {
            assert!(help.contains(word), "missing {}", word);
        }
        assert!(help.contains("mv <NOTE_NAME> <NEW_NAME>"));
        assert!(help.contains("l [PROJECT_NAME]"));
        assert!(help.contains("n <NOTE_NAME> <NOTE_CONTENT>..."));
    }

    #[test]
    fn every_command_has_a_group() {
        for sc in Cli::command().get_subcommands() {
            assert!(
                CommandGroup::for_command(sc.get_name()).is_some(),
                "{} has no group",
                sc.get_name()
            );
        }
    }

    #[test]
    fn command_words_include_aliases() {
        let words = command_words();
        assert!(words.contains(&"exit".to_string()));
        assert!(words.contains(&"h".to_string()));
        assert!(words.contains(&"lan".to_string()));
    }
}
