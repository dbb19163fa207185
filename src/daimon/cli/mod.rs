//! # CLI Layer
//!
//! This module is **one possible UI client** for daimon. It is the only place
//! in the codebase that knows about terminal I/O, exit codes and argument
//! parsing.
//!
//! ## Modes
//!
//! - `daimon <COMMAND> [ARGS]` runs exactly one command and exits. Success is
//!   exit code 0; any error prints `Error: ...` to stderr and exits with 1.
//! - `daimon` with no arguments prints the intro and starts the REPL. Each
//!   line is parsed with the same clap definition as the one-shot form, so
//!   the two modes cannot drift apart. Errors are printed and the loop
//!   continues; `q`, `quit`, `exit` or Ctrl-C leave it.
//!
//! `help` works without `$DAIMON_DIR`; everything else resolves
//! [`Settings`](daimon::config::Settings) first.
//!
//! ## Structure
//!
//! - `setup.rs`: clap definitions, grouped help, version string
//! - `commands.rs`: `run()`, context setup, dispatch
//! - `repl.rs`: the interactive loop
//! - `complete.rs`: REPL completion over command words and note/project names
//! - `history.rs`: persisted REPL history
//! - `render.rs`: turning `CmdResult`s into terminal output

mod commands;
mod complete;
mod history;
mod render;
mod repl;
mod setup;

pub use commands::run;
