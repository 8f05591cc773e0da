//! # pokersim CLI Library
//!
//! Command-line front end for the `pokersim-engine` simulator.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, installs logging and executes the
//! subcommand, returning the process exit code.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["pokersim", "sim", "--games", "50", "--seed", "7"];
//! let code = pokersim_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `sim`: Play many games and print the win histogram
//! - `game`: Play one game, optionally writing a JSONL hand history
//! - `eval`: Evaluate five to seven cards
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod logging;
pub mod ui;

use cli::{Commands, PokersimCli};
use commands::{handle_cfg_command, handle_eval_command, handle_game_command, handle_sim_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["sim", "game", "eval", "cfg"];

/// Main entry point for the CLI application.
///
/// Output meant for the user goes to `out`; diagnostics and errors go to
/// `err`. Returns [`exit_code::SUCCESS`] or [`exit_code::ERROR`].
///
/// ```
/// use std::io;
/// let mut out = Vec::new();
/// let args = vec!["pokersim", "eval", "--cards", "Ah Kh Qh Jh Th"];
/// let code = pokersim_cli::run(args, &mut out, &mut io::stderr());
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("royal flush"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match PokersimCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(&e, out, err),
    };
    logging::init_logging(cli.verbose, cli.log_json);

    let result = match cli.cmd {
        Commands::Sim {
            table,
            games,
            parallel,
            json,
        } => handle_sim_command(&table, games, parallel, json, out, err),
        Commands::Game { table, log, json } => {
            handle_game_command(&table, log.as_deref(), json, out, err)
        }
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn report_parse_error(e: &clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and succeed
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let mut usage = format!("{}\npokersim: Texas Hold'em win-rate simulator\n", e);
    usage.push_str("Usage: pokersim <command> [options]\n\nCommands:\n");
    for c in COMMANDS {
        usage.push_str(&format!("  {}\n", c));
    }
    usage.push_str("\nFor full help, run: pokersim --help\n");
    let _ = err.write_all(usage.as_bytes());
    exit_code::ERROR
}
