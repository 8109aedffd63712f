//! # liardice CLI Library
//!
//! Command-line front-end for the `liardice-engine` computer player.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, dispatches to a subcommand and returns the
//! process exit code. [`run_with_input`] does the same with an injected stdin,
//! which is how the interactive `play` loop is driven in tests.
//!
//! ## Example Usage
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let args = ["liardice", "roll", "--dice", "5", "--seed", "42"];
//! let code = liardice_cli::run(args, &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().starts_with("roll: dice=5 seed=42"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play an interactive game against the computer
//! - `prob`: Price a bid against a known hand and show the computer's answer
//! - `roll`: Roll a seeded pool of dice
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};
use tracing::debug;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, LiardiceCli};
use commands::{
    ProbRequest, handle_cfg_command, handle_play_command, handle_prob_command,
    handle_roll_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "prob", "roll", "cfg"];

/// Main entry point for the CLI application, reading interactive input from
/// the process's stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, out, err, &mut stdin_lock)
}

/// [`run`] with interactive input taken from `stdin`.
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match LiardiceCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage_error(e, out, err),
    };
    debug!(command = cli.cmd.name(), "dispatching command");

    let result = match cli.cmd {
        Commands::Play {
            players,
            dice,
            seed,
        } => handle_play_command(players, dice, seed, out, err, stdin),
        Commands::Prob {
            own,
            total,
            quantity,
            face,
            json,
            seed,
        } => handle_prob_command(
            ProbRequest {
                own,
                total,
                quantity,
                face,
                json,
                seed,
            },
            out,
        ),
        Commands::Roll { dice, seed } => handle_roll_command(dice, seed, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn report_usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and succeed
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let _ = write_usage(e, err);
    exit_code::ERROR
}

fn write_usage(e: clap::Error, err: &mut dyn Write) -> std::io::Result<()> {
    writeln!(err, "{}", e)?;
    writeln!(err)?;
    writeln!(err, "liardice: Liar's Dice against the computer")?;
    writeln!(err, "Usage: liardice <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: liardice --help")
}
