//! # Play Command
//!
//! Interactive Liar's Dice against the computer player.
//!
//! The human stands in for every other player at the table: they type the
//! bids made against the computer, ask the computer to open a round, and
//! report after each reveal whether the computer lost a die. The computer's
//! dice stay hidden until a reveal.
//!
//! ## Features
//!
//! - Input validation with clear error messages
//! - Graceful quit handling (`q`, `quit` or end of input)
//! - Round header with the computer's dice count and the dice still in play
//! - Game-over detection when the computer loses its last die or holds every
//!   die left

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_bid, format_dice_symbols};
use crate::io_utils::prompt_line;
use crate::ui;
use crate::validation::{ParseResult, PlayInput, parse_play_input, parse_reveal_answer};
use liardice_engine::bid::{Bid, Decision};
use liardice_engine::session::{GameSession, GameStatus, Phase};
use std::io::{BufRead, Write};

const PROMPT: &str = "> ";
const REVEAL_PROMPT: &str = "Did the computer lose a die? (lose/keep): ";

/// Handle the play command: interactive game loop on `stdin`.
///
/// `players`, `dice` and `seed` fall back to the resolved configuration; a
/// missing seed is drawn at random and printed so the game can be replayed.
///
/// # Errors
///
/// * `CliError::Config` if the configuration cannot be loaded
/// * `CliError::Engine` if the table size is rejected
/// * `CliError::Io` on write failures
///
/// # Examples
///
/// ```
/// use liardice_cli::commands::handle_play_command;
/// use std::io::Cursor;
///
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let mut input = Cursor::new("first\nq\n");
///
/// handle_play_command(Some(2), Some(5), Some(42), &mut out, &mut err, &mut input).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("Computer bids"));
/// ```
pub fn handle_play_command(
    players: Option<u32>,
    dice: Option<u32>,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let config = config::load()?;
    let players = players.unwrap_or(config.players);
    let dice = dice.unwrap_or(config.dice_per_player);
    let seed = seed.or(config.seed).unwrap_or_else(rand::random);

    let mut game = GameSession::start_game(players, dice, seed)?;
    writeln!(out, "play: players={} dice={} seed={}", players, dice, seed)?;
    writeln!(out, "Type 'help' for the list of moves.")?;

    let mut rounds_played = 0u32;
    if game.phase() != Phase::GameOver {
        write_round_header(&game, out)?;
    }

    while game.phase() != Phase::GameOver {
        let Some(line) = prompt_line(PROMPT, out, stdin)? else {
            break;
        };
        let input = match parse_play_input(&line) {
            ParseResult::Action(input) => input,
            ParseResult::Quit => break,
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                continue;
            }
        };

        if game.phase() == Phase::RoundResolved
            && matches!(input, PlayInput::FirstBid | PlayInput::Bid { .. })
        {
            ui::write_error(
                err,
                "The computer called liar; type 'reveal' to settle the round",
            )?;
            continue;
        }

        match input {
            PlayInput::Help => ui::write_play_help(out)?,
            PlayInput::FirstBid => {
                if game.phase() == Phase::AwaitingResponse {
                    ui::display_warning(err, "Bidding is already open; the computer opens again")?;
                }
                let bid = game.place_first_bid();
                writeln!(out, "Computer bids {}", format_bid(&bid))?;
            }
            PlayInput::Bid { quantity, face } => {
                let bid = Bid::new(quantity, face);
                match game.respond_to_bid(quantity, face)? {
                    Decision::CallLie => writeln!(
                        out,
                        "Computer calls liar on {}. Type 'reveal' to settle the round.",
                        format_bid(&bid)
                    )?,
                    Decision::Raise(raise) => writeln!(out, "Computer bids {}", format_bid(&raise))?,
                }
            }
            PlayInput::Reveal => {
                writeln!(
                    out,
                    "Computer dice: {}",
                    format_dice_symbols(&game.revealed_dice())
                )?;
                let Some(lose_die) = ask_lose_or_keep(out, err, stdin)? else {
                    break;
                };
                let outcome = game.reveal_and_advance(lose_die);
                rounds_played += 1;
                writeln!(
                    out,
                    "Computer dice left: {} | dice in play: {}",
                    outcome.own_dice_remaining, outcome.total_dice_remaining
                )?;
                if outcome.status == GameStatus::InProgress {
                    write_round_header(&game, out)?;
                }
            }
        }
    }

    match game.status() {
        GameStatus::ComputerWon => writeln!(out, "Game over: the computer wins")?,
        GameStatus::ComputerLost => writeln!(out, "Game over: you win")?,
        GameStatus::InProgress => writeln!(out, "Game ended with dice still in play")?,
    }
    writeln!(out, "Rounds played: {}", rounds_played)?;
    Ok(())
}

fn write_round_header(game: &GameSession, out: &mut dyn Write) -> Result<(), CliError> {
    let outcome = game.outcome();
    writeln!(
        out,
        "Round {} | computer dice: {} | dice in play: {}",
        outcome.round + 1,
        outcome.own_dice_remaining,
        outcome.total_dice_remaining
    )?;
    Ok(())
}

/// `None` when input ends before an answer is given.
fn ask_lose_or_keep(
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<bool>, CliError> {
    loop {
        let Some(line) = prompt_line(REVEAL_PROMPT, out, stdin)? else {
            return Ok(None);
        };
        match parse_reveal_answer(&line) {
            Some(lose_die) => return Ok(Some(lose_die)),
            None => ui::write_error(err, "Answer 'lose' or 'keep'")?,
        }
    }
}
