//! Dice roll command.
//!
//! Rolls a pool with the ChaCha20 generator the engine uses, so a seed shows
//! exactly the hand the computer would hold at the start of a seeded game.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_dice, format_face_counts};
use liardice_engine::dice::DicePool;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::Write;

/// Handle the roll command.
///
/// `dice` falls back to the configured dice per player, `seed` to the
/// configured seed and then to a random one.
pub fn handle_roll_command(
    dice: Option<u32>,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let config = config::load()?;
    let dice = dice.unwrap_or(config.dice_per_player);
    let seed = seed.or(config.seed).unwrap_or_else(rand::random);

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let pool = DicePool::new(dice as usize, &mut rng);

    writeln!(out, "roll: dice={} seed={}", dice, seed)?;
    writeln!(out, "Dice: {}", format_dice(&pool.sorted_faces()))?;
    writeln!(out, "Counts: {}", format_face_counts(&pool.face_counts()))?;
    Ok(())
}
