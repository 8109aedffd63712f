//! # Prob Command
//!
//! Prices one bid against a hand the caller supplies and shows how the
//! computer would answer it: the bid's probability, the rebuilt bid table and
//! the decision. Useful for checking the engine's reasoning without playing.

use crate::config;
use crate::error::CliError;
use crate::formatters::{
    format_bid, format_decision, format_dice, format_probability, format_table,
};
use crate::validation::faces_from_values;
use liardice_engine::bid::Bid;
use liardice_engine::dice::{DicePool, Face};
use liardice_engine::engine::BidEngine;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::Write;

/// Arguments of the prob command, as parsed from the command line.
#[derive(Debug, Clone)]
pub struct ProbRequest {
    /// Face values of the computer's dice
    pub own: Vec<u8>,
    pub total: u32,
    pub quantity: u32,
    pub face: u8,
    pub json: bool,
    pub seed: Option<u64>,
}

/// Handle the prob command.
///
/// # Errors
///
/// * `CliError::InvalidInput` for faces outside 1-6
/// * `CliError::Engine` when the hand is empty or larger than `total`
pub fn handle_prob_command(request: ProbRequest, out: &mut dyn Write) -> Result<(), CliError> {
    let faces = faces_from_values(&request.own).map_err(CliError::InvalidInput)?;
    let face = Face::from_u8(request.face)
        .ok_or_else(|| CliError::InvalidInput(format!("Invalid face '{}'", request.face)))?;
    let seed = match request.seed {
        Some(seed) => seed,
        None => config::load()?.seed.unwrap_or_else(rand::random),
    };

    let mut engine = BidEngine::from_pool(
        DicePool::from_faces(&faces),
        request.total,
        ChaCha20Rng::seed_from_u64(seed),
    )?;
    let bid = Bid::new(request.quantity, face);
    let probability = engine.compute_probability(bid.quantity, bid.face);
    engine.update_bid_probabilities(bid.quantity, bid.face)?;
    let decision = engine.decide_next_action();

    let own = engine.own_dice().sorted_faces();
    if request.json {
        let display = serde_json::json!({
            "own": own.iter().map(|f| f.value()).collect::<Vec<_>>(),
            "total_dice": engine.total_dice(),
            "unknown_dice": engine.unknown_dice(),
            "bid": bid,
            "probability": probability,
            "table": engine.table(),
            "decision": decision,
            "seed": seed,
        });
        let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
        return Ok(());
    }

    writeln!(
        out,
        "prob: own={} total={} unknown={} seed={}",
        format_dice(&own),
        engine.total_dice(),
        engine.unknown_dice(),
        seed
    )?;
    writeln!(
        out,
        "Bid {}: P(true)={}",
        format_bid(&bid),
        format_probability(probability)
    )?;
    writeln!(out, "Table:")?;
    for line in format_table(engine.table()) {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "Computer {}", format_decision(&decision))?;
    Ok(())
}
