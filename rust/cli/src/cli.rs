//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "liardice",
    version,
    about = "Play Liar's Dice against a probability-driven computer player"
)]
pub struct LiardiceCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive game, reading moves from stdin
    Play {
        /// Number of players at the table, the computer included
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        players: Option<u32>,
        /// Dice each player starts with
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        dice: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Price a bid against a known hand and show the computer's answer
    Prob {
        /// The computer's dice, comma separated (e.g. 1,2,2,5,6)
        #[arg(
            long,
            required = true,
            value_delimiter = ',',
            value_parser = clap::value_parser!(u8).range(1..=6)
        )]
        own: Vec<u8>,
        /// Every die on the table, the computer's included
        #[arg(long)]
        total: u32,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        quantity: u32,
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
        face: u8,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Seed for tie-breaking between equally likely options
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Roll a pool of dice and print the faces
    Roll {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        dice: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Play { .. } => "play",
            Commands::Prob { .. } => "prob",
            Commands::Roll { .. } => "roll",
            Commands::Cfg => "cfg",
        }
    }
}
