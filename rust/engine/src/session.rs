use rand::Rng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::bid::{Bid, Decision};
use crate::dice::{Face, FaceCounts};
use crate::engine::BidEngine;
use crate::errors::GameError;

/// Where the current round stands, from the front-end's point of view.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// New round, nobody has bid yet
    AwaitingFirstBid,
    /// Bids are being exchanged
    AwaitingResponse,
    /// A bid was called and the dice were revealed
    RoundResolved,
    /// One side is out of dice
    GameOver,
}

/// Outcome of the game from the computer's side.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    /// Every die left on the table belongs to the computer
    ComputerWon,
    /// The computer has no dice left
    ComputerLost,
}

/// Table state after a reveal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub own_dice_remaining: u32,
    pub total_dice_remaining: u32,
    /// Round number now being played
    pub round: u32,
    pub status: GameStatus,
}

/// One game against the computer, held by whoever drives the UI.
///
/// # Examples
///
/// ```
/// use liardice_engine::session::{GameSession, GameStatus};
///
/// let mut game = GameSession::start_game(2, 1, 7).expect("valid game");
/// let opening = game.place_first_bid();
/// assert!(opening.quantity >= 1);
///
/// let outcome = game.reveal_and_advance(true);
/// assert_eq!(outcome.own_dice_remaining, 0);
/// assert_eq!(outcome.status, GameStatus::ComputerLost);
/// ```
#[derive(Debug)]
pub struct GameSession<R = ChaCha20Rng> {
    engine: BidEngine<R>,
    phase: Phase,
}

impl GameSession<ChaCha20Rng> {
    pub fn start_game(num_players: u32, dice_per_player: u32, seed: u64) -> Result<Self, GameError> {
        Ok(Self::from_engine(BidEngine::new_with_seed(
            num_players,
            dice_per_player,
            seed,
        )?))
    }
}

impl<R: Rng> GameSession<R> {
    pub fn with_rng(num_players: u32, dice_per_player: u32, rng: R) -> Result<Self, GameError> {
        Ok(Self::from_engine(BidEngine::with_rng(
            num_players,
            dice_per_player,
            rng,
        )?))
    }

    pub fn from_engine(engine: BidEngine<R>) -> Self {
        info!(
            total_dice = engine.total_dice(),
            own_dice = engine.own_dice().len(),
            "game started"
        );
        let mut session = Self {
            engine,
            phase: Phase::AwaitingFirstBid,
        };
        session.sync_game_over();
        session
    }

    pub fn engine(&self) -> &BidEngine<R> {
        &self.engine
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn own_dice_face_counts(&self) -> FaceCounts {
        self.engine.face_counts()
    }

    /// The computer's dice in ascending order, for the reveal.
    pub fn revealed_dice(&self) -> Vec<Face> {
        self.engine.own_dice().sorted_faces()
    }

    pub fn place_first_bid(&mut self) -> Bid {
        let bid = self.engine.decide_first_bid();
        self.phase = Phase::AwaitingResponse;
        bid
    }

    /// The computer's answer to the human's bid of `quantity` x `face`.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidArgument`] when `quantity` is zero.
    pub fn respond_to_bid(&mut self, quantity: u32, face: Face) -> Result<Decision, GameError> {
        self.engine.update_bid_probabilities(quantity, face)?;
        let decision = self.engine.decide_next_action();
        self.phase = match decision {
            Decision::CallLie => Phase::RoundResolved,
            Decision::Raise(_) => Phase::AwaitingResponse,
        };
        Ok(decision)
    }

    /// Ends the round after the dice were shown. `lose_die` says whether the
    /// computer gives up one of its dice.
    pub fn reveal_and_advance(&mut self, lose_die: bool) -> RoundOutcome {
        self.engine.advance_round(lose_die);
        self.phase = Phase::AwaitingFirstBid;
        self.sync_game_over();
        self.outcome()
    }

    /// # Errors
    ///
    /// [`GameError::InvalidConfiguration`] when either argument is zero; the
    /// current game carries on unchanged.
    pub fn reset_game(&mut self, num_players: u32, dice_per_player: u32) -> Result<(), GameError> {
        self.engine.reset(num_players, dice_per_player)?;
        self.phase = Phase::AwaitingFirstBid;
        self.sync_game_over();
        Ok(())
    }

    pub fn status(&self) -> GameStatus {
        let own = self.engine.own_dice().len() as u32;
        if own == 0 {
            GameStatus::ComputerLost
        } else if own >= self.engine.total_dice() {
            GameStatus::ComputerWon
        } else {
            GameStatus::InProgress
        }
    }

    pub fn outcome(&self) -> RoundOutcome {
        RoundOutcome {
            own_dice_remaining: self.engine.own_dice().len() as u32,
            total_dice_remaining: self.engine.total_dice(),
            round: self.engine.round(),
            status: self.status(),
        }
    }

    fn sync_game_over(&mut self) {
        let status = self.status();
        if status != GameStatus::InProgress {
            info!(?status, round = self.engine.round(), "game over");
            self.phase = Phase::GameOver;
        }
    }
}
