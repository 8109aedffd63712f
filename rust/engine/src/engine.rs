use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, trace};

use crate::bid::{Bid, Decision};
use crate::dice::{all_faces, DicePool, Face, FaceCounts};
use crate::errors::GameError;
use crate::probability::bid_probability;
use crate::table::{BidTable, LIE, TABLE_LEN};

/// The computer player's side of the table: its own dice, the number of dice
/// still in play, and the probability of every bid it could answer with.
///
/// The random source is injected; [`BidEngine::new_with_seed`] uses ChaCha20
/// so a seed reproduces every roll and every tie-break.
///
/// # Examples
///
/// ```
/// use liardice_engine::bid::Decision;
/// use liardice_engine::dice::Face;
/// use liardice_engine::engine::BidEngine;
///
/// let mut engine = BidEngine::new_with_seed(2, 5, 42).expect("valid table");
/// assert_eq!(engine.total_dice(), 10);
/// assert_eq!(engine.own_dice().len(), 5);
///
/// // More dice than the table holds is certainly a lie.
/// engine.update_bid_probabilities(11, Face::Three).unwrap();
/// assert_eq!(engine.decide_next_action(), Decision::CallLie);
///
/// engine.advance_round(true);
/// assert_eq!(engine.round(), 1);
/// assert_eq!(engine.total_dice(), 9);
/// assert_eq!(engine.own_dice().len(), 4);
/// ```
#[derive(Debug)]
pub struct BidEngine<R = ChaCha20Rng> {
    rng: R,
    pool: DicePool,
    table: BidTable,
    round: u32,
    total_dice: u32,
}

impl BidEngine<ChaCha20Rng> {
    pub fn new_with_seed(
        num_players: u32,
        dice_per_player: u32,
        seed: u64,
    ) -> Result<Self, GameError> {
        Self::with_rng(num_players, dice_per_player, ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> BidEngine<R> {
    pub fn with_rng(num_players: u32, dice_per_player: u32, mut rng: R) -> Result<Self, GameError> {
        let total_dice = validate_table(num_players, dice_per_player)?;
        let pool = DicePool::new(dice_per_player as usize, &mut rng);
        let table = BidTable::seeded(&pool.face_counts());
        debug!(num_players, dice_per_player, total_dice, "engine initialized");
        Ok(Self {
            rng,
            pool,
            table,
            round: 0,
            total_dice,
        })
    }

    /// Engine for a table already in progress: `pool` is the computer's hand
    /// and `total_dice` counts every die in play, the pool included.
    pub fn from_pool(pool: DicePool, total_dice: u32, rng: R) -> Result<Self, GameError> {
        let own_dice = pool.len() as u32;
        if pool.is_empty() || own_dice > total_dice {
            return Err(GameError::InvalidTable {
                own_dice,
                total_dice,
            });
        }
        let table = BidTable::seeded(&pool.face_counts());
        Ok(Self {
            rng,
            pool,
            table,
            round: 0,
            total_dice,
        })
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn total_dice(&self) -> u32 {
        self.total_dice
    }

    pub fn own_dice(&self) -> &DicePool {
        &self.pool
    }

    pub fn face_counts(&self) -> FaceCounts {
        self.pool.face_counts()
    }

    pub fn table(&self) -> &BidTable {
        &self.table
    }

    /// Dice in play that are not in the engine's own pool.
    pub fn unknown_dice(&self) -> u32 {
        self.total_dice.saturating_sub(self.pool.len() as u32)
    }

    /// Chance that at least `quantity` dice on the whole table show `face`.
    pub fn compute_probability(&self, quantity: u32, face: Face) -> f64 {
        let p = bid_probability(
            quantity,
            face,
            &self.pool.face_counts(),
            self.unknown_dice(),
            self.total_dice,
        );
        trace!(quantity, face = face.value(), probability = p, "bid probability");
        p
    }

    /// Rebuilds the whole table as the answer to a bid of `quantity` x `face`.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidArgument`] when `quantity` is zero; the table is
    /// left untouched.
    pub fn update_bid_probabilities(&mut self, quantity: u32, face: Face) -> Result<(), GameError> {
        if quantity == 0 {
            return Err(GameError::InvalidArgument { quantity });
        }
        let previous = Bid::new(quantity, face);
        let table = BidTable::after_bid(previous, |q, f| self.compute_probability(q, f));
        debug!(
            %previous,
            lie = table.lie().probability,
            "bid probabilities updated"
        );
        self.table = table;
        Ok(())
    }

    /// Picks the most likely option in the table.
    ///
    /// A previous bid that is certainly false is always called. Otherwise the
    /// best entry wins, with exact ties broken uniformly at random; the lie
    /// entry may win that draw too.
    pub fn decide_next_action(&mut self) -> Decision {
        let decision = if self.table.lie().probability == 1.0 {
            Decision::CallLie
        } else {
            let best = self.table.best_indices(0..TABLE_LEN);
            match self.pick(&best) {
                LIE => Decision::CallLie,
                index => self.raise_at(index),
            }
        };
        debug!(?decision, round = self.round, "next action");
        decision
    }

    /// Opening bid for a round: the best-supported face from 2 to 6, ties
    /// broken at random. Never opens on ones and never bids fewer than one die.
    pub fn decide_first_bid(&mut self) -> Bid {
        let candidates = all_faces()
            .into_iter()
            .filter(|f| !f.is_wild())
            .map(|f| f.value() as usize);
        let best = self.table.best_indices(candidates);
        let index = self.pick(&best);
        let bid = match self.raise_at(index) {
            Decision::Raise(bid) => Bid::new(bid.quantity.max(1), bid.face),
            Decision::CallLie => Bid::new(1, Face::Two),
        };
        debug!(%bid, round = self.round, "first bid");
        bid
    }

    /// Moves to the next round. The table always shrinks by one die; the
    /// engine's own pool loses one only when `lose_die` is set.
    pub fn advance_round(&mut self, lose_die: bool) {
        self.round += 1;
        self.total_dice = self.total_dice.saturating_sub(1);
        if lose_die {
            self.pool.remove_one();
        }
        self.pool.roll_all(&mut self.rng);
        self.table = BidTable::seeded(&self.pool.face_counts());
        debug!(
            round = self.round,
            total_dice = self.total_dice,
            own_dice = self.pool.len(),
            lose_die,
            "round advanced"
        );
    }

    /// Starts over with a new table size.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidConfiguration`] when either argument is zero; the
    /// engine is left untouched.
    pub fn reset(&mut self, num_players: u32, dice_per_player: u32) -> Result<(), GameError> {
        let total_dice = validate_table(num_players, dice_per_player)?;
        self.pool.fit_to(dice_per_player as usize, &mut self.rng);
        self.round = 0;
        self.total_dice = total_dice;
        self.table = BidTable::seeded(&self.pool.face_counts());
        debug!(num_players, dice_per_player, total_dice, "engine reset");
        Ok(())
    }

    fn pick(&mut self, indices: &[usize]) -> usize {
        match indices.len() {
            0 => LIE,
            1 => indices[0],
            n => indices[self.rng.random_range(0..n)],
        }
    }

    fn raise_at(&self, index: usize) -> Decision {
        match Face::from_u8(index as u8) {
            Some(face) => Decision::Raise(Bid::new(self.table.raise(face).quantity, face)),
            None => Decision::CallLie,
        }
    }
}

fn validate_table(num_players: u32, dice_per_player: u32) -> Result<u32, GameError> {
    if num_players == 0 || dice_per_player == 0 {
        return Err(GameError::InvalidConfiguration {
            num_players,
            dice_per_player,
        });
    }
    num_players
        .checked_mul(dice_per_player)
        .ok_or(GameError::InvalidConfiguration {
            num_players,
            dice_per_player,
        })
}
