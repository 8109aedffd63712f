use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dice::Face;

/// A claim that at least `quantity` dice on the table show `face`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Bid {
    /// Number of dice claimed
    pub quantity: u32,
    /// Face claimed (ones count toward any other face)
    pub face: Face,
}

impl Bid {
    pub fn new(quantity: u32, face: Face) -> Self {
        Self { quantity, face }
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.quantity, self.face)
    }
}

/// What the computer does in answer to a bid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Decision {
    /// Declare the previous bid false and end the round
    CallLie,
    /// Outbid the previous bid
    Raise(Bid),
}

/// Smallest quantity on `face` that beats `previous`.
///
/// A bid of `q` ones is as strong as `2q` of any other face, so moving onto
/// ones halves the quantity (rounded up) and moving off ones doubles it plus one.
/// Between non-wild faces a higher face may keep the quantity; an equal or
/// lower face must add one.
///
/// # Examples
///
/// ```
/// use liardice_engine::bid::{minimum_raise, Bid};
/// use liardice_engine::dice::Face;
///
/// let previous = Bid::new(5, Face::Four);
/// assert_eq!(minimum_raise(previous, Face::One), 3);
/// assert_eq!(minimum_raise(previous, Face::Three), 6);
/// assert_eq!(minimum_raise(previous, Face::Four), 6);
/// assert_eq!(minimum_raise(previous, Face::Six), 5);
///
/// let ones = Bid::new(2, Face::One);
/// assert_eq!(minimum_raise(ones, Face::One), 3);
/// assert_eq!(minimum_raise(ones, Face::Two), 5);
/// ```
pub fn minimum_raise(previous: Bid, face: Face) -> u32 {
    let q = previous.quantity;
    match (previous.face.is_wild(), face.is_wild()) {
        (false, true) => q.div_ceil(2),
        (false, false) if face > previous.face => q,
        (false, false) => q.saturating_add(1),
        (true, true) => q.saturating_add(1),
        (true, false) => q.saturating_mul(2).saturating_add(1),
    }
}
