use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Number of faces on every die in play.
pub const FACES: usize = 6;

/// Tally of a set of dice: index `i` holds the number of dice showing face `i + 1`.
pub type FaceCounts = [u32; FACES];

/// Face value shown by a six-sided die.
/// `One` is wild: it counts toward every other face.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Face {
    /// Wildcard face (1)
    One = 1,
    /// Face 2
    Two,
    /// Face 3
    Three,
    /// Face 4
    Four,
    /// Face 5
    Five,
    /// Face 6
    Six,
}

impl Face {
    pub fn from_u8(v: u8) -> Option<Face> {
        match v {
            1 => Some(Face::One),
            2 => Some(Face::Two),
            3 => Some(Face::Three),
            4 => Some(Face::Four),
            5 => Some(Face::Five),
            6 => Some(Face::Six),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Position of this face in a [`FaceCounts`] tally.
    pub fn index(self) -> usize {
        self as usize - 1
    }

    pub fn is_wild(self) -> bool {
        self == Face::One
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Face {
        all_faces()[rng.random_range(0..FACES)]
    }
}

pub fn all_faces() -> [Face; FACES] {
    [
        Face::One,
        Face::Two,
        Face::Three,
        Face::Four,
        Face::Five,
        Face::Six,
    ]
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A single die. Two dice showing the same face are still distinct dice.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Die {
    face: Face,
}

impl Die {
    pub fn new(face: Face) -> Self {
        Self { face }
    }

    pub fn rolled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            face: Face::random(rng),
        }
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Face {
        self.face = Face::random(rng);
        self.face
    }
}

/// The dice held by one player.
///
/// The pool never owns a random source; every operation that rolls borrows
/// the caller's, so a seeded generator reproduces the same faces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DicePool {
    dice: Vec<Die>,
}

impl DicePool {
    pub fn new<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        Self {
            dice: (0..size).map(|_| Die::rolled(rng)).collect(),
        }
    }

    pub fn from_faces(faces: &[Face]) -> Self {
        Self {
            dice: faces.iter().copied().map(Die::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    pub fn roll_all<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for die in &mut self.dice {
            die.roll(rng);
        }
    }

    pub fn face_counts(&self) -> FaceCounts {
        let mut counts = [0; FACES];
        for die in &self.dice {
            counts[die.face().index()] += 1;
        }
        counts
    }

    /// Removes one die. An empty pool is left as is and `None` is returned.
    pub fn remove_one(&mut self) -> Option<Die> {
        let removed = self.dice.pop();
        if removed.is_none() {
            debug!("remove_one called on an empty dice pool");
        }
        removed
    }

    /// Discards every die and replaces them with `size` freshly rolled ones.
    pub fn resize<R: Rng + ?Sized>(&mut self, size: usize, rng: &mut R) {
        self.dice.clear();
        self.dice.extend((0..size).map(|_| Die::rolled(rng)));
    }

    /// Brings the pool to exactly `size` dice: a larger pool is rebuilt from
    /// scratch, a smaller one is topped up with fresh dice.
    pub fn fit_to<R: Rng + ?Sized>(&mut self, size: usize, rng: &mut R) {
        if self.dice.len() > size {
            self.resize(size, rng);
            return;
        }
        while self.dice.len() < size {
            self.dice.push(Die::rolled(rng));
        }
    }

    pub fn sorted_faces(&self) -> Vec<Face> {
        let mut faces: Vec<Face> = self.dice.iter().map(Die::face).collect();
        faces.sort_unstable();
        faces
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn face_round_trips_through_u8() {
        for face in all_faces() {
            assert_eq!(Face::from_u8(face.value()), Some(face));
        }
        assert_eq!(Face::from_u8(0), None);
        assert_eq!(Face::from_u8(7), None);
    }

    #[test]
    fn only_one_is_wild() {
        let wild: Vec<Face> = all_faces().into_iter().filter(|f| f.is_wild()).collect();
        assert_eq!(wild, vec![Face::One]);
    }

    #[test]
    fn random_faces_cover_all_six_values() {
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let mut seen = [false; FACES];
        for _ in 0..600 {
            seen[Face::random(&mut rng).index()] = true;
        }
        assert!(seen.iter().all(|s| *s), "every face should appear: {:?}", seen);
    }

    #[test]
    fn equal_faces_are_kept_as_separate_dice() {
        let pool = DicePool::from_faces(&[Face::Four, Face::Four, Face::Four]);
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.face_counts(), [0, 0, 0, 3, 0, 0]);
    }
}
