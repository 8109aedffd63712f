use serde::{Deserialize, Serialize};

use crate::bid::{minimum_raise, Bid};
use crate::dice::{all_faces, Face, FaceCounts};

/// Index of the "previous bid is a lie" entry.
pub const LIE: usize = 0;

/// Number of entries: the lie entry plus one per face.
pub const TABLE_LEN: usize = 7;

/// One row of the [`BidTable`].
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BidEntry {
    /// Minimal quantity for a raise on this face (unused for the lie entry)
    pub quantity: u32,
    /// Chance the raise is true, or for the lie entry, that the previous bid is false
    pub probability: f64,
}

/// Probabilities of every option open to the computer.
///
/// Entry [`LIE`] holds the chance that the previous bid is false; entry `i`
/// for `i` in 1..=6 holds the smallest valid raise on face `i` and the chance
/// that raise is true. A table is only ever built whole.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BidTable {
    entries: [BidEntry; TABLE_LEN],
}

impl BidTable {
    /// Table before any bid is made, from the engine's own dice alone.
    /// Faces 2..=6 that are held are certain at their held count; ones are
    /// never offered as an opening bid.
    pub fn seeded(own: &FaceCounts) -> Self {
        let mut entries = [BidEntry::default(); TABLE_LEN];
        entries[Face::One.value() as usize] = BidEntry {
            quantity: own[Face::One.index()],
            probability: 0.0,
        };
        for face in all_faces().into_iter().filter(|f| !f.is_wild()) {
            let held = own[face.index()];
            if held > 0 {
                entries[face.value() as usize] = BidEntry {
                    quantity: held,
                    probability: 1.0,
                };
            }
        }
        Self { entries }
    }

    /// Table answering `previous`, with `probability` giving the chance any
    /// bid is true.
    pub fn after_bid<F>(previous: Bid, mut probability: F) -> Self
    where
        F: FnMut(u32, Face) -> f64,
    {
        let mut entries = [BidEntry::default(); TABLE_LEN];
        entries[LIE] = BidEntry {
            quantity: 0,
            probability: 1.0 - probability(previous.quantity, previous.face),
        };
        for face in all_faces() {
            let quantity = minimum_raise(previous, face);
            entries[face.value() as usize] = BidEntry {
                quantity,
                probability: probability(quantity, face),
            };
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[BidEntry; TABLE_LEN] {
        &self.entries
    }

    pub fn lie(&self) -> BidEntry {
        self.entries[LIE]
    }

    pub fn raise(&self, face: Face) -> BidEntry {
        self.entries[face.value() as usize]
    }

    /// Indices in `candidates` whose probability equals the best among them.
    pub fn best_indices(&self, candidates: impl IntoIterator<Item = usize>) -> Vec<usize> {
        let candidates: Vec<usize> = candidates.into_iter().collect();
        let best = candidates
            .iter()
            .map(|&i| self.entries[i].probability)
            .fold(f64::NEG_INFINITY, f64::max);
        candidates
            .into_iter()
            .filter(|&i| self.entries[i].probability == best)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_table_is_certain_on_held_faces() {
        let table = BidTable::seeded(&[1, 2, 0, 0, 1, 1]);
        assert_eq!(table.lie(), BidEntry::default());
        assert_eq!(
            table.raise(Face::One),
            BidEntry {
                quantity: 1,
                probability: 0.0
            }
        );
        assert_eq!(table.raise(Face::Two).probability, 1.0);
        assert_eq!(table.raise(Face::Two).quantity, 2);
        assert_eq!(table.raise(Face::Three), BidEntry::default());
        assert_eq!(table.raise(Face::Five).quantity, 1);
    }

    #[test]
    fn best_indices_returns_every_tie() {
        let table = BidTable::seeded(&[0, 1, 0, 3, 0, 1]);
        assert_eq!(table.best_indices(0..TABLE_LEN), vec![2, 4, 6]);
        assert_eq!(table.best_indices([1, 3, 5]), vec![1, 3, 5]);
    }

    #[test]
    fn table_serializes_as_seven_entries() {
        let json = serde_json::to_value(BidTable::seeded(&[0; 6])).unwrap();
        assert_eq!(json["entries"].as_array().map(Vec::len), Some(TABLE_LEN));
    }
}
