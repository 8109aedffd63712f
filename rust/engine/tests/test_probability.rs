use liardice_engine::bid::Decision;
use liardice_engine::dice::{all_faces, DicePool, Face};
use liardice_engine::engine::BidEngine;
use liardice_engine::probability::{bid_probability, known_toward};
use liardice_engine::session::GameSession;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Own dice 1, 2, 2, 5, 6 at a table of ten.
fn sample_engine() -> BidEngine {
    let pool = DicePool::from_faces(&[Face::Two, Face::Two, Face::Five, Face::Six, Face::One]);
    BidEngine::from_pool(pool, 10, ChaCha20Rng::seed_from_u64(0)).expect("valid table")
}

#[test]
fn held_dice_with_wildcards_make_a_bid_certain() {
    let engine = sample_engine();
    assert_eq!(engine.unknown_dice(), 5);
    assert_eq!(engine.compute_probability(2, Face::Two), 1.0);
    assert_eq!(engine.compute_probability(3, Face::Two), 1.0);
    assert_eq!(engine.compute_probability(2, Face::Six), 1.0);
}

#[test]
fn bid_needing_three_hidden_dice_matches_the_binomial_tail() {
    // sum over k = 3..5 of C(5,k) (1/3)^k (2/3)^(5-k) = (40 + 10 + 1) / 243
    let engine = sample_engine();
    assert_eq!(engine.compute_probability(4, Face::Three), 51.0 / 243.0);
}

#[test]
fn bids_on_ones_count_only_literal_ones() {
    // one one held; at least one more among five hidden dice at 1/6 each
    let engine = sample_engine();
    assert_eq!(engine.compute_probability(1, Face::One), 1.0);
    assert_eq!(engine.compute_probability(2, Face::One), 4651.0 / 7776.0);
}

#[test]
fn bids_beyond_the_table_are_impossible() {
    let engine = sample_engine();
    assert_eq!(engine.compute_probability(11, Face::Four), 0.0);
    assert_eq!(engine.compute_probability(11, Face::One), 0.0);
}

#[test]
fn bids_needing_more_than_the_hidden_dice_are_impossible() {
    let engine = sample_engine();
    // one wildcard held toward threes, so eight would have to be hidden
    assert_eq!(engine.compute_probability(9, Face::Three), 0.0);
}

#[test]
fn zero_quantity_is_always_true() {
    let engine = sample_engine();
    for face in all_faces() {
        assert_eq!(engine.compute_probability(0, face), 1.0);
    }
}

#[test]
fn thirty_hidden_dice_stay_finite_and_ordered() {
    let known = [0, 0, 0, 0, 0, 0];
    let p_low = bid_probability(5, Face::Four, &known, 30, 30);
    let p_mid = bid_probability(10, Face::Four, &known, 30, 30);
    let p_high = bid_probability(25, Face::Four, &known, 30, 30);
    assert!(p_low.is_finite() && p_high.is_finite());
    assert!(p_low > p_mid && p_mid > p_high && p_high > 0.0);
}

#[test]
fn fifteen_hundred_hidden_dice_give_real_probabilities() {
    let known = [0; 6];
    let far = bid_probability(700, Face::Four, &known, 1500, 1500);
    let middle = bid_probability(500, Face::Four, &known, 1500, 1500);
    let ones = bid_probability(400, Face::One, &known, 1500, 1500);
    for p in [far, middle, ones] {
        assert!(p.is_finite() && (0.0..=1.0).contains(&p), "got {}", p);
    }
    assert!(far < 1e-6, "far tail = {}", far);
    assert!((middle - 0.5).abs() < 0.03, "middle = {}", middle);
    assert!(ones < 1e-6, "ones tail = {}", ones);
}

#[test]
fn crowded_table_still_raises_an_easy_bid() {
    let mut game = GameSession::start_game(300, 5, 17).expect("valid game");
    assert_eq!(game.engine().unknown_dice(), 1495);
    let decision = game.respond_to_bid(2, Face::Four).expect("positive quantity");
    assert!(matches!(decision, Decision::Raise(_)), "got {:?}", decision);
    for entry in game.engine().table().entries() {
        assert!(entry.probability.is_finite(), "{:?}", entry);
    }
}

fn arb_hand() -> impl Strategy<Value = Vec<Face>> {
    prop::collection::vec(1u8..=6, 1..=8)
        .prop_map(|vals| vals.into_iter().filter_map(Face::from_u8).collect())
}

fn arb_face() -> impl Strategy<Value = Face> {
    (1u8..=6).prop_map(|v| Face::from_u8(v).unwrap_or(Face::Two))
}

proptest! {
    /// Asking for more dice never makes a bid more likely.
    #[test]
    fn prop_probability_non_increasing_in_quantity(
        hand in arb_hand(),
        hidden in 0u32..=120,
        face in arb_face(),
    ) {
        let total = hand.len() as u32 + hidden;
        let engine = BidEngine::from_pool(
            DicePool::from_faces(&hand),
            total,
            ChaCha20Rng::seed_from_u64(0),
        ).unwrap();
        let mut previous = engine.compute_probability(0, face);
        for quantity in 1..=total + 2 {
            let p = engine.compute_probability(quantity, face);
            prop_assert!(p <= previous, "q={} p={} previous={}", quantity, p, previous);
            prop_assert!((0.0..=1.0).contains(&p));
            previous = p;
        }
    }

    /// Known dice settle a bid outright; the table size caps it.
    #[test]
    fn prop_known_dice_and_table_size_bound_the_answer(
        hand in arb_hand(),
        hidden in 0u32..=120,
        face in arb_face(),
    ) {
        let total = hand.len() as u32 + hidden;
        let engine = BidEngine::from_pool(
            DicePool::from_faces(&hand),
            total,
            ChaCha20Rng::seed_from_u64(0),
        ).unwrap();
        let held = known_toward(face, &engine.face_counts());
        for quantity in 0..=held {
            prop_assert_eq!(engine.compute_probability(quantity, face), 1.0);
        }
        prop_assert_eq!(engine.compute_probability(total + 1, face), 0.0);
    }
}
