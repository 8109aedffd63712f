//! # liardice-engine: Liar's Dice bidding core
//!
//! The computer player for a single-player game of Liar's Dice. It knows its
//! own dice, counts every other die as unknown, and prices each bid with the
//! exact binomial probability under the wildcard-ones rule.
//!
//! ## Core Modules
//!
//! - [`dice`] - Faces, dice and the computer's dice pool
//! - [`probability`] - Exact chance that a bid is true
//! - [`bid`] - Bids, decisions and the minimal-raise rule
//! - [`table`] - The seven-entry bid probability table
//! - [`engine`] - Round state, table updates and action selection
//! - [`session`] - Caller-held game session used by front-ends
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use liardice_engine::bid::Decision;
//! use liardice_engine::dice::Face;
//! use liardice_engine::session::GameSession;
//!
//! let mut game = GameSession::start_game(2, 5, 42).expect("valid game");
//! let opening = game.place_first_bid();
//! println!("computer opens with {}", opening);
//!
//! match game.respond_to_bid(4, Face::Three).expect("positive quantity") {
//!     Decision::CallLie => println!("computer calls"),
//!     Decision::Raise(bid) => println!("computer raises to {}", bid),
//! }
//! ```
//!
//! ## Deterministic Play
//!
//! Rolls and tie-breaks draw from an injected random source. The seeded
//! constructors use ChaCha20, so equal seeds replay identical games:
//!
//! ```rust
//! use liardice_engine::engine::BidEngine;
//!
//! let a = BidEngine::new_with_seed(2, 5, 7).unwrap();
//! let b = BidEngine::new_with_seed(2, 5, 7).unwrap();
//! assert_eq!(a.face_counts(), b.face_counts());
//! ```

pub mod bid;
pub mod dice;
pub mod engine;
pub mod errors;
pub mod probability;
pub mod session;
pub mod table;
