//! holdem-sim: single-hand Texas Hold'em simulator
//!
//! Goals:
//! - Deal one hand from a fairly shuffled 52-card deck to up to 23 seats
//! - Classify every seat's seven cards into one of nine categories plus a kicker
//! - Order hands by (category, kicker) and pick the winner
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: classify a hand
//! ```
//! use holdem_sim::evaluator::{classify_holdem, Category};
//! use holdem_sim::hand::{Community, HoleCards};
//!
//! let hole: HoleCards = "A♥ 2♦".parse().unwrap();
//! let community: Community = "3♠ 4♣ 5♥ 9♦ 10♣".parse().unwrap();
//!
//! let c = classify_holdem(&hole, &community).unwrap();
//! assert_eq!(c.category(), Category::Straight);
//! assert_eq!(c.strength().kicker_values()[0], 5);
//! ```
//!
//! ## Simulate
//! ```sh
//! cargo run --bin holdem-sim -- --players 9
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod events;
pub mod hand;
pub mod sim;
pub mod table;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
