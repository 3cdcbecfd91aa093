//! Observation hooks for a simulated hand.
//!
//! The deck and the table report what happens through an [`EventSink`]
//! handed to them at construction. [`LogSink`] forwards every event to the
//! `log` facade; installing a logger is left to the binary.

use crate::cards::Card;
use crate::evaluator::Classification;
use crate::hand::HoleCards;
use std::rc::Rc;

/// Receiver for hand lifecycle events. Every hook defaults to a no-op.
pub trait EventSink {
    fn seated(&self, _seats: usize) {}
    fn shuffled(&self) {}
    fn card_drawn(&self, _card: Card, _remaining: usize) {}
    fn community_card_added(&self, _card: Card, _community: &[Card]) {}
    fn hole_cards_dealt(&self, _seat: usize, _hole: &HoleCards) {}
    fn hand_classified(&self, _seat: usize, _classification: &Classification) {}
    fn winner_determined(&self, _seat: usize, _classification: &Classification) {}
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {}

/// Writes events as `log` records: `info` for the hand flow, `debug` for
/// individual draws.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn seated(&self, seats: usize) {
        log::info!("Seating {seats} players at the table.");
    }

    fn shuffled(&self) {
        log::info!("Shuffling deck.");
    }

    fn card_drawn(&self, card: Card, remaining: usize) {
        log::debug!("Drew {card}, {remaining} cards left.");
    }

    fn community_card_added(&self, card: Card, community: &[Card]) {
        log::info!("Adding community card: {card} (board: {})", join(community));
    }

    fn hole_cards_dealt(&self, seat: usize, hole: &HoleCards) {
        log::info!("Player {seat} dealt {hole}.");
    }

    fn hand_classified(&self, seat: usize, classification: &Classification) {
        log::info!(
            "Player {seat} has a {}. With a kicker {:?}. All cards: {}",
            classification.category(),
            classification.strength().kicker_values(),
            join(&classification.cards),
        );
    }

    fn winner_determined(&self, seat: usize, classification: &Classification) {
        log::info!("Player {seat} has the best hand with a {}.", classification.category());
    }
}

/// Shared handle so one sink can observe both the deck and the table.
pub type SharedSink = Rc<dyn EventSink>;

pub fn log_sink() -> SharedSink {
    Rc::new(LogSink)
}

fn join(cards: &[Card]) -> String {
    cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}


#[cfg(test)]
mod tests {
    use super::testing::Recorder;
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn default_hooks_are_noops() {
        let sink = NoopSink;
        sink.shuffled();
        sink.card_drawn(Card::new(Rank::Ace, Suit::Spades), 51);
    }

    #[test]
    fn join_formats_cards() {
        let cards = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Ten, Suit::Hearts)];
        assert_eq!(join(&cards), "A♠ 10♥");
    }

    #[test]
    fn recorder_counts_by_prefix() {
        let r = Recorder::default();
        r.shuffled();
        r.card_drawn(Card::new(Rank::Two, Suit::Clubs), 51);
        r.card_drawn(Card::new(Rank::Three, Suit::Clubs), 50);
        assert_eq!(r.count("drawn"), 2);
        assert_eq!(r.count("shuffled"), 1);
    }
}
