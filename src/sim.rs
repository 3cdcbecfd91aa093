use crate::cards::{Card, Rank};
use crate::deck::{Deck, DeckError, DECK_SIZE};
use crate::evaluator::Category;
use crate::table::{Table, TableError};
use rand::Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimError {
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// What one seat ended the hand with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatResult {
    pub seat: usize,
    pub hole: [Card; 2],
    pub category: Category,
    pub kicker: Vec<Rank>,
}

/// Summary of a completed hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandOutcome {
    pub community: Vec<Card>,
    pub seats: Vec<SeatResult>,
    /// Seat holding the best hand; one of them when several tie.
    pub winner: usize,
}

impl HandOutcome {
    pub fn winning_result(&self) -> Option<&SeatResult> {
        self.seats.iter().find(|s| s.seat == self.winner)
    }
}

/// Play one hand start to finish on a fresh table: deal, flop, turn, river,
/// classify every seat, pick the best hand. A deck that has already been
/// drawn from is shuffled back to 52 cards first.
///
/// ```
/// use holdem_sim::deck::Deck;
/// use holdem_sim::events::NoopSink;
/// use holdem_sim::sim::play_hand;
/// use std::rc::Rc;
///
/// let mut deck = Deck::new();
/// let outcome = play_hand(6, &mut deck, Rc::new(NoopSink)).unwrap();
/// assert_eq!(outcome.seats.len(), 6);
/// assert_eq!(outcome.community.len(), 5);
/// ```
pub fn play_hand<R: Rng>(
    seats: usize,
    deck: &mut Deck<R>,
    sink: crate::events::SharedSink,
) -> Result<HandOutcome, SimError> {
    let mut table = Table::with_sink(seats, sink)?;
    if deck.len() < DECK_SIZE {
        deck.shuffle();
    }
    table.deal(deck)?;
    deck.flop()?;
    deck.add_community_card()?;
    deck.add_community_card()?;
    table.evaluate_hands(deck.community())?;
    let winner = table.best_hand()?.seat();

    let seats = table
        .players()
        .iter()
        .filter_map(|p| {
            let c = p.classification()?;
            let hole = p.hole()?;
            Some(SeatResult {
                seat: p.seat(),
                hole: hole.as_array(),
                category: c.category(),
                kicker: c.kicker().to_vec(),
            })
        })
        .collect();

    Ok(HandOutcome { community: deck.community().as_slice().to_vec(), seats, winner })
}
