use crate::cards::{Card, Rank, Suit};
use crate::events::{log_sink, SharedSink};
use crate::hand::Community;
use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck exhausted: no cards left to draw")]
    Exhausted,
    #[error("community full: {requested} more card(s) requested, {available} slot(s) left")]
    CommunityFull { requested: usize, available: usize },
}

/// A 52-card deck plus the community cards revealed from it.
///
/// Draws pick uniformly from the remaining pool and never put a card back, so
/// the remaining pool, the community and every dealt hand stay disjoint.
/// `Deck::new` draws from the thread-local CSPRNG (OS-seeded); a seeded deck
/// exists for reproducible tests.
///
/// ```
/// use holdem_sim::deck::Deck;
///
/// let mut deck = Deck::new();
/// assert_eq!(deck.len(), 52);
/// deck.flop().unwrap();
/// deck.add_community_card().unwrap();
/// deck.add_community_card().unwrap();
/// assert!(deck.community().is_complete());
/// assert_eq!(deck.len(), 47);
/// ```
pub struct Deck<R = ThreadRng> {
    remaining: Vec<Card>,
    community: Community,
    rng: R,
    sink: SharedSink,
}

impl Deck<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for Deck<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck<ChaCha8Rng> {
    /// Deck with a reproducible draw order. Not for real deals.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Deck<R> {
    /// Full, shuffled deck drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self::with_rng_and_sink(rng, log_sink())
    }

    pub fn with_rng_and_sink(rng: R, sink: SharedSink) -> Self {
        let mut deck = Self {
            remaining: Vec::with_capacity(DECK_SIZE),
            community: Community::new(),
            rng,
            sink,
        };
        deck.shuffle();
        deck
    }

    /// Replace the event sink; the deck keeps its cards.
    pub fn with_sink(mut self, sink: SharedSink) -> Self {
        self.sink = sink;
        self
    }

    /// Restore all 52 cards to the pool and clear the community.
    pub fn shuffle(&mut self) {
        self.remaining.clear();
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                self.remaining.push(Card::new(rank, suit));
            }
        }
        self.community.clear();
        self.sink.shuffled();
    }

    /// Remove one card chosen uniformly from the remaining pool.
    pub fn draw_card(&mut self) -> Result<Card, DeckError> {
        if self.remaining.is_empty() {
            return Err(DeckError::Exhausted);
        }
        let idx = self.rng.random_range(0..self.remaining.len());
        let card = self.remaining.swap_remove(idx);
        self.sink.card_drawn(card, self.remaining.len());
        Ok(card)
    }

    /// Reveal three community cards.
    pub fn flop(&mut self) -> Result<(), DeckError> {
        self.reserve_community(3)?;
        for _ in 0..3 {
            self.add_community_card()?;
        }
        Ok(())
    }

    /// Reveal one community card (the turn or the river after a flop).
    pub fn add_community_card(&mut self) -> Result<Card, DeckError> {
        self.reserve_community(1)?;
        let card = self.draw_card()?;
        self.community.push(card);
        self.sink.community_card_added(card, self.community.as_slice());
        Ok(card)
    }

    fn reserve_community(&self, requested: usize) -> Result<(), DeckError> {
        let available = self.community.remaining_slots();
        if requested > available {
            return Err(DeckError::CommunityFull { requested, available });
        }
        if requested > self.remaining.len() {
            return Err(DeckError::Exhausted);
        }
        Ok(())
    }

    pub fn community(&self) -> &Community {
        &self.community
    }

    /// Cards not yet drawn, in no particular order.
    pub fn remaining(&self) -> &[Card] {
        &self.remaining
    }

    pub fn contains(&self, card: Card) -> bool {
        self.remaining.contains(&card)
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}

impl<R> fmt::Debug for Deck<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deck")
            .field("remaining", &self.remaining.len())
            .field("community", &self.community)
            .finish_non_exhaustive()
    }
}
