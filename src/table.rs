use crate::cards::{Card, Rank};
use crate::deck::{Deck, DeckError, DECK_SIZE};
use crate::evaluator::{classify_holdem, Category, Classification, EvalError, HandStrength};
use crate::events::{log_sink, SharedSink};
use crate::hand::{Community, HoleCards, COMMUNITY_SIZE};
use core::cmp::Ordering;
use rand::Rng;

/// Most seats one deck can serve: two hole cards each plus the community.
pub const MAX_SEATS: usize = (DECK_SIZE - COMMUNITY_SIZE) / 2;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableError {
    #[error("seat count must be between 1 and {MAX_SEATS}, got {0}", MAX_SEATS = MAX_SEATS)]
    InvalidSeatCount(usize),
    #[error("player {0} already holds cards")]
    AlreadyDealt(usize),
    #[error("player {0} has not been dealt two cards")]
    NotDealt(usize),
    #[error("player {0} has not been classified")]
    NotEvaluated(usize),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error("player {seat}: {source}")]
    Eval { seat: usize, source: EvalError },
}

/// A seated player: seat index, hole cards, and the classification once the
/// community is complete.
///
/// Players order by hand strength alone (category, then kicker); the seat
/// plays no part, so two players with equal strength compare equal.
#[derive(Debug, Clone)]
pub struct Player {
    seat: usize,
    hand: Vec<Card>,
    classification: Option<Classification>,
}

impl Player {
    fn new(seat: usize) -> Self {
        Self { seat, hand: Vec::with_capacity(2), classification: None }
    }

    pub fn seat(&self) -> usize {
        self.seat
    }

    /// Cards dealt so far, in deal order.
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn hole(&self) -> Option<HoleCards> {
        HoleCards::from_slice(&self.hand).ok()
    }

    pub fn classification(&self) -> Option<&Classification> {
        self.classification.as_ref()
    }

    pub fn strength(&self) -> Option<&HandStrength> {
        self.classification.as_ref().map(|c| c.strength())
    }

    pub fn category(&self) -> Option<Category> {
        self.classification.as_ref().map(|c| c.category())
    }

    /// "Full House", "Pair", ...
    pub fn hand_name(&self) -> Option<&'static str> {
        self.category().map(Category::name)
    }

    pub fn kicker(&self) -> Option<&[Rank]> {
        self.classification.as_ref().map(|c| c.kicker())
    }

    /// Classify this player's hole cards against a complete community.
    pub fn classify(&self, community: &Community) -> Result<Classification, TableError> {
        let hole = HoleCards::from_slice(&self.hand).map_err(|_| TableError::NotDealt(self.seat))?;
        classify_holdem(&hole, community).map_err(|source| TableError::Eval { seat: self.seat, source })
    }
}

impl Ord for Player {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength().cmp(&other.strength())
    }
}

impl PartialOrd for Player {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.strength() == other.strength()
    }
}

impl Eq for Player {}

/// A fixed set of seats for one hand.
///
/// ```
/// use holdem_sim::deck::Deck;
/// use holdem_sim::table::Table;
///
/// let mut deck = Deck::new();
/// let mut table = Table::new(4).unwrap();
/// table.deal(&mut deck).unwrap();
/// deck.flop().unwrap();
/// deck.add_community_card().unwrap();
/// deck.add_community_card().unwrap();
/// table.evaluate_hands(deck.community()).unwrap();
/// let best = table.best_hand().unwrap();
/// assert!(best.seat() < 4);
/// ```
pub struct Table {
    players: Vec<Player>,
    sink: SharedSink,
}

impl Table {
    pub fn new(seats: usize) -> Result<Self, TableError> {
        Self::with_sink(seats, log_sink())
    }

    pub fn with_sink(seats: usize, sink: SharedSink) -> Result<Self, TableError> {
        if seats == 0 || seats > MAX_SEATS {
            return Err(TableError::InvalidSeatCount(seats));
        }
        sink.seated(seats);
        let players = (0..seats).map(Player::new).collect();
        Ok(Self { players, sink })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn seats(&self) -> usize {
        self.players.len()
    }

    /// Deal two hole cards per seat: one card to every seat in order, then a
    /// second round the same way.
    pub fn deal<R: Rng>(&mut self, deck: &mut Deck<R>) -> Result<(), TableError> {
        if let Some(p) = self.players.iter().find(|p| !p.hand.is_empty()) {
            return Err(TableError::AlreadyDealt(p.seat));
        }
        for _ in 0..2 {
            for player in self.players.iter_mut() {
                let card = deck.draw_card()?;
                player.hand.push(card);
            }
        }
        for player in &self.players {
            if let Some(hole) = player.hole() {
                self.sink.hole_cards_dealt(player.seat, &hole);
            }
        }
        Ok(())
    }

    /// Classify every player against the final community. Nothing is stored
    /// unless every seat classifies.
    pub fn evaluate_hands(&mut self, community: &Community) -> Result<(), TableError> {
        let results =
            self.players.iter().map(|p| p.classify(community)).collect::<Result<Vec<_>, _>>()?;
        for (player, classification) in self.players.iter_mut().zip(results) {
            self.sink.hand_classified(player.seat, &classification);
            player.classification = Some(classification);
        }
        Ok(())
    }

    /// The player holding the strongest hand.
    ///
    /// Ties are not split: when several players share the best strength, one
    /// of them is returned.
    pub fn best_hand(&self) -> Result<&Player, TableError> {
        if let Some(p) = self.players.iter().find(|p| p.classification.is_none()) {
            return Err(TableError::NotEvaluated(p.seat));
        }
        let best = self.players.iter().max().ok_or(TableError::InvalidSeatCount(0))?;
        if let Some(c) = best.classification() {
            self.sink.winner_determined(best.seat, c);
        }
        Ok(best)
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table").field("players", &self.players).finish_non_exhaustive()
    }
}
