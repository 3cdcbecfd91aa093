use crate::cards::{parse_cards, Card, CardParseError};
use std::collections::HashSet;
use std::str::FromStr;

/// Community cards in a complete Hold'em hand: flop, turn and river.
pub const COMMUNITY_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("hole cards are both {0}")]
    DuplicateHoleCards(Card),
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("community holds at most {COMMUNITY_SIZE} cards, got {0}", COMMUNITY_SIZE = COMMUNITY_SIZE)]
    TooManyCommunityCards(usize),
    #[error("{0} appears twice in the community")]
    DuplicateCommunityCards(Card),
    #[error("{0} is both a hole card and a community card")]
    Overlap(Card),
    #[error(transparent)]
    CardParse(#[from] CardParseError),
}

/// First card seen a second time, if any.
fn first_repeat(cards: &[Card]) -> Option<Card> {
    let mut seen = HashSet::with_capacity(cards.len());
    cards.iter().copied().find(|&c| !seen.insert(c))
}

/// A player's two private cards, always distinct.
///
/// ```
/// use holdem_sim::hand::HoleCards;
///
/// let hole: HoleCards = "A♠ K♠".parse().unwrap();
/// assert_eq!(hole.to_string(), "A♠ K♠");
/// assert!("A♠ A♠".parse::<HoleCards>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCards([Card; 2]);

impl HoleCards {
    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateHoleCards(a));
        }
        Ok(Self([a, b]))
    }

    /// Hole cards from a dealt hand, which must hold exactly two cards.
    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        match *slice {
            [a, b] => Self::try_new(a, b),
            _ => Err(HandError::HoleCount(slice.len())),
        }
    }

    /// Card dealt in the first pass.
    pub fn first(&self) -> Card {
        self.0[0]
    }

    /// Card dealt in the second pass.
    pub fn second(&self) -> Card {
        self.0[1]
    }

    pub fn as_array(&self) -> [Card; 2] {
        self.0
    }

    pub fn contains(&self, card: Card) -> bool {
        self.0.contains(&card)
    }
}

impl std::fmt::Display for HoleCards {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.0[0], self.0[1])
    }
}

impl FromStr for HoleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(&parse_cards(s)?)
    }
}

/// Shared community cards, revealed as a flop of three followed by the turn
/// and the river. Holds at most five distinct cards.
///
/// ```
/// use holdem_sim::hand::Community;
///
/// let flop: Community = "2c 3c 4c".parse().unwrap();
/// assert_eq!(flop.len(), 3);
/// assert_eq!(flop.remaining_slots(), 2);
/// assert!(!flop.is_complete());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Community {
    cards: Vec<Card>,
}

impl Community {
    pub fn new() -> Self {
        Self { cards: Vec::with_capacity(COMMUNITY_SIZE) }
    }

    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > COMMUNITY_SIZE {
            return Err(HandError::TooManyCommunityCards(cards.len()));
        }
        if let Some(card) = first_repeat(&cards) {
            return Err(HandError::DuplicateCommunityCards(card));
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// True once the river is out.
    pub fn is_complete(&self) -> bool {
        self.cards.len() == COMMUNITY_SIZE
    }

    pub fn remaining_slots(&self) -> usize {
        COMMUNITY_SIZE - self.cards.len()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Callers reserve a slot first; cards come from one deck so they never
    /// repeat.
    pub(crate) fn push(&mut self, card: Card) {
        debug_assert!(self.cards.len() < COMMUNITY_SIZE);
        self.cards.push(card);
    }

    pub(crate) fn clear(&mut self) {
        self.cards.clear();
    }
}

impl FromStr for Community {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Community::try_new(parse_cards(s)?)
    }
}

/// Check that hole cards and community could come from one deck.
///
/// Each type already rejects its own repeats, so only a card shared between
/// the two is left to catch.
///
/// ```
/// use holdem_sim::hand::{validate_holdem, Community, HoleCards};
///
/// let hole: HoleCards = "As Ks".parse().unwrap();
/// validate_holdem(&hole, &"2c 3c 4c".parse::<Community>().unwrap()).unwrap();
/// assert!(validate_holdem(&hole, &"2c As 4c".parse::<Community>().unwrap()).is_err());
/// ```
pub fn validate_holdem(hole: &HoleCards, community: &Community) -> Result<(), HandError> {
    match community.as_slice().iter().copied().find(|&c| hole.contains(c)) {
        Some(card) => Err(HandError::Overlap(card)),
        None => Ok(()),
    }
}
