pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_counts;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use crate::hand::{validate_holdem, Community, HandError, HoleCards, COMMUNITY_SIZE};
use core::cmp::Ordering;
use std::fmt;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    /// Category rank, 0 (High Card) through 8 (Straight Flush).
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Comparable hand strength: category first, then the kicker compared
/// element by element. Higher is better; equal strengths are a genuine tie.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandStrength {
    category: Category,
    kicker: Vec<Rank>,
}

impl HandStrength {
    pub fn new(category: Category, kicker: Vec<Rank>) -> Self {
        Self { category, kicker }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Tie-break ranks, highest priority first (at most five).
    pub fn kicker(&self) -> &[Rank] {
        &self.kicker
    }

    /// Kicker as raw rank values, e.g. `[14, 13, 9]`.
    pub fn kicker_values(&self) -> Vec<u8> {
        self.kicker.iter().map(|r| r.value()).collect()
    }
}

/// Result of classifying a seven-card hand. `strength` drives ordering.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Classification {
    pub cards: [Card; 7],
    strength: HandStrength,
}

impl Classification {
    pub fn category(&self) -> Category {
        self.strength.category
    }

    pub fn kicker(&self) -> &[Rank] {
        &self.strength.kicker
    }

    pub fn strength(&self) -> &HandStrength {
        &self.strength
    }
}

impl Ord for Classification {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength.cmp(&other.strength)
    }
}

impl PartialOrd for Classification {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Classification {
    fn eq(&self, other: &Self) -> bool {
        self.strength == other.strength
    }
}

impl Eq for Classification {}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error("community incomplete: expected 5 cards, got {0}")]
    IncompleteCommunity(usize),
}

/// Classify a Hold'em hand from hole cards and the full community.
/// Validates the inputs and requires all five community cards.
///
/// ```
/// use holdem_sim::evaluator::{classify_holdem, Category};
/// use holdem_sim::hand::{Community, HoleCards};
///
/// let hole: HoleCards = "Th 9h".parse().unwrap();
/// let community: Community = "8h 7h 6h 2d 2s".parse().unwrap();
/// let c = classify_holdem(&hole, &community).unwrap();
/// assert_eq!(c.category(), Category::StraightFlush);
/// assert_eq!(c.strength().kicker_values(), vec![10]);
/// ```
pub fn classify_holdem(hole: &HoleCards, community: &Community) -> Result<Classification, EvalError> {
    validate_holdem(hole, community)?;
    let board = community.as_slice();
    if board.len() != COMMUNITY_SIZE {
        return Err(EvalError::IncompleteCommunity(board.len()));
    }
    let seven = [hole.first(), hole.second(), board[0], board[1], board[2], board[3], board[4]];
    Ok(classify_cards(&seven))
}

/// Classify seven cards. Ranks and suits are analyzed across all seven at
/// once; the first category in precedence order that matches wins.
pub fn classify_cards(cards: &[Card; 7]) -> Classification {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);
    for detector in DETECTORS.iter() {
        if detector.detect(&analysis) {
            let strength = HandStrength::new(detector.category(), detector.kicker(&analysis));
            return Classification { cards: *cards, strength };
        }
    }

    // Unreachable: HighCard detector always matches as fallback
    unreachable!("HighCard detector should always match")
}

/// Compare two Hold'em hands on a shared community.
///
/// ```
/// use holdem_sim::evaluator::compare_holdem;
/// use holdem_sim::hand::{Community, HoleCards};
/// use std::cmp::Ordering;
///
/// let community: Community = "Qc Jd 9h 3s 2c".parse().unwrap();
/// let aces: HoleCards = "As Ah".parse().unwrap();
/// let kings: HoleCards = "Ks Kh".parse().unwrap();
/// assert_eq!(compare_holdem(&aces, &kings, &community).unwrap(), Ordering::Greater);
/// ```
pub fn compare_holdem(
    a: &HoleCards,
    b: &HoleCards,
    community: &Community,
) -> Result<Ordering, EvalError> {
    let ca = classify_holdem(a, community)?;
    let cb = classify_holdem(b, community)?;
    Ok(ca.cmp(&cb))
}
