use crate::cards::{Card, Rank, Suit};

/// Whether at least five cards share a suit, and which cards those are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitInfo {
    pub flush_suit: Option<Suit>,
    /// All cards of the flush suit, in input order; empty without a flush.
    pub flush_cards: Vec<Card>,
}

impl SuitInfo {
    /// Detect a flush among any number of cards. With seven cards at most one
    /// suit can reach five; otherwise the first suit in `Suit::ALL` order wins.
    pub fn detect(cards: &[Card]) -> Self {
        let flush_suit = Suit::ALL
            .iter()
            .copied()
            .find(|&suit| cards.iter().filter(|c| c.suit() == suit).count() >= 5);
        let flush_cards = match flush_suit {
            Some(suit) => cards.iter().copied().filter(|c| c.suit() == suit).collect(),
            None => Vec::new(),
        };
        SuitInfo { flush_suit, flush_cards }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }

    /// The five highest flush ranks, highest first.
    pub fn kicker(&self) -> Vec<Rank> {
        let mut ranks: Vec<Rank> = self.flush_cards.iter().map(|c| c.rank()).collect();
        ranks.sort_by(|a, b| b.cmp(a));
        ranks.dedup();
        ranks.truncate(5);
        ranks
    }
}
