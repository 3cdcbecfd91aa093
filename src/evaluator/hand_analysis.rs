use super::rank_counts::RankCounts;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::Card;

/// Pre-computed analysis of a seven-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub rank_counts: RankCounts,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 7]) -> Self {
        let rank_counts = RankCounts::from_cards(cards);
        let suit_info = SuitInfo::detect(cards);
        let straight_info = StraightInfo::detect(cards);
        Self { rank_counts, suit_info, straight_info }
    }

    pub fn max_count(&self) -> u8 {
        self.rank_counts.max_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Rank, Suit};

    fn analyze(s: &str) -> HandAnalysis {
        let cards: [Card; 7] = parse_cards(s).unwrap().try_into().unwrap();
        HandAnalysis::new(&cards)
    }

    #[test]
    fn test_straight_flush_analysis() {
        let a = analyze("Th 9h 8h 7h 6h 2d 2s");
        assert!(a.suit_info.is_flush());
        assert!(a.straight_info.is_straight());
        assert_eq!(a.straight_info.top_rank, Some(Rank::Ten));
        assert_eq!(a.max_count(), 2);
    }

    #[test]
    fn test_straight_and_flush_from_different_cards() {
        // Hearts flush, straight 5-9 needs the off-suit six.
        let a = analyze("9h 8h 7h 5h 2h 6c Kd");
        assert_eq!(a.suit_info.flush_suit, Some(Suit::Hearts));
        assert!(a.suit_info.is_flush());
        assert_eq!(a.straight_info.top_rank, Some(Rank::Nine));
        assert!(a.straight_info.cards.iter().any(|c| c.suit() == Suit::Clubs));
    }

    #[test]
    fn test_quads_analysis() {
        let a = analyze("2c 2d 2h 2s 5d 5c 9d");
        assert_eq!(a.max_count(), 4);
        assert_eq!(a.rank_counts.count(Rank::Two), 4);
        assert!(!a.suit_info.is_flush());
        assert!(!a.straight_info.is_straight());
    }

    #[test]
    fn test_wheel_analysis() {
        let a = analyze("Ah 2d 3s 4c 5h 9d Tc");
        assert_eq!(a.straight_info.top_rank, Some(Rank::Five));
        assert_eq!(a.max_count(), 1);
    }
}
