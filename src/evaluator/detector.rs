use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::Category;

/// Strategy pattern: each detector recognizes one category and builds its
/// tie-break kicker.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn detect(&self, analysis: &HandAnalysis) -> bool;
    fn kicker(&self, analysis: &HandAnalysis) -> Vec<Rank>;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Straight Flush: a straight and a flush among the seven cards. Both are
/// read across all seven, so the run and the suit need not share cards.
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush() && analysis.straight_info.is_straight()
    }

    fn kicker(&self, analysis: &HandAnalysis) -> Vec<Rank> {
        analysis.straight_info.top_rank.into_iter().collect()
    }
}

/// Four of a Kind: four cards of one rank
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.max_count() == 4
    }

    fn kicker(&self, analysis: &HandAnalysis) -> Vec<Rank> {
        analysis.rank_counts.kicker(4, 1, &[])
    }
}

/// Full House: trips plus a pair, or two sets of trips
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        let rc = &analysis.rank_counts;
        analysis.max_count() == 3 && (rc.ranks_with_count(2) > 0 || rc.ranks_with_count(3) > 1)
    }

    fn kicker(&self, analysis: &HandAnalysis) -> Vec<Rank> {
        analysis.rank_counts.kicker(3, 1, &[1])
    }
}

/// Flush: five or more cards of one suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush()
    }

    fn kicker(&self, analysis: &HandAnalysis) -> Vec<Rank> {
        analysis.suit_info.kicker()
    }
}

/// Straight: five consecutive ranks
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_info.is_straight()
    }

    fn kicker(&self, analysis: &HandAnalysis) -> Vec<Rank> {
        analysis.straight_info.kicker()
    }
}

/// Three of a Kind: three cards of one rank, nothing paired alongside
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.max_count() == 3
    }

    fn kicker(&self, analysis: &HandAnalysis) -> Vec<Rank> {
        analysis.rank_counts.kicker(3, 1, &[])
    }
}

/// Two Pair: at least two ranks paired
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.max_count() == 2 && analysis.rank_counts.ranks_with_count(2) >= 2
    }

    fn kicker(&self, analysis: &HandAnalysis) -> Vec<Rank> {
        analysis.rank_counts.kicker(2, 2, &[])
    }
}

/// One Pair: exactly one rank paired
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::Pair
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.max_count() == 2
    }

    fn kicker(&self, analysis: &HandAnalysis) -> Vec<Rank> {
        analysis.rank_counts.kicker(2, 1, &[])
    }
}

/// High Card: nothing else matched
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true // Always matches as fallback
    }

    fn kicker(&self, analysis: &HandAnalysis) -> Vec<Rank> {
        analysis.rank_counts.kicker(1, 1, &[])
    }
}

// ============================================================================
// Static detector list (in priority order; the order is hand precedence)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
