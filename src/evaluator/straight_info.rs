use crate::cards::{Card, Rank};

/// Bits 1..=5 of a rank mask: a run of five starting at the low end.
const RUN: u16 = 0b1_1111;

/// The highest straight available in a set of cards, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StraightInfo {
    /// Top rank of the run; Five for the wheel.
    pub top_rank: Option<Rank>,
    /// Every card whose rank takes part in the run (duplicated ranks
    /// included). The wheel's Ace plays as 1 and is not listed.
    pub cards: Vec<Card>,
}

impl StraightInfo {
    /// Detect the highest five-rank run among any number of cards.
    /// The Ace also counts as rank 1, so A-2-3-4-5 (the wheel) is found when
    /// no higher run exists.
    pub fn detect(cards: &[Card]) -> Self {
        let mut mask: u16 = 0;
        for card in cards {
            mask |= 1 << card.rank().value();
        }
        if mask & (1 << Rank::Ace.value()) != 0 {
            mask |= 1 << 1;
        }

        // Lowest rank of the run, scanned from the highest possible start.
        let low = (1..=10u8).rev().find(|&low| mask & (RUN << low) == RUN << low);
        let Some(low) = low else {
            return StraightInfo { top_rank: None, cards: Vec::new() };
        };

        let top = low + 4;
        let run_cards =
            cards.iter().copied().filter(|c| (low..=top).contains(&c.rank().value())).collect();
        StraightInfo { top_rank: Rank::try_from(top).ok(), cards: run_cards }
    }

    pub fn is_straight(&self) -> bool {
        self.top_rank.is_some()
    }

    /// Distinct ranks of the run cards, highest first. A wheel reads 5-4-3-2.
    pub fn kicker(&self) -> Vec<Rank> {
        let mut ranks: Vec<Rank> = self.cards.iter().map(|c| c.rank()).collect();
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        ranks.dedup();
        ranks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn detect(s: &str) -> StraightInfo {
        StraightInfo::detect(&parse_cards(s).unwrap())
    }

    #[test]
    fn test_regular_straight() {
        let info = detect("Kh Qd Jc Ts 9h 3c 2d");
        assert!(info.is_straight());
        assert_eq!(info.top_rank, Some(Rank::King));
        assert_eq!(info.cards.len(), 5);
        assert_eq!(info.kicker(), vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Ten, Rank::Nine]);
    }

    #[test]
    fn test_highest_run_wins() {
        let info = detect("9h 8d 7c 6s 5h 4c Td");
        assert_eq!(info.top_rank, Some(Rank::Ten));
    }

    #[test]
    fn test_ace_high_straight() {
        let info = detect("Ah Kd Qc Js Th");
        assert_eq!(info.top_rank, Some(Rank::Ace));
    }

    #[test]
    fn test_wheel() {
        let info = detect("Ah 2d 3s 4c 5h 9d Tc");
        assert!(info.is_straight());
        assert_eq!(info.top_rank, Some(Rank::Five));
        assert_eq!(info.cards.len(), 4);
        assert!(info.cards.iter().all(|c| c.rank() != Rank::Ace));
        assert_eq!(info.kicker(), vec![Rank::Five, Rank::Four, Rank::Three, Rank::Two]);
    }

    #[test]
    fn test_six_high_beats_wheel() {
        let info = detect("Ah 2d 3s 4c 5h 6d Kc");
        assert_eq!(info.top_rank, Some(Rank::Six));
        assert!(info.cards.iter().all(|c| c.rank() != Rank::Ace));
    }

    #[test]
    fn test_paired_run_keeps_both_cards() {
        let info = detect("8h 8d 7c 6s 5h 4c Kd");
        assert_eq!(info.top_rank, Some(Rank::Eight));
        assert_eq!(info.cards.len(), 6);
        assert_eq!(info.kicker().len(), 5);
    }

    #[test]
    fn test_not_straight() {
        let info = detect("Ah Kd Qc Js 9h 3c 2d");
        assert!(!info.is_straight());
        assert!(info.cards.is_empty());
        assert!(info.kicker().is_empty());
    }

    #[test]
    fn test_no_wrap_around() {
        let info = detect("Qh Kd Ac 2s 3h");
        assert!(!info.is_straight());
    }
}
