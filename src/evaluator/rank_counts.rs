use crate::cards::{Card, Rank};

/// Occurrences of each rank across a set of cards, indexed by rank value.
///
/// Example: A A A K Q 7 7 counts as {A: 3, K: 1, Q: 1, 7: 2}.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankCounts {
    counts: [u8; 15],
}

impl RankCounts {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15];
        for card in cards {
            counts[card.rank().value() as usize] += 1;
        }
        Self { counts }
    }

    pub fn count(&self, rank: Rank) -> u8 {
        self.counts[rank.value() as usize]
    }

    /// Highest multiplicity present (0 for an empty set).
    pub fn max_count(&self) -> u8 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Number of distinct ranks appearing exactly `n` times.
    pub fn ranks_with_count(&self, n: u8) -> usize {
        self.counts.iter().filter(|&&c| c == n).count()
    }

    /// Present ranks, highest first.
    pub fn present_desc(&self) -> impl Iterator<Item = Rank> + '_ {
        Rank::ALL.iter().rev().copied().filter(move |&r| self.count(r) > 0)
    }

    /// Assemble a tie-break sequence.
    ///
    /// Takes up to `take` ranks appearing exactly `target` times, highest
    /// first, then fills with the next-highest ranks not yet selected whose
    /// multiplicity is not in `exclude`. The fill length is
    /// `5 - target * take - exclude.len()`: each excluded multiplicity stands
    /// for one slot held by a secondary group.
    pub fn kicker(&self, target: u8, take: usize, exclude: &[u8]) -> Vec<Rank> {
        let mut kicker: Vec<Rank> =
            self.present_desc().filter(|&r| self.count(r) == target).take(take).collect();
        let used = target as usize * take + exclude.len();
        let fill = 5usize.saturating_sub(used);
        let rest: Vec<Rank> = self
            .present_desc()
            .filter(|r| !kicker.contains(r) && !exclude.contains(&self.count(*r)))
            .take(fill)
            .collect();
        kicker.extend(rest);
        kicker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn counts(s: &str) -> RankCounts {
        RankCounts::from_cards(&parse_cards(s).unwrap())
    }

    #[test]
    fn counts_and_max() {
        let rc = counts("Ah Ad As Kc Qd 7h 7c");
        assert_eq!(rc.count(Rank::Ace), 3);
        assert_eq!(rc.count(Rank::Seven), 2);
        assert_eq!(rc.count(Rank::Two), 0);
        assert_eq!(rc.max_count(), 3);
        assert_eq!(rc.ranks_with_count(1), 2);
        assert_eq!(rc.ranks_with_count(2), 1);
    }

    #[test]
    fn present_ranks_are_descending() {
        let rc = counts("5h Ad Tc 5c");
        let ranks: Vec<Rank> = rc.present_desc().collect();
        assert_eq!(ranks, vec![Rank::Ace, Rank::Ten, Rank::Five]);
    }

    #[test]
    fn quad_kicker_is_quad_then_one() {
        let rc = counts("9h 9d 9s 9c Ah 5d 5c");
        assert_eq!(rc.kicker(4, 1, &[]), vec![Rank::Nine, Rank::Ace]);
    }

    #[test]
    fn full_house_kicker_skips_singletons() {
        let rc = counts("Kh Kd Ks 4c 4d Ah Qc");
        assert_eq!(rc.kicker(3, 1, &[1]), vec![Rank::King, Rank::Four]);

        // Two triples: the lower one plays as the pair.
        let rc = counts("Kh Kd Ks 4c 4d 4h Ac");
        assert_eq!(rc.kicker(3, 1, &[1]), vec![Rank::King, Rank::Four]);

        // Trips plus two pairs: the higher pair plays.
        let rc = counts("5h 5d 5s Jc Jd 8h 8c");
        assert_eq!(rc.kicker(3, 1, &[1]), vec![Rank::Five, Rank::Jack]);
    }

    #[test]
    fn trips_kicker_has_two_fillers() {
        let rc = counts("Qh Qd Qs 9c 7d 4h 2c");
        assert_eq!(rc.kicker(3, 1, &[]), vec![Rank::Queen, Rank::Nine, Rank::Seven]);
    }

    #[test]
    fn two_pair_kicker_takes_best_two_pairs() {
        let rc = counts("Ah Ad Kh Kd Qh Qd 2c");
        assert_eq!(rc.kicker(2, 2, &[]), vec![Rank::Ace, Rank::King, Rank::Queen]);
    }

    #[test]
    fn pair_and_high_card_kickers() {
        let rc = counts("8h 8d Ah Qc 5d 4h 2c");
        assert_eq!(rc.kicker(2, 1, &[]), vec![Rank::Eight, Rank::Ace, Rank::Queen, Rank::Five]);

        let rc = counts("Ah Jd 9c 7s 5d 4h 2c");
        assert_eq!(
            rc.kicker(1, 1, &[]),
            vec![Rank::Ace, Rank::Jack, Rank::Nine, Rank::Seven, Rank::Five]
        );
    }
}
