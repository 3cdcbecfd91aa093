use holdem_sim::cards::Card;
use holdem_sim::deck::{Deck, DeckError, DECK_SIZE};
use holdem_sim::events::{NoopSink, SharedSink};
use holdem_sim::table::{Table, TableError, MAX_SEATS};
use std::collections::HashSet;
use std::rc::Rc;

fn quiet() -> SharedSink {
    Rc::new(NoopSink)
}

#[test]
fn deal_and_community_never_share_cards() {
    for seed in 0..20u64 {
        let mut deck = Deck::seeded(seed).with_sink(quiet());
        let mut table = Table::with_sink(MAX_SEATS, quiet()).unwrap();
        table.deal(&mut deck).unwrap();
        deck.flop().unwrap();
        deck.add_community_card().unwrap();
        deck.add_community_card().unwrap();

        let mut seen: HashSet<Card> = HashSet::new();
        for p in table.players() {
            assert_eq!(p.hand().len(), 2);
            for c in p.hand() {
                assert!(seen.insert(*c), "seed {seed}: {c} dealt twice");
                assert!(!deck.contains(*c));
            }
        }
        for c in deck.community().as_slice() {
            assert!(seen.insert(*c), "seed {seed}: {c} on board and in a hand");
        }
        assert_eq!(seen.len(), 2 * MAX_SEATS + 5);
        assert_eq!(deck.len(), DECK_SIZE - seen.len());
        assert_eq!(deck.len(), 1);
    }
}

#[test]
fn same_seed_deals_same_hands() {
    let deal = |seed| {
        let mut deck = Deck::seeded(seed).with_sink(quiet());
        let mut table = Table::with_sink(4, quiet()).unwrap();
        table.deal(&mut deck).unwrap();
        table.players().iter().map(|p| p.hand().to_vec()).collect::<Vec<_>>()
    };
    assert_eq!(deal(17), deal(17));
}

#[test]
fn winner_dominates_every_seat() {
    for seed in 0..20u64 {
        let mut deck = Deck::seeded(seed).with_sink(quiet());
        let mut table = Table::with_sink(9, quiet()).unwrap();
        table.deal(&mut deck).unwrap();
        deck.flop().unwrap();
        deck.add_community_card().unwrap();
        deck.add_community_card().unwrap();
        table.evaluate_hands(deck.community()).unwrap();

        let best = table.best_hand().unwrap();
        for p in table.players() {
            assert!(p <= best, "seed {seed}: seat {} beats reported winner", p.seat());
            assert!(p.hand_name().is_some());
        }
    }
}

#[test]
fn best_hand_requires_evaluation() {
    let mut deck = Deck::seeded(1).with_sink(quiet());
    let mut table = Table::with_sink(3, quiet()).unwrap();
    table.deal(&mut deck).unwrap();
    assert_eq!(table.best_hand().unwrap_err(), TableError::NotEvaluated(0));
}

#[test]
fn evaluating_before_the_river_fails() {
    let mut deck = Deck::seeded(2).with_sink(quiet());
    let mut table = Table::with_sink(3, quiet()).unwrap();
    table.deal(&mut deck).unwrap();
    deck.flop().unwrap();
    assert!(matches!(
        table.evaluate_hands(deck.community()),
        Err(TableError::Eval { seat: 0, .. })
    ));
    assert!(table.players().iter().all(|p| p.classification().is_none()));
}

#[test]
fn sixth_community_card_is_refused() {
    let mut deck = Deck::seeded(3).with_sink(quiet());
    deck.flop().unwrap();
    deck.add_community_card().unwrap();
    deck.add_community_card().unwrap();
    let before = deck.len();
    assert!(matches!(deck.add_community_card(), Err(DeckError::CommunityFull { .. })));
    assert_eq!(deck.len(), before);
    assert_eq!(deck.community().len(), 5);
}

#[test]
fn seat_count_bounds() {
    assert_eq!(Table::with_sink(0, quiet()).unwrap_err(), TableError::InvalidSeatCount(0));
    assert_eq!(
        Table::with_sink(MAX_SEATS + 1, quiet()).unwrap_err(),
        TableError::InvalidSeatCount(MAX_SEATS + 1)
    );
    assert_eq!(Table::with_sink(1, quiet()).unwrap().seats(), 1);
}
