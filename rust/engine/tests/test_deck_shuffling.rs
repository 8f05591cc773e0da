use std::collections::HashSet;

use pokersim_engine::cards::Card;
use pokersim_engine::deck::Deck;
use pokersim_engine::game::GameState;
use pokersim_engine::round::GameRound;

#[test]
fn new_deck_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.deal_card().expect("should have 52 cards");
        assert!(set.insert(c), "card {} duplicated at position {}", c, i);
    }
    assert!(
        deck.deal_card().is_none(),
        "after 52 cards, deck should be empty"
    );
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    for _ in 0..3 {
        d1.shuffle();
        d2.shuffle();
        let a: Vec<Card> = (0..52).map(|_| d1.deal_card().unwrap()).collect();
        let b: Vec<Card> = (0..52).map(|_| d2.deal_card().unwrap()).collect();
        assert_eq!(a, b, "same seed must yield identical order");
    }
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..10).map(|_| d1.deal_card().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal_card().unwrap()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn shuffle_restores_a_partly_dealt_deck() {
    let mut deck = Deck::new_with_seed(9);
    deck.shuffle();
    for _ in 0..30 {
        deck.deal_card();
    }
    assert_eq!(deck.remaining(), 22);
    deck.shuffle();
    assert_eq!(deck.remaining(), 52);
    let unique: HashSet<Card> = std::iter::from_fn(|| deck.deal_card()).collect();
    assert_eq!(unique.len(), 52);
}

#[test]
fn hole_cards_and_board_never_repeat() {
    let names: Vec<String> = (0..9).map(|i| format!("p{i}")).collect();
    let state = GameState::new(&names, 100);
    let mut deck = Deck::new_with_seed(777);
    deck.shuffle();
    let round = GameRound::deal(&state, 0, 0, &mut deck, 5).unwrap();
    assert_eq!(deck.remaining(), 52 - 18);

    let mut set = HashSet::new();
    for seat in round.all_seats() {
        for c in round.hole_cards(seat) {
            assert!(set.insert(c));
        }
    }
    for _ in 0..5 {
        assert!(set.insert(deck.deal_card().unwrap()));
    }
}
