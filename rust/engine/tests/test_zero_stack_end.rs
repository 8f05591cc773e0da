use pokersim_engine::action::RecordedAction as R;
use pokersim_engine::deck::Deck;
use pokersim_engine::engine::play_hand;
use pokersim_engine::errors::GameError;
use pokersim_engine::game::GameState;
use pokersim_engine::observer::NullObserver;
use pokersim_engine::policy::CheckCallPolicy;
use pokersim_engine::round::GameRound;

fn names(n: &[&str]) -> Vec<String> {
    n.iter().map(|s| s.to_string()).collect()
}

#[test]
fn eliminated_player_is_not_dealt_in() {
    let mut state = GameState::new(&names(&["a", "b", "c"]), 30);
    state.debit(0, 30);
    assert_eq!(state.remaining_players(), vec!["b", "c"]);

    let mut deck = Deck::new_with_seed(1);
    deck.shuffle();
    let round = GameRound::deal(&state, 0, 0, &mut deck, 5).unwrap();
    assert_eq!(round.len(), 2);
    assert_eq!(round.player(round.small_blind()), "b");
    assert_eq!(round.game_seat(0), 1);
}

#[test]
fn nobody_left_cannot_be_dealt() {
    let mut state = GameState::new(&names(&["a", "b"]), 10);
    state.debit(0, 10);
    state.debit(1, 10);
    let mut deck = Deck::new_with_seed(1);
    deck.shuffle();
    let err = GameRound::deal(&state, 0, 0, &mut deck, 5).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfiguration(_)));
}

#[test]
fn short_big_blind_posts_what_it_has() {
    let mut state = GameState::new(&names(&["alice", "bob"]), 50);
    state.debit(1, 47);
    let mut deck = Deck::new_with_seed(21);
    deck.shuffle();
    let round = GameRound::deal(&state, 0, 0, &mut deck, 5).unwrap();
    let (hand, outcome) =
        play_hand(&mut state, &mut deck, round, &mut CheckCallPolicy, &mut NullObserver).unwrap();

    let preflop = &hand.streets()[0];
    assert_eq!(preflop.log()[1], (1, R::BigBlind(3)));
    // bob is all-in, alice checks the hand down
    assert_eq!(hand.board().len(), 5);
    assert_eq!(outcome.pot, 8);
    assert_eq!(state.total_chips(), 53);
    assert!(state.stacks().iter().all(|&s| s <= 53));
}

#[test]
fn debit_never_takes_more_than_the_stack() {
    let mut state = GameState::new(&names(&["a"]), 7);
    assert_eq!(state.debit(0, 10), 7);
    assert_eq!(state.stack(0), 0);
    assert!(state.remaining_seats().is_empty());
    assert_eq!(state.chip_leader(), None);
}
