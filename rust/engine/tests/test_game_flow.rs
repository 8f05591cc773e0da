use pokersim_engine::action::{ActionKind, LegalAction, PlayerAction, RecordedAction as R};
use pokersim_engine::betting::{BettingState, Street};
use pokersim_engine::deck::Deck;
use pokersim_engine::engine::{play_hand, Hand, HandOutcome};
use pokersim_engine::errors::GameError;
use pokersim_engine::game::GameState;
use pokersim_engine::observer::{GameObserver, NullObserver};
use pokersim_engine::policy::{check_call_fold, CheckCallPolicy, FnPolicy, TurnView};
use pokersim_engine::round::GameRound;
use pokersim_engine::simulation::{
    run_game, run_simulation, run_simulation_parallel, DecidedBy, GameResult, SimulationConfig,
};

fn names(n: &[&str]) -> Vec<String> {
    n.iter().map(|s| s.to_string()).collect()
}

/// Shoves whenever a raise is offered, otherwise calls or checks.
fn shove(_view: &TurnView<'_>, legal: &[LegalAction]) -> PlayerAction {
    match legal.iter().find(|l| l.kind == ActionKind::Raise) {
        Some(raise) => PlayerAction::Raise(raise.max),
        None => check_call_fold(legal),
    }
}

#[derive(Default)]
struct Counter {
    hands_started: usize,
    streets: usize,
    hands_won: usize,
    games: Vec<GameResult>,
}

impl GameObserver for Counter {
    fn hand_started(&mut self, _round: &GameRound) {
        self.hands_started += 1;
    }

    fn street_completed(&mut self, _round: &GameRound, _street: &BettingState) {
        self.streets += 1;
    }

    fn hand_won(&mut self, hand: &Hand, outcome: &HandOutcome) {
        self.hands_won += 1;
        let awarded: u32 = outcome.awards.iter().map(|a| a.amount).sum();
        assert_eq!(awarded, outcome.pot, "pot must be paid out exactly");
        assert_eq!(hand.total_pot(), outcome.pot);
    }

    fn game_finished(&mut self, result: &GameResult) {
        self.games.push(result.clone());
    }
}

#[test]
fn heads_up_hand_reaches_river_and_conserves_chips() {
    let mut state = GameState::new(&names(&["alice", "bob"]), 50);
    let mut deck = Deck::new_with_seed(11);
    deck.shuffle();
    let round = GameRound::deal(&state, 0, 0, &mut deck, 5).unwrap();
    let (hand, outcome) =
        play_hand(&mut state, &mut deck, round, &mut CheckCallPolicy, &mut NullObserver).unwrap();

    assert_eq!(hand.streets().len(), 4);
    assert_eq!(hand.board().len(), 5);
    assert_eq!(outcome.last_street, Street::River);
    assert!(outcome.showdown.is_some());
    assert_eq!(outcome.pot, 20);
    assert_eq!(state.stacks().iter().sum::<u32>(), 100);

    // each street links back to the one before it
    for (i, street) in hand.streets().iter().enumerate() {
        assert_eq!(street.street().index(), i);
        assert_eq!(street.parent(), i.checked_sub(1));
        assert_eq!(street.board().len(), street.street().board_size());
    }
    assert_eq!(hand.pot_through(0), 20);
}

#[test]
fn last_player_standing_takes_pot_without_showdown() {
    let mut state = GameState::new(&names(&["alice", "bob", "carol", "dave"]), 100);
    let mut deck = Deck::new_with_seed(3);
    deck.shuffle();
    let round = GameRound::deal(&state, 0, 0, &mut deck, 5).unwrap();
    let mut policy = FnPolicy(|view: &TurnView<'_>, legal: &[LegalAction]| {
        if view.player == "dave" {
            legal
                .iter()
                .find(|l| l.kind == ActionKind::Raise)
                .map_or_else(|| check_call_fold(legal), LegalAction::at_min)
        } else {
            PlayerAction::Fold
        }
    });

    let (hand, outcome) =
        play_hand(&mut state, &mut deck, round, &mut policy, &mut NullObserver).unwrap();

    assert!(outcome.showdown.is_none());
    assert_eq!(outcome.last_street, Street::Preflop);
    assert!(hand.board().is_empty());
    // small blind 5 + big blind 10 + dave's minimum raise of 15
    assert_eq!(outcome.pot, 30);
    assert_eq!(outcome.awards.len(), 1);
    assert_eq!(hand.round().player(outcome.awards[0].seat), "dave");
    assert_eq!(state.stacks(), &[95, 90, 100, 115]);
}

#[test]
fn blinds_are_posted_by_the_rotating_seats() {
    let mut state = GameState::new(&names(&["a", "b", "c"]), 100);
    let mut deck = Deck::new_with_seed(5);
    deck.shuffle();
    let round = GameRound::deal(&state, 0, 2, &mut deck, 5).unwrap();
    let (hand, _) =
        play_hand(&mut state, &mut deck, round, &mut CheckCallPolicy, &mut NullObserver).unwrap();

    let preflop = &hand.streets()[0];
    assert_eq!(preflop.log()[0], (2, R::SmallBlind(5)));
    assert_eq!(preflop.log()[1], (0, R::BigBlind(10)));
}

#[test]
fn unoffered_decision_aborts_the_game() {
    let config = SimulationConfig::new(&["alice", "bob"], 50, 5, 1).with_seed(1);
    let mut policy = FnPolicy(|_: &TurnView<'_>, _: &[LegalAction]| PlayerAction::Check);
    let err = run_game(&config, 1, 0, &mut policy, &mut NullObserver).unwrap_err();
    match err {
        GameError::DecisionPolicyViolation { player, action, .. } => {
            // the small blind acts first and owes 5
            assert_eq!(player, "alice");
            assert_eq!(action, PlayerAction::Check);
        }
        other => panic!("expected DecisionPolicyViolation, got {other:?}"),
    }
}

#[test]
fn shoving_game_ends_by_elimination_and_keeps_chips() {
    let config = SimulationConfig::new(&["alice", "bob"], 50, 5, 1);
    let mut observer = Counter::default();
    let result = run_game(&config, 99, 0, &mut FnPolicy(shove), &mut observer).unwrap();

    assert_eq!(result.final_stacks.iter().sum::<u32>(), 100);
    assert!(result.hands_played >= 1);
    assert_eq!(observer.hands_started, result.hands_played);
    assert_eq!(observer.hands_won, result.hands_played);
    assert_eq!(observer.games.len(), 1);
    let winner = result.winner.as_deref().unwrap();
    let seat = config.players.iter().position(|p| p == winner).unwrap();
    if result.decided_by == DecidedBy::Elimination {
        assert_eq!(result.final_stacks[seat], 100);
    }
}

#[test]
fn hand_cap_awards_game_to_chip_leader() {
    let config = SimulationConfig::new(&["a", "b", "c"], 100, 5, 1).with_max_hands(1);
    let result = run_game(&config, 7, 0, &mut CheckCallPolicy, &mut NullObserver).unwrap();
    assert_eq!(result.hands_played, 1);
    assert_eq!(result.decided_by, DecidedBy::HandCap);

    let top = *result.final_stacks.iter().max().unwrap();
    let leader = result.final_stacks.iter().position(|&s| s == top).unwrap();
    assert_eq!(result.winner.as_deref(), Some(config.players[leader].as_str()));
}

#[test]
fn single_player_wins_without_playing() {
    let config = SimulationConfig::new(&["solo"], 100, 5, 3).with_seed(0);
    let report = run_simulation(&config, &mut CheckCallPolicy, &mut NullObserver).unwrap();
    assert_eq!(report.wins("solo"), 3);
    assert_eq!(report.hands_played, 0);
}

#[test]
fn invalid_configurations_are_rejected() {
    let cases = [
        SimulationConfig::new(&[], 100, 5, 1),
        SimulationConfig::new(&["a", "a"], 100, 5, 1),
        SimulationConfig::new(&["a", "b"], 0, 5, 1),
        SimulationConfig::new(&["a", "b"], 100, 0, 1),
        SimulationConfig::new(&["a", "b"], 100, 5, 0),
        SimulationConfig::new(&["a", "b"], 100, 5, 1).with_max_hands(0),
    ];
    for config in cases {
        let err = run_simulation(&config, &mut CheckCallPolicy, &mut NullObserver).unwrap_err();
        assert!(
            matches!(err, GameError::InvalidConfiguration(_)),
            "{config:?} gave {err:?}"
        );
    }
}

#[test]
fn every_game_produces_exactly_one_win() {
    let config = SimulationConfig::new(&["alice", "bob", "carol", "dave"], 60, 5, 25).with_seed(8);
    let mut observer = Counter::default();
    let report = run_simulation(&config, &mut CheckCallPolicy, &mut observer).unwrap();

    let total: u32 = report.histogram.iter().map(|e| e.wins).sum();
    assert_eq!(total, 25);
    assert_eq!(observer.games.len(), 25);
    assert_eq!(observer.hands_won as u64, report.hands_played);
    assert!(observer.streets >= observer.hands_won);
    for game in &observer.games {
        assert_eq!(game.final_stacks.iter().sum::<u32>(), 240);
    }
    let pct: f64 = report.percentages().iter().map(|(_, p)| p).sum();
    assert!((pct - 100.0).abs() < 1e-9);
}

#[test]
fn same_seed_gives_same_report() {
    let config = SimulationConfig::new(&["a", "b", "c"], 50, 5, 20).with_seed(1234);
    let r1 = run_simulation(&config, &mut CheckCallPolicy, &mut NullObserver).unwrap();
    let r2 = run_simulation(&config, &mut CheckCallPolicy, &mut NullObserver).unwrap();
    assert_eq!(r1, r2);
    assert_eq!(r1.base_seed, 1234);
}

#[test]
fn parallel_run_matches_sequential_run() {
    let config = SimulationConfig::new(&["a", "b", "c"], 80, 5, 40).with_seed(77);
    let sequential = run_simulation(&config, &mut CheckCallPolicy, &mut NullObserver).unwrap();
    let parallel = run_simulation_parallel(&config, |_| CheckCallPolicy).unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn heads_up_win_rates_are_balanced() {
    let config = SimulationConfig::new(&["alice", "bob"], 100, 5, 1000).with_seed(2024);
    let report = run_simulation_parallel(&config, |_| CheckCallPolicy).unwrap();
    assert_eq!(report.wins("alice") + report.wins("bob"), 1000);
    for player in ["alice", "bob"] {
        let rate = report.win_rate(player);
        assert!(
            (0.40..=0.60).contains(&rate),
            "{player} won {:.1}% of games",
            rate * 100.0
        );
    }
}
