use tracing::{debug, info};

use crate::betting::BettingState;
use crate::engine::{Hand, HandOutcome};
use crate::round::GameRound;
use crate::simulation::GameResult;

/// Receives structured events as games are played. Every method defaults to
/// doing nothing.
pub trait GameObserver {
    fn hand_started(&mut self, _round: &GameRound) {}

    fn street_completed(&mut self, _round: &GameRound, _street: &BettingState) {}

    fn hand_won(&mut self, _hand: &Hand, _outcome: &HandOutcome) {}

    fn game_finished(&mut self, _result: &GameResult) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl GameObserver for NullObserver {}

/// Forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl GameObserver for TracingObserver {
    fn hand_started(&mut self, round: &GameRound) {
        debug!(
            game = round.game_index,
            hand = round.hand_index,
            players = ?round.players(),
            stacks = ?round.starting_stacks(),
            small_blind = round.player(round.small_blind()),
            big_blind = round.player(round.big_blind()),
            "hand dealt"
        );
    }

    fn street_completed(&mut self, round: &GameRound, street: &BettingState) {
        debug!(
            game = round.game_index,
            hand = round.hand_index,
            street = street.street().label(),
            contribution = street.contribution(),
            survivors = street.survivors().len(),
            "street complete"
        );
    }

    fn hand_won(&mut self, hand: &Hand, outcome: &HandOutcome) {
        let winners: Vec<&str> = outcome
            .awards
            .iter()
            .map(|a| hand.round().player(a.seat))
            .collect();
        debug!(
            game = hand.round().game_index,
            hand = hand.round().hand_index,
            pot = outcome.pot,
            showdown = outcome.showdown.is_some(),
            ?winners,
            "hand won"
        );
    }

    fn game_finished(&mut self, result: &GameResult) {
        info!(
            game = result.game_index,
            winner = result.winner.as_deref().unwrap_or("-"),
            hands = result.hands_played,
            decided_by = ?result.decided_by,
            "game finished"
        );
    }
}
