//! Whole games and multi-game simulations.
//!
//! Game `g` of a simulation shuffles with a deck seeded by
//! `base_seed + g`, so a simulation is reproducible from its seed and games
//! can be run in any order, or in parallel, with identical results.

use std::collections::HashSet;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::deck::Deck;
use crate::engine::play_hand;
use crate::errors::GameError;
use crate::game::GameState;
use crate::observer::{GameObserver, TracingObserver};
use crate::policy::DecisionPolicy;
use crate::round::GameRound;

/// Default cap on hands per game.
pub const DEFAULT_MAX_HANDS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub players: Vec<String>,
    pub initial_stack: u32,
    /// Small blind; the big blind is twice this
    pub stake: u32,
    pub games: usize,
    pub max_hands: usize,
    /// Base seed; drawn at random when absent
    pub seed: Option<u64>,
}

impl SimulationConfig {
    pub fn new(players: &[&str], initial_stack: u32, stake: u32, games: usize) -> Self {
        Self {
            players: players.iter().map(|p| p.to_string()).collect(),
            initial_stack,
            stake,
            games,
            max_hands: DEFAULT_MAX_HANDS,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_hands(mut self, max_hands: usize) -> Self {
        self.max_hands = max_hands;
        self
    }

    /// Rejects configurations no game could start from.
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |msg: &str| Err(GameError::InvalidConfiguration(msg.to_string()));
        if self.players.is_empty() {
            return invalid("player list is empty");
        }
        let mut seen = HashSet::new();
        if let Some(dup) = self.players.iter().find(|p| !seen.insert(p.as_str())) {
            return Err(GameError::InvalidConfiguration(format!(
                "duplicate player {dup:?}"
            )));
        }
        if self.initial_stack == 0 {
            return invalid("initial stack must be > 0");
        }
        if self.stake == 0 {
            return invalid("stake must be > 0");
        }
        if self.games == 0 {
            return invalid("game count must be > 0");
        }
        if self.max_hands == 0 {
            return invalid("hand cap must be > 0");
        }
        // Every pot and stack is a u32, so the whole table's chips must fit in one
        let total = u64::from(self.initial_stack) * self.players.len() as u64;
        if total > u64::from(u32::MAX) {
            return Err(GameError::InvalidConfiguration(format!(
                "{} players x {} chips exceeds the {} chip limit",
                self.players.len(),
                self.initial_stack,
                u32::MAX
            )));
        }
        Ok(())
    }

    fn game_seed(&self, base_seed: u64, game_index: usize) -> u64 {
        base_seed.wrapping_add(game_index as u64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecidedBy {
    /// Every other player ran out of chips
    Elimination,
    /// The hand cap was reached; the biggest stack won
    HandCap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub game_index: usize,
    pub winner: Option<String>,
    pub decided_by: DecidedBy,
    pub hands_played: usize,
    /// Stacks in seat order when the game ended
    pub final_stacks: Vec<u32>,
}

/// Plays one game to elimination or to the hand cap.
///
/// `base_seed` is the simulation's base seed; the game's deck is seeded
/// from it and `game_index`.
pub fn run_game(
    config: &SimulationConfig,
    base_seed: u64,
    game_index: usize,
    policy: &mut dyn DecisionPolicy,
    observer: &mut dyn GameObserver,
) -> Result<GameResult, GameError> {
    config.validate()?;
    let mut state = GameState::new(&config.players, config.initial_stack);
    let mut deck = Deck::new_with_seed(config.game_seed(base_seed, game_index));
    let mut hands_played = 0;

    for hand_index in 0..config.max_hands {
        if state.remaining_seats().len() <= 1 {
            break;
        }
        deck.shuffle();
        let round = GameRound::deal(&state, game_index, hand_index, &mut deck, config.stake)?;
        play_hand(&mut state, &mut deck, round, policy, observer)?;
        hands_played += 1;
    }

    let remaining = state.remaining_seats();
    let (winner_seat, decided_by) = if remaining.len() == 1 {
        (Some(remaining[0]), DecidedBy::Elimination)
    } else {
        (state.chip_leader(), DecidedBy::HandCap)
    };
    let result = GameResult {
        game_index,
        winner: winner_seat.map(|s| state.players()[s].clone()),
        decided_by,
        hands_played,
        final_stacks: state.stacks().to_vec(),
    };
    observer.game_finished(&result);
    Ok(result)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinCount {
    pub player: String,
    pub wins: u32,
}

/// Aggregated outcome of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub games: usize,
    pub base_seed: u64,
    /// One entry per player, in configuration order
    pub histogram: Vec<WinCount>,
    pub hands_played: u64,
}

impl SimulationReport {
    fn tally(config: &SimulationConfig, base_seed: u64, results: &[GameResult]) -> Self {
        let mut histogram: Vec<WinCount> = config
            .players
            .iter()
            .map(|p| WinCount {
                player: p.clone(),
                wins: 0,
            })
            .collect();
        for result in results {
            let Some(winner) = result.winner.as_deref() else {
                continue;
            };
            if let Some(entry) = histogram.iter_mut().find(|e| e.player == winner) {
                entry.wins += 1;
            }
        }
        Self {
            games: config.games,
            base_seed,
            histogram,
            hands_played: results.iter().map(|r| r.hands_played as u64).sum(),
        }
    }

    pub fn wins(&self, player: &str) -> u32 {
        self.histogram
            .iter()
            .find(|e| e.player == player)
            .map_or(0, |e| e.wins)
    }

    /// Fraction of games won, 0.0 to 1.0.
    pub fn win_rate(&self, player: &str) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            f64::from(self.wins(player)) / self.games as f64
        }
    }

    /// Win percentage per player, in configuration order.
    pub fn percentages(&self) -> Vec<(String, f64)> {
        self.histogram
            .iter()
            .map(|e| (e.player.clone(), self.win_rate(&e.player) * 100.0))
            .collect()
    }
}

fn resolve_seed(config: &SimulationConfig) -> u64 {
    config.seed.unwrap_or_else(rand::random)
}

/// Runs `config.games` games one after another with a shared policy and
/// observer.
pub fn run_simulation(
    config: &SimulationConfig,
    policy: &mut dyn DecisionPolicy,
    observer: &mut dyn GameObserver,
) -> Result<SimulationReport, GameError> {
    config.validate()?;
    let base_seed = resolve_seed(config);
    info!(
        players = ?config.players,
        games = config.games,
        base_seed,
        policy = policy.name(),
        "simulation started"
    );

    let mut results = Vec::with_capacity(config.games);
    for game_index in 0..config.games {
        results.push(run_game(config, base_seed, game_index, policy, observer)?);
    }
    let report = SimulationReport::tally(config, base_seed, &results);
    info!(histogram = ?report.histogram, "simulation finished");
    Ok(report)
}

/// Runs the games on the rayon thread pool. Each game gets its own policy
/// from `make_policy(game_index)` and reports to a [`TracingObserver`].
pub fn run_simulation_parallel<F, P>(
    config: &SimulationConfig,
    make_policy: F,
) -> Result<SimulationReport, GameError>
where
    F: Fn(usize) -> P + Sync,
    P: DecisionPolicy,
{
    config.validate()?;
    let base_seed = resolve_seed(config);
    debug!(games = config.games, base_seed, "parallel simulation started");

    let results = (0..config.games)
        .into_par_iter()
        .map(|game_index| {
            let mut policy = make_policy(game_index);
            run_game(
                config,
                base_seed,
                game_index,
                &mut policy,
                &mut TracingObserver,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;
    let report = SimulationReport::tally(config, base_seed, &results);
    info!(histogram = ?report.histogram, "simulation finished");
    Ok(report)
}
