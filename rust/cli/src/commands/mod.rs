//! Command handler modules.
//!
//! Each command lives in its own file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in as parameters
//! - Errors propagated via `CliError`
//!
//! [`TableSetup`] resolves the table settings `sim` and `game` share.

use std::io::Write;

use pokersim_ai::{AiKind, PolicyTable};
use pokersim_engine::policy::DecisionPolicy;
use pokersim_engine::simulation::SimulationConfig;

use crate::cli::TableArgs;
use crate::config::{self, parse_players};
use crate::error::CliError;
use crate::ui;

pub mod cfg;
pub mod eval;
pub mod game;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use eval::handle_eval_command;
pub use game::handle_game_command;
pub use sim::handle_sim_command;

/// Simulation settings after layering flags over the configuration, plus
/// the policy each seat plays.
#[derive(Debug, Clone)]
pub struct TableSetup {
    pub config: SimulationConfig,
    pub seats: Vec<(String, AiKind)>,
}

impl TableSetup {
    pub fn resolve(
        table: &TableArgs,
        games: Option<u64>,
        err: &mut dyn Write,
    ) -> Result<Self, CliError> {
        let cfg = config::load_with_sources()?.config;

        let players = match table.players.as_deref() {
            Some(list) => parse_players(list),
            None => cfg.players,
        };
        let default_kind: AiKind = table.agent.as_deref().unwrap_or(&cfg.agent).parse()?;
        let overrides = match table.agents.as_deref() {
            Some(spec) => parse_agents(spec)?,
            None => Vec::new(),
        };
        for (player, _) in &overrides {
            if !players.contains(player) {
                ui::display_warning(err, &format!("--agents names unknown player {:?}", player))?;
            }
        }
        let seats = players
            .iter()
            .map(|p| {
                let kind = overrides
                    .iter()
                    .rev()
                    .find(|(name, _)| name == p)
                    .map_or(default_kind, |(_, k)| *k);
                (p.clone(), kind)
            })
            .collect();

        let games = match games {
            Some(g) => to_usize(g, "games")?,
            None => cfg.games,
        };
        let max_hands = match table.max_hands {
            Some(h) => to_usize(h, "max-hands")?,
            None => cfg.max_hands,
        };
        let seed = table.seed.or(cfg.seed).unwrap_or_else(rand::random);

        let config = SimulationConfig {
            players,
            initial_stack: table.stack.unwrap_or(cfg.initial_stack),
            stake: table.stake.unwrap_or(cfg.stake),
            games,
            max_hands,
            seed: Some(seed),
        };
        config.validate()?;
        Ok(Self { config, seats })
    }

    pub fn seed(&self) -> u64 {
        self.config.seed.unwrap_or_default()
    }

    /// A fresh policy for the table. `salt` varies the random policy's seed
    /// between games run in parallel.
    pub fn policy(&self, salt: u64) -> Box<dyn DecisionPolicy> {
        let seed = self.seed().wrapping_add(salt);
        match self.uniform_kind() {
            Some(kind) => kind.build(seed),
            None => {
                let mut table = PolicyTable::new();
                for (i, (player, kind)) in self.seats.iter().enumerate() {
                    table.insert(player.clone(), kind.build(seed.wrapping_add(i as u64)));
                }
                Box::new(table)
            }
        }
    }

    /// `baseline`, or `alice=baseline, bob=passive` when seats differ.
    pub fn agent_label(&self) -> String {
        match self.uniform_kind() {
            Some(kind) => kind.to_string(),
            None => self
                .seats
                .iter()
                .map(|(p, k)| format!("{}={}", p, k))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    fn uniform_kind(&self) -> Option<AiKind> {
        let first = self.seats.first()?.1;
        self.seats
            .iter()
            .all(|(_, k)| *k == first)
            .then_some(first)
    }
}

fn to_usize(value: u64, flag: &str) -> Result<usize, CliError> {
    usize::try_from(value).map_err(|_| CliError::InvalidInput(format!("--{} is too large", flag)))
}

/// Parses `alice=baseline,bob=random`.
fn parse_agents(spec: &str) -> Result<Vec<(String, AiKind)>, CliError> {
    spec.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (player, kind) = entry.split_once('=').ok_or_else(|| {
                CliError::InvalidInput(format!("expected player=agent, got {:?}", entry))
            })?;
            Ok((player.trim().to_string(), kind.trim().parse::<AiKind>()?))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_overrides_parse() {
        let parsed = parse_agents("alice=baseline, bob=random").unwrap();
        assert_eq!(
            parsed,
            vec![
                ("alice".to_string(), AiKind::Baseline),
                ("bob".to_string(), AiKind::Random)
            ]
        );
        assert!(parse_agents("alice").is_err());
        assert!(parse_agents("alice=shark").is_err());
    }
}
