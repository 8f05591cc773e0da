//! # pokersim-ai: Decision Policies for the Simulator
//!
//! Ready-made [`DecisionPolicy`] implementations and a factory that builds
//! one from its name.
//!
//! ## Core Components
//!
//! - [`AiKind`] - The known policy names
//! - [`create_ai`] - Factory function for creating policies by name
//! - [`baseline`] - Rule-based policy driven by hand strength
//! - [`random`] - Uniformly random legal moves from a seeded RNG
//! - [`PolicyTable`] - One policy per player, with a fallback
//!
//! ## Quick Start
//!
//! ```rust
//! use pokersim_ai::create_ai;
//! use pokersim_engine::observer::NullObserver;
//! use pokersim_engine::simulation::{run_simulation, SimulationConfig};
//!
//! let mut ai = create_ai("baseline").unwrap();
//! assert_eq!(ai.name(), "BaselineAI");
//!
//! let config = SimulationConfig::new(&["alice", "bob"], 100, 5, 4).with_seed(42);
//! let report = run_simulation(&config, &mut ai, &mut NullObserver).unwrap();
//! assert_eq!(report.wins("alice") + report.wins("bob"), 4);
//! ```
//!
//! ## AI Types
//!
//! - `"passive"` - Check when possible, otherwise call, otherwise fold
//! - `"random"` - Random legal action
//! - `"baseline"` - Simple rule-based play

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use pokersim_engine::action::{LegalAction, PlayerAction};
use pokersim_engine::policy::{CheckCallPolicy, DecisionPolicy, TurnView};
use thiserror::Error;

pub mod baseline;
pub mod random;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown AI type: {0} (expected one of: passive, random, baseline)")]
pub struct UnknownAi(pub String);

/// Policies that can be built by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AiKind {
    Passive,
    Random,
    Baseline,
}

impl AiKind {
    pub const ALL: [AiKind; 3] = [AiKind::Passive, AiKind::Random, AiKind::Baseline];

    pub fn as_str(self) -> &'static str {
        match self {
            AiKind::Passive => "passive",
            AiKind::Random => "random",
            AiKind::Baseline => "baseline",
        }
    }

    /// Builds a fresh policy. Only the random policy consumes `seed`.
    pub fn build(self, seed: u64) -> Box<dyn DecisionPolicy> {
        match self {
            AiKind::Passive => Box::new(CheckCallPolicy),
            AiKind::Random => Box::new(random::RandomAI::new(seed)),
            AiKind::Baseline => Box::new(baseline::BaselineAI::new()),
        }
    }
}

impl fmt::Display for AiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AiKind {
    type Err = UnknownAi;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AiKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownAi(s.to_string()))
    }
}

/// Factory function to create a policy by type string.
///
/// The random policy is seeded from the thread RNG; use
/// [`create_ai_with_seed`] for reproducible runs.
///
/// # Example
///
/// ```rust
/// use pokersim_ai::create_ai;
///
/// assert_eq!(create_ai("passive").unwrap().name(), "CheckCall");
/// assert!(create_ai("shark").is_err());
/// ```
pub fn create_ai(ai_type: &str) -> Result<Box<dyn DecisionPolicy>, UnknownAi> {
    create_ai_with_seed(ai_type, rand::random())
}

pub fn create_ai_with_seed(ai_type: &str, seed: u64) -> Result<Box<dyn DecisionPolicy>, UnknownAi> {
    Ok(ai_type.parse::<AiKind>()?.build(seed))
}

/// Routes each turn to the policy registered for the acting player.
/// Players without an entry play the default check/call policy.
#[derive(Default)]
pub struct PolicyTable {
    policies: HashMap<String, Box<dyn DecisionPolicy>>,
    fallback: CheckCallPolicy,
}

impl PolicyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, player: impl Into<String>, policy: Box<dyn DecisionPolicy>) {
        self.policies.insert(player.into(), policy);
    }

    pub fn with(mut self, player: impl Into<String>, policy: Box<dyn DecisionPolicy>) -> Self {
        self.insert(player, policy);
        self
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Name of the policy that will act for `player`.
    pub fn policy_name(&self, player: &str) -> &str {
        match self.policies.get(player) {
            Some(policy) => policy.name(),
            None => self.fallback.name(),
        }
    }
}

impl DecisionPolicy for PolicyTable {
    fn decide(&mut self, view: &TurnView<'_>, legal: &[LegalAction]) -> PlayerAction {
        match self.policies.get_mut(view.player) {
            Some(policy) => policy.decide(view, legal),
            None => self.fallback.decide(view, legal),
        }
    }

    fn name(&self) -> &str {
        "PolicyTable"
    }
}
