//! A policy that picks uniformly among the legal moves.

use pokersim_engine::action::{ActionKind, LegalAction, PlayerAction};
use pokersim_engine::policy::{DecisionPolicy, TurnView};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Chooses a random legal action; a raise amount is drawn uniformly from
/// its advertised range. Two instances built from the same seed make the
/// same choices when shown the same turns.
#[derive(Debug, Clone)]
pub struct RandomAI {
    rng: ChaCha20Rng,
}

impl RandomAI {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl DecisionPolicy for RandomAI {
    fn decide(&mut self, _view: &TurnView<'_>, legal: &[LegalAction]) -> PlayerAction {
        if legal.is_empty() {
            return PlayerAction::Fold;
        }
        let pick = legal[self.rng.random_range(0..legal.len())];
        match pick.kind {
            ActionKind::Raise if pick.max > pick.min => {
                PlayerAction::Raise(self.rng.random_range(pick.min..=pick.max))
            }
            _ => pick.at_min(),
        }
    }

    fn name(&self) -> &str {
        "RandomAI"
    }
}
