//! Decision policies: the only thing the game loop needs from a player.
//!
//! A policy is asked once per turn with the legal moves and a read-only view
//! of what the acting player may see. The loop validates the answer with
//! [`crate::rules::validate_decision`] before applying it.

use tracing::warn;

use crate::action::{ActionKind, LegalAction, PlayerAction};
use crate::betting::Street;
use crate::cards::Card;

/// What the acting player can see on their turn.
#[derive(Debug, Clone)]
pub struct TurnView<'a> {
    pub player: &'a str,
    /// Round seat of the acting player
    pub seat: usize,
    pub hole_cards: [Card; 2],
    pub street: Street,
    pub board: &'a [Card],
    /// Chips behind, before this action
    pub stack: u32,
    /// Chips in the pot so far this hand
    pub pot: u32,
    pub stake: u32,
}

/// Interface for anything that picks a move from a legal-move list.
///
/// # Example Implementation
///
/// ```rust
/// use pokersim_engine::action::{LegalAction, PlayerAction};
/// use pokersim_engine::policy::{DecisionPolicy, TurnView};
///
/// struct AlwaysFold;
///
/// impl DecisionPolicy for AlwaysFold {
///     fn decide(&mut self, _view: &TurnView<'_>, _legal: &[LegalAction]) -> PlayerAction {
///         PlayerAction::Fold
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysFold"
///     }
/// }
/// ```
pub trait DecisionPolicy {
    /// Choose exactly one action. `legal` is never empty when this is called.
    fn decide(&mut self, view: &TurnView<'_>, legal: &[LegalAction]) -> PlayerAction;

    fn name(&self) -> &str;
}

impl<T: DecisionPolicy + ?Sized> DecisionPolicy for Box<T> {
    fn decide(&mut self, view: &TurnView<'_>, legal: &[LegalAction]) -> PlayerAction {
        (**self).decide(view, legal)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Default policy: check if offered, else call at its exact amount, else
/// fold.
///
/// ```
/// use pokersim_engine::action::{ActionKind, LegalAction, PlayerAction};
/// use pokersim_engine::policy::check_call_fold;
///
/// let legal = [
///     LegalAction::fixed(ActionKind::Fold, 0),
///     LegalAction::fixed(ActionKind::Call, 15),
///     LegalAction::range(ActionKind::Raise, 20, 80),
/// ];
/// assert_eq!(check_call_fold(&legal), PlayerAction::Call(15));
/// ```
pub fn check_call_fold(legal: &[LegalAction]) -> PlayerAction {
    if legal.iter().any(|l| l.kind == ActionKind::Check) {
        return PlayerAction::Check;
    }
    if let Some(call) = legal.iter().find(|l| l.kind == ActionKind::Call) {
        return PlayerAction::Call(call.min);
    }
    PlayerAction::Fold
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CheckCallPolicy;

impl DecisionPolicy for CheckCallPolicy {
    fn decide(&mut self, view: &TurnView<'_>, legal: &[LegalAction]) -> PlayerAction {
        let action = check_call_fold(legal);
        if action == PlayerAction::Fold {
            warn!(player = view.player, ?legal, "neither check nor call offered, folding");
        }
        action
    }

    fn name(&self) -> &str {
        "CheckCall"
    }
}

/// Adapts a closure into a policy.
pub struct FnPolicy<F>(pub F);

impl<F> DecisionPolicy for FnPolicy<F>
where
    F: FnMut(&TurnView<'_>, &[LegalAction]) -> PlayerAction,
{
    fn decide(&mut self, view: &TurnView<'_>, legal: &[LegalAction]) -> PlayerAction {
        (self.0)(view, legal)
    }

    fn name(&self) -> &str {
        "Fn"
    }
}
