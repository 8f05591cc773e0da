use tracing::warn;

use crate::action::{ActionKind, LegalAction, PlayerAction as A};
use crate::errors::GameError;

/// Checks a policy's decision against the legal moves it was offered.
///
/// The kind must be one of the offered kinds. Amounts are then forced into
/// the advertised bounds: a call always uses its fixed amount and a raise is
/// clamped into `[min, max]`. Every correction is logged at `warn`.
///
/// # Errors
///
/// Returns [`GameError::DecisionPolicyViolation`] when the action's kind was
/// not offered at all.
///
/// # Examples
///
/// ```
/// use pokersim_engine::action::{ActionKind, LegalAction, PlayerAction};
/// use pokersim_engine::rules::validate_decision;
///
/// let legal = [
///     LegalAction::fixed(ActionKind::Fold, 0),
///     LegalAction::fixed(ActionKind::Call, 5),
///     LegalAction::range(ActionKind::Raise, 10, 40),
/// ];
///
/// // An over-sized raise is clamped to the player's stack
/// let v = validate_decision("alice", &legal, PlayerAction::Raise(500)).unwrap();
/// assert_eq!(v, PlayerAction::Raise(40));
///
/// // Checking while facing a bet is rejected
/// assert!(validate_decision("alice", &legal, PlayerAction::Check).is_err());
/// ```
pub fn validate_decision(
    player: &str,
    legal: &[LegalAction],
    action: A,
) -> Result<A, GameError> {
    let Some(offer) = legal.iter().find(|l| l.kind == action.kind()) else {
        warn!(player, ?action, "decision outside the legal set");
        return Err(GameError::DecisionPolicyViolation {
            player: player.to_string(),
            action,
            offered: offered_kinds(legal),
        });
    };

    let validated = match action {
        A::Fold => A::Fold,
        A::Check => A::Check,
        A::Call(_) => A::Call(offer.min),
        A::Raise(amount) => A::Raise(amount.max(offer.min).min(offer.max)),
    };
    if validated != action {
        warn!(player, requested = ?action, applied = ?validated, "decision amount corrected");
    }
    Ok(validated)
}

/// Kinds present in a legal-move list, in offer order.
pub fn offered_kinds(legal: &[LegalAction]) -> Vec<ActionKind> {
    legal.iter().map(|l| l.kind).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facing_bet() -> Vec<LegalAction> {
        vec![
            LegalAction::fixed(ActionKind::Fold, 0),
            LegalAction::fixed(ActionKind::Call, 10),
            LegalAction::range(ActionKind::Raise, 15, 90),
        ]
    }

    #[test]
    fn call_amount_is_forced_to_fixed_value() {
        let v = validate_decision("p", &facing_bet(), A::Call(3)).unwrap();
        assert_eq!(v, A::Call(10));
    }

    #[test]
    fn small_raise_is_lifted_to_minimum() {
        let v = validate_decision("p", &facing_bet(), A::Raise(1)).unwrap();
        assert_eq!(v, A::Raise(15));
    }

    #[test]
    fn in_range_raise_is_untouched() {
        let v = validate_decision("p", &facing_bet(), A::Raise(40)).unwrap();
        assert_eq!(v, A::Raise(40));
    }

    #[test]
    fn unoffered_kind_is_a_violation() {
        let err = validate_decision("p", &facing_bet(), A::Check).unwrap_err();
        match err {
            GameError::DecisionPolicyViolation {
                player, offered, ..
            } => {
                assert_eq!(player, "p");
                assert_eq!(
                    offered,
                    vec![ActionKind::Fold, ActionKind::Call, ActionKind::Raise]
                );
            }
            other => panic!("expected DecisionPolicyViolation, got {other:?}"),
        }
    }
}
