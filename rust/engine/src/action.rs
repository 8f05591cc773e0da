use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of move a player may be offered on their turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Raise,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActionKind::Fold => "fold",
            ActionKind::Check => "check",
            ActionKind::Call => "call",
            ActionKind::Raise => "raise",
        })
    }
}

/// A move returned by a decision policy.
/// Amounts are the chips added to the pot by this action.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Pass without adding chips (only when nothing is owed)
    Check,
    /// Match the biggest commitment on the street
    Call(u32),
    /// Add chips beyond what is owed
    Raise(u32),
}

impl PlayerAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            PlayerAction::Fold => ActionKind::Fold,
            PlayerAction::Check => ActionKind::Check,
            PlayerAction::Call(_) => ActionKind::Call,
            PlayerAction::Raise(_) => ActionKind::Raise,
        }
    }

    pub fn amount(&self) -> u32 {
        match self {
            PlayerAction::Fold | PlayerAction::Check => 0,
            PlayerAction::Call(a) | PlayerAction::Raise(a) => *a,
        }
    }
}

/// One entry of the legal-move list handed to a decision policy.
///
/// Fold, check and call carry a fixed amount (`min == max`); a raise
/// advertises an inclusive range.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct LegalAction {
    pub kind: ActionKind,
    pub min: u32,
    pub max: u32,
}

impl LegalAction {
    pub fn fixed(kind: ActionKind, amount: u32) -> Self {
        Self {
            kind,
            min: amount,
            max: amount,
        }
    }

    pub fn range(kind: ActionKind, min: u32, max: u32) -> Self {
        Self { kind, min, max }
    }

    /// The action this entry describes, at its minimum amount.
    pub fn at_min(&self) -> PlayerAction {
        match self.kind {
            ActionKind::Fold => PlayerAction::Fold,
            ActionKind::Check => PlayerAction::Check,
            ActionKind::Call => PlayerAction::Call(self.min),
            ActionKind::Raise => PlayerAction::Raise(self.min),
        }
    }
}

/// What a betting street records per player: forced blinds plus the
/// moves players made. The amount is what actually left the player's stack.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum RecordedAction {
    SmallBlind(u32),
    BigBlind(u32),
    Fold,
    Check,
    Call(u32),
    Raise(u32),
}

impl RecordedAction {
    pub fn amount(&self) -> u32 {
        match self {
            RecordedAction::Fold | RecordedAction::Check => 0,
            RecordedAction::SmallBlind(a)
            | RecordedAction::BigBlind(a)
            | RecordedAction::Call(a)
            | RecordedAction::Raise(a) => *a,
        }
    }

    pub fn is_fold(&self) -> bool {
        matches!(self, RecordedAction::Fold)
    }
}

impl From<PlayerAction> for RecordedAction {
    fn from(a: PlayerAction) -> Self {
        match a {
            PlayerAction::Fold => RecordedAction::Fold,
            PlayerAction::Check => RecordedAction::Check,
            PlayerAction::Call(x) => RecordedAction::Call(x),
            PlayerAction::Raise(x) => RecordedAction::Raise(x),
        }
    }
}
