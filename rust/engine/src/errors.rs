use thiserror::Error;

use crate::action::{ActionKind, PlayerAction};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Player {player} has no legal action on an open turn")]
    NoLegalAction { player: String },
    #[error("Player {player} chose {action:?}, legal kinds were {offered:?}")]
    DecisionPolicyViolation {
        player: String,
        action: PlayerAction,
        offered: Vec<ActionKind>,
    },
    #[error("Expected {expected} cards, got {actual}")]
    InvalidCardCount { expected: usize, actual: usize },
    #[error("Player at seat {seat} already folded")]
    PlayerAlreadyFolded { seat: usize },
    #[error("Deck exhausted mid-hand")]
    DeckExhausted,
    #[error("Unknown player: {0}")]
    UnknownPlayer(String),
}
