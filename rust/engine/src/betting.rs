use std::fmt;

use serde::{Deserialize, Serialize};

use crate::action::{ActionKind, LegalAction, RecordedAction};
use crate::cards::Card;
use crate::errors::GameError;

/// Represents a betting street in Texas Hold'em poker.
/// Defines the four stages of a poker hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Street {
    /// Before flop (hole cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
}

impl Street {
    pub const ALL: [Street; 4] = [Street::Preflop, Street::Flop, Street::Turn, Street::River];

    /// Position of the street within a hand, 0 (pre-flop) to 3 (river).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Street::Preflop => "pre-flop",
            Street::Flop => "post-flop",
            Street::Turn => "turn",
            Street::River => "river",
        }
    }

    /// Board cards visible during this street.
    pub fn board_size(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    /// Cards revealed when this street opens.
    pub fn cards_revealed(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Betting on one street of one hand.
///
/// Players are round seats (see [`crate::round::GameRound`]). The state only
/// grows: actions are appended, never removed, and nothing is appended for a
/// player whose latest action is a fold. Stacks are never stored here; the
/// queries that depend on them take the current stacks indexed by round
/// seat.
#[derive(Debug, Clone, Serialize)]
pub struct BettingState {
    street: Street,
    /// Index of the previous street's state within the hand
    parent: Option<usize>,
    board: Vec<Card>,
    /// Seats still in the hand when the street opened
    active: Vec<usize>,
    /// Every action of the street in the order it happened
    log: Vec<(usize, RecordedAction)>,
}

impl BettingState {
    pub fn new(street: Street, parent: Option<usize>, board: Vec<Card>, active: Vec<usize>) -> Self {
        Self {
            street,
            parent,
            board,
            active,
            log: Vec::new(),
        }
    }

    pub fn street(&self) -> Street {
        self.street
    }

    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn active(&self) -> &[usize] {
        &self.active
    }

    pub fn is_active(&self, seat: usize) -> bool {
        self.active.contains(&seat)
    }

    pub fn log(&self) -> &[(usize, RecordedAction)] {
        &self.log
    }

    pub fn player_actions(&self, seat: usize) -> impl Iterator<Item = &RecordedAction> + '_ {
        self.log
            .iter()
            .filter(move |(s, _)| *s == seat)
            .map(|(_, a)| a)
    }

    pub fn has_acted(&self, seat: usize) -> bool {
        self.player_actions(seat).next().is_some()
    }

    pub fn has_folded(&self, seat: usize) -> bool {
        self.player_actions(seat).last().is_some_and(RecordedAction::is_fold)
    }

    /// Chips a seat has put in on this street.
    pub fn committed(&self, seat: usize) -> u32 {
        self.player_actions(seat)
            .fold(0u32, |acc, a| acc.saturating_add(a.amount()))
    }

    /// Active seats that have not folded, in seat order.
    pub fn survivors(&self) -> Vec<usize> {
        self.active
            .iter()
            .copied()
            .filter(|&s| !self.has_folded(s))
            .collect()
    }

    pub fn record(&mut self, seat: usize, action: RecordedAction) -> Result<(), GameError> {
        if self.has_folded(seat) {
            return Err(GameError::PlayerAlreadyFolded { seat });
        }
        self.log.push((seat, action));
        Ok(())
    }

    /// Legal moves for `seat`, holding `stack` chips, at stake unit `stake`.
    ///
    /// Empty for a player who folded or has no chips left to act with.
    /// Otherwise fold is always offered, then either check or call, then a
    /// raise when the stack covers its minimum.
    pub fn valid_actions(&self, seat: usize, stack: u32, stake: u32) -> Vec<LegalAction> {
        if self.has_folded(seat) || stack == 0 {
            return Vec::new();
        }
        let mut legal = vec![LegalAction::fixed(ActionKind::Fold, 0)];

        let biggest = self.biggest_commitment_excluding(seat);
        let mine = self.committed(seat);
        let owed = biggest.saturating_sub(mine);

        let raise_min = if owed > 0 {
            legal.push(LegalAction::fixed(ActionKind::Call, owed));
            owed.saturating_add(stake)
        } else {
            legal.push(LegalAction::fixed(ActionKind::Check, 0));
            stake
        };
        if stack >= raise_min {
            legal.push(LegalAction::range(ActionKind::Raise, raise_min, stack));
        }
        legal
    }

    /// Largest commitment among the other non-folded seats that acted.
    fn biggest_commitment_excluding(&self, seat: usize) -> u32 {
        self.active
            .iter()
            .copied()
            .filter(|&s| s != seat && self.has_acted(s) && !self.has_folded(s))
            .map(|s| self.committed(s))
            .max()
            .unwrap_or(0)
    }

    /// Betting on this street is settled.
    ///
    /// Every active seat with chips has acted at least once, and every
    /// non-folded seat with chips has committed as much as the largest
    /// commitment on the street. Seats with an empty stack are all-in: they
    /// cannot act again and are exempt from both checks.
    pub fn is_complete(&self, stacks: &[u32]) -> bool {
        let can_act = |s: usize| stacks.get(s).copied().unwrap_or(0) > 0;
        let everyone_acted = self
            .active
            .iter()
            .all(|&s| self.has_acted(s) || !can_act(s));
        if !everyone_acted {
            return false;
        }
        let survivors = self.survivors();
        let top = survivors
            .iter()
            .map(|&s| self.committed(s))
            .max()
            .unwrap_or(0);
        survivors
            .iter()
            .filter(|&&s| can_act(s))
            .all(|&s| self.committed(s) == top)
    }

    /// No further street will be dealt: one player is left, or the river's
    /// betting is settled.
    pub fn is_round_complete(&self, stacks: &[u32]) -> bool {
        self.survivors().len() <= 1 || (self.street == Street::River && self.is_complete(stacks))
    }

    /// Chips put in on this street, blinds included.
    pub fn contribution(&self) -> u32 {
        self.log
            .iter()
            .fold(0u32, |acc, (_, a)| acc.saturating_add(a.amount()))
    }
}
