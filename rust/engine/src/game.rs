use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Chip ledger for one game, persisting across hands.
///
/// Membership is fixed at construction. A player whose stack reaches zero
/// drops out of [`remaining_seats`](GameState::remaining_seats) and, since
/// only hand participants are ever credited, never comes back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Player identifiers in seat order
    players: Vec<String>,
    /// Chip stacks, parallel to `players`
    stacks: Vec<u32>,
}

impl GameState {
    pub fn new(players: &[String], initial_stack: u32) -> Self {
        Self {
            players: players.to_vec(),
            stacks: vec![initial_stack; players.len()],
        }
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn stacks(&self) -> &[u32] {
        &self.stacks
    }

    pub fn stack(&self, seat: usize) -> u32 {
        self.stacks.get(seat).copied().unwrap_or(0)
    }

    pub fn seat_of(&self, player: &str) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|p| p == player)
            .ok_or_else(|| GameError::UnknownPlayer(player.to_string()))
    }

    pub fn stack_of(&self, player: &str) -> Result<u32, GameError> {
        self.seat_of(player).map(|s| self.stacks[s])
    }

    /// Seats still holding chips, in seat order.
    pub fn remaining_seats(&self) -> Vec<usize> {
        (0..self.players.len())
            .filter(|&s| self.stacks[s] > 0)
            .collect()
    }

    pub fn remaining_players(&self) -> Vec<&str> {
        self.remaining_seats()
            .into_iter()
            .map(|s| self.players[s].as_str())
            .collect()
    }

    /// Takes up to `amount` from a stack and returns what was taken.
    /// A stack never goes below zero; a short stack pays what it has.
    pub fn debit(&mut self, seat: usize, amount: u32) -> u32 {
        let Some(stack) = self.stacks.get_mut(seat) else {
            return 0;
        };
        let paid = amount.min(*stack);
        *stack -= paid;
        paid
    }

    pub fn credit(&mut self, seat: usize, amount: u32) {
        if let Some(stack) = self.stacks.get_mut(seat) {
            *stack = stack.saturating_add(amount);
        }
    }

    pub fn total_chips(&self) -> u64 {
        self.stacks.iter().map(|&s| u64::from(s)).sum()
    }

    /// Remaining seat with the largest stack; the first one in seat order
    /// wins a tie.
    pub fn chip_leader(&self) -> Option<usize> {
        let mut leader: Option<usize> = None;
        for seat in self.remaining_seats() {
            if leader.is_none_or(|l| self.stacks[seat] > self.stacks[l]) {
                leader = Some(seat);
            }
        }
        leader
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: &[&str]) -> Vec<String> {
        n.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn eliminated_player_leaves_remaining_seats() {
        let mut gs = GameState::new(&names(&["a", "b", "c"]), 50);
        assert_eq!(gs.remaining_seats(), vec![0, 1, 2]);

        gs.debit(1, 50);
        assert_eq!(gs.remaining_players(), vec!["a", "c"]);
        assert_eq!(gs.remaining_seats(), vec![0, 2]);
        assert_eq!(gs.total_chips(), 100);
    }

    #[test]
    fn debit_never_overdraws() {
        let mut gs = GameState::new(&names(&["a", "b"]), 30);
        assert_eq!(gs.debit(0, 45), 30);
        assert_eq!(gs.stack(0), 0);
        assert_eq!(gs.remaining_seats(), vec![1]);
    }

    #[test]
    fn chip_leader_prefers_first_on_tie() {
        let mut gs = GameState::new(&names(&["a", "b", "c"]), 40);
        gs.debit(0, 10);
        gs.credit(1, 5);
        gs.credit(2, 5);
        assert_eq!(gs.chip_leader(), Some(1));
    }

    #[test]
    fn unknown_player_lookup_fails() {
        let gs = GameState::new(&names(&["a"]), 10);
        assert_eq!(
            gs.stack_of("zed").unwrap_err(),
            GameError::UnknownPlayer("zed".into())
        );
    }
}
