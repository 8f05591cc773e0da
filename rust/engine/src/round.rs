use serde::Serialize;

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::GameState;

/// Read-only snapshot of one hand, taken when the hand is dealt.
///
/// Round seats index the players still holding chips at hand start, in game
/// seat order. `seats[i]` maps round seat `i` back to its seat in
/// [`GameState`]; the round never touches the ledger itself.
#[derive(Debug, Clone, Serialize)]
pub struct GameRound {
    pub game_index: usize,
    pub hand_index: usize,
    seats: Vec<usize>,
    players: Vec<String>,
    /// Stacks at hand start, before blinds
    stacks: Vec<u32>,
    hole_cards: Vec<[Card; 2]>,
    small_blind: usize,
    big_blind: usize,
    stake: u32,
}

impl GameRound {
    /// Snapshots the remaining players and deals two hole cards to each, in
    /// seat order, from the end of `deck`.
    pub fn deal(
        state: &GameState,
        game_index: usize,
        hand_index: usize,
        deck: &mut Deck,
        stake: u32,
    ) -> Result<Self, GameError> {
        let seats = state.remaining_seats();
        if seats.is_empty() {
            return Err(GameError::InvalidConfiguration(
                "no player holds chips".to_string(),
            ));
        }
        let players = seats
            .iter()
            .map(|&s| state.players()[s].clone())
            .collect();
        let stacks = seats.iter().map(|&s| state.stack(s)).collect();
        let mut hole_cards = Vec::with_capacity(seats.len());
        for _ in &seats {
            hole_cards.push([deck.draw()?, deck.draw()?]);
        }
        let n = seats.len();
        let small_blind = hand_index % n;
        Ok(Self {
            game_index,
            hand_index,
            seats,
            players,
            stacks,
            hole_cards,
            small_blind,
            big_blind: (small_blind + 1) % n,
            stake,
        })
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn player(&self, seat: usize) -> &str {
        &self.players[seat]
    }

    pub fn starting_stacks(&self) -> &[u32] {
        &self.stacks
    }

    /// Seat in the game ledger for a round seat.
    pub fn game_seat(&self, seat: usize) -> usize {
        self.seats[seat]
    }

    pub fn hole_cards(&self, seat: usize) -> [Card; 2] {
        self.hole_cards[seat]
    }

    pub fn small_blind(&self) -> usize {
        self.small_blind
    }

    pub fn big_blind(&self) -> usize {
        self.big_blind
    }

    pub fn stake(&self) -> u32 {
        self.stake
    }

    /// Every street opens with the small blind.
    pub fn first_mover(&self) -> usize {
        self.small_blind
    }

    /// Turn order walks the seats downward and wraps to the last seat.
    pub fn next_to_act(&self, seat: usize) -> usize {
        if seat == 0 {
            self.players.len() - 1
        } else {
            seat - 1
        }
    }

    /// All round seats in seat order.
    pub fn all_seats(&self) -> Vec<usize> {
        (0..self.players.len()).collect()
    }

    /// Current stacks of the round's players, read from the ledger.
    pub fn live_stacks(&self, state: &GameState) -> Vec<u32> {
        self.seats.iter().map(|&s| state.stack(s)).collect()
    }

    /// Distance from the small blind going up through the seats; used to
    /// order split-pot remainders.
    pub fn button_distance(&self, seat: usize) -> usize {
        let n = self.players.len();
        (seat + n - self.small_blind) % n
    }
}
