//! Plays one hand: blinds, up to four betting streets, then the award.
//!
//! ```
//! use pokersim_engine::deck::Deck;
//! use pokersim_engine::engine::play_hand;
//! use pokersim_engine::game::GameState;
//! use pokersim_engine::observer::NullObserver;
//! use pokersim_engine::policy::CheckCallPolicy;
//! use pokersim_engine::round::GameRound;
//!
//! let players = vec!["alice".to_string(), "bob".to_string()];
//! let mut state = GameState::new(&players, 50);
//! let mut deck = Deck::new_with_seed(7);
//! deck.shuffle();
//!
//! let round = GameRound::deal(&state, 0, 0, &mut deck, 5).unwrap();
//! let (hand, outcome) =
//!     play_hand(&mut state, &mut deck, round, &mut CheckCallPolicy, &mut NullObserver).unwrap();
//!
//! // Check/call play always reaches the river
//! assert_eq!(hand.board().len(), 5);
//! assert_eq!(outcome.pot, 20);
//! assert_eq!(state.total_chips(), 100);
//! ```

use serde::Serialize;
use tracing::debug;

use crate::action::{PlayerAction, RecordedAction};
use crate::betting::{BettingState, Street};
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::GameState;
use crate::hand::{best_hands, evaluate, HandStrength};
use crate::observer::GameObserver;
use crate::policy::{DecisionPolicy, TurnView};
use crate::round::GameRound;
use crate::rules::validate_decision;

/// Everything that happened in one hand: the dealt round, the streets in
/// order and the board. Each street points at its predecessor by index.
#[derive(Debug, Clone, Serialize)]
pub struct Hand {
    round: GameRound,
    streets: Vec<BettingState>,
    board: Vec<Card>,
}

impl Hand {
    pub fn round(&self) -> &GameRound {
        &self.round
    }

    pub fn streets(&self) -> &[BettingState] {
        &self.streets
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// Pot accumulated up to and including street `index`, following the
    /// parent links back to pre-flop.
    pub fn pot_through(&self, index: usize) -> u32 {
        let mut total: u32 = 0;
        let mut cursor = Some(index);
        while let Some(street) = cursor.and_then(|i| self.streets.get(i)) {
            total = total.saturating_add(street.contribution());
            cursor = street.parent();
        }
        total
    }

    pub fn total_pot(&self) -> u32 {
        match self.streets.len() {
            0 => 0,
            n => self.pot_through(n - 1),
        }
    }

    /// Non-folded seats after the last street played.
    pub fn survivors(&self) -> Vec<usize> {
        self.streets
            .last()
            .map(BettingState::survivors)
            .unwrap_or_else(|| self.round.all_seats())
    }
}

/// Chips credited to one round seat at the end of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Award {
    pub seat: usize,
    pub amount: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Showdown {
    /// Evaluated hand of every seat that reached showdown
    pub hands: Vec<(usize, HandStrength)>,
    /// Seats holding the best hand; more than one means a split pot
    pub winners: Vec<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HandOutcome {
    pub pot: u32,
    pub last_street: Street,
    pub awards: Vec<Award>,
    pub showdown: Option<Showdown>,
}

/// Plays the hand described by `round` to completion.
///
/// Chips move through `state` as they are bet; the pot is credited to the
/// winner(s) before returning. The deck must be the one `round` was dealt
/// from, since board cards are popped from it.
pub fn play_hand(
    state: &mut GameState,
    deck: &mut Deck,
    round: GameRound,
    policy: &mut dyn DecisionPolicy,
    observer: &mut dyn GameObserver,
) -> Result<(Hand, HandOutcome), GameError> {
    observer.hand_started(&round);
    let mut hand = Hand {
        round,
        streets: Vec::with_capacity(4),
        board: Vec::with_capacity(5),
    };

    for street in Street::ALL {
        for _ in 0..street.cards_revealed() {
            hand.board.push(deck.draw()?);
        }
        let active = match hand.streets.last() {
            Some(prev) => prev.survivors(),
            None => hand.round.all_seats(),
        };
        let parent = street.index().checked_sub(1);
        let mut betting = BettingState::new(street, parent, hand.board.clone(), active);
        if street == Street::Preflop {
            post_blinds(&hand.round, state, &mut betting)?;
        }

        run_street(&hand, state, &mut betting, policy)?;
        observer.street_completed(&hand.round, &betting);

        let done = betting.is_round_complete(&hand.round.live_stacks(state));
        hand.streets.push(betting);
        if done {
            break;
        }
    }

    let outcome = settle(&hand, state)?;
    observer.hand_won(&hand, &outcome);
    Ok((hand, outcome))
}

fn post_blinds(
    round: &GameRound,
    state: &mut GameState,
    betting: &mut BettingState,
) -> Result<(), GameError> {
    let sb = round.small_blind();
    let bb = round.big_blind();
    let paid = state.debit(round.game_seat(sb), round.stake());
    betting.record(sb, RecordedAction::SmallBlind(paid))?;
    let paid = state.debit(round.game_seat(bb), round.stake().saturating_mul(2));
    betting.record(bb, RecordedAction::BigBlind(paid))
}

fn run_street(
    hand: &Hand,
    state: &mut GameState,
    betting: &mut BettingState,
    policy: &mut dyn DecisionPolicy,
) -> Result<(), GameError> {
    let round = &hand.round;
    let mut seat = round.first_mover();
    loop {
        let stacks = round.live_stacks(state);
        if betting.is_complete(&stacks) || betting.survivors().len() <= 1 {
            return Ok(());
        }
        if betting.is_active(seat) {
            take_turn(hand, state, betting, policy, seat, stacks[seat])?;
        }
        seat = round.next_to_act(seat);
    }
}

fn take_turn(
    hand: &Hand,
    state: &mut GameState,
    betting: &mut BettingState,
    policy: &mut dyn DecisionPolicy,
    seat: usize,
    stack: u32,
) -> Result<(), GameError> {
    let round = &hand.round;
    let player = round.player(seat);
    let legal = betting.valid_actions(seat, stack, round.stake());
    if legal.is_empty() {
        if betting.has_folded(seat) || stack == 0 {
            return Ok(());
        }
        return Err(GameError::NoLegalAction {
            player: player.to_string(),
        });
    }

    let view = TurnView {
        player,
        seat,
        hole_cards: round.hole_cards(seat),
        street: betting.street(),
        board: betting.board(),
        stack,
        pot: hand.total_pot().saturating_add(betting.contribution()),
        stake: round.stake(),
    };
    let chosen = policy.decide(&view, &legal);
    let action = validate_decision(player, &legal, chosen)?;

    let paid = state.debit(round.game_seat(seat), action.amount());
    let recorded = match action {
        PlayerAction::Call(_) => RecordedAction::Call(paid),
        PlayerAction::Raise(_) => RecordedAction::Raise(paid),
        other => other.into(),
    };
    debug!(
        player,
        street = betting.street().label(),
        action = ?recorded,
        stack = stack - paid,
        "player acted"
    );
    betting.record(seat, recorded)
}

// Decides the winner(s) and credits the pot.
fn settle(hand: &Hand, state: &mut GameState) -> Result<HandOutcome, GameError> {
    let round = &hand.round;
    let pot = hand.total_pot();
    let survivors = hand.survivors();

    let (winners, showdown) = if survivors.len() <= 1 {
        (survivors, None)
    } else {
        let mut strengths = Vec::with_capacity(survivors.len());
        for &seat in &survivors {
            strengths.push(evaluate(&round.hole_cards(seat), &hand.board)?);
        }
        let winners: Vec<usize> = best_hands(&strengths)
            .into_iter()
            .map(|i| survivors[i])
            .collect();
        let showdown = Showdown {
            hands: survivors.iter().copied().zip(strengths).collect(),
            winners: winners.clone(),
        };
        (winners, Some(showdown))
    };

    let awards = split_pot(round, pot, winners);
    for award in &awards {
        state.credit(round.game_seat(award.seat), award.amount);
    }
    Ok(HandOutcome {
        pot,
        last_street: hand
            .streets
            .last()
            .map_or(Street::Preflop, BettingState::street),
        awards,
        showdown,
    })
}

/// Divides `pot` evenly among `winners`; odd chips go one apiece starting
/// with the winner closest to the small blind.
pub fn split_pot(round: &GameRound, pot: u32, mut winners: Vec<usize>) -> Vec<Award> {
    if winners.is_empty() {
        return Vec::new();
    }
    winners.sort_by_key(|&s| round.button_distance(s));
    let count = winners.len() as u32;
    let share = pot / count;
    let odd = pot % count;
    winners
        .into_iter()
        .enumerate()
        .map(|(i, seat)| Award {
            seat,
            amount: share + u32::from((i as u32) < odd),
        })
        .collect()
}
