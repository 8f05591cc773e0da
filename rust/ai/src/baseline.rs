//! Rule-based policy driven by hand strength.
//!
//! Hole cards are scored on a 0-10 scale before the flop; after the flop the
//! made hand's category (over the cards visible so far) takes over. Strong
//! hands raise, medium hands call when the price is right and weak hands
//! give up facing a bet. The policy is fully deterministic.

use pokersim_engine::action::{ActionKind, LegalAction, PlayerAction};
use pokersim_engine::cards::Card;
use pokersim_engine::hand::{evaluate_cards, Category};
use pokersim_engine::policy::{DecisionPolicy, TurnView};

/// Simple baseline policy for testing and comparison.
///
/// # Strategy
///
/// **Preflop:**
/// - Strong hands (high pairs 77+, AK, AQ): Raise or call
/// - Medium hands (suited connectors, Ax, small pairs): Call if cheap
/// - Weak hands: Fold to bets, check if free
///
/// **Postflop:**
/// - Strong hands (Straight+): Raise or call
/// - Medium hands (pairs): Check or call small bets
/// - Weak hands: Fold unless the pot odds are generous
///
/// # Example
///
/// ```rust
/// use pokersim_ai::baseline::BaselineAI;
/// use pokersim_engine::cards::parse_cards;
///
/// let aces = parse_cards("Ah Ad").unwrap();
/// assert_eq!(BaselineAI::preflop_strength([aces[0], aces[1]]), 10);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BaselineAI;

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }

    /// Scores two hole cards from 0 (trash) to 10 (AA, KK, AKs).
    ///
    /// - 9-10: Premium hands (AA-JJ, AKs)
    /// - 7-8: Strong hands (TT-99, AK, AQ, KQs)
    /// - 5-6: Medium hands (88-77, AJ, suited broadway)
    /// - 3-4: Marginal hands (66-22, Ax, suited connectors)
    /// - 0-2: Weak hands
    pub fn preflop_strength(hole_cards: [Card; 2]) -> u8 {
        let r1 = hole_cards[0].rank.value();
        let r2 = hole_cards[1].rank.value();
        let (high, low) = if r1 >= r2 { (r1, r2) } else { (r2, r1) };
        let suited = hole_cards[0].suit == hole_cards[1].suit;
        let by_suit = |s: u8, o: u8| if suited { s } else { o };

        if high == low {
            return match high {
                13..=14 => 10,
                11..=12 => 9,
                10 => 8,
                9 => 7,
                8 => 6,
                7 => 5,
                _ => 4,
            };
        }

        match (high, low) {
            (14, 13) => by_suit(10, 8),
            (14, 12) => by_suit(8, 7),
            (14, 11) => by_suit(7, 6),
            (14, 10) => by_suit(6, 5),
            (14, _) => by_suit(5, 4),
            (13, 12) => by_suit(7, 6),
            (13, 11) => by_suit(6, 5),
            (13, 10) => by_suit(5, 4),
            (12, 11) => by_suit(6, 5),
            (12, 10) => by_suit(5, 4),
            _ if suited && high - low <= 2 => {
                if high >= 9 {
                    5
                } else {
                    4
                }
            }
            _ if high >= 11 && low >= 9 => 4,
            _ => 2,
        }
    }

    /// Scores the made hand over hole cards plus a board of 3-5 cards.
    /// `None` before the flop.
    pub fn postflop_strength(hole_cards: [Card; 2], board: &[Card]) -> Option<u8> {
        if board.len() < 3 {
            return None;
        }
        let mut cards = Vec::with_capacity(2 + board.len());
        cards.extend_from_slice(&hole_cards);
        cards.extend_from_slice(board);
        let strength = evaluate_cards(&cards).ok()?;

        let base = match strength.category {
            Category::HighCard => 1,
            Category::OnePair => 3,
            Category::TwoPair => 5,
            Category::ThreeOfAKind => 6,
            Category::Straight => 7,
            Category::Flush => 8,
            Category::FullHouse => 9,
            Category::FourOfAKind | Category::StraightFlush | Category::RoyalFlush => 10,
        };
        // a queen-or-better top rank nudges the score up
        let kicker = u8::from(strength.kickers[0] >= 12);
        Some((base + kicker).min(10))
    }

    pub fn hand_strength(view: &TurnView<'_>) -> u8 {
        Self::postflop_strength(view.hole_cards, view.board)
            .unwrap_or_else(|| Self::preflop_strength(view.hole_cards))
    }

    /// Share of the final pot the call would buy, `pot / (pot + call)`.
    fn pot_odds(pot: u32, to_call: u32) -> f32 {
        if to_call == 0 {
            return 1.0;
        }
        pot as f32 / (pot as f32 + to_call as f32)
    }

    fn choose(strength: u8, legal: &[LegalAction], stack: u32, pot: u32) -> PlayerAction {
        let offer = |kind: ActionKind| legal.iter().find(|l| l.kind == kind).copied();
        let raise = offer(ActionKind::Raise);
        let sized = |target: u32| raise.map(|r| PlayerAction::Raise(target.max(r.min).min(r.max)));

        let Some(call) = offer(ActionKind::Call) else {
            let passive = if offer(ActionKind::Check).is_some() {
                PlayerAction::Check
            } else {
                PlayerAction::Fold
            };
            return match strength {
                9..=10 => sized(pot / 3 * 2).unwrap_or(passive),
                7..=8 => sized(pot / 2).unwrap_or(passive),
                _ => passive,
            };
        };

        let to_call = call.min;
        if to_call > stack {
            return if strength >= 7 {
                PlayerAction::Call(to_call)
            } else {
                PlayerAction::Fold
            };
        }

        let odds = Self::pot_odds(pot, to_call);
        match strength {
            9..=10 => sized(pot / 2).unwrap_or(PlayerAction::Call(to_call)),
            7..=8 => PlayerAction::Call(to_call),
            5..=6 if odds >= 0.3 || to_call <= pot / 4 => PlayerAction::Call(to_call),
            3..=4 if odds >= 0.4 || to_call <= pot / 6 => PlayerAction::Call(to_call),
            _ => PlayerAction::Fold,
        }
    }
}

impl DecisionPolicy for BaselineAI {
    fn decide(&mut self, view: &TurnView<'_>, legal: &[LegalAction]) -> PlayerAction {
        let strength = Self::hand_strength(view);
        Self::choose(strength, legal, view.stack, view.pot)
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}
