use std::cmp::Ordering;
use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// Poker hand category, scored 1 (high card) through 10 (royal flush).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub fn score(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "high card",
            Category::OnePair => "one pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfAKind => "four of a kind",
            Category::StraightFlush => "straight flush",
            Category::RoyalFlush => "royal flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of evaluating a hand: its category, tiebreak key and the five
/// cards that realise it.
///
/// Equality and ordering look only at `category` and `kickers`; two
/// different five-card selections with the same key compare equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    /// Tiebreak key, zero padded. For straights, flushes and high cards this
    /// is the rank list high -> low (the wheel counts its ace as 1). For
    /// grouped hands it holds one rank per group ordered by
    /// (group size desc, rank desc), so primary groups outrank kickers.
    pub kickers: [u8; 5],
    pub best_five: [Card; 5],
}

impl PartialEq for HandStrength {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandStrength {}

impl PartialOrd for HandStrength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandStrength {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_hands(self, other)
    }
}

/// Evaluates the best five-card hand out of seven cards.
///
/// ```
/// use pokersim_engine::cards::parse_cards;
/// use pokersim_engine::hand::{evaluate_hand, Category};
///
/// let v = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
/// let cards: [_; 7] = v.try_into().unwrap();
/// assert_eq!(evaluate_hand(&cards).category, Category::RoyalFlush);
/// ```
pub fn evaluate_hand(cards: &[Card; 7]) -> HandStrength {
    best_of(cards)
}

/// Evaluates a player's two hole cards against a complete (river) board.
pub fn evaluate(hole: &[Card; 2], board: &[Card]) -> Result<HandStrength, GameError> {
    if board.len() != 5 {
        return Err(GameError::InvalidCardCount {
            expected: 5,
            actual: board.len(),
        });
    }
    let mut cards = [hole[0]; 7];
    cards[1] = hole[1];
    cards[2..].copy_from_slice(board);
    Ok(evaluate_hand(&cards))
}

/// Best five-card hand out of any five to seven cards, for partial boards.
///
/// A count outside that range is reported against the bound it broke.
pub fn evaluate_cards(cards: &[Card]) -> Result<HandStrength, GameError> {
    let expected = match cards.len() {
        0..=4 => 5,
        5..=7 => return Ok(best_of(cards)),
        _ => 7,
    };
    Err(GameError::InvalidCardCount {
        expected,
        actual: cards.len(),
    })
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.kickers.cmp(&b.kickers),
        ord => ord,
    }
}

/// Indices of every hand tied for best, in input order.
pub fn best_hands(hands: &[HandStrength]) -> Vec<usize> {
    let Some(top) = hands.iter().max() else {
        return Vec::new();
    };
    hands
        .iter()
        .enumerate()
        .filter(|(_, h)| compare_hands(h, top) == Ordering::Equal)
        .map(|(i, _)| i)
        .collect()
}

/// Index of the best hand; the first one wins an exact tie.
pub fn best_hand(hands: &[HandStrength]) -> Option<usize> {
    best_hands(hands).first().copied()
}

// Scores every 5-card subset and keeps the maximum.
fn best_of(cards: &[Card]) -> HandStrength {
    let mut best: Option<HandStrength> = None;
    for combo in cards.iter().copied().combinations(5) {
        let mut five = [combo[0]; 5];
        five.copy_from_slice(&combo);
        let scored = score_five(five);
        if best.as_ref().is_none_or(|b| scored > *b) {
            best = Some(scored);
        }
    }
    // Callers always hand in at least five cards.
    best.unwrap_or_else(|| score_five([cards[0]; 5]))
}

fn score_five(mut five: [Card; 5]) -> HandStrength {
    five.sort_unstable_by(|a, b| b.rank.cmp(&a.rank).then(b.suit.cmp(&a.suit)));

    let mut ranks = [0u8; 5];
    for (slot, c) in ranks.iter_mut().zip(five.iter()) {
        *slot = c.rank.value();
    }

    // (count, rank) sorted by count desc, rank desc
    let mut groups: Vec<(u8, u8)> = Vec::with_capacity(5);
    for &r in &ranks {
        match groups.iter_mut().find(|(_, g)| *g == r) {
            Some(entry) => entry.0 += 1,
            None => groups.push((1, r)),
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let flush = five.iter().all(|c| c.suit == five[0].suit);
    let straight = straight_high(&ranks, groups.len());

    let second = groups.get(1).map_or(0, |g| g.0);
    let (category, kickers) = if let (Some(high), true) = (straight, flush) {
        if high == 14 {
            (Category::RoyalFlush, ranks)
        } else {
            (Category::StraightFlush, straight_key(high))
        }
    } else if groups[0].0 == 4 {
        (Category::FourOfAKind, group_key(&groups))
    } else if groups[0].0 == 3 && second == 2 {
        (Category::FullHouse, group_key(&groups))
    } else if flush {
        (Category::Flush, ranks)
    } else if let Some(high) = straight {
        (Category::Straight, straight_key(high))
    } else if groups[0].0 == 3 {
        (Category::ThreeOfAKind, group_key(&groups))
    } else if groups[0].0 == 2 && second == 2 {
        (Category::TwoPair, group_key(&groups))
    } else if groups[0].0 == 2 {
        (Category::OnePair, group_key(&groups))
    } else {
        (Category::HighCard, ranks)
    };

    HandStrength {
        category,
        kickers,
        best_five: five,
    }
}

// `ranks` is sorted high -> low.
fn straight_high(ranks: &[u8; 5], distinct: usize) -> Option<u8> {
    if distinct != 5 {
        return None;
    }
    if ranks[0] - ranks[4] == 4 {
        return Some(ranks[0]);
    }
    // A-2-3-4-5 plays as a five-high straight
    if *ranks == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}

fn straight_key(high: u8) -> [u8; 5] {
    [high, high - 1, high - 2, high - 3, high - 4]
}

fn group_key(groups: &[(u8, u8)]) -> [u8; 5] {
    let mut k = [0u8; 5];
    for (slot, (_, rank)) in k.iter_mut().zip(groups.iter()) {
        *slot = *rank;
    }
    k
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn five(s: &str) -> HandStrength {
        let v = parse_cards(s).unwrap();
        score_five([v[0], v[1], v[2], v[3], v[4]])
    }

    #[test]
    fn wheel_key_counts_ace_low() {
        let h = five("Ac 2d 3h 4s 5c");
        assert_eq!(h.category, Category::Straight);
        assert_eq!(h.kickers, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn group_key_orders_by_multiplicity() {
        let h = five("2c 2d 9h 9s Ac");
        assert_eq!(h.category, Category::TwoPair);
        assert_eq!(h.kickers, [9, 2, 14, 0, 0]);

        let fh = five("3c 3d 3h Ks Kc");
        assert_eq!(fh.category, Category::FullHouse);
        assert_eq!(fh.kickers, [3, 13, 0, 0, 0]);
    }

    #[test]
    fn steel_wheel_is_straight_flush_not_royal() {
        let h = five("Ah 2h 3h 4h 5h");
        assert_eq!(h.category, Category::StraightFlush);
        assert_eq!(h.kickers[0], 5);
    }

    #[test]
    fn partial_boards_use_every_available_card() {
        let flop = parse_cards("9c 9d Kh 9s Kc").unwrap();
        assert_eq!(evaluate_cards(&flop).unwrap().category, Category::FullHouse);
        let turn = parse_cards("2h 7h 9h Jh 3c Kh").unwrap();
        assert_eq!(evaluate_cards(&turn).unwrap().category, Category::Flush);
        assert_eq!(
            evaluate_cards(&flop[..4]).unwrap_err(),
            GameError::InvalidCardCount {
                expected: 5,
                actual: 4
            }
        );
    }

    #[test]
    fn oversized_input_reports_the_upper_bound() {
        let eight = parse_cards("2h 7h 9h Jh 3c Kh 4d 5s").unwrap();
        assert_eq!(
            evaluate_cards(&eight).unwrap_err(),
            GameError::InvalidCardCount {
                expected: 7,
                actual: 8
            }
        );
    }

    #[test]
    fn evaluate_requires_full_board() {
        let hole = [
            "Ah".parse::<Card>().unwrap(),
            "Kd".parse::<Card>().unwrap(),
        ];
        let board = parse_cards("2c 3c 4c").unwrap();
        assert_eq!(
            evaluate(&hole, &board).unwrap_err(),
            GameError::InvalidCardCount {
                expected: 5,
                actual: 3
            }
        );
    }
}
