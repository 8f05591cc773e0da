//! Hand evaluation command.

use std::collections::HashSet;
use std::io::Write;

use pokersim_engine::cards::parse_cards;
use pokersim_engine::hand::evaluate_cards;

use crate::error::CliError;

/// Handle the eval command.
///
/// Parses five to seven cards and prints the best hand's category, its
/// tiebreak key and the five cards that make it.
pub fn handle_eval_command(cards: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let parsed = parse_cards(cards)?;
    if !(5..=7).contains(&parsed.len()) {
        return Err(CliError::InvalidInput(format!(
            "expected 5 to 7 cards, got {}",
            parsed.len()
        )));
    }
    let mut seen = HashSet::new();
    if let Some(dup) = parsed.iter().find(|c| !seen.insert(**c)) {
        return Err(CliError::InvalidInput(format!("duplicate card {}", dup)));
    }

    let strength = evaluate_cards(&parsed)?;
    let key: Vec<String> = strength
        .kickers
        .iter()
        .take_while(|&&k| k > 0)
        .map(u8::to_string)
        .collect();
    let best: Vec<String> = strength.best_five.iter().map(ToString::to_string).collect();

    writeln!(
        out,
        "Category: {} ({})",
        strength.category,
        strength.category.score()
    )?;
    writeln!(out, "Key: {}", key.join(" "))?;
    writeln!(out, "Best five: {}", best.join(" "))?;
    Ok(())
}
