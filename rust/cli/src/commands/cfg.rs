//! Configuration command handler.
//!
//! Prints every configuration value with its source (default, file or env)
//! as JSON:
//!
//! ```json
//! {
//!   "stake": {
//!     "value": 5,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails. Duplicate
/// player ids are only warned about here; `sim` and `game` reject them.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    for (player, count) in duplicate_players(&config.players) {
        ui::display_warning(err, &format!("player {:?} is listed {} times", player, count))?;
    }

    let display = serde_json::json!({
        "players": {
            "value": config.players,
            "source": sources.players,
        },
        "initial_stack": {
            "value": config.initial_stack,
            "source": sources.initial_stack,
        },
        "stake": {
            "value": config.stake,
            "source": sources.stake,
        },
        "games": {
            "value": config.games,
            "source": sources.games,
        },
        "max_hands": {
            "value": config.max_hands,
            "source": sources.max_hands,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "agent": {
            "value": config.agent,
            "source": sources.agent,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

fn duplicate_players(players: &[String]) -> Vec<(&str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for p in players {
        match counts.iter_mut().find(|(name, _)| *name == p.as_str()) {
            Some((_, n)) => *n += 1,
            None => counts.push((p.as_str(), 1)),
        }
    }
    counts.retain(|&(_, n)| n > 1);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_counted_once_each() {
        let players: Vec<String> = ["a", "b", "a", "c", "a", "b"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(duplicate_players(&players), vec![("a", 3), ("b", 2)]);
        assert!(duplicate_players(&players[..2]).is_empty());
    }
}
