//! Single game command, optionally recording the hand history.

use std::io::Write;

use pokersim_engine::logger::HandLogger;
use pokersim_engine::observer::{GameObserver, TracingObserver};
use pokersim_engine::policy::DecisionPolicy;
use pokersim_engine::simulation::{run_game, DecidedBy, GameResult};
use serde_json::json;

use crate::cli::TableArgs;
use crate::commands::TableSetup;
use crate::error::CliError;

/// Handle the game command.
///
/// Plays game 0 of the resolved table to elimination or the hand cap.
/// With `log` every finished hand is appended to that file as one JSON
/// line.
pub fn handle_game_command(
    table: &TableArgs,
    log: Option<&str>,
    as_json: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let setup = TableSetup::resolve(table, Some(1), err)?;
    let seed = setup.seed();
    let mut policy = setup.policy(0);

    let (result, logged) = match log {
        Some(path) => {
            let mut logger = HandLogger::create(path)?;
            let result = play(&setup, seed, &mut policy, &mut logger)?;
            (result, Some((path, logger.finish()?)))
        }
        None => (
            play(&setup, seed, &mut policy, &mut TracingObserver)?,
            None,
        ),
    };

    if as_json {
        let display = json!({
            "seed": seed,
            "agent": setup.agent_label(),
            "result": result,
        });
        let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
    } else {
        write_text(&setup, seed, &result, out)?;
    }
    if let Some((path, count)) = logged {
        writeln!(err, "Hand history: {} hands written to {}", count, path)?;
    }
    Ok(())
}

fn play(
    setup: &TableSetup,
    seed: u64,
    policy: &mut dyn DecisionPolicy,
    observer: &mut dyn GameObserver,
) -> Result<GameResult, CliError> {
    Ok(run_game(&setup.config, seed, 0, policy, observer)?)
}

fn write_text(
    setup: &TableSetup,
    seed: u64,
    result: &GameResult,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Agent: {}", setup.agent_label())?;
    writeln!(out, "Hands played: {}", result.hands_played)?;
    let how = match result.decided_by {
        DecidedBy::Elimination => "last player with chips",
        DecidedBy::HandCap => "chip leader at the hand cap",
    };
    writeln!(
        out,
        "Winner: {} ({})",
        result.winner.as_deref().unwrap_or("none"),
        how
    )?;
    writeln!(out, "Final stacks:")?;
    for (player, stack) in setup.config.players.iter().zip(&result.final_stacks) {
        writeln!(out, "  {}: {}", player, stack)?;
    }
    Ok(())
}
