//! Simulation command: many games, one win histogram.

use std::io::Write;

use pokersim_engine::observer::TracingObserver;
use pokersim_engine::simulation::{run_simulation, run_simulation_parallel, SimulationReport};
use serde_json::json;
use tracing::info;

use crate::cli::TableArgs;
use crate::commands::TableSetup;
use crate::error::CliError;
use crate::ui;

/// Handle the sim command.
///
/// Plays `games` games with the resolved table settings and prints each
/// player's win count and percentage, as text or JSON. With `parallel` the
/// games run on the rayon pool; every game then gets its own policy.
pub fn handle_sim_command(
    table: &TableArgs,
    games: Option<u64>,
    parallel: bool,
    as_json: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let setup = TableSetup::resolve(table, games, err)?;
    let config = &setup.config;
    info!(
        games = config.games,
        players = config.players.len(),
        parallel,
        agent = %setup.agent_label(),
        "running simulation"
    );

    let report = if parallel {
        run_simulation_parallel(config, |game| setup.policy(game as u64))?
    } else {
        let mut policy = setup.policy(0);
        run_simulation(config, &mut policy, &mut TracingObserver)?
    };

    if as_json {
        write_json(&setup, &report, out)
    } else {
        write_text(&setup, &report, out)
    }
}

fn write_text(
    setup: &TableSetup,
    report: &SimulationReport,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let config = &setup.config;
    writeln!(
        out,
        "Simulation: {} players, {} games, stack {}, stake {}/{}",
        config.players.len(),
        report.games,
        config.initial_stack,
        config.stake,
        config.stake.saturating_mul(2)
    )?;
    writeln!(out, "Seed: {}", report.base_seed)?;
    writeln!(out, "Agent: {}", setup.agent_label())?;
    writeln!(out, "Hands played: {}", report.hands_played)?;
    writeln!(out)?;

    let width = report
        .histogram
        .iter()
        .map(|e| e.player.len())
        .max()
        .unwrap_or(0)
        .max(6);
    writeln!(out, "{:<width$}  {:>6}  {:>6}", "Player", "Wins", "Win%")?;
    for entry in &report.histogram {
        writeln!(
            out,
            "{:<width$}  {:>6}  {:>6}",
            entry.player,
            entry.wins,
            ui::percent(entry.wins, report.games)
        )?;
    }
    Ok(())
}

fn write_json(
    setup: &TableSetup,
    report: &SimulationReport,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let histogram: Vec<_> = report
        .histogram
        .iter()
        .map(|e| {
            json!({
                "player": e.player,
                "wins": e.wins,
                "percent": report.win_rate(&e.player) * 100.0,
            })
        })
        .collect();
    let display = json!({
        "games": report.games,
        "seed": report.base_seed,
        "hands_played": report.hands_played,
        "initial_stack": setup.config.initial_stack,
        "stake": setup.config.stake,
        "agent": setup.agent_label(),
        "histogram": histogram,
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
