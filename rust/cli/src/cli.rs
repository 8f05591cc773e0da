//! Command-line surface parsed with clap.

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "pokersim",
    version,
    about = "Texas Hold'em win-rate simulator"
)]
pub struct PokersimCli {
    /// Log every hand and street (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Emit log events as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play many games and report how often each player wins
    Sim {
        #[command(flatten)]
        table: TableArgs,
        /// Number of games to play
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        games: Option<u64>,
        /// Spread games over all cores
        #[arg(long)]
        parallel: bool,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Play a single game and print its result
    Game {
        #[command(flatten)]
        table: TableArgs,
        /// Write the hand history as JSON lines to this file
        #[arg(long)]
        log: Option<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate five to seven cards, e.g. "Ah Kh Qh Jh Th 2c 3d"
    Eval {
        #[arg(long)]
        cards: String,
    },
    /// Display the resolved configuration and where each value came from
    Cfg,
}

/// Table settings shared by `sim` and `game`. Unset flags fall back to the
/// configuration file, the environment, then the defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct TableArgs {
    /// Comma separated player ids
    #[arg(long)]
    pub players: Option<String>,
    /// Chips each player starts a game with
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub stack: Option<u32>,
    /// Small blind; the big blind is twice this
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub stake: Option<u32>,
    /// Hands after which a game goes to the chip leader
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_hands: Option<u64>,
    #[arg(long)]
    pub seed: Option<u64>,
    /// Policy for every player: passive, random or baseline
    #[arg(long)]
    pub agent: Option<String>,
    /// Per-player policies, e.g. "alice=baseline,bob=random"
    #[arg(long)]
    pub agents: Option<String>,
}
