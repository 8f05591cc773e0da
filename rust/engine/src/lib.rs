//! # pokersim-engine: Poker Simulation Core
//!
//! Simulates repeated hands of Texas Hold'em among a fixed set of players
//! and aggregates who wins each game into a histogram. Every shuffle comes
//! from a seeded ChaCha20 RNG, so a simulation replays exactly from its seed.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and text parsing
//! - [`deck`] - Seeded deck, consumed from the end
//! - [`hand`] - Best-of-seven hand evaluation and comparison
//! - [`action`] - Action kinds, legal-move triples and recorded actions
//! - [`rules`] - Validation of policy decisions against the legal set
//! - [`game`] - Cross-hand chip ledger and blind rotation
//! - [`round`] - Per-hand snapshot: players, hole cards, blinds
//! - [`betting`] - Per-street betting state machine
//! - [`engine`] - Plays a single hand and awards the pot
//! - [`simulation`] - Games, simulations and the win histogram
//! - [`policy`] - Decision-policy interface and the default policy
//! - [`observer`] - Structured game events
//! - [`logger`] - JSONL hand history
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use pokersim_engine::observer::NullObserver;
//! use pokersim_engine::policy::CheckCallPolicy;
//! use pokersim_engine::simulation::{run_simulation, SimulationConfig};
//!
//! let config = SimulationConfig::new(&["alice", "bob", "carol"], 100, 5, 10).with_seed(42);
//! let report = run_simulation(&config, &mut CheckCallPolicy, &mut NullObserver).unwrap();
//!
//! let total: u32 = report.histogram.iter().map(|e| e.wins).sum();
//! assert_eq!(total, 10);
//! ```
//!
//! ## Hand Evaluation
//!
//! ```rust
//! use pokersim_engine::cards::parse_cards;
//! use pokersim_engine::hand::{evaluate, Category};
//!
//! let hole = parse_cards("Ah Ad").unwrap();
//! let board = parse_cards("Ac As Kd 7h 2c").unwrap();
//! let strength = evaluate(&[hole[0], hole[1]], &board).unwrap();
//! assert_eq!(strength.category, Category::FourOfAKind);
//! ```

pub mod action;
pub mod betting;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod observer;
pub mod policy;
pub mod round;
pub mod rules;
pub mod simulation;
