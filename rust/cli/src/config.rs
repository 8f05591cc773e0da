//! Layered configuration: built-in defaults, then a TOML file named by
//! `POKERSIM_CONFIG`, then `POKERSIM_*` environment variables. Command-line
//! flags are applied on top by the commands themselves.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;

use pokersim_ai::AiKind;
use pokersim_engine::simulation::DEFAULT_MAX_HANDS;

pub const CONFIG_ENV: &str = "POKERSIM_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub players: Vec<String>,
    pub initial_stack: u32,
    pub stake: u32,
    pub games: usize,
    pub max_hands: usize,
    pub seed: Option<u64>,
    pub agent: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub players: ValueSource,
    pub initial_stack: ValueSource,
    pub stake: ValueSource,
    pub games: ValueSource,
    pub max_hands: ValueSource,
    pub seed: ValueSource,
    pub agent: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            initial_stack: ValueSource::Default,
            stake: ValueSource::Default,
            games: ValueSource::Default,
            max_hands: ValueSource::Default,
            seed: ValueSource::Default,
            agent: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: ["alice", "bob", "carol", "dave"]
                .iter()
                .map(|p| p.to_string())
                .collect(),
            initial_stack: 100,
            stake: 5,
            games: 100,
            max_hands: DEFAULT_MAX_HANDS,
            seed: None,
            agent: AiKind::Passive.as_str().into(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "malformed config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Splits a comma separated player list, dropping blanks.
pub fn parse_players(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.initial_stack {
            cfg.initial_stack = v;
            sources.initial_stack = ValueSource::File;
        }
        if let Some(v) = f.stake {
            cfg.stake = v;
            sources.stake = ValueSource::File;
        }
        if let Some(v) = f.games {
            cfg.games = v;
            sources.games = ValueSource::File;
        }
        if let Some(v) = f.max_hands {
            cfg.max_hands = v;
            sources.max_hands = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.agent {
            cfg.agent = v;
            sources.agent = ValueSource::File;
        }
    }

    if let Some(v) = env_value("POKERSIM_PLAYERS") {
        cfg.players = parse_players(&v);
        sources.players = ValueSource::Env;
    }
    if let Some(v) = env_value("POKERSIM_STACK") {
        cfg.initial_stack = parse_env("POKERSIM_STACK", &v)?;
        sources.initial_stack = ValueSource::Env;
    }
    if let Some(v) = env_value("POKERSIM_STAKE") {
        cfg.stake = parse_env("POKERSIM_STAKE", &v)?;
        sources.stake = ValueSource::Env;
    }
    if let Some(v) = env_value("POKERSIM_GAMES") {
        cfg.games = parse_env("POKERSIM_GAMES", &v)?;
        sources.games = ValueSource::Env;
    }
    if let Some(v) = env_value("POKERSIM_MAX_HANDS") {
        cfg.max_hands = parse_env("POKERSIM_MAX_HANDS", &v)?;
        sources.max_hands = ValueSource::Env;
    }
    if let Some(v) = env_value("POKERSIM_SEED") {
        cfg.seed = Some(parse_env("POKERSIM_SEED", &v)?);
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_value("POKERSIM_AGENT") {
        cfg.agent = v;
        sources.agent = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {:?}", key, value)))
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    players: Option<Vec<String>>,
    #[serde(default)]
    initial_stack: Option<u32>,
    #[serde(default)]
    stake: Option<u32>,
    #[serde(default)]
    games: Option<usize>,
    #[serde(default)]
    max_hands: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    agent: Option<String>,
}

/// Field checks that make sense before any flag is applied; the engine
/// validates the final simulation settings again.
pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    let invalid = |msg: &str| Err(ConfigError::Invalid(format!("Invalid configuration: {}", msg)));
    if cfg.players.is_empty() {
        return invalid("players must not be empty");
    }
    if cfg.initial_stack == 0 {
        return invalid("initial_stack must be >0");
    }
    if cfg.stake == 0 {
        return invalid("stake must be >0");
    }
    if cfg.games == 0 {
        return invalid("games must be >0");
    }
    if cfg.max_hands == 0 {
        return invalid("max_hands must be >0");
    }
    if let Err(e) = cfg.agent.parse::<AiKind>() {
        return invalid(&e.to_string());
    }
    Ok(())
}
