//! Table configuration resolution.
//!
//! Values resolve in precedence order: built-in defaults, then a TOML file
//! named by `FELT_CONFIG`, then the `FELT_SEED` environment variable. Each
//! resolved value remembers its source for the `cfg` command.

use serde::{Deserialize, Serialize};
use std::fs;

use felt_engine::round::Stakes;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_chips: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        let stakes = Stakes::default();
        Self {
            starting_chips: stakes.starting_chips,
            small_blind: stakes.small_blind,
            big_blind: stakes.big_blind,
            seed: None,
        }
    }
}

impl Config {
    pub fn stakes(&self) -> Stakes {
        Stakes {
            starting_chips: self.starting_chips,
            small_blind: self.small_blind,
            big_blind: self.big_blind,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_chips: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_chips: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
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

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "io: {}", e),
            ConfigError::Parse(e) => write!(f, "parse: {}", e),
            ConfigError::Invalid(msg) => write!(f, "invalid: {}", msg),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    starting_chips: Option<u32>,
    small_blind: Option<u32>,
    big_blind: Option<u32>,
    seed: Option<u64>,
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("FELT_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_chips {
            cfg.starting_chips = v;
            sources.starting_chips = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("FELT_SEED") {
        if !seed.is_empty() {
            let parsed: u64 = seed
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("FELT_SEED must be a u64: {seed:?}")))?;
            cfg.seed = Some(parsed);
            sources.seed = ValueSource::Env;
        }
    }

    if cfg.big_blind <= cfg.small_blind {
        return Err(ConfigError::Invalid(format!(
            "big_blind ({}) must exceed small_blind ({})",
            cfg.big_blind, cfg.small_blind
        )));
    }
    if cfg.starting_chips < cfg.big_blind {
        return Err(ConfigError::Invalid(format!(
            "starting_chips ({}) must cover the big blind ({})",
            cfg.starting_chips, cfg.big_blind
        )));
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}
