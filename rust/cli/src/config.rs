use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;

pub const CONFIG_ENV: &str = "LIARDICE_CONFIG";
pub const PLAYERS_ENV: &str = "LIARDICE_PLAYERS";
pub const DICE_ENV: &str = "LIARDICE_DICE";
pub const SEED_ENV: &str = "LIARDICE_SEED";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub players: u32,
    pub dice_per_player: u32,
    pub seed: Option<u64>,
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
    pub dice_per_player: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            dice_per_player: ValueSource::Default,
            seed: ValueSource::Default,
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
            players: 2,
            dice_per_player: 5,
            seed: None,
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
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Defaults, then the TOML file named by `LIARDICE_CONFIG`, then the
/// `LIARDICE_*` variables. Command-line flags are applied by the caller.
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
        if let Some(v) = f.dice_per_player {
            cfg.dice_per_player = v;
            sources.dice_per_player = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Some(players) = env_value(PLAYERS_ENV) {
        cfg.players = parse_count(&players, "players")?;
        sources.players = ValueSource::Env;
    }
    if let Some(dice) = env_value(DICE_ENV) {
        cfg.dice_per_player = parse_count(&dice, "dice")?;
        sources.dice_per_player = ValueSource::Env;
    }
    if let Some(seed) = env_value(SEED_ENV) {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed '{}'", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    players: Option<u32>,
    #[serde(default)]
    dice_per_player: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn parse_count(s: &str, name: &str) -> Result<u32, ConfigError> {
    s.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("Invalid {} '{}'", name, s)))
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.players == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: players must be >=1".into(),
        ));
    }
    if cfg.dice_per_player == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: dice_per_player must be >=1".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_two_player_five_dice_table() {
        let cfg = Config::default();
        assert_eq!(cfg.players, 2);
        assert_eq!(cfg.dice_per_player, 5);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn validate_rejects_empty_tables() {
        let mut cfg = Config::default();
        cfg.players = 0;
        assert!(matches!(validate(&cfg), Err(ConfigError::Invalid(_))));

        let mut cfg = Config::default();
        cfg.dice_per_player = 0;
        assert!(matches!(validate(&cfg), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn parse_count_trims_and_rejects_garbage() {
        assert_eq!(parse_count(" 4 ", "players").unwrap(), 4);
        assert!(parse_count("-1", "players").is_err());
        assert!(parse_count("four", "players").is_err());
    }

    #[test]
    fn file_config_rejects_unknown_keys() {
        assert!(toml::from_str::<FileConfig>("players = 3\n").is_ok());
        assert!(toml::from_str::<FileConfig>("level = 3\n").is_err());
    }
}
