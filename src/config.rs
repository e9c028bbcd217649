//! Runtime configuration and shared constants.
//!
//! Settings are read from the environment. `main` loads a `.env` file first with
//! `dotenv`, so either source works.

use crate::output::OutputFormat;
use clap::ValueEnum;
use std::path::PathBuf;

/// Address shown when no address argument is given.
pub const DEFAULT_IP_ADDRESS: &str = "10.21.150.251";
/// Prefix used when no prefix argument is given.
pub const DEFAULT_PREFIX: &str = "/24";
/// Rendered in place of a host address that does not exist.
pub const NOT_AVAILABLE: &str = "n/a";
/// log4rs YAML config looked up relative to the working directory.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

pub const ENV_FORMAT: &str = "SUBNET_CALC_FORMAT";
pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";

/// Settings that are not given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Output format used when `--format` is absent.
    pub format: OutputFormat,
    /// Path of the log4rs YAML config.
    pub log_config: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: OutputFormat::Table,
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
        }
    }
}

impl Config {
    /// Read the config from process environment variables.
    pub fn from_env() -> Config {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup, unset keys keep their defaults.
    ///
    /// An unknown format is logged and ignored instead of failing startup.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup(ENV_FORMAT) {
            match OutputFormat::from_str(value.trim(), true) {
                Ok(format) => config.format = format,
                Err(e) => log::warn!(
                    "Ignoring {ENV_FORMAT}='{value}': {e}, using '{:?}'",
                    config.format
                ),
            }
        }

        config.log_config = log_config_from_lookup(&lookup);

        log::debug!("config={config:?}");
        config
    }
}

/// Path of the log4rs config, read on its own so logging can start before
/// the rest of the config is parsed.
pub fn log_config_path() -> PathBuf {
    log_config_from_lookup(|key| std::env::var(key).ok())
}

fn log_config_from_lookup<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    lookup(ENV_LOG_CONFIG)
        .map(|path| path.trim().to_string())
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_CONFIG))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.log_config, PathBuf::from("log4rs.yml"));
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_FORMAT, "JSON"),
            (ENV_LOG_CONFIG, "/etc/subnet-calc/log4rs.yml"),
        ]));
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(
            config.log_config,
            PathBuf::from("/etc/subnet-calc/log4rs.yml")
        );
    }

    #[test]
    fn test_config_bad_format_keeps_default() {
        let config = Config::from_lookup(lookup_from(&[(ENV_FORMAT, "xml"), (ENV_LOG_CONFIG, " ")]));
        assert_eq!(config, Config::default());
    }
}
