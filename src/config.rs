//! Runtime configuration from the environment (and `.env` via dotenv).

use crate::models::{is_valid_ipv4, MAX_LENGTH};
use std::error::Error;

pub const DEFAULT_ADDRESS: &str = "192.168.1.100";
pub const DEFAULT_PREFIX: u8 = 24;
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Defaults for the calculator and the logging setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address used when none is given on the command line.
    pub default_address: String,
    /// Prefix used when none is given on the command line.
    pub default_prefix: u8,
    /// Path of the log4rs yaml file.
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_address: DEFAULT_ADDRESS.to_string(),
            default_prefix: DEFAULT_PREFIX,
            log_config: DEFAULT_LOG_CONFIG.to_string(),
        }
    }
}

impl Config {
    /// Read `SUBNET_CALC_*` variables from the process environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup, for tests and embedding.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(address) = lookup("SUBNET_CALC_DEFAULT_ADDRESS") {
            if !is_valid_ipv4(&address) {
                return Err(format!("SUBNET_CALC_DEFAULT_ADDRESS is not an IPv4 address: {address}").into());
            }
            config.default_address = address;
        }
        if let Some(prefix) = lookup("SUBNET_CALC_DEFAULT_PREFIX") {
            let prefix: u8 = prefix
                .parse()
                .map_err(|_| format!("SUBNET_CALC_DEFAULT_PREFIX is not a number: {prefix}"))?;
            if prefix > MAX_LENGTH {
                return Err(format!("SUBNET_CALC_DEFAULT_PREFIX must be 0-32, got {prefix}").into());
            }
            config.default_prefix = prefix;
        }
        if let Some(log_config) = lookup("SUBNET_CALC_LOG_CONFIG") {
            config.log_config = log_config;
        }

        log::debug!("config={config:?}");
        Ok(config)
    }
}
