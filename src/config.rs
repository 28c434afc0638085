//! Layered configuration: built-in defaults, then `trivia.toml`, then
//! `TRIVIA_*` environment variables.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::TriviaError;

/// Number of questions in one pagination window.
pub const QUESTIONS_PER_PAGE: usize = 10;

pub const CONFIG_FILE: &str = "trivia.toml";
pub const ENV_PREFIX: &str = "TRIVIA_";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    pub max_connections: u32,
    /// Insert the standard category set on startup when missing.
    pub seed_categories: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:trivia.db".to_string(),
            listen_addr: "0.0.0.0:5000".to_string(),
            loglevel: "info".to_string(),
            max_connections: 5,
            seed_categories: true,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<Self, TriviaError> {
        Ok(Self::figment().extract()?)
    }
}
