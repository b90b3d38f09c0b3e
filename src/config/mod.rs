mod models;

pub use models::Config;

use anyhow::{Context, Result};
use std::{fs::File, io::Read, path::Path};
use validator::Validate;

pub const USER_ID_VAR: &str = "RESELLERCLUB_USER_ID";
pub const API_KEY_VAR: &str = "RESELLERCLUB_API_KEY";
pub const URL_VAR: &str = "RESELLERCLUB_URL";
pub const PROXY_VAR: &str = "RESELLERCLUB_PROXY";

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            user_id: lookup(USER_ID_VAR).with_context(|| format!("{} is not set", USER_ID_VAR))?,
            api_key: lookup(API_KEY_VAR).with_context(|| format!("{} is not set", API_KEY_VAR))?,
            url: lookup(URL_VAR).filter(|url| !url.is_empty()),
            proxy: lookup(PROXY_VAR).filter(|proxy| !proxy.is_empty()),
        };

        config.validate().context("Invalid configuration from environment")?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// A config file wins when given; otherwise the environment is used.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::from_env(),
        }
    }
}
