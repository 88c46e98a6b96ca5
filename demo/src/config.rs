use anyhow::{Context, Result};
use std::str::FromStr;
use tracing::Level;

pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub log_level: Level,
}

impl Default for DemoConfig {
    fn default() -> Self { Self { log_level: Level::WARN } }
}

impl DemoConfig {
    pub fn from_env() -> Result<Self> { Self::from_lookup(|key| std::env::var(key).ok()) }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where F: Fn(&str) -> Option<String> {
        let mut config = Self::default();
        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            config.log_level = Level::from_str(level.trim()).with_context(|| format!("invalid {LOG_LEVEL_VAR} value {level:?}"))?;
        }
        Ok(config)
    }
}
