use super::{env_lookup, parse_or, Lookup};
use crate::error::AppError;

/// HTTP listener and gameplay settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seed for the cpu move source; `None` draws from OS entropy.
    pub cpu_seed: Option<u64>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(&env_lookup)
    }

    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self, AppError> {
        let host = lookup("JOKENPO_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(lookup, "JOKENPO_PORT", 8000u16)?;
        let cpu_seed = match lookup("JOKENPO_CPU_SEED").filter(|s| !s.trim().is_empty()) {
            None => None,
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                AppError::config(format!("JOKENPO_CPU_SEED must be an unsigned integer, got '{raw}'"))
            })?),
        };

        Ok(Self {
            host,
            port,
            cpu_seed,
        })
    }
}
