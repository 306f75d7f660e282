//! Runtime configuration read from environment variables.
//!
//! Every loader takes a `lookup` closure so tests can feed a map instead of
//! mutating the process environment.

use std::str::FromStr;

use crate::error::AppError;

pub mod db;
pub mod server;

/// Boxed variable lookup, `std::env::var` in production.
pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

pub fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Parse an optional variable, falling back to `default` when unset or blank.
pub(crate) fn parse_or<T: FromStr>(lookup: Lookup<'_>, name: &str, default: T) -> Result<T, AppError> {
    match lookup(name).filter(|v| !v.trim().is_empty()) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|_| {
            AppError::config(format!("Environment variable '{name}' has invalid value '{raw}'"))
        }),
    }
}

/// Required variable or a config error naming it.
pub(crate) fn must_var(lookup: Lookup<'_>, name: &str) -> Result<String, AppError> {
    lookup(name)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::config(format!("Required environment variable '{name}' is not set")))
}
