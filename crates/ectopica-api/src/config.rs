//! Service configuration.
//!
//! Resolved once at startup and passed into [`crate::state::AppState`].
//! Request handlers never read the environment.

use std::fmt::Display;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_RATE_LIMIT_MAX: u32 = 20;
const DEFAULT_RATE_LIMIT_WINDOW_MS: u64 = 60_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window_millis: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_RATE_LIMIT_MAX,
            window_millis: DEFAULT_RATE_LIMIT_WINDOW_MS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub rate_limit: RateLimitConfig,
    /// Root of the JSON file case store. `None` keeps cases in memory.
    pub data_dir: Option<PathBuf>,
    /// Running inside AWS Lambda (`AWS_LAMBDA_RUNTIME_API` is set).
    pub lambda: bool,
}

impl ServiceConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bind_addr: SocketAddr = parse_var(
            &lookup,
            "ECTOPICA_BIND_ADDR",
            DEFAULT_BIND_ADDR.parse::<SocketAddr>()?,
        )?;
        let max_requests: u32 =
            parse_var(&lookup, "ECTOPICA_RATE_LIMIT_MAX", DEFAULT_RATE_LIMIT_MAX)?;
        let window_millis: u64 = parse_var(
            &lookup,
            "ECTOPICA_RATE_LIMIT_WINDOW_MS",
            DEFAULT_RATE_LIMIT_WINDOW_MS,
        )?;

        if max_requests == 0 {
            return Err(eyre::eyre!("ECTOPICA_RATE_LIMIT_MAX must be at least 1"));
        }
        if window_millis == 0 {
            return Err(eyre::eyre!("ECTOPICA_RATE_LIMIT_WINDOW_MS must be at least 1"));
        }

        let data_dir = lookup("ECTOPICA_DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            rate_limit: RateLimitConfig {
                max_requests,
                window_millis,
            },
            data_dir,
            lambda: lookup("AWS_LAMBDA_RUNTIME_API").is_some(),
        })
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> eyre::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| eyre::eyre!("invalid {key}={raw:?}: {e}")),
        None => Ok(default),
    }
}
