//! Client configuration.
//!
//! Built once at startup and handed to `PokemonClient::new`. Nothing in the
//! client reads the environment on its own.
//!
//! Environment variables read by `ClientConfig::from_env`:
//!
//! - `POKEAPI_BASE_URL`: upstream root, default `https://pokeapi.co/api/v2/`
//! - `POKEAPI_TIMEOUT_SECS`: per-call timeout in seconds, default 10
//! - `POKEAPI_MAX_PARALLEL`: worker threads for batch detail lookups, default 8

use std::time::Duration;

use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_MAX_PARALLEL: usize = 8;

const ENV_BASE_URL: &str = "POKEAPI_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "POKEAPI_TIMEOUT_SECS";
const ENV_MAX_PARALLEL: &str = "POKEAPI_MAX_PARALLEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Upper bound on one HTTP round trip, connect through body read.
    pub timeout: Duration,
    /// Worker threads used by `PokemonClient::get_pokemon_details`.
    pub max_parallel: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_parallel: DEFAULT_MAX_PARALLEL,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by whichever `POKEAPI_*` variables are set.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` but reads from an arbitrary source.
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL).filter(|url| !url.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!(value = %raw, "ignoring invalid {ENV_TIMEOUT_SECS}"),
            }
        }

        if let Some(raw) = lookup(ENV_MAX_PARALLEL) {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.max_parallel = n,
                _ => warn!(value = %raw, "ignoring invalid {ENV_MAX_PARALLEL}"),
            }
        }

        config
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_max_parallel(mut self, max_parallel: usize) -> Self {
        self.max_parallel = max_parallel.max(1);
        self
    }
}
