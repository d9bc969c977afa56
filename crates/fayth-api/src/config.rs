use std::env;
use std::net::SocketAddr;

use eyre::{WrapErr, bail};

/// Default cap on trials accepted by one scoring request.
pub const DEFAULT_MAX_TRIALS: usize = 2000;

/// Default cap on sessions held in memory before the oldest is evicted.
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Serve over plain TCP when set; otherwise run as a Lambda function.
    pub bind_addr: Option<SocketAddr>,
    pub max_trials: usize,
    /// Least recently updated sessions are evicted beyond this many.
    pub max_sessions: usize,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: None,
            max_trials: DEFAULT_MAX_TRIALS,
            max_sessions: DEFAULT_MAX_SESSIONS,
            log_format: LogFormat::Json,
        }
    }
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unset variables fall back to
    /// their defaults; malformed ones are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bind_addr = lookup("FAYTH_BIND_ADDR")
            .map(|addr| {
                addr.parse::<SocketAddr>()
                    .wrap_err_with(|| format!("FAYTH_BIND_ADDR is not a socket address: {addr}"))
            })
            .transpose()?;

        let max_trials = match lookup("FAYTH_MAX_TRIALS") {
            Some(raw) => raw
                .parse::<usize>()
                .wrap_err_with(|| format!("FAYTH_MAX_TRIALS is not a number: {raw}"))?,
            None => DEFAULT_MAX_TRIALS,
        };

        let max_sessions = match lookup("FAYTH_MAX_SESSIONS") {
            Some(raw) => raw
                .parse::<usize>()
                .wrap_err_with(|| format!("FAYTH_MAX_SESSIONS is not a number: {raw}"))?,
            None => DEFAULT_MAX_SESSIONS,
        };
        if max_sessions == 0 {
            bail!("FAYTH_MAX_SESSIONS must be at least 1");
        }

        let log_format = match lookup("FAYTH_LOG_FORMAT").as_deref() {
            None | Some("json") => LogFormat::Json,
            Some("pretty") => LogFormat::Pretty,
            Some(other) => bail!("FAYTH_LOG_FORMAT must be json or pretty, got {other}"),
        };

        Ok(Self {
            bind_addr,
            max_trials,
            max_sessions,
            log_format,
        })
    }
}
