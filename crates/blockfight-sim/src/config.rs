//! Runtime settings for the headless host (not gameplay tuning).

use std::{env, fs, path::PathBuf, str::FromStr};

use anyhow::Context;
use blockfight_core::Tuning;

/// Seed for the random pilot when `BLOCKFIGHT_SEED` is unset.
pub const DEFAULT_SEED: u64 = 0x00B1_0C4F;
/// Tick budget for a run: five minutes at 60 ticks per second.
pub const DEFAULT_MAX_TICKS: u64 = 60 * 60 * 5;
/// Rounds played before the match is terminated.
pub const DEFAULT_ROUNDS: u32 = 3;
/// Snapshot stride; the stream is off by default.
pub const DEFAULT_SNAPSHOT_EVERY: u64 = 0;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event.
    Json,
    /// Compact human-readable lines.
    Text,
}

/// Host settings read from `BLOCKFIGHT_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Seed for the random pilot (`BLOCKFIGHT_SEED`).
    pub seed: u64,
    /// Ticks to run before giving up (`BLOCKFIGHT_MAX_TICKS`).
    pub max_ticks: u64,
    /// Rounds to play (`BLOCKFIGHT_ROUNDS`).
    pub rounds: u32,
    /// Optional JSON tuning file (`BLOCKFIGHT_TUNING`).
    pub tuning_path: Option<PathBuf>,
    /// Log output format (`BLOCKFIGHT_LOG_FORMAT`).
    pub log_format: LogFormat,
    /// Write every nth snapshot to stdout (`BLOCKFIGHT_SNAPSHOT_EVERY`).
    /// 0 disables the stream.
    pub snapshot_every: u64,
}

impl Settings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`. Unset or malformed values fall back
    /// to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            seed: parsed(&lookup, "BLOCKFIGHT_SEED").unwrap_or(DEFAULT_SEED),
            max_ticks: parsed(&lookup, "BLOCKFIGHT_MAX_TICKS").unwrap_or(DEFAULT_MAX_TICKS),
            rounds: parsed(&lookup, "BLOCKFIGHT_ROUNDS").unwrap_or(DEFAULT_ROUNDS),
            tuning_path: lookup("BLOCKFIGHT_TUNING")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            log_format: match lookup("BLOCKFIGHT_LOG_FORMAT").as_deref() {
                Some("json") => LogFormat::Json,
                _ => LogFormat::Text,
            },
            snapshot_every: parsed(&lookup, "BLOCKFIGHT_SNAPSHOT_EVERY")
                .unwrap_or(DEFAULT_SNAPSHOT_EVERY),
        }
    }

    /// Loads the tuning file if one is configured, otherwise the defaults.
    pub fn load_tuning(&self) -> anyhow::Result<Tuning> {
        let Some(path) = &self.tuning_path else {
            return Ok(Tuning::default());
        };
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading tuning file {}", path.display()))?;
        Tuning::from_json_str(&json)
            .with_context(|| format!("loading tuning file {}", path.display()))
    }
}

fn parsed<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|value| value.trim().parse().ok())
}
