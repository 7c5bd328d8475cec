//! Headless Blockfight host.
//!
//! Runs a match flat out with seeded random input, optionally streaming JSON
//! snapshots to stdout, and logs a summary at the end. Configured through
//! `BLOCKFIGHT_*` environment variables (see `config.rs`).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod pilot;
mod sink;

use std::io::{self, BufWriter};

use anyhow::Context;
use blockfight_core::host::{RoundLimit, TickDriver};
use blockfight_core::Match;
use tracing::info;

use crate::config::{LogFormat, Settings};
use crate::pilot::RandomPilot;
use crate::sink::JsonLines;

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Logs go to stderr so stdout stays a clean snapshot stream.
    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .json()
            .with_current_span(true)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .compact()
            .init(),
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    init_tracing(settings.log_format);

    let tuning = settings.load_tuning()?;
    let mut game = Match::new(tuning).context("invalid tuning")?;
    info!(
        seed = settings.seed,
        max_ticks = settings.max_ticks,
        rounds = settings.rounds,
        snapshot_every = settings.snapshot_every,
        "starting match"
    );

    let sink = JsonLines::new(BufWriter::new(io::stdout().lock()), settings.snapshot_every);
    let mut driver = TickDriver::new(sink, RoundLimit::new(settings.rounds));
    let mut pilot = RandomPilot::new(settings.seed);

    let summary = driver
        .run(&mut game, settings.max_ticks, |_, game| pilot.drive(game))
        .context("driving match")?;

    let (sink, _) = driver.into_parts();
    let snapshots = sink.written();
    sink.finish().context("writing snapshot stream")?;

    info!(
        ticks = summary.ticks,
        rounds = summary.rounds(),
        red_wins = summary.wins[0],
        blue_wins = summary.wins[1],
        terminated = summary.terminated,
        snapshots,
        "match finished"
    );
    Ok(())
}
