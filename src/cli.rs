use std::path::PathBuf;

use chrono::{DateTime, Local};
use clap::{Parser, Subcommand};
use usage_compare::compare::ComparePeriod;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare the current period usage with the same point of the prior period.
    #[clap(name = "compare")]
    Compare(Box<CompareArgs>),

    /// Print the readings window and bar duration a comparison needs.
    #[clap(name = "window")]
    Window(WindowArgs),
}

#[derive(Parser)]
pub struct CompareArgs {
    /// Dashboard snapshot in TOML.
    #[clap(long, env = "SNAPSHOT_PATH", default_value = "snapshot.toml")]
    pub snapshot: PathBuf,

    /// Override the snapshot's comparison period: `day`, `week`, or `four-weeks`.
    #[clap(long, env = "COMPARE_PERIOD")]
    pub period: Option<ComparePeriod>,

    #[clap(flatten)]
    pub now: NowArgs,

    /// Print JSON instead of the tables.
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct WindowArgs {
    #[clap(long, env = "COMPARE_PERIOD")]
    pub period: ComparePeriod,

    #[clap(flatten)]
    pub now: NowArgs,
}

#[derive(Copy, Clone, Parser)]
pub struct NowArgs {
    /// Evaluate at this instant (RFC 3339) instead of the current time.
    #[clap(long = "now", env = "COMPARE_NOW")]
    pub now: Option<DateTime<Local>>,
}

impl NowArgs {
    /// The explicit instant, falling back to the snapshot's one and then to the wall clock.
    pub fn resolve(self, fallback: Option<DateTime<Local>>) -> DateTime<Local> {
        self.now.or(fallback).unwrap_or_else(Local::now)
    }
}
