mod cli;
mod fmt;
mod tables;

use anyhow::Context;
use clap::{Parser, crate_version};
use tracing::{info, instrument};
use usage_compare::snapshot::{Comparison, Snapshot};

use crate::{
    cli::{Args, Command, CompareArgs, WindowArgs},
    tables::build_entities_table,
};

type Result<T = ()> = anyhow::Result<T>;

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Compare(args) => compare(&args)?,
        Command::Window(args) => window(&args),
    }

    info!("done!");
    Ok(())
}

#[instrument(skip_all)]
fn compare(args: &CompareArgs) -> Result {
    let snapshot = Snapshot::read_from(&args.snapshot)?;
    let now = args.now.resolve(snapshot.now);
    let comparison = Comparison::compute(snapshot, args.period, now)
        .context("failed to compare the usage")?;
    info!(
        n_meters = comparison.meters.len(),
        n_groups = comparison.groups.len(),
        "compared"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        println!("Meters:");
        println!("{}", build_entities_table(&comparison.meters));
        println!("Groups:");
        println!("{}", build_entities_table(&comparison.groups));
    }
    Ok(())
}

fn window(args: &WindowArgs) {
    let now = args.now.resolve(None);
    let interval = args.period.compare_interval(now);
    println!("period:       {}", args.period);
    println!("start:        {}", interval.start.to_rfc3339());
    println!("end:          {}", interval.end.to_rfc3339());
    println!("span:         {}", interval.duration());
    println!("bar duration: {}", args.period.bar_duration());
    println!("elapsed:      {}", args.period.elapsed_units(&now));
}
