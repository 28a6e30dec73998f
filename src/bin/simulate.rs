//! Simulation Binary
//!
//! Runs every offer strategy over many trials and prints the average payout
//! each one costs, followed by the cheapest strategy.

use briefcase::tournament::Sampling;
use briefcase::tournament::Tournament;
use briefcase::*;
use clap::Parser;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(
        long,
        short,
        default_value_t = DEFAULT_TRIALS,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..),
        help = "Games played per strategy"
    )]
    trials: usize,
    #[arg(long, short, help = "Suppress the per-game trace printed by default")]
    quiet: bool,
    #[arg(long, short, help = "Seed the random source for a reproducible run")]
    seed: Option<u64>,
    #[arg(long, help = "Give every strategy in a trial the same box reveals")]
    paired: bool,
    #[arg(long, help = "Print the report as JSON")]
    json: bool,
    #[arg(long, help = "Log per-trial progress")]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(match args.debug {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    });
    let ref mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    let sampling = match args.paired {
        true => Sampling::Paired,
        false => Sampling::Independent,
    };
    let report = Tournament::new(args.trials)
        .verbose(!args.quiet)
        .sampling(sampling)
        .run(rng)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.table());
        println!("{}", report.verdict().green());
    }
    Ok(())
}
