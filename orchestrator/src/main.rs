use clap::Parser as _;
use proposer_orchestrator::logging::init_logging;
use proposer_orchestrator::opts::Opts;
use proposer_orchestrator::{run, Sandbox};
use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng as _};
use snafu::{ResultExt as _, Whatever};
use tracing::info;

const LOG_TARGET: &str = "proposer::cli";

#[snafu::report]
fn main() -> Result<(), Whatever> {
    init_logging()?;

    let opts = Opts::parse();
    let config = opts.scenario_config();
    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let sandbox = Sandbox::new();
    let report = run(
        &sandbox,
        &config,
        |_| rng.gen_bool(0.5),
        |instance| info!(target: LOG_TARGET, ?instance, "Contract is ready"),
    )
    .whatever_context("Voting round failed")?;

    println!(
        "Times up. Outcome: {}, Yes: {}, No: {}",
        report.tally.outcome as u32, report.tally.yes_votes, report.tally.no_votes
    );

    Ok(())
}
