//! Independent runs over derived seeds.
//!
//! Each run gets its own seed drawn from a root `SimRng` seeded with
//! `config.seed`, and therefore its own topology, population, and RNG
//! stream.  Nothing is shared between runs, so with the `parallel` feature
//! they execute on Rayon's pool and still produce exactly the results of a
//! sequential batch.

use log::info;

use epi_core::{EpiConfig, SimRng};

use crate::{NoopSink, RunOutcome, SimBuilder, SimResult};

/// Run `runs` independent simulations of `config`, one per derived seed.
///
/// Results are returned in run order.  A failed run does not stop the
/// others.
pub fn run_batch(config: &EpiConfig, runs: usize) -> Vec<SimResult<RunOutcome>> {
    let seeds = batch_seeds(config.seed, runs);
    info!("batch of {} runs from root seed {}", runs, config.seed);

    #[cfg(not(feature = "parallel"))]
    {
        seeds.iter().map(|&seed| run_one(config, seed)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        seeds.par_iter().map(|&seed| run_one(config, seed)).collect()
    }
}

/// The per-run seeds `run_batch` uses for `root`.
pub fn batch_seeds(root: u64, runs: usize) -> Vec<u64> {
    let mut rng = SimRng::new(root);
    (0..runs as u64).map(|i| rng.child(i).random()).collect()
}

fn run_one(config: &EpiConfig, seed: u64) -> SimResult<RunOutcome> {
    let config = EpiConfig { seed, ..config.clone() };
    SimBuilder::new(config).build()?.run(&mut NoopSink)
}
