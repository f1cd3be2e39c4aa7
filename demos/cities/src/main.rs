//! cities: one epidemic over a generated hub-repulsion city network.
//!
//! Usage:
//!
//! ```text
//! cities [CONFIG] [--batch RUNS]
//! ```
//!
//! Without a config file the reference parameters are used (`p = 0.7`,
//! `m = 3`, two iterations, 30 days).  Per-day and per-city statistics are
//! written as CSV to `output/cities/`.  `--batch` additionally runs that
//! many independent seeds in parallel and reports their spread.

mod logging;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use epi_core::EpiConfig;
use epi_output::{CsvWriter, OutputSink};
use epi_sim::{run_batch, SimBuilder};

const OUTPUT_DIR: &str = "output/cities";

/// Cities listed in the final table.
const TABLE_ROWS: usize = 15;

#[derive(Parser, Debug)]
#[command(name = "cities")]
#[command(about = "Run an epidemic over a generated hub-repulsion city network")]
struct Args {
    /// JSON run configuration; omitted fields keep their defaults
    config: Option<PathBuf>,

    /// Also run this many independent seeds in parallel
    #[arg(long, value_name = "RUNS", value_parser = clap::value_parser!(u32).range(1..))]
    batch: Option<u32>,
}

fn load_config(path: Option<&Path>) -> Result<EpiConfig> {
    match path {
        None => Ok(EpiConfig::default()),
        Some(p) => {
            let file = File::open(p).with_context(|| format!("opening config {}", p.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing config {}", p.display()))
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init()?;

    let config = load_config(args.config.as_deref())?;
    info!("configuration: {}", serde_json::to_string(&config)?);

    println!("=== cities: rust_epi ===");
    println!(
        "Days: {}  |  p = {}  m = {}  N = {}  |  infection {}  contacts {}  |  Seed: {}",
        config.no_days,
        config.topology.keep_prob,
        config.topology.branching,
        config.topology.iterations,
        config.infection_prob,
        config.avg_contacts,
        config.seed,
    );

    // 1. Build the network, population, and initial infections.
    let t0 = Instant::now();
    let mut sim = SimBuilder::new(config.clone()).build()?;
    println!(
        "Network: {} cities, {} links  |  People: {}  (built in {:.3} s)",
        sim.graph.city_count(),
        sim.graph.link_count(),
        sim.population.agent_count(),
        t0.elapsed().as_secs_f64(),
    );
    println!();

    // 2. Set up output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let mut sink = OutputSink::new(CsvWriter::new(Path::new(OUTPUT_DIR))?);

    // 3. Run.
    let t0 = Instant::now();
    let outcome = sim.run(&mut sink)?;
    let elapsed = t0.elapsed();
    if let Some(e) = sink.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  total infected : {}", outcome.total_infected());
    match outcome.peak() {
        Some((day, n)) => println!("  peak           : {n} infected on {day}"),
        None => println!("  peak           : no infections"),
    }
    println!("  output         : {OUTPUT_DIR}/");
    println!();

    // 5. Largest cities.
    let mut cities = outcome.cities.clone();
    cities.sort_by(|a, b| b.population.cmp(&a.population).then(a.city.cmp(&b.city)));
    println!("{:<14} {:>6} {:>10} {:>10} {:>8}", "City", "Degree", "Population", "Infected", "Attack");
    println!("{}", "-".repeat(52));
    for c in cities.iter().take(TABLE_ROWS) {
        println!(
            "{:<14} {:>6} {:>10} {:>10} {:>8.3}",
            c.city.to_string(),
            c.degree,
            c.population,
            c.cumulative_infected,
            c.attack_rate(),
        );
    }

    // 6. Optional batch of independent seeds.
    if let Some(runs) = args.batch {
        let runs = runs as usize;
        let t0 = Instant::now();
        let totals: Vec<u64> = run_batch(&config, runs)
            .into_iter()
            .map(|r| r.map(|o| o.total_infected()))
            .collect::<Result<_, _>>()?;
        let mean = totals.iter().sum::<u64>() as f64 / totals.len().max(1) as f64;
        println!();
        println!(
            "Batch of {runs} runs in {:.3} s: mean {mean:.1} infected (min {}, max {})",
            t0.elapsed().as_secs_f64(),
            totals.iter().min().copied().unwrap_or(0),
            totals.iter().max().copied().unwrap_or(0),
        );
    }

    Ok(())
}
