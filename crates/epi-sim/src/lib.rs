//! `epi-sim`: day loop orchestrator for the rust_epi model.
//!
//! # Day loop
//!
//! ```text
//! for day in 0..config.no_days:
//!   ① Transmission: every city runs well-mixed contacts among the people
//!                    present; infectious set frozen at the start of the day.
//!   ② Travel      : TravelRouter plans moves from the frozen rosters and
//!                    applies them as one batch.          → invariant check
//!   ③ Advance     : people away for trip_limit days are sent home as one
//!                    batch,                              → invariant check
//!                    then every person's health and days-away counter
//!                    advance by one day.
//!   ④ Recount     : every city's current-infected counter is recomputed.
//!   ⑤ Snapshot    : a DailySnapshot is recorded and passed to the sink.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `run_batch` runs independent seeds on Rayon's pool.    |
//! | `serde`    | `Serialize` on snapshots, reports, and outcomes.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use epi_core::EpiConfig;
//! use epi_sim::{NoopSink, SimBuilder};
//!
//! let mut sim = SimBuilder::new(EpiConfig::default()).build()?;
//! let outcome = sim.run(&mut NoopSink)?;
//! for city in &outcome.cities {
//!     println!("{} {} {:.3}", city.city, city.population, city.attack_rate());
//! }
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod snapshot;


pub use batch::{batch_seeds, run_batch};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopSink, RecordingSink, StatisticsSink};
pub use sim::{Sim, SimPhase};
pub use snapshot::{CityDayStats, CityReport, DailySnapshot, RunOutcome};
