//! The `Sim` struct and its day loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info};

use epi_core::{Day, EpiConfig, SimRng};
use epi_population::{ContactParams, Population};
use epi_topology::CityGraph;
use epi_travel::{TravelKernel, TravelRouter};

use crate::{
    CityDayStats, CityReport, DailySnapshot, RunOutcome, SimError, SimResult, StatisticsSink,
};

/// Lifecycle of a [`Sim`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SimPhase {
    /// Built and seeded; no day simulated yet.
    Ready,
    /// `day` is the next day to simulate.
    Running { day: Day },
    /// All `no_days` days have been simulated.
    Completed,
    /// A day failed; the state is no longer trustworthy.
    Failed { day: Day },
}

/// The epidemic simulation runner.
///
/// Owns the whole state of one run: configuration, city network, people,
/// travel router, and the single RNG stream every stochastic step draws
/// from in a fixed order.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub config: EpiConfig,

    /// The city network.  Read-only after construction.
    pub graph: CityGraph,

    /// Cities and people.  Mutated only by the day loop.
    pub population: Population,

    /// Travel planner holding the distance table.
    pub router: TravelRouter<Box<dyn TravelKernel>>,

    pub rng: SimRng,

    contact:   ContactParams,
    phase:     SimPhase,
    cancel:    Option<Arc<AtomicBool>>,
    snapshots: Vec<DailySnapshot>,
}

impl Sim {
    pub(crate) fn new(
        contact:    ContactParams,
        config:     EpiConfig,
        graph:      CityGraph,
        population: Population,
        router:     TravelRouter<Box<dyn TravelKernel>>,
        rng:        SimRng,
        cancel:     Option<Arc<AtomicBool>>,
    ) -> Self {
        let snapshots = Vec::with_capacity(config.no_days as usize);
        Self {
            config,
            graph,
            population,
            router,
            rng,
            contact,
            phase: SimPhase::Ready,
            cancel,
            snapshots,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    /// Snapshots of the days simulated so far.
    pub fn snapshots(&self) -> &[DailySnapshot] {
        &self.snapshots
    }

    /// Simulate every remaining day and return the complete outcome.
    ///
    /// On failure the sink receives `on_run_failed` and no outcome is
    /// produced.
    pub fn run<S: StatisticsSink>(&mut self, sink: &mut S) -> SimResult<RunOutcome> {
        info!("running {} days (seed {})", self.config.no_days, self.config.seed);
        while self.phase != SimPhase::Completed {
            self.step_day(sink)?;
        }

        let outcome = RunOutcome {
            seed:      self.config.seed,
            days:      self.config.no_days,
            snapshots: self.snapshots.clone(),
            cities:    self.city_reports(),
        };
        sink.on_run_end(&outcome.cities);
        info!(
            "run complete: {} infected in total, {} still infected",
            outcome.total_infected(),
            outcome.cities.iter().map(|c| c.current_infected).sum::<u64>(),
        );
        Ok(outcome)
    }

    /// Simulate up to `n` days, stopping early at `no_days`.  Returns the
    /// number of days simulated.
    ///
    /// Useful for tests and incremental stepping.  `on_run_end` is only sent
    /// by [`run`](Self::run).
    pub fn run_days<S: StatisticsSink>(&mut self, n: u32, sink: &mut S) -> SimResult<u32> {
        let mut done = 0;
        while done < n && self.phase != SimPhase::Completed {
            self.step_day(sink)?;
            done += 1;
        }
        Ok(done)
    }

    /// Simulate one day and return its snapshot.
    pub fn step_day<S: StatisticsSink>(&mut self, sink: &mut S) -> SimResult<&DailySnapshot> {
        let day = match self.phase {
            SimPhase::Ready => Day::ZERO,
            SimPhase::Running { day } => day,
            finished => return Err(SimError::Finished(finished)),
        };

        match self.process_day(day) {
            Ok(snapshot) => {
                sink.on_day_end(&snapshot);
                self.snapshots.push(snapshot);
                self.phase = if day.0 + 1 >= self.config.no_days {
                    SimPhase::Completed
                } else {
                    SimPhase::Running { day: day.next() }
                };
                let last = self.snapshots.len() - 1;
                Ok(&self.snapshots[last])
            }
            Err(e) => {
                self.phase = SimPhase::Failed { day };
                sink.on_run_failed(&e);
                Err(e)
            }
        }
    }

    /// Verify roster bookkeeping: every person in exactly one present roster,
    /// at the city and slot they record, and no headcount drift.
    pub fn check_invariants(&self, day: Day) -> SimResult<()> {
        self.population
            .check_consistency()
            .map_err(|source| SimError::Invariant { day, source })
    }

    /// Final counters for every city as they stand now.
    pub fn city_reports(&self) -> Vec<CityReport> {
        self.population
            .cities
            .iter()
            .map(|c| CityReport {
                city:                c.id,
                degree:              self.graph.degree(c.id) as u32,
                population:          c.population() as u32,
                cumulative_infected: c.cumulative_infected,
                current_infected:    c.current_infected,
            })
            .collect()
    }

    // ── Core day processing ───────────────────────────────────────────────

    fn process_day(&mut self, day: Day) -> SimResult<DailySnapshot> {
        if self.cancel.as_ref().is_some_and(|f| f.load(Ordering::Relaxed)) {
            return Err(SimError::Cancelled { day });
        }

        // ── ① Transmission ────────────────────────────────────────────────
        let new_by_city = self.population.internal_infection(&self.contact, &mut self.rng);

        // ── ② Travel ──────────────────────────────────────────────────────
        let plan = self.router.travel(&mut self.population, &mut self.rng)?;
        self.check_invariants(day)?;

        // ── ③ Forced returns, then per-person advance ─────────────────────
        let returns = self.population.collect_returns(self.config.trip_limit);
        self.population.relocate_batch(&returns);
        self.check_invariants(day)?;

        let healed = self.population.advance_people(
            self.config.healing_ceiling,
            &self.config.healing,
            &mut self.rng,
        );

        // ── ④ Recount ─────────────────────────────────────────────────────
        let total_current_infected = self.population.recount_infected();

        // ── ⑤ Snapshot ────────────────────────────────────────────────────
        let totals = self.population.health_totals();
        let cities: Vec<CityDayStats> = self
            .population
            .cities
            .iter()
            .zip(&new_by_city)
            .map(|(c, &new_infections)| CityDayStats {
                city:                c.id,
                population:          c.population() as u32,
                present:             c.present_count() as u32,
                current_infected:    c.current_infected,
                new_infections,
                cumulative_infected: c.cumulative_infected,
            })
            .collect();
        let total_new_infections: u64 = new_by_city.iter().sum();

        debug!(
            "{}: {} new, {} infected, {} travelled, {} returned home, {} healed",
            day,
            total_new_infections,
            total_current_infected,
            plan.len(),
            returns.len(),
            healed,
        );

        Ok(DailySnapshot {
            day,
            total_current_infected,
            total_new_infections,
            susceptible: totals.susceptible,
            immune: totals.immune,
            travelers: plan.len() as u64,
            returned_home: returns.len() as u64,
            healed,
            cities,
        })
    }
}
