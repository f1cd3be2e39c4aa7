//! Fluent builder for constructing a [`Sim`].

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use log::{info, warn};

use epi_core::{EpiConfig, EpiError, SimRng};
use epi_population::{ContactParams, Population, PopulationError};
use epi_topology::{CityGraph, DistanceTable, HubRepulsion, TopologyError, TopologyGenerator};
use epi_travel::{ExponentialDecay, TravelKernel, TravelRouter};

use crate::{Sim, SimError, SimResult};

/// RNG stream offset reserved for topology generation.
const TOPOLOGY_STREAM: u64 = 0;

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`EpiConfig`]: days, probabilities, topology parameters, seed, …
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                           |
/// |---------------------|---------------------------------------------------|
/// | `.graph(g)`         | Hub-repulsion network from `config.topology`      |
/// | `.kernel(k)`        | `ExponentialDecay` with `config.travel_decay`     |
/// | `.cancel_flag(f)`   | Never cancelled                                   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .graph(hand_built)
///     .cancel_flag(stop.clone())
///     .build()?;
/// sim.run(&mut NoopSink)?;
/// ```
pub struct SimBuilder {
    config: EpiConfig,
    graph:  Option<CityGraph>,
    kernel: Option<Box<dyn TravelKernel>>,
    cancel: Option<Arc<AtomicBool>>,
}

impl SimBuilder {
    pub fn new(config: EpiConfig) -> Self {
        Self { config, graph: None, kernel: None, cancel: None }
    }

    /// Use a prebuilt city network instead of generating one.
    /// `config.topology` is still validated, and its `max_cities` still
    /// bounds the network.
    pub fn graph(mut self, graph: CityGraph) -> Self {
        self.graph = Some(graph);
        self
    }

    /// Replace the exponential distance decay with another travel kernel.
    pub fn kernel<K: TravelKernel + 'static>(mut self, kernel: K) -> Self {
        self.kernel = Some(Box::new(kernel));
        self
    }

    /// Share a flag that aborts the run at the next day boundary once set.
    pub fn cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Validate the configuration, build the network, distances, and
    /// population, and seed the initial infections.
    pub fn build(self) -> SimResult<Sim> {
        let config = self.config;
        config.validate()?;

        let mut rng = SimRng::new(config.seed);
        let mut topology_rng = rng.child(TOPOLOGY_STREAM);

        // ── Topology and distances ────────────────────────────────────────
        let graph = match self.graph {
            Some(g) => g,
            None => HubRepulsion::new(config.topology.clone()).generate(&mut topology_rng)?,
        };
        let max_cities = config.topology.max_cities as u64;
        if graph.city_count() as u64 > max_cities {
            let requested = graph.city_count() as u64;
            return Err(TopologyError::TooLarge { requested, max: max_cities }.into());
        }
        if !graph.contains(config.seed_city) {
            return Err(EpiError::CityNotFound(config.seed_city).into());
        }

        let distances = DistanceTable::compute(&graph);
        if !distances.is_connected() {
            warn!("city network is disconnected; unreachable cities exchange no travellers");
        }
        let diameter = distances.diameter();

        let kernel: Box<dyn TravelKernel> = match self.kernel {
            Some(k) => k,
            None => Box::new(ExponentialDecay::new(config.travel_decay)?),
        };
        let router = TravelRouter::new(kernel, distances)?;

        // ── Population and seeding ────────────────────────────────────────
        let mut population = Population::for_graph(&graph, config.population)?;
        let seeded = population
            .seed_infections(config.seed_city, config.patient_zero_count, &mut rng)
            .map_err(|e| match e {
                PopulationError::NotEnoughResidents { .. } => {
                    SimError::Config(EpiError::Config(e.to_string()))
                }
                other => SimError::Population(other),
            })?;

        info!(
            "built simulation: {} cities, {} links, diameter {}, {} people, {} seeded in {}",
            graph.city_count(),
            graph.link_count(),
            diameter,
            population.agent_count(),
            seeded.len(),
            config.seed_city,
        );

        Ok(Sim::new(
            ContactParams::from(&config),
            config,
            graph,
            population,
            router,
            rng,
            self.cancel,
        ))
    }
}
