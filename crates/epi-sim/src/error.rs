use thiserror::Error;

use epi_core::{Day, EpiError};
use epi_population::PopulationError;
use epi_topology::TopologyError;
use epi_travel::TravelError;

use crate::SimPhase;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] EpiError),

    #[error("topology error: {0}")]
    Topology(#[from] TopologyError),

    #[error("population error: {0}")]
    Population(#[from] PopulationError),

    #[error("travel error: {0}")]
    Travel(#[from] TravelError),

    #[error("invariant violated on {day}: {source}")]
    Invariant {
        day:    Day,
        source: PopulationError,
    },

    #[error("run cancelled before {day}")]
    Cancelled { day: Day },

    #[error("simulation cannot advance from phase {0:?}")]
    Finished(SimPhase),
}

pub type SimResult<T> = Result<T, SimError>;
