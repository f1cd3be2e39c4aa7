use thiserror::Error;

use epi_core::{AgentId, CityId, EpiError};

#[derive(Debug, Error)]
pub enum PopulationError {
    #[error("seed city {city} has {residents} residents, cannot seed {requested} infections")]
    NotEnoughResidents {
        city:      CityId,
        residents: usize,
        requested: usize,
    },

    #[error("population of {requested} agents exceeds the AgentId range")]
    TooManyAgents { requested: u64 },

    #[error("{agent} listed in roster of {city} at slot {slot}, but records {recorded_city} slot {recorded_slot}")]
    RosterMismatch {
        agent:         AgentId,
        city:          CityId,
        slot:          usize,
        recorded_city: CityId,
        recorded_slot: usize,
    },

    #[error("{agent} records {recorded_city} slot {recorded_slot}, but that roster entry does not hold it")]
    Missing {
        agent:         AgentId,
        recorded_city: CityId,
        recorded_slot: usize,
    },

    #[error(transparent)]
    Core(#[from] EpiError),
}

pub type PopulationResult<T> = Result<T, PopulationError>;
