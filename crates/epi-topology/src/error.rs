//! Topology error type.

use thiserror::Error;

use epi_core::{CityId, EpiError};

/// Errors produced by `epi-topology`.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("city {0} not found in topology")]
    CityNotFound(CityId),

    #[error("topology would exceed {max} cities (requested {requested})")]
    TooLarge { requested: u64, max: u64 },

    #[error(transparent)]
    Core(#[from] EpiError),
}

pub type TopologyResult<T> = Result<T, TopologyError>;
