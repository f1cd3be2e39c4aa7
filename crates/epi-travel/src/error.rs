use thiserror::Error;

#[derive(Debug, Error)]
pub enum TravelError {
    #[error("travel decay constant must be finite and > 0, got {0}")]
    InvalidDecay(f64),

    #[error("travel kernel returned {fraction} for distance {distance}; expected a value in [0, 1]")]
    InvalidFraction { distance: u32, fraction: f64 },

    #[error("distance table covers {table} cities but the population has {cities}")]
    TableMismatch { table: usize, cities: usize },
}

pub type TravelResult<T> = Result<T, TravelError>;
