//! `epi-core`: foundational types for the `rust_epi` city epidemic model.
//!
//! This crate is a dependency of every other `epi-*` crate.  It has no
//! `epi-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`ids`]     | `AgentId`, `CityId`                                         |
//! | [`time`]    | `Day`                                                       |
//! | [`rng`]     | `SimRng` (seeded, derivable per run / per phase)            |
//! | [`config`]  | `EpiConfig`, `HubParams`, `PopulationRule`, `HealingPolicy` |
//! | [`error`]   | `EpiError`, `EpiResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and configuration.   |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    ContactSampling, EpiConfig, HealingPolicy, HubParams, PopulationRule, DEFAULT_MAX_CITIES,
};
pub use error::{EpiError, EpiResult};
pub use ids::{AgentId, CityId};
pub use rng::SimRng;
pub use time::Day;
