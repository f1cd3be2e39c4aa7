//! `epi-population`: people, cities, and within-city transmission.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                  |
//! |------------------|-----------------------------------------------------------|
//! | [`health`]       | `HealthState`: Susceptible → Infected → Immune           |
//! | [`store`]        | `PersonStore` (SoA arrays indexed by `AgentId`)           |
//! | [`city`]         | `City`: residents, present roster, infection counters    |
//! | [`transmission`] | `ContactParams`, `City::internal_infection`               |
//! | [`population`]   | `Population`: cities + people, relocation, invariants    |
//! | [`error`]        | `PopulationError`, `PopulationResult<T>`                  |
//!
//! # Roster bookkeeping
//!
//! Rosters hold stable `AgentId` handles.  Each person also records the
//! `slot` it occupies in its current city's roster, so a move is an O(1)
//! `swap_remove` plus one slot fix-up for the person swapped into the hole.
//! Positions are never handed out, so nothing can go stale when a roster
//! changes.

pub mod city;
pub mod error;
pub mod health;
pub mod population;
pub mod store;
pub mod transmission;

#[cfg(test)]
mod tests;

pub use city::City;
pub use error::{PopulationError, PopulationResult};
pub use health::HealthState;
pub use population::{HealthTotals, Population};
pub use store::PersonStore;
pub use transmission::ContactParams;
