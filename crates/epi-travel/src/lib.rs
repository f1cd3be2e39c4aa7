//! `epi-travel`: daily inter-city travel.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`kernel`] | `TravelKernel` trait, `ExponentialDecay`, `expected_travelers` |
//! | [`router`] | `TravelRouter<K>`, `TravelPlan`: plan from snapshot, apply as batch |
//! | [`error`]  | `TravelError`, `TravelResult<T>`                            |
//!
//! # Travel model
//!
//! Once per day, each origin city `o` sends
//! `floor(kernel.fraction(d) × |present(o)|)` people to every city `d` hops
//! away (`d > 0`).  All quotas are computed from the rosters as they stand
//! when the phase starts:
//!
//! 1. For each origin, travellers are drawn **without replacement** from its
//!    roster across all destinations, so nobody is picked twice.
//! 2. If the quotas sum to more than the roster, each quota is scaled down
//!    proportionally (floored) and a warning is logged.
//! 3. Only once every origin has been planned are the moves applied, through
//!    [`Population::relocate_batch`][epi_population::Population::relocate_batch].
//!
//! Every person therefore moves at most once per travel phase.

pub mod error;
pub mod kernel;
pub mod router;


pub use error::{TravelError, TravelResult};
pub use kernel::{expected_travelers, ExponentialDecay, TravelKernel};
pub use router::{TravelPlan, TravelRouter};
