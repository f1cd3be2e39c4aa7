//! Run configuration.
//!
//! Every tunable of a run lives in one immutable [`EpiConfig`] handed to the
//! simulation builder.  Nothing in the model reads process-wide state.
//!
//! `EpiConfig::default()` reproduces the reference parameter set: a
//! `p = 0.7, m = 3, N = 2` hub topology, 30 days, 30 % per-contact
//! infection, 8 contacts per day, 4-day trips, decay constant 2.2, 2000
//! residents per link, and a single patient zero.

use crate::{CityId, EpiError, EpiResult};

// ── HubParams ─────────────────────────────────────────────────────────────────

pub const DEFAULT_MAX_CITIES: u32 = 16_384;

/// Parameters of the hub-repulsion fractal topology generator.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HubParams {
    /// Probability `p` that a pre-existing edge survives an iteration
    /// untouched.  Rewired with probability `1 - p`.  Must be in `(0, 1)`.
    pub keep_prob: f64,

    /// Branching multiplier `m`: a node of degree `k` grows `m * k` new leaves
    /// per iteration.  Must be `>= 1`.
    pub branching: u32,

    /// Number of growth + rewiring iterations `N`.  Node count grows roughly
    /// by a factor of `1 + 2m` per iteration, so values above 4 get large.
    pub iterations: u32,

    /// Leaves attached to the initial center.  3 or 4 in practice.
    pub initial_leaves: u32,

    /// Upper bound on the city count.  Distances are held in a dense
    /// `n × n` table of `u16`, so the default (16 384) caps it at 512 MiB.
    pub max_cities: u32,
}

impl HubParams {
    pub fn validate(&self) -> EpiResult<()> {
        if !(self.keep_prob > 0.0 && self.keep_prob < 1.0) {
            return Err(EpiError::Config(format!(
                "topology keep_prob must be in (0, 1), got {}",
                self.keep_prob
            )));
        }
        if self.branching == 0 {
            return Err(EpiError::Config("topology branching must be >= 1".into()));
        }
        if self.initial_leaves == 0 {
            return Err(EpiError::Config("topology initial_leaves must be >= 1".into()));
        }
        if (self.max_cities as u64) < self.initial_leaves as u64 + 1 {
            return Err(EpiError::Config(format!(
                "topology max_cities ({}) is smaller than the initial star ({} cities)",
                self.max_cities,
                self.initial_leaves as u64 + 1
            )));
        }
        Ok(())
    }
}

impl Default for HubParams {
    fn default() -> Self {
        Self {
            keep_prob:      0.7,
            branching:      3,
            iterations:     2,
            initial_leaves: 4,
            max_cities:     DEFAULT_MAX_CITIES,
        }
    }
}

// ── PopulationRule ────────────────────────────────────────────────────────────

/// How many residents a city receives, from its degree in the topology.
///
/// `residents = max(degree * per_link, minimum)`.  The floor keeps isolated
/// cities (hand-built single-city graphs) populated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PopulationRule {
    pub per_link: u32,
    pub minimum:  u32,
}

impl PopulationRule {
    #[inline]
    pub fn residents_for_degree(&self, degree: usize) -> u32 {
        let scaled = (degree as u64 * self.per_link as u64).min(u32::MAX as u64) as u32;
        scaled.max(self.minimum)
    }
}

impl Default for PopulationRule {
    fn default() -> Self {
        Self { per_link: 2_000, minimum: 2_000 }
    }
}

// ── HealingPolicy ─────────────────────────────────────────────────────────────

/// Per-day stochastic healing applied to infected agents, on top of the hard
/// `healing_ceiling`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum HealingPolicy {
    /// Agents heal only when they reach the ceiling.
    #[default]
    None,

    /// Fixed daily healing probability.
    Constant { prob: f64 },

    /// Probability grows linearly with days infected:
    /// `min(1, per_day * days_infected)`.
    Ramp { per_day: f64 },
}

impl HealingPolicy {
    /// Healing probability for an agent infected for `days_infected` days.
    #[inline]
    pub fn probability(&self, days_infected: u32) -> f64 {
        match *self {
            HealingPolicy::None => 0.0,
            HealingPolicy::Constant { prob } => prob,
            HealingPolicy::Ramp { per_day } => (per_day * days_infected as f64).min(1.0),
        }
    }

    fn validate(&self) -> EpiResult<()> {
        match *self {
            HealingPolicy::None => Ok(()),
            HealingPolicy::Constant { prob } if (0.0..=1.0).contains(&prob) => Ok(()),
            HealingPolicy::Ramp { per_day } if per_day.is_finite() && per_day >= 0.0 => Ok(()),
            other => Err(EpiError::Config(format!("invalid healing policy {other:?}"))),
        }
    }
}

// ── ContactSampling ───────────────────────────────────────────────────────────

/// How an infectious agent draws its daily contacts from the present roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ContactSampling {
    /// `avg_contacts` independent uniform draws; the same person may be met
    /// twice, and the infector may draw itself.
    #[default]
    WithReplacement,

    /// `min(avg_contacts, roster size)` distinct people.
    Distinct,
}

// ── EpiConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically built in code or loaded from JSON (feature `serde`) by the
/// application and passed to `SimBuilder`.  Validated once, before any
/// simulation state exists.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EpiConfig {
    /// Days to simulate.  Must be `> 0`.
    pub no_days: u32,

    /// Per-contact transmission probability in `[0, 1]`.
    pub infection_prob: f64,

    /// Contacts drawn per infectious agent per day.
    pub avg_contacts: u32,

    /// Consecutive days an agent may stay away before being sent home.
    pub trip_limit: u32,

    /// Decay constant `λ` of `exp(-λ d)` travel volume.  Must be `> 0`.
    pub travel_decay: f64,

    /// Residents of `seed_city` force-infected before day 0.
    pub patient_zero_count: u32,

    /// City whose residents provide the patient zeros.
    pub seed_city: CityId,

    /// Days after which an infected agent becomes immune unconditionally.
    pub healing_ceiling: u32,

    pub healing: HealingPolicy,

    pub contact_sampling: ContactSampling,

    pub population: PopulationRule,

    pub topology: HubParams,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl EpiConfig {
    /// Reject out-of-range parameters.
    ///
    /// Checks that need the topology (seed city exists, enough residents for
    /// the patient zeros) are done by the simulation builder.
    pub fn validate(&self) -> EpiResult<()> {
        if self.no_days == 0 {
            return Err(EpiError::Config("no_days must be > 0".into()));
        }
        if !(0.0..=1.0).contains(&self.infection_prob) {
            return Err(EpiError::Config(format!(
                "infection_prob must be in [0, 1], got {}",
                self.infection_prob
            )));
        }
        if !(self.travel_decay.is_finite() && self.travel_decay > 0.0) {
            return Err(EpiError::Config(format!(
                "travel_decay must be a finite value > 0, got {}",
                self.travel_decay
            )));
        }
        if self.healing_ceiling == 0 {
            return Err(EpiError::Config("healing_ceiling must be >= 1".into()));
        }
        self.healing.validate()?;
        self.topology.validate()
    }
}

impl Default for EpiConfig {
    fn default() -> Self {
        Self {
            no_days:            30,
            infection_prob:     0.3,
            avg_contacts:       8,
            trip_limit:         4,
            travel_decay:       2.2,
            patient_zero_count: 1,
            seed_city:          CityId(0),
            healing_ceiling:    15,
            healing:            HealingPolicy::None,
            contact_sampling:   ContactSampling::WithReplacement,
            population:         PopulationRule::default(),
            topology:           HubParams::default(),
            seed:               42,
        }
    }
}
