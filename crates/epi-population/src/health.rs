//! Per-person epidemiological state machine.
//!
//! ```text
//! Susceptible ──infect()──▶ Infected { days } ──advance()──▶ Immune
//! ```
//!
//! `Immune` is absorbing: nothing moves an agent out of it.

use epi_core::{HealingPolicy, SimRng};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealthState {
    #[default]
    Susceptible,

    /// `days` counts completed days of infection, from 0 at infection up to
    /// the healing ceiling.
    Infected { days: u32 },

    Immune,
}

impl HealthState {
    #[inline]
    pub fn is_susceptible(&self) -> bool {
        matches!(self, HealthState::Susceptible)
    }

    #[inline]
    pub fn is_infected(&self) -> bool {
        matches!(self, HealthState::Infected { .. })
    }

    #[inline]
    pub fn is_immune(&self) -> bool {
        matches!(self, HealthState::Immune)
    }

    /// Days infected, or `None` when not infected.
    #[inline]
    pub fn days_infected(&self) -> Option<u32> {
        match *self {
            HealthState::Infected { days } => Some(days),
            _ => None,
        }
    }

    /// Susceptible → Infected.  Returns `true` if the transition happened.
    ///
    /// Calling this on an infected or immune person is a no-op: several
    /// infectors may pick the same contact on the same day.
    #[inline]
    pub fn infect(&mut self) -> bool {
        if self.is_susceptible() {
            *self = HealthState::Infected { days: 0 };
            true
        } else {
            false
        }
    }

    /// End-of-day disease progression.  Returns `true` if the person healed.
    ///
    /// An infected person at `ceiling` days becomes immune.  Otherwise the day
    /// counter advances and the person heals with
    /// `healing.probability(days)`.  The RNG is only consulted when that
    /// probability is non-zero.
    pub fn advance(&mut self, ceiling: u32, healing: &HealingPolicy, rng: &mut SimRng) -> bool {
        let HealthState::Infected { days } = self else {
            return false;
        };
        if *days >= ceiling {
            *self = HealthState::Immune;
            return true;
        }
        *days += 1;
        let p = healing.probability(*days);
        if p > 0.0 && rng.gen_bool(p) {
            *self = HealthState::Immune;
            return true;
        }
        false
    }
}
