//! Per-day and end-of-run statistics.

use epi_core::{CityId, Day};

/// One city's counters at the end of a day.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CityDayStats {
    pub city:                CityId,
    /// Resident population (fixed).
    pub population:          u32,
    /// People physically present, visitors included.
    pub present:             u32,
    pub current_infected:    u64,
    pub new_infections:      u64,
    pub cumulative_infected: u64,
}

/// Network-wide state at the end of one simulated day.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DailySnapshot {
    pub day:                    Day,
    pub total_current_infected: u64,
    pub total_new_infections:   u64,
    pub susceptible:            u64,
    pub immune:                 u64,
    /// People relocated by the travel phase.
    pub travelers:              u64,
    /// People sent home for exceeding the trip limit.
    pub returned_home:          u64,
    /// People who became immune today.
    pub healed:                 u64,
    /// Indexed by `CityId`.
    pub cities:                 Vec<CityDayStats>,
}

/// Final counters for one city.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CityReport {
    pub city:                CityId,
    pub degree:              u32,
    pub population:          u32,
    pub cumulative_infected: u64,
    pub current_infected:    u64,
}

impl CityReport {
    /// Cumulative infections per resident; 0 for an unpopulated city.
    pub fn attack_rate(&self) -> f64 {
        if self.population == 0 {
            0.0
        } else {
            self.cumulative_infected as f64 / self.population as f64
        }
    }
}

/// Everything a completed run produced.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunOutcome {
    pub seed:      u64,
    pub days:      u32,
    /// One entry per simulated day, in order.
    pub snapshots: Vec<DailySnapshot>,
    /// Indexed by `CityId`.
    pub cities:    Vec<CityReport>,
}

impl RunOutcome {
    /// Infections over the whole run, seeds included.
    pub fn total_infected(&self) -> u64 {
        self.cities.iter().map(|c| c.cumulative_infected).sum()
    }

    /// The day with the most people infected at once.  Earliest day wins
    /// ties; `None` when nobody was ever infected.
    pub fn peak(&self) -> Option<(Day, u64)> {
        self.snapshots
            .iter()
            .filter(|s| s.total_current_infected > 0)
            .fold(None, |best: Option<(Day, u64)>, s| match best {
                Some((_, n)) if n >= s.total_current_infected => best,
                _ => Some((s.day, s.total_current_infected)),
            })
    }
}
