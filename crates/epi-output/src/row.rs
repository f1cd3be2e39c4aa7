//! Flat row types written by output backends.

use epi_sim::{CityDayStats, CityReport, DailySnapshot};

/// Network-wide counters for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySummaryRow {
    pub day:              u32,
    pub current_infected: u64,
    pub new_infections:   u64,
    pub susceptible:      u64,
    pub immune:           u64,
    pub travelers:        u64,
    pub returned_home:    u64,
    pub healed:           u64,
}

impl From<&DailySnapshot> for DailySummaryRow {
    fn from(s: &DailySnapshot) -> Self {
        Self {
            day:              s.day.0,
            current_infected: s.total_current_infected,
            new_infections:   s.total_new_infections,
            susceptible:      s.susceptible,
            immune:           s.immune,
            travelers:        s.travelers,
            returned_home:    s.returned_home,
            healed:           s.healed,
        }
    }
}

/// One city's counters for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityDayRow {
    pub day:                 u32,
    pub city:                u32,
    pub population:          u32,
    pub present:             u32,
    pub current_infected:    u64,
    pub new_infections:      u64,
    pub cumulative_infected: u64,
}

impl CityDayRow {
    pub fn new(day: u32, c: &CityDayStats) -> Self {
        Self {
            day,
            city:                c.city.0,
            population:          c.population,
            present:             c.present,
            current_infected:    c.current_infected,
            new_infections:      c.new_infections,
            cumulative_infected: c.cumulative_infected,
        }
    }
}

/// End-of-run counters for one city, the input of the
/// population-vs-attack-rate analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityFinalRow {
    pub city:                u32,
    pub degree:              u32,
    pub population:          u32,
    pub cumulative_infected: u64,
    pub current_infected:    u64,
    pub attack_rate:         f64,
}

impl From<&CityReport> for CityFinalRow {
    fn from(r: &CityReport) -> Self {
        Self {
            city:                r.city.0,
            degree:              r.degree,
            population:          r.population,
            cumulative_infected: r.cumulative_infected,
            current_infected:    r.current_infected,
            attack_rate:         r.attack_rate(),
        }
    }
}
