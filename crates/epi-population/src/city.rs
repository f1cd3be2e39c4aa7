//! A city: fixed residents plus the roster of people present today.

use epi_core::{AgentId, CityId};

use crate::PersonStore;

#[derive(Clone, Debug)]
pub struct City {
    pub id: CityId,

    /// People whose home is this city.  Fixed for the whole run.
    pub residents: Vec<AgentId>,

    /// People physically here today, residents and visitors alike.  Order is
    /// arbitrary; each person's position is mirrored in `PersonStore::slot`.
    pub present: Vec<AgentId>,

    /// Infections that happened here, seeds included.
    pub cumulative_infected: u64,

    /// Infected people present here, as of the last recount.
    pub current_infected: u64,
}

impl City {
    pub(crate) fn new(id: CityId, residents: Vec<AgentId>) -> Self {
        Self {
            id,
            present: residents.clone(),
            residents,
            cumulative_infected: 0,
            current_infected: 0,
        }
    }

    /// Resident population.
    #[inline]
    pub fn population(&self) -> usize {
        self.residents.len()
    }

    #[inline]
    pub fn present_count(&self) -> usize {
        self.present.len()
    }

    /// Recompute `current_infected` from the present roster.
    pub fn recount_infected(&mut self, people: &PersonStore) -> u64 {
        self.current_infected = self
            .present
            .iter()
            .filter(|a| people.health[a.index()].is_infected())
            .count() as u64;
        self.current_infected
    }
}
