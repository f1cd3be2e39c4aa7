//! `PersonStore`: Structure-of-Arrays storage for every person in a run.
//!
//! Every `Vec` field has exactly `count` elements and is indexed by
//! `AgentId`:
//!
//! ```ignore
//! let here = people.current[agent.index()];  // O(1), cache-friendly
//! ```
//!
//! People are created once, grouped by home city, and never removed.  The
//! `current` / `slot` pair is owned by [`Population`][crate::Population]:
//! only its relocation methods may write them, because they must agree with
//! the city rosters at all times.

use epi_core::{AgentId, CityId};

use crate::HealthState;

pub struct PersonStore {
    /// Number of people.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Home city, fixed at creation.
    pub home: Vec<CityId>,

    /// City whose present roster holds this person.
    pub current: Vec<CityId>,

    /// Position of this person inside `current`'s present roster.
    pub slot: Vec<u32>,

    pub health: Vec<HealthState>,

    /// Consecutive days spent away from home; 0 while at home.
    pub days_away: Vec<u32>,
}

impl PersonStore {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            count:     0,
            home:      Vec::with_capacity(capacity),
            current:   Vec::with_capacity(capacity),
            slot:      Vec::with_capacity(capacity),
            health:    Vec::with_capacity(capacity),
            days_away: Vec::with_capacity(capacity),
        }
    }

    /// Append a susceptible person living (and present) in `home` at roster
    /// position `slot`.
    pub(crate) fn push(&mut self, home: CityId, slot: u32) -> AgentId {
        let id = AgentId(self.count as u32);
        self.home.push(home);
        self.current.push(home);
        self.slot.push(slot);
        self.health.push(HealthState::Susceptible);
        self.days_away.push(0);
        self.count += 1;
        id
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    #[inline]
    pub fn is_away(&self, agent: AgentId) -> bool {
        self.current[agent.index()] != self.home[agent.index()]
    }

    /// Infect `agent` if susceptible.  See [`HealthState::infect`].
    #[inline]
    pub fn infect(&mut self, agent: AgentId) -> bool {
        self.health[agent.index()].infect()
    }
}
