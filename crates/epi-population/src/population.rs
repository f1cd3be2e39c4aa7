//! `Population`: every city and every person of a run, kept consistent.
//!
//! The only way to move a person is [`Population::relocate`] (or its batch
//! form), which updates the source roster, the destination roster, and the
//! person's `current` / `slot` together.

use log::debug;

use epi_core::{AgentId, CityId, EpiError, HealingPolicy, PopulationRule, SimRng};
use epi_topology::CityGraph;

use crate::{City, ContactParams, PersonStore, PopulationError, PopulationResult};

/// Population-wide health counts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HealthTotals {
    pub susceptible: u64,
    pub infected:    u64,
    pub immune:      u64,
}

impl HealthTotals {
    pub fn total(&self) -> u64 {
        self.susceptible + self.infected + self.immune
    }
}

pub struct Population {
    /// Indexed by `CityId`.
    pub cities: Vec<City>,
    pub people: PersonStore,
}

impl Population {
    // ── Construction ──────────────────────────────────────────────────────

    /// One city per entry of `sizes`, with that many residents.  Every
    /// person starts susceptible and at home.
    pub fn from_sizes(sizes: &[u32]) -> PopulationResult<Self> {
        let total: u64 = sizes.iter().map(|&s| s as u64).sum();
        if total >= u32::MAX as u64 {
            return Err(PopulationError::TooManyAgents { requested: total });
        }

        let mut people = PersonStore::with_capacity(total as usize);
        let mut cities = Vec::with_capacity(sizes.len());
        for (index, &size) in sizes.iter().enumerate() {
            let id = CityId(index as u32);
            let residents: Vec<AgentId> = (0..size).map(|slot| people.push(id, slot)).collect();
            cities.push(City::new(id, residents));
        }

        Ok(Self { cities, people })
    }

    /// Size every city of `graph` by its degree under `rule`.
    pub fn for_graph(graph: &CityGraph, rule: PopulationRule) -> PopulationResult<Self> {
        let sizes: Vec<u32> = graph
            .city_ids()
            .map(|city| rule.residents_for_degree(graph.degree(city)))
            .collect();
        let population = Self::from_sizes(&sizes)?;
        debug!(
            "populated {} cities with {} people",
            population.cities.len(),
            population.people.count
        );
        Ok(population)
    }

    #[inline]
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    #[inline]
    pub fn agent_count(&self) -> usize {
        self.people.count
    }

    // ── Relocation ────────────────────────────────────────────────────────

    /// Move `agent` into the present roster of `to`.  Moving a person to the
    /// city it is already in is a no-op.
    ///
    /// # Panics
    /// Panics if `agent` or `to` is out of range.
    pub fn relocate(&mut self, agent: AgentId, to: CityId) {
        let i = agent.index();
        let from = self.people.current[i];
        if from == to {
            return;
        }

        let slot = self.people.slot[i] as usize;
        let roster = &mut self.cities[from.index()].present;
        debug_assert_eq!(roster[slot], agent);
        roster.swap_remove(slot);
        if let Some(&moved) = roster.get(slot) {
            self.people.slot[moved.index()] = slot as u32;
        }

        let dest = &mut self.cities[to.index()].present;
        self.people.slot[i] = dest.len() as u32;
        dest.push(agent);
        self.people.current[i] = to;
    }

    /// Apply a set of moves decided beforehand.  Each agent should appear at
    /// most once; a repeated agent simply ends up at its last destination.
    pub fn relocate_batch(&mut self, moves: &[(AgentId, CityId)]) {
        for &(agent, to) in moves {
            self.relocate(agent, to);
        }
    }

    /// Moves sending home everyone who has been away for `trip_limit` days
    /// or more.  Ordered by `AgentId`.
    pub fn collect_returns(&self, trip_limit: u32) -> Vec<(AgentId, CityId)> {
        let people = &self.people;
        people
            .agent_ids()
            .filter(|&a| people.is_away(a) && people.days_away[a.index()] >= trip_limit)
            .map(|a| (a, people.home[a.index()]))
            .collect()
    }

    // ── Epidemic steps ────────────────────────────────────────────────────

    /// Force-infect `count` distinct residents of `city`, chosen uniformly.
    /// Each seed counts towards the city's cumulative infections.
    pub fn seed_infections(
        &mut self,
        city:  CityId,
        count: u32,
        rng:   &mut SimRng,
    ) -> PopulationResult<Vec<AgentId>> {
        let target = self
            .cities
            .get_mut(city.index())
            .ok_or(PopulationError::Core(EpiError::CityNotFound(city)))?;
        let requested = count as usize;
        if requested > target.residents.len() {
            return Err(PopulationError::NotEnoughResidents {
                city,
                residents: target.residents.len(),
                requested,
            });
        }

        let mut seeded = Vec::with_capacity(requested);
        for idx in rng.sample_indices(target.residents.len(), requested) {
            let agent = target.residents[idx];
            if self.people.infect(agent) {
                target.cumulative_infected += 1;
                seeded.push(agent);
            }
        }
        target.recount_infected(&self.people);
        Ok(seeded)
    }

    /// Transmission in every city, in `CityId` order.  Returns the new
    /// infections per city.
    pub fn internal_infection(&mut self, params: &ContactParams, rng: &mut SimRng) -> Vec<u64> {
        let people = &mut self.people;
        self.cities
            .iter_mut()
            .map(|city| city.internal_infection(people, params, rng))
            .collect()
    }

    /// Progress every person's health by one day and update their
    /// days-away counters.  Returns the number of people who healed.
    ///
    /// Forced returns must already have been applied, so the days-away
    /// counters see each person's final location for the day.
    pub fn advance_people(&mut self, ceiling: u32, healing: &HealingPolicy, rng: &mut SimRng) -> u64 {
        let people = &mut self.people;
        let mut healed = 0u64;
        for i in 0..people.count {
            if people.health[i].advance(ceiling, healing, rng) {
                healed += 1;
            }
            if people.current[i] != people.home[i] {
                people.days_away[i] += 1;
            } else {
                people.days_away[i] = 0;
            }
        }
        healed
    }

    /// Recompute every city's current-infected counter.  Returns the total.
    pub fn recount_infected(&mut self) -> u64 {
        let people = &self.people;
        self.cities.iter_mut().map(|c| c.recount_infected(people)).sum()
    }

    pub fn health_totals(&self) -> HealthTotals {
        let mut totals = HealthTotals::default();
        for state in &self.people.health {
            if state.is_susceptible() {
                totals.susceptible += 1;
            } else if state.is_infected() {
                totals.infected += 1;
            } else {
                totals.immune += 1;
            }
        }
        totals
    }

    // ── Invariants ────────────────────────────────────────────────────────

    /// Verify that every person sits in exactly one present roster, at the
    /// city and slot it records.
    ///
    /// Each roster entry must point back at its own position, and each
    /// person's recorded position must hold that person.  Together they
    /// rule out a person listed twice or missing.
    pub fn check_consistency(&self) -> PopulationResult<()> {
        for city in &self.cities {
            for (slot, &agent) in city.present.iter().enumerate() {
                let i = agent.index();
                let recorded_city = self.people.current.get(i).copied();
                let recorded_slot = self.people.slot.get(i).map(|&s| s as usize);
                if recorded_city != Some(city.id) || recorded_slot != Some(slot) {
                    return Err(PopulationError::RosterMismatch {
                        agent,
                        city: city.id,
                        slot,
                        recorded_city: recorded_city.unwrap_or(CityId::INVALID),
                        recorded_slot: recorded_slot.unwrap_or(usize::MAX),
                    });
                }
            }
        }
        for agent in self.people.agent_ids() {
            let i = agent.index();
            let recorded_city = self.people.current[i];
            let recorded_slot = self.people.slot[i] as usize;
            let listed = self
                .cities
                .get(recorded_city.index())
                .and_then(|c| c.present.get(recorded_slot));
            if listed != Some(&agent) {
                return Err(PopulationError::Missing { agent, recorded_city, recorded_slot });
            }
        }
        Ok(())
    }
}
