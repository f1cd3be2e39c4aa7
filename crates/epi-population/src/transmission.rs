//! Within-city transmission.
//!
//! Contacts are well mixed: every infectious person present in a city draws
//! its contacts uniformly from that city's present roster.  There is no
//! contact graph.

use epi_core::{AgentId, ContactSampling, EpiConfig, SimRng};

use crate::{City, PersonStore};

/// Per-day contact parameters, resolved once from [`EpiConfig`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactParams {
    pub avg_contacts:   u32,
    pub infection_prob: f64,
    pub sampling:       ContactSampling,
}

impl From<&EpiConfig> for ContactParams {
    fn from(config: &EpiConfig) -> Self {
        Self {
            avg_contacts:   config.avg_contacts,
            infection_prob: config.infection_prob,
            sampling:       config.contact_sampling,
        }
    }
}

impl City {
    /// Run one day of transmission inside this city and return the number of
    /// new infections.
    ///
    /// The infectious set is fixed before any contact is drawn, so people
    /// infected today start transmitting tomorrow.  Contact indices are drawn
    /// from `0..present.len()`; an empty roster or zero contacts is a no-op.
    pub fn internal_infection(
        &mut self,
        people: &mut PersonStore,
        params: &ContactParams,
        rng:    &mut SimRng,
    ) -> u64 {
        let roster_len = self.present.len();
        if roster_len == 0 || params.avg_contacts == 0 {
            return 0;
        }

        let infectious: Vec<AgentId> = self
            .present
            .iter()
            .copied()
            .filter(|a| people.health[a.index()].is_infected())
            .collect();

        let mut new_infections = 0u64;
        for _ in &infectious {
            match params.sampling {
                ContactSampling::WithReplacement => {
                    for _ in 0..params.avg_contacts {
                        let contact = self.present[rng.gen_range(0..roster_len)];
                        new_infections += expose(people, contact, params.infection_prob, rng) as u64;
                    }
                }
                ContactSampling::Distinct => {
                    for idx in rng.sample_indices(roster_len, params.avg_contacts as usize) {
                        let contact = self.present[idx];
                        new_infections += expose(people, contact, params.infection_prob, rng) as u64;
                    }
                }
            }
        }

        self.cumulative_infected += new_infections;
        new_infections
    }
}

/// One contact: a susceptible person is infected with probability `prob`.
#[inline]
fn expose(people: &mut PersonStore, contact: AgentId, prob: f64, rng: &mut SimRng) -> bool {
    people.health[contact.index()].is_susceptible() && rng.gen_bool(prob) && people.infect(contact)
}
