//! Snapshot-based travel planning and batch application.

use log::{trace, warn};

use epi_core::{AgentId, CityId, SimRng};
use epi_population::Population;
use epi_topology::DistanceTable;

use crate::{expected_travelers, TravelError, TravelKernel, TravelResult};

/// Moves chosen for one travel phase.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TravelPlan {
    /// `(agent, destination)`, grouped by origin in `CityId` order.
    pub moves: Vec<(AgentId, CityId)>,

    /// Origins whose demand exceeded their roster and was scaled down.
    pub clamped_origins: usize,
}

impl TravelPlan {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Plans and applies the daily travel phase.
///
/// # Type parameter
///
/// `K` is the travel kernel, usually [`ExponentialDecay`][crate::ExponentialDecay].
pub struct TravelRouter<K: TravelKernel> {
    pub kernel: K,

    distances: DistanceTable,

    /// `fractions[d]` = `kernel.fraction(d)` for every finite distance `d`
    /// in the table, with `fractions[0] = 0`.
    fractions: Vec<f64>,
}

impl<K: TravelKernel> TravelRouter<K> {
    /// Wrap `kernel` and the run's distance table.  The kernel is evaluated
    /// once per distinct distance and rejected if it leaves `[0, 1]`.
    pub fn new(kernel: K, distances: DistanceTable) -> TravelResult<Self> {
        let diameter = distances.diameter();
        let mut fractions = Vec::with_capacity(diameter as usize + 1);
        fractions.push(0.0);
        for distance in 1..=diameter {
            let fraction = kernel.fraction(distance);
            if !(0.0..=1.0).contains(&fraction) {
                return Err(TravelError::InvalidFraction { distance, fraction });
            }
            fractions.push(fraction);
        }
        Ok(Self { kernel, distances, fractions })
    }

    /// Choose today's travellers from the rosters as they stand now.
    /// Nothing is moved.
    pub fn plan(&self, population: &Population, rng: &mut SimRng) -> TravelResult<TravelPlan> {
        let city_count = population.city_count();
        if city_count != self.distances.city_count() {
            return Err(TravelError::TableMismatch {
                table:  self.distances.city_count(),
                cities: city_count,
            });
        }

        let mut plan = TravelPlan::default();
        let mut quotas: Vec<(CityId, usize)> = Vec::new();

        for origin in &population.cities {
            let roster = &origin.present;
            if roster.is_empty() {
                continue;
            }

            quotas.clear();
            for (dest, &hops) in self.distances.row(origin.id).iter().enumerate() {
                let Some(&fraction) = self.fractions.get(hops as usize) else {
                    continue;
                };
                let quota = expected_travelers(fraction, roster.len());
                if quota > 0 {
                    quotas.push((CityId(dest as u32), quota));
                }
            }

            let demand: usize = quotas.iter().map(|&(_, q)| q).sum();
            if demand > roster.len() {
                warn!(
                    "travel demand {} from {} exceeds its {} present; scaling quotas down",
                    demand,
                    origin.id,
                    roster.len()
                );
                for (_, quota) in quotas.iter_mut() {
                    *quota = (*quota as u64 * roster.len() as u64 / demand as u64) as usize;
                }
                plan.clamped_origins += 1;
            }

            let total: usize = quotas.iter().map(|&(_, q)| q).sum();
            let mut picks = rng.sample_indices(roster.len(), total).into_iter();
            for &(dest, quota) in &quotas {
                for idx in picks.by_ref().take(quota) {
                    plan.moves.push((roster[idx], dest));
                }
            }
        }

        Ok(plan)
    }

    /// Plan and apply one travel phase.  Returns the plan that was applied.
    pub fn travel(&self, population: &mut Population, rng: &mut SimRng) -> TravelResult<TravelPlan> {
        let plan = self.plan(population, rng)?;
        population.relocate_batch(&plan.moves);
        trace!("travel: {} moves, {} clamped origins", plan.len(), plan.clamped_origins);
        Ok(plan)
    }
}
