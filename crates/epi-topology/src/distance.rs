//! All-pairs hop distances.
//!
//! One breadth-first search per source city over the unweighted
//! [`CityGraph`], stored as a dense `n × n` row-major table of `u16`.  The
//! table is computed once per run and is read-only afterwards.
//!
//! Memory is `2 n²` bytes: ~80 KB for the default 200-city topology, ~4 MB
//! at three iterations.

use std::collections::VecDeque;

use epi_core::CityId;

use crate::{CityGraph, TopologyError, TopologyResult};

/// Stored value for pairs with no connecting path.
const UNREACHABLE: u16 = u16::MAX;

/// Symmetric all-pairs shortest-path lengths (hop counts).
#[derive(Clone, Debug)]
pub struct DistanceTable {
    city_count: usize,
    hops:       Vec<u16>,
}

impl DistanceTable {
    /// Run a BFS from every city.  O(V · (V + E)).
    pub fn compute(graph: &CityGraph) -> Self {
        let n = graph.city_count();
        let mut hops = vec![UNREACHABLE; n * n];
        let mut queue = VecDeque::with_capacity(n);

        for source in graph.city_ids() {
            let row = &mut hops[source.index() * n..(source.index() + 1) * n];
            row[source.index()] = 0;
            queue.clear();
            queue.push_back(source);

            while let Some(city) = queue.pop_front() {
                let next = row[city.index()].saturating_add(1);
                for &neighbor in graph.neighbors(city) {
                    if row[neighbor.index()] == UNREACHABLE {
                        row[neighbor.index()] = next;
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        Self { city_count: n, hops }
    }

    pub fn city_count(&self) -> usize {
        self.city_count
    }

    /// Hop count between `a` and `b`; `None` if no path joins them.
    ///
    /// # Panics
    /// Panics if either city is outside the table.
    #[inline]
    pub fn distance(&self, a: CityId, b: CityId) -> Option<u32> {
        match self.hops[a.index() * self.city_count + b.index()] {
            UNREACHABLE => None,
            d => Some(d as u32),
        }
    }

    /// Checked variant of [`distance`](Self::distance).
    pub fn try_distance(&self, a: CityId, b: CityId) -> TopologyResult<Option<u32>> {
        for city in [a, b] {
            if city.index() >= self.city_count {
                return Err(TopologyError::CityNotFound(city));
            }
        }
        Ok(self.distance(a, b))
    }

    /// The row of distances from `origin` to every city, `u16::MAX` marking
    /// unreachable cities.
    #[inline]
    pub fn row(&self, origin: CityId) -> &[u16] {
        &self.hops[origin.index() * self.city_count..(origin.index() + 1) * self.city_count]
    }

    /// `true` if every pair of cities is joined by a path.
    pub fn is_connected(&self) -> bool {
        !self.hops.contains(&UNREACHABLE)
    }

    /// Largest finite distance, or 0 for graphs of fewer than two cities.
    pub fn diameter(&self) -> u32 {
        self.hops
            .iter()
            .filter(|&&d| d != UNREACHABLE)
            .max()
            .copied()
            .unwrap_or(0) as u32
    }
}
