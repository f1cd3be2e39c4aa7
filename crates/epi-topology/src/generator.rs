//! Topology generation.
//!
//! # Hub repulsion
//!
//! [`HubRepulsion`] grows a fractal, scale-free-like network from a small
//! star.  Each iteration:
//!
//! 1. **Growth**: every existing city `v` gains `m * deg(v)` new leaf
//!    cities, with `deg(v)` measured before the growth step.  Hubs grow
//!    fastest.
//! 2. **Rewiring**: every link `(u, w)` that existed before the growth step
//!    survives with probability `p`.  Otherwise it is removed and replaced by
//!    a link between a random neighbour of `u` and a random neighbour of `w`
//!    (new leaves included).  Old hubs thereby lose their direct links to
//!    each other, which is what makes the structure fractal.
//!
//! If `u` or `w` has no neighbour left once the link is removed, the link
//! is restored.  A replacement pair that coincides or is already linked adds
//! nothing.  Either way `u` and `w` stay joined through `u–x–y–w` (or
//! `u–x–w`), so every iteration preserves connectivity.

use log::trace;
use rustc_hash::FxHashSet;

use epi_core::{CityId, HubParams, SimRng};

use crate::{CityGraph, CityGraphBuilder, TopologyError, TopologyResult};

// ── TopologyGenerator trait ───────────────────────────────────────────────────

/// Pluggable city-network generator.
///
/// Implementations must assign `CityId`s densely from 0 in a stable order so
/// that population sizing by degree is reproducible for a given seed.
pub trait TopologyGenerator {
    fn generate(&self, rng: &mut SimRng) -> TopologyResult<CityGraph>;
}

// ── HubRepulsion ──────────────────────────────────────────────────────────────

/// The hub-repulsion fractal growth model.
#[derive(Clone, Debug)]
pub struct HubRepulsion {
    pub params: HubParams,
}

impl HubRepulsion {
    pub fn new(params: HubParams) -> Self {
        Self { params }
    }
}

impl TopologyGenerator for HubRepulsion {
    fn generate(&self, rng: &mut SimRng) -> TopologyResult<CityGraph> {
        self.params.validate()?;
        let params = &self.params;

        let mut g = WorkGraph::star(params.initial_leaves);

        for iteration in 0..params.iterations {
            let old_links = g.sorted_links();
            let old_degrees: Vec<usize> = g.adj.iter().map(Vec::len).collect();

            // Growth: 2 * links * m new leaves in total.
            let new_leaves = 2 * old_links.len() as u64 * params.branching as u64;
            let requested = g.adj.len() as u64 + new_leaves;
            let max = (params.max_cities as u64).min(u32::MAX as u64 - 1);
            if requested > max {
                return Err(TopologyError::TooLarge { requested, max });
            }
            g.adj.reserve(new_leaves as usize);

            for (v, &degree) in old_degrees.iter().enumerate() {
                for _ in 0..params.branching as usize * degree {
                    let leaf = g.add_node();
                    g.link(v as u32, leaf);
                }
            }

            // Rewiring of the pre-growth links.
            let mut rewired  = 0usize;
            let mut restored = 0usize;
            for (u, w) in old_links {
                if rng.gen_bool(params.keep_prob) {
                    continue;
                }
                g.unlink(u, w);
                let x = rng.choose(&g.adj[u as usize]).copied();
                let y = rng.choose(&g.adj[w as usize]).copied();
                match (x, y) {
                    (Some(x), Some(y)) => {
                        if x != y {
                            g.link(x, y);
                        }
                        rewired += 1;
                    }
                    _ => {
                        g.link(u, w);
                        restored += 1;
                    }
                }
            }

            trace!(
                "hub iteration {}: {} cities, {} links ({} rewired, {} restored)",
                iteration + 1,
                g.adj.len(),
                g.links.len(),
                rewired,
                restored,
            );
        }

        Ok(g.into_city_graph())
    }
}

// ── Mutable working graph ─────────────────────────────────────────────────────

/// Adjacency lists plus a normalised link set for O(1) membership checks.
///
/// Adjacency lists keep insertion order; removal preserves the order of the
/// remaining neighbours so random neighbour picks stay reproducible.
struct WorkGraph {
    adj:   Vec<Vec<u32>>,
    links: FxHashSet<(u32, u32)>,
}

impl WorkGraph {
    fn star(leaves: u32) -> Self {
        let mut g = WorkGraph { adj: vec![Vec::new()], links: FxHashSet::default() };
        for _ in 0..leaves {
            let leaf = g.add_node();
            g.link(0, leaf);
        }
        g
    }

    fn add_node(&mut self) -> u32 {
        self.adj.push(Vec::new());
        (self.adj.len() - 1) as u32
    }

    #[inline]
    fn key(a: u32, b: u32) -> (u32, u32) {
        if a < b { (a, b) } else { (b, a) }
    }

    /// Add the link `a–b` unless it already exists.
    fn link(&mut self, a: u32, b: u32) {
        if self.links.insert(Self::key(a, b)) {
            self.adj[a as usize].push(b);
            self.adj[b as usize].push(a);
        }
    }

    fn unlink(&mut self, a: u32, b: u32) {
        if self.links.remove(&Self::key(a, b)) {
            self.adj[a as usize].retain(|&n| n != b);
            self.adj[b as usize].retain(|&n| n != a);
        }
    }

    fn sorted_links(&self) -> Vec<(u32, u32)> {
        let mut links: Vec<(u32, u32)> = self.links.iter().copied().collect();
        links.sort_unstable();
        links
    }

    fn into_city_graph(self) -> CityGraph {
        let mut b = CityGraphBuilder::with_capacity(self.links.len());
        b.add_cities(self.adj.len() as u32);
        for (a, c) in self.sorted_links() {
            b.add_link(CityId(a), CityId(c));
        }
        b.build()
    }
}
