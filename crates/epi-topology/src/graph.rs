//! City network representation and builder.
//!
//! # Data layout
//!
//! The undirected graph is stored in **Compressed Sparse Row (CSR)** form
//! with every link recorded in both directions.  Given a `CityId c`, its
//! neighbours occupy the slice:
//!
//! ```text
//! link_to[ city_link_start[c] .. city_link_start[c+1] ]
//! ```
//!
//! Neighbour slices are sorted by `CityId`, so iteration order (and therefore
//! anything seeded from it) is reproducible.

use epi_core::CityId;

// ── CityGraph ─────────────────────────────────────────────────────────────────

/// Undirected simple city graph in CSR format.
///
/// Do not construct directly; use [`CityGraphBuilder`] or a
/// [`TopologyGenerator`][crate::TopologyGenerator].
#[derive(Clone, Debug)]
pub struct CityGraph {
    /// CSR row pointer.  Neighbours of city `c` are at
    /// `city_link_start[c] .. city_link_start[c+1]`.  Length = `city_count + 1`.
    pub city_link_start: Vec<u32>,

    /// Destination of each directed half-link, grouped by source city.
    pub link_to: Vec<CityId>,
}

impl CityGraph {
    /// Construct a graph with no cities.
    pub fn empty() -> Self {
        CityGraphBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn city_count(&self) -> usize {
        self.city_link_start.len() - 1
    }

    /// Number of undirected links.
    pub fn link_count(&self) -> usize {
        self.link_to.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.city_count() == 0
    }

    #[inline]
    pub fn contains(&self, city: CityId) -> bool {
        city.index() < self.city_count()
    }

    /// All city ids in ascending (creation) order.
    pub fn city_ids(&self) -> impl Iterator<Item = CityId> + '_ {
        (0..self.city_count() as u32).map(CityId)
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Neighbours of `city`, sorted ascending.
    #[inline]
    pub fn neighbors(&self, city: CityId) -> &[CityId] {
        let start = self.city_link_start[city.index()] as usize;
        let end   = self.city_link_start[city.index() + 1] as usize;
        &self.link_to[start..end]
    }

    #[inline]
    pub fn degree(&self, city: CityId) -> usize {
        let start = self.city_link_start[city.index()] as usize;
        let end   = self.city_link_start[city.index() + 1] as usize;
        end - start
    }

    /// `true` if `a` and `b` share a link.
    pub fn has_link(&self, a: CityId, b: CityId) -> bool {
        self.neighbors(a).binary_search(&b).is_ok()
    }

    /// Each undirected link once, as `(low, high)` pairs in ascending order.
    pub fn links(&self) -> impl Iterator<Item = (CityId, CityId)> + '_ {
        self.city_ids().flat_map(move |a| {
            self.neighbors(a)
                .iter()
                .filter(move |&&b| a < b)
                .map(move |&b| (a, b))
        })
    }
}

// ── CityGraphBuilder ──────────────────────────────────────────────────────────

/// Construct a [`CityGraph`] incrementally, then call [`build`](Self::build).
///
/// Links may be added in any order.  `build()` drops self-links, collapses
/// duplicates, and lays out the CSR arrays.
///
/// # Example
///
/// ```
/// use epi_topology::CityGraphBuilder;
///
/// let mut b = CityGraphBuilder::new();
/// let hub = b.add_city();
/// let leaf = b.add_city();
/// b.add_link(hub, leaf);
/// let graph = b.build();
/// assert_eq!(graph.city_count(), 2);
/// assert_eq!(graph.link_count(), 1);
/// ```
#[derive(Default)]
pub struct CityGraphBuilder {
    city_count: u32,
    half_links: Vec<(CityId, CityId)>,
}

impl CityGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of links.
    pub fn with_capacity(links: usize) -> Self {
        Self { city_count: 0, half_links: Vec::with_capacity(links * 2) }
    }

    /// Add a city and return its `CityId` (sequential from 0).
    pub fn add_city(&mut self) -> CityId {
        let id = CityId(self.city_count);
        self.city_count += 1;
        id
    }

    /// Add `n` cities at once; returns the first new id.
    pub fn add_cities(&mut self, n: u32) -> CityId {
        let first = CityId(self.city_count);
        self.city_count += n;
        first
    }

    /// Add an undirected link between `a` and `b`.
    pub fn add_link(&mut self, a: CityId, b: CityId) {
        debug_assert!(a.0 < self.city_count && b.0 < self.city_count);
        self.half_links.push((a, b));
        self.half_links.push((b, a));
    }

    pub fn city_count(&self) -> usize {
        self.city_count as usize
    }

    /// Consume the builder and produce a [`CityGraph`].
    pub fn build(self) -> CityGraph {
        let city_count = self.city_count as usize;

        let mut raw = self.half_links;
        raw.retain(|(a, b)| a != b);
        raw.sort_unstable();
        raw.dedup();

        let link_to: Vec<CityId> = raw.iter().map(|&(_, to)| to).collect();

        let mut city_link_start = vec![0u32; city_count + 1];
        for &(from, _) in &raw {
            city_link_start[from.index() + 1] += 1;
        }
        for i in 1..=city_count {
            city_link_start[i] += city_link_start[i - 1];
        }
        debug_assert_eq!(city_link_start[city_count] as usize, link_to.len());

        CityGraph { city_link_start, link_to }
    }
}
