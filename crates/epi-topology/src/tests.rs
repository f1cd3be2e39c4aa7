//! Unit tests for epi-topology.
//!
//! Hand-built graphs cover the CSR layout and BFS; the generator is checked
//! for the structural properties it guarantees for any seed.

#[cfg(test)]
mod helpers {
    use epi_core::CityId;
    use crate::{CityGraph, CityGraphBuilder};

    /// Star with a center and `leaves` leaves.
    pub fn star(leaves: u32) -> CityGraph {
        let mut b = CityGraphBuilder::new();
        let center = b.add_city();
        for _ in 0..leaves {
            let leaf = b.add_city();
            b.add_link(center, leaf);
        }
        b.build()
    }

    /// Path 0 – 1 – 2 – 3 plus an isolated city 4.
    pub fn line_plus_island() -> CityGraph {
        let mut b = CityGraphBuilder::new();
        b.add_cities(5);
        b.add_link(CityId(0), CityId(1));
        b.add_link(CityId(1), CityId(2));
        b.add_link(CityId(2), CityId(3));
        b.build()
    }
}

// ── Builder & CSR structure ───────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use epi_core::CityId;
    use crate::{CityGraph, CityGraphBuilder};

    #[test]
    fn empty_build() {
        let g = CityGraph::empty();
        assert_eq!(g.city_count(), 0);
        assert_eq!(g.link_count(), 0);
        assert!(g.is_empty());
    }

    #[test]
    fn single_city_has_no_links() {
        let mut b = CityGraphBuilder::new();
        let only = b.add_city();
        let g = b.build();
        assert_eq!(g.city_count(), 1);
        assert_eq!(g.degree(only), 0);
        assert!(g.neighbors(only).is_empty());
    }

    #[test]
    fn star_degrees() {
        let g = super::helpers::star(4);
        assert_eq!(g.city_count(), 5);
        assert_eq!(g.link_count(), 4);
        assert_eq!(g.degree(CityId(0)), 4);
        for leaf in 1..5 {
            assert_eq!(g.degree(CityId(leaf)), 1);
            assert_eq!(g.neighbors(CityId(leaf)), &[CityId(0)]);
        }
    }

    #[test]
    fn duplicates_and_self_links_collapse() {
        let mut b = CityGraphBuilder::new();
        let a = b.add_city();
        let c = b.add_city();
        b.add_link(a, c);
        b.add_link(c, a);
        b.add_link(a, a);
        let g = b.build();
        assert_eq!(g.link_count(), 1);
        assert_eq!(g.degree(a), 1);
        assert!(g.has_link(a, c));
        assert!(g.has_link(c, a));
        assert!(!g.has_link(a, a));
    }

    #[test]
    fn neighbors_sorted_and_links_listed_once() {
        let mut b = CityGraphBuilder::new();
        b.add_cities(4);
        b.add_link(CityId(0), CityId(3));
        b.add_link(CityId(0), CityId(1));
        b.add_link(CityId(2), CityId(0));
        let g = b.build();
        assert_eq!(g.neighbors(CityId(0)), &[CityId(1), CityId(2), CityId(3)]);
        let links: Vec<_> = g.links().collect();
        assert_eq!(
            links,
            vec![(CityId(0), CityId(1)), (CityId(0), CityId(2)), (CityId(0), CityId(3))]
        );
    }
}

// ── Distances ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod distance {
    use epi_core::CityId;
    use crate::{DistanceTable, TopologyError};

    #[test]
    fn star_distances() {
        let t = DistanceTable::compute(&super::helpers::star(3));
        assert_eq!(t.distance(CityId(0), CityId(0)), Some(0));
        assert_eq!(t.distance(CityId(0), CityId(2)), Some(1));
        assert_eq!(t.distance(CityId(1), CityId(3)), Some(2));
        assert!(t.is_connected());
        assert_eq!(t.diameter(), 2);
    }

    #[test]
    fn symmetric() {
        let t = DistanceTable::compute(&super::helpers::line_plus_island());
        for a in 0..5 {
            for b in 0..5 {
                assert_eq!(t.distance(CityId(a), CityId(b)), t.distance(CityId(b), CityId(a)));
            }
        }
        assert_eq!(t.distance(CityId(0), CityId(3)), Some(3));
    }

    #[test]
    fn disconnected_pairs_are_none() {
        let t = DistanceTable::compute(&super::helpers::line_plus_island());
        assert_eq!(t.distance(CityId(0), CityId(4)), None);
        assert_eq!(t.distance(CityId(4), CityId(4)), Some(0));
        assert!(!t.is_connected());
        assert_eq!(t.diameter(), 3);
    }

    #[test]
    fn try_distance_out_of_range() {
        let t = DistanceTable::compute(&super::helpers::star(2));
        assert!(matches!(
            t.try_distance(CityId(0), CityId(9)),
            Err(TopologyError::CityNotFound(CityId(9)))
        ));
        assert_eq!(t.try_distance(CityId(1), CityId(2)).unwrap(), Some(2));
    }

    #[test]
    fn row_matches_distance() {
        let t = DistanceTable::compute(&super::helpers::star(3));
        let row = t.row(CityId(1));
        assert_eq!(row, &[1, 0, 2, 2]);
    }
}

// ── Hub-repulsion generator ───────────────────────────────────────────────────

#[cfg(test)]
mod generator {
    use epi_core::{CityId, HubParams, SimRng};
    use crate::{DistanceTable, HubRepulsion, TopologyError, TopologyGenerator};

    fn params(keep_prob: f64, branching: u32, iterations: u32, initial_leaves: u32) -> HubParams {
        HubParams { keep_prob, branching, iterations, initial_leaves, ..HubParams::default() }
    }

    #[test]
    fn zero_iterations_is_the_seed_star() {
        let g = HubRepulsion::new(params(0.7, 3, 0, 4))
            .generate(&mut SimRng::new(1))
            .unwrap();
        assert_eq!(g.city_count(), 5);
        assert_eq!(g.degree(CityId(0)), 4);
    }

    #[test]
    fn four_node_star_grows_connected() {
        for seed in 0..20 {
            let g = HubRepulsion::new(params(0.7, 3, 2, 3))
                .generate(&mut SimRng::new(seed))
                .unwrap();
            assert!(g.city_count() >= 5, "seed {seed}: {} cities", g.city_count());
            let t = DistanceTable::compute(&g);
            assert!(t.is_connected(), "seed {seed}: generated graph is disconnected");
        }
    }

    #[test]
    fn growth_node_count_is_exact() {
        // Growth adds 2 * links * m leaves per iteration and rewiring never
        // changes the city count.  Star(4): 4 links → 5 + 2*4*3 = 29 cities.
        let g = HubRepulsion::new(params(0.7, 3, 1, 4))
            .generate(&mut SimRng::new(3))
            .unwrap();
        assert_eq!(g.city_count(), 29);
    }

    #[test]
    fn no_isolated_cities() {
        let g = HubRepulsion::new(params(0.2, 2, 3, 4))
            .generate(&mut SimRng::new(11))
            .unwrap();
        for city in g.city_ids() {
            assert!(g.degree(city) >= 1, "{city} is isolated");
        }
    }

    #[test]
    fn same_seed_same_graph() {
        let hub = HubRepulsion::new(params(0.5, 2, 2, 4));
        let a = hub.generate(&mut SimRng::new(77)).unwrap();
        let b = hub.generate(&mut SimRng::new(77)).unwrap();
        assert_eq!(a.city_link_start, b.city_link_start);
        assert_eq!(a.link_to, b.link_to);
    }

    #[test]
    fn rejects_invalid_params() {
        let result = HubRepulsion::new(params(1.0, 3, 2, 4)).generate(&mut SimRng::new(0));
        assert!(matches!(result, Err(TopologyError::Core(_))));
    }

    #[test]
    fn growth_past_city_cap_is_an_error() {
        // p = 0.7, m = 3 from a 4-leaf star: 5, 29, 197, ~1.4k, ~9.6k, ~67k cities.
        let result = HubRepulsion::new(params(0.7, 3, 5, 4)).generate(&mut SimRng::new(0));
        match result {
            Err(TopologyError::TooLarge { requested, max }) => {
                assert_eq!(max, u64::from(epi_core::DEFAULT_MAX_CITIES));
                assert!(requested > max);
            }
            other => panic!("expected TooLarge, got {other:?}"),
        }

        let small = HubParams { max_cities: 100, ..params(0.7, 3, 2, 4) };
        assert!(matches!(
            HubRepulsion::new(small).generate(&mut SimRng::new(0)),
            Err(TopologyError::TooLarge { requested: 197, max: 100 })
        ));
    }
}
