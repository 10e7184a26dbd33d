//! Per-junction topology flags and degrees.

use log::debug;

use super::components::index_by_id;
use crate::model::junction::Junction;

/// Default mass below which a junction counts as small.
pub const DEFAULT_SMALL_THRESHOLD: usize = 3;

/// Smallest neighbor mass that still lets a mass-2 junction act as a bridge.
const BRIDGE_END_MASS: usize = 2;

/// Sets `small`, `bridge`, `degree` and `multidegree` on every junction.
///
/// A bridge has mass 2 and at least two links, and the first two linked
/// junctions (by id) have mass 2 or more. Links are resolved by junction
/// id; links to ids absent from the slice contribute nothing.
pub fn classify(junctions: &mut [Junction], small_threshold: usize) {
    let index = index_by_id(junctions);

    for junction in junctions.iter_mut() {
        junction.small = junction.mass < small_threshold;
    }

    let mass: Vec<usize> = junctions.iter().map(|j| j.mass).collect();
    let mass_of = |id: usize| index.get(&id).map(|&i| mass[i]);

    for junction in junctions.iter_mut() {
        junction.bridge = junction.mass == 2
            && junction.neighbors.len() >= 2
            && junction.neighbors[..2]
                .iter()
                .all(|l| mass_of(l.junction).is_some_and(|m| m >= BRIDGE_END_MASS));
    }

    let flags: Vec<(bool, bool)> = junctions.iter().map(|j| (j.small, j.bridge)).collect();
    let flags_of = |id: usize| index.get(&id).map(|&i| flags[i]);

    for junction in junctions.iter_mut() {
        let (degree, multidegree) = if junction.is_dangling() {
            (0, 0)
        } else if junction.small {
            (2, 2)
        } else {
            junction
                .neighbors
                .iter()
                .filter_map(|l| flags_of(l.junction).map(|f| (l, f)))
                .fold((0, 0), |(d, md), (l, (small, bridge))| match (small, bridge) {
                    (true, false) => (d, md),
                    (true, true) => (d + 1, md + 1),
                    _ => (d + 1, md + l.multiplicity),
                })
        };
        junction.degree = degree;
        junction.multidegree = multidegree;
    }

    debug!(
        "classified {} junctions: {} small, {} bridges",
        junctions.len(),
        junctions.iter().filter(|j| j.small).count(),
        junctions.iter().filter(|j| j.bridge).count()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::junction::Link;
    use crate::model::site::SiteKey;

    fn junction(id: usize, mass: usize) -> Junction {
        let members = (0..mass).map(|p| SiteKey::new(id, p)).collect();
        Junction::new(id, [0.0; 3], members)
    }

    fn link(junctions: &mut [Junction], a: usize, b: usize, multiplicity: usize) {
        junctions[a].neighbors.push(Link::new(b, 1.0, multiplicity));
        junctions[b].neighbors.push(Link::new(a, 1.0, multiplicity));
    }

    #[test]
    fn bridge_between_two_large_junctions() {
        let mut junctions = vec![junction(0, 4), junction(1, 2), junction(2, 5)];
        link(&mut junctions, 0, 1, 1);
        link(&mut junctions, 1, 2, 1);
        classify(&mut junctions, DEFAULT_SMALL_THRESHOLD);

        let j = &junctions[1];
        assert!(j.small && j.bridge);
        assert_eq!((j.degree, j.multidegree), (2, 2));
        assert_eq!((junctions[0].degree, junctions[0].multidegree), (1, 1));
        assert!(!junctions[0].small);
    }

    #[test]
    fn small_non_bridge_is_dangling() {
        let mut junctions = vec![junction(0, 4), junction(1, 1), junction(2, 2)];
        link(&mut junctions, 0, 1, 3);
        link(&mut junctions, 0, 2, 2);
        classify(&mut junctions, DEFAULT_SMALL_THRESHOLD);

        assert!(junctions[1].small && !junctions[1].bridge);
        // Only one neighbor, so mass 2 alone does not make a bridge.
        assert!(junctions[2].small && !junctions[2].bridge);
        assert_eq!((junctions[1].degree, junctions[1].multidegree), (0, 0));
        assert_eq!((junctions[2].degree, junctions[2].multidegree), (0, 0));
        assert_eq!((junctions[0].degree, junctions[0].multidegree), (0, 0));
    }

    #[test]
    fn bridge_needs_neighbors_of_mass_two() {
        let mut junctions = vec![junction(0, 4), junction(1, 2), junction(2, 1)];
        link(&mut junctions, 0, 1, 1);
        link(&mut junctions, 1, 2, 1);
        classify(&mut junctions, DEFAULT_SMALL_THRESHOLD);
        assert!(!junctions[1].bridge);
    }

    #[test]
    fn mass_two_between_mass_two_neighbors_is_a_bridge() {
        let mut junctions = vec![junction(0, 2), junction(1, 2), junction(2, 2)];
        link(&mut junctions, 0, 1, 1);
        link(&mut junctions, 1, 2, 1);
        classify(&mut junctions, DEFAULT_SMALL_THRESHOLD);

        assert!(junctions[1].small && junctions[1].bridge);
        assert_eq!((junctions[1].degree, junctions[1].multidegree), (2, 2));
        // The ends have a single link each.
        assert!(!junctions[0].bridge && !junctions[2].bridge);
    }

    #[test]
    fn three_linked_mass_two_junction_is_a_bridge() {
        let mut junctions = vec![junction(0, 2), junction(1, 5), junction(2, 4), junction(3, 6)];
        link(&mut junctions, 0, 1, 1);
        link(&mut junctions, 0, 2, 1);
        link(&mut junctions, 0, 3, 1);
        classify(&mut junctions, DEFAULT_SMALL_THRESHOLD);

        assert!(junctions[0].bridge);
        assert_eq!((junctions[3].degree, junctions[3].multidegree), (1, 1));
    }

    #[test]
    fn only_the_first_two_links_decide_a_bridge() {
        let mut junctions = vec![junction(0, 2), junction(1, 5), junction(2, 4), junction(3, 1)];
        link(&mut junctions, 0, 1, 1);
        link(&mut junctions, 0, 2, 1);
        link(&mut junctions, 0, 3, 1);
        classify(&mut junctions, DEFAULT_SMALL_THRESHOLD);
        assert!(junctions[0].bridge);

        let mut junctions = vec![junction(0, 2), junction(1, 1), junction(2, 4), junction(3, 5)];
        link(&mut junctions, 0, 1, 1);
        link(&mut junctions, 0, 2, 1);
        link(&mut junctions, 0, 3, 1);
        classify(&mut junctions, DEFAULT_SMALL_THRESHOLD);
        assert!(!junctions[0].bridge);
    }

    #[test]
    fn sparse_ids_use_the_linked_junction() {
        // Ids 10, 20, 30 as left by restricting a larger network.
        let mut junctions = vec![junction(10, 4), junction(20, 2), junction(30, 1)];
        junctions[0].neighbors.push(Link::new(20, 1.0, 1));
        junctions[1].neighbors.push(Link::new(10, 1.0, 1));
        junctions[1].neighbors.push(Link::new(30, 1.0, 1));
        junctions[2].neighbors.push(Link::new(20, 1.0, 1));
        classify(&mut junctions, DEFAULT_SMALL_THRESHOLD);

        assert!(!junctions[1].bridge);
        assert_eq!((junctions[1].degree, junctions[1].multidegree), (0, 0));
        assert_eq!((junctions[0].degree, junctions[0].multidegree), (0, 0));

        junctions[2].mass = 3;
        classify(&mut junctions, DEFAULT_SMALL_THRESHOLD);
        assert!(junctions[1].bridge);
        assert_eq!((junctions[0].degree, junctions[0].multidegree), (1, 1));
        assert_eq!((junctions[2].degree, junctions[2].multidegree), (1, 1));
    }

    #[test]
    fn multidegree_counts_multiplicity() {
        let mut junctions = vec![junction(0, 3), junction(1, 6), junction(2, 4), junction(3, 2)];
        link(&mut junctions, 0, 1, 3);
        link(&mut junctions, 0, 2, 1);
        link(&mut junctions, 3, 1, 1);
        link(&mut junctions, 3, 2, 2);
        classify(&mut junctions, DEFAULT_SMALL_THRESHOLD);

        assert_eq!((junctions[0].degree, junctions[0].multidegree), (2, 4));
        // The bridge counts once towards junction 2 despite its multiplicity.
        assert!(junctions[3].bridge);
        assert_eq!((junctions[2].degree, junctions[2].multidegree), (2, 2));
        assert_eq!((junctions[1].degree, junctions[1].multidegree), (2, 4));
    }

    #[test]
    fn small_count_is_monotonic_in_threshold() {
        let mut junctions: Vec<Junction> = (0..8).map(|i| junction(i, i % 5 + 1)).collect();
        for i in 0..7 {
            link(&mut junctions, i, i + 1, 1);
        }

        let mut previous = usize::MAX;
        for threshold in (0..=6).rev() {
            classify(&mut junctions, threshold);
            let small = junctions.iter().filter(|j| j.small).count();
            assert!(small <= previous);
            previous = small;
        }
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let mut junctions: Vec<Junction> = Vec::new();
        classify(&mut junctions, DEFAULT_SMALL_THRESHOLD);
        assert!(junctions.is_empty());
    }
}
