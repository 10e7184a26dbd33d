//! Backbone link discovery between junctions.
//!
//! Two junctions are linked when a backbone bond joins a binding site of
//! one to a binding site of the other on the same chain. Every member of a
//! junction looks along its chain in both directions; the scan depth
//! depends on the [`LinkMode`].

use std::collections::{BTreeMap, HashMap};

use log::{debug, warn};

use super::config::LinkMode;
use super::metric::Metric;
use crate::model::junction::{Junction, Link};
use crate::model::site::{BindingSite, SiteKey};

/// Owning junction and coordinates of every binding site in a snapshot.
#[derive(Debug, Clone, Default)]
pub struct SiteIndex {
    entries: HashMap<SiteKey, SiteEntry>,
}

#[derive(Debug, Clone, Copy)]
struct SiteEntry {
    junction: Option<usize>,
    coords: [f64; 3],
}

impl SiteIndex {
    /// Indexes site coordinates and junction membership.
    ///
    /// Duplicate site keys keep their first occurrence.
    pub fn build(sites: &[BindingSite], junctions: &[Junction]) -> Self {
        let mut entries: HashMap<SiteKey, SiteEntry> = HashMap::with_capacity(sites.len());

        for site in sites {
            if entries.contains_key(&site.key) {
                warn!(
                    "binding site {} appears more than once, keeping the first occurrence",
                    site.key
                );
                continue;
            }
            entries.insert(
                site.key,
                SiteEntry {
                    junction: None,
                    coords: site.coords,
                },
            );
        }

        for junction in junctions {
            for key in &junction.members {
                match entries.get_mut(key) {
                    Some(entry) => entry.junction = Some(junction.id),
                    None => warn!(
                        "junction {} lists site {} that is missing from the snapshot",
                        junction.id, key
                    ),
                }
            }
        }

        Self { entries }
    }

    pub fn junction_of(&self, key: &SiteKey) -> Option<usize> {
        self.entries.get(key).and_then(|e| e.junction)
    }

    pub fn coords_of(&self, key: &SiteKey) -> Option<[f64; 3]> {
        self.entries.get(key).map(|e| e.coords)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Backward,
    Forward,
}

impl Direction {
    /// Next position along the chain, `None` past either terminus.
    fn step(self, position: usize, chain_length: usize) -> Option<usize> {
        match self {
            Direction::Backward => position.checked_sub(1),
            Direction::Forward => {
                let next = position + 1;
                (next < chain_length).then_some(next)
            }
        }
    }
}

/// Fills the `neighbors` list of every junction.
pub fn resolve_links(
    junctions: &mut [Junction],
    sites: &[BindingSite],
    chain_length: usize,
    metric: &Metric,
    mode: LinkMode,
) {
    let index = SiteIndex::build(sites, junctions);
    let mut total = 0usize;

    for junction in junctions.iter_mut() {
        let mut found: Vec<(usize, f64)> = Vec::new();

        for member in &junction.members {
            for direction in [Direction::Backward, Direction::Forward] {
                let target = match mode {
                    LinkMode::Immediate | LinkMode::Linear => {
                        adjacent_target(&index, junction.id, *member, direction, chain_length)
                    }
                    LinkMode::FarLinear => {
                        far_target(&index, junction.id, *member, direction, chain_length)
                    }
                };

                let Some((other, target_key)) = target else {
                    continue;
                };

                match (index.coords_of(member), index.coords_of(&target_key)) {
                    (Some(p0), Some(p1)) => found.push((other, metric.distance(p0, p1))),
                    _ => warn!(
                        "no coordinates for backbone bond {} - {}, link omitted",
                        member, target_key
                    ),
                }
            }
        }

        junction.neighbors = aggregate(found);
        total += junction.neighbors.len();
    }

    debug!(
        "resolved {} junction links ({} mode, chain length {})",
        total, mode, chain_length
    );
}

/// Looks only at the immediate backbone neighbor of `member`.
fn adjacent_target(
    index: &SiteIndex,
    junction: usize,
    member: SiteKey,
    direction: Direction,
    chain_length: usize,
) -> Option<(usize, SiteKey)> {
    let position = direction.step(member.position, chain_length)?;
    let key = member.with_position(position);

    match index.junction_of(&key) {
        Some(owner) if owner == junction => None,
        Some(owner) => Some((owner, key)),
        None => {
            warn!(
                "backbone neighbor {} of {} belongs to no junction, link omitted",
                key, member
            );
            None
        }
    }
}

/// Walks outward past sites of the same junction until another junction
/// is reached. Positions missing from the snapshot are stepped over.
fn far_target(
    index: &SiteIndex,
    junction: usize,
    member: SiteKey,
    direction: Direction,
    chain_length: usize,
) -> Option<(usize, SiteKey)> {
    let mut position = member.position;

    while let Some(next) = direction.step(position, chain_length) {
        position = next;
        let key = member.with_position(position);
        match index.junction_of(&key) {
            Some(owner) if owner == junction => continue,
            Some(owner) => return Some((owner, key)),
            None => debug!("skipping missing backbone site {}", key),
        }
    }

    None
}

/// Collapses raw links into one entry per neighbor: the multiplicity counts
/// the raw links, the distance keeps the shortest one.
fn aggregate(found: Vec<(usize, f64)>) -> Vec<Link> {
    let mut by_neighbor: BTreeMap<usize, (f64, usize)> = BTreeMap::new();

    for (other, distance) in found {
        by_neighbor
            .entry(other)
            .and_modify(|(d, count)| {
                *d = d.min(distance);
                *count += 1;
            })
            .or_insert((distance, 1));
    }

    by_neighbor
        .into_iter()
        .map(|(other, (distance, multiplicity))| Link::new(other, distance, multiplicity))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::config::Boundary;

    const EPS: f64 = 1e-12;

    /// One chain of `len` sites spaced 1.0 apart along x.
    fn chain(chain: usize, len: usize, y: f64, first_id: usize) -> Vec<BindingSite> {
        (0..len)
            .map(|p| BindingSite::new(first_id + p, chain, p, [1.0 + p as f64, y, 1.0]))
            .collect()
    }

    fn junction(id: usize, keys: &[(usize, usize)]) -> Junction {
        let members = keys.iter().map(|&(c, p)| SiteKey::new(c, p)).collect();
        Junction::new(id, [0.0; 3], members)
    }

    fn metric() -> Metric {
        Metric::new(Boundary::NonPeriodic, 100.0)
    }

    #[test]
    fn immediate_links_along_a_chain() {
        let sites = chain(0, 3, 0.0, 0);
        let mut junctions = vec![
            junction(0, &[(0, 0)]),
            junction(1, &[(0, 1)]),
            junction(2, &[(0, 2)]),
        ];
        resolve_links(&mut junctions, &sites, 3, &metric(), LinkMode::Immediate);

        assert_eq!(junctions[0].neighbors, vec![Link::new(1, 1.0, 1)]);
        assert_eq!(
            junctions[1].neighbors,
            vec![Link::new(0, 1.0, 1), Link::new(2, 1.0, 1)]
        );
        assert_eq!(junctions[2].neighbors, vec![Link::new(1, 1.0, 1)]);
    }

    #[test]
    fn no_self_links_inside_a_junction() {
        let sites = chain(0, 3, 0.0, 0);
        let mut junctions = vec![junction(0, &[(0, 0), (0, 1)]), junction(1, &[(0, 2)])];
        resolve_links(&mut junctions, &sites, 3, &metric(), LinkMode::Linear);

        assert_eq!(junctions[0].neighbors, vec![Link::new(1, 1.0, 1)]);
        assert_eq!(junctions[1].neighbors, vec![Link::new(0, 1.0, 1)]);
    }

    #[test]
    fn parallel_chains_raise_multiplicity() {
        let mut sites = chain(0, 2, 0.0, 0);
        let mut second = chain(1, 2, 0.5, 2);
        second[1].coords = [2.0, 2.5, 1.0];
        sites.append(&mut second);

        let mut junctions = vec![
            junction(0, &[(0, 0), (1, 0)]),
            junction(1, &[(0, 1), (1, 1)]),
        ];
        resolve_links(&mut junctions, &sites, 2, &metric(), LinkMode::Linear);

        assert_eq!(junctions[0].neighbors.len(), 1);
        let link = &junctions[0].neighbors[0];
        assert_eq!(link.junction, 1);
        assert_eq!(link.multiplicity, 2);
        assert!((link.distance - 1.0).abs() < EPS);
    }

    #[test]
    fn linear_stops_at_own_junction() {
        // Chain 0: positions 0,1 in junction 0, position 2 in junction 1,
        // position 3 back in junction 0.
        let sites = chain(0, 4, 0.0, 0);
        let mut junctions = vec![junction(0, &[(0, 0), (0, 1), (0, 3)]), junction(1, &[(0, 2)])];
        resolve_links(&mut junctions, &sites, 4, &metric(), LinkMode::Linear);

        assert_eq!(junctions[0].neighbors, vec![Link::new(1, 1.0, 2)]);
        assert_eq!(junctions[1].neighbors, vec![Link::new(0, 1.0, 2)]);
    }

    #[test]
    fn far_linear_walks_past_own_sites() {
        let sites = chain(0, 4, 0.0, 0);
        let mut junctions = vec![junction(0, &[(0, 0), (0, 1), (0, 2)]), junction(1, &[(0, 3)])];

        let mut linear = junctions.clone();
        resolve_links(&mut linear, &sites, 4, &metric(), LinkMode::Linear);
        assert_eq!(linear[0].neighbors, vec![Link::new(1, 1.0, 1)]);

        resolve_links(&mut junctions, &sites, 4, &metric(), LinkMode::FarLinear);
        // Every member of junction 0 reaches junction 1 walking forward.
        assert_eq!(junctions[0].neighbors, vec![Link::new(1, 1.0, 3)]);
        assert_eq!(junctions[1].neighbors, vec![Link::new(0, 1.0, 1)]);
    }

    #[test]
    fn far_linear_reaching_terminus_records_nothing() {
        let sites = chain(0, 3, 0.0, 0);
        let mut junctions = vec![junction(0, &[(0, 0), (0, 1), (0, 2)])];
        resolve_links(&mut junctions, &sites, 3, &metric(), LinkMode::FarLinear);
        assert!(junctions[0].neighbors.is_empty());
    }

    #[test]
    fn far_linear_skips_missing_positions() {
        let mut sites = chain(0, 4, 0.0, 0);
        sites.remove(2);
        let mut junctions = vec![junction(0, &[(0, 0), (0, 1)]), junction(1, &[(0, 3)])];
        resolve_links(&mut junctions, &sites, 4, &metric(), LinkMode::FarLinear);

        assert_eq!(junctions[0].neighbors.len(), 1);
        assert_eq!(junctions[0].neighbors[0].junction, 1);
        assert!((junctions[0].neighbors[0].distance - 2.0).abs() < EPS);
    }

    #[test]
    fn missing_adjacent_site_is_omitted() {
        let mut sites = chain(0, 3, 0.0, 0);
        sites.remove(1);
        let mut junctions = vec![junction(0, &[(0, 0)]), junction(1, &[(0, 2)])];
        resolve_links(&mut junctions, &sites, 3, &metric(), LinkMode::Linear);

        assert!(junctions[0].neighbors.is_empty());
        assert!(junctions[1].neighbors.is_empty());
    }

    #[test]
    fn periodic_link_distance_uses_minimum_image() {
        let sites = vec![
            BindingSite::new(0, 0, 0, [0.2, 5.0, 5.0]),
            BindingSite::new(1, 0, 1, [9.6, 5.0, 5.0]),
        ];
        let mut junctions = vec![junction(0, &[(0, 0)]), junction(1, &[(0, 1)])];
        resolve_links(&mut junctions, &sites, 2, &Metric::periodic(10.0), LinkMode::Linear);

        assert!((junctions[0].neighbors[0].distance - 0.6).abs() < 1e-9);
    }

    #[test]
    fn site_index_lookups() {
        let sites = chain(3, 2, 0.0, 0);
        let junctions = vec![junction(0, &[(3, 0), (3, 1)])];
        let index = SiteIndex::build(&sites, &junctions);

        assert_eq!(index.len(), 2);
        assert_eq!(index.junction_of(&SiteKey::new(3, 1)), Some(0));
        assert_eq!(index.junction_of(&SiteKey::new(4, 0)), None);
        assert_eq!(index.coords_of(&SiteKey::new(3, 1)), Some([2.0, 0.0, 1.0]));
    }

    #[test]
    fn neighbors_sorted_by_id() {
        let sites = chain(0, 3, 0.0, 0);
        let mut junctions = vec![
            junction(0, &[(0, 1)]),
            junction(1, &[(0, 2)]),
            junction(2, &[(0, 0)]),
        ];
        resolve_links(&mut junctions, &sites, 3, &metric(), LinkMode::Linear);

        assert_eq!(junctions[0].neighbor_ids(), vec![1, 2]);
    }
}
