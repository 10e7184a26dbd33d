//! Merging of close binding sites into junctions.

use log::debug;

use super::neighbors::NeighborTable;
use crate::model::junction::Junction;
use crate::model::site::{BindingSite, SiteKey};

/// Disjoint-set forest with union by rank and path compression.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Joins the sets containing `a` and `b`; returns `false` if they
    /// already were the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        if self.rank[root_a] < self.rank[root_b] {
            self.parent[root_a] = root_b;
        } else if self.rank[root_a] > self.rank[root_b] {
            self.parent[root_b] = root_a;
        } else {
            self.parent[root_b] = root_a;
            self.rank[root_a] = self.rank[root_a].saturating_add(1);
        }
        true
    }
}

/// Groups sites into junctions through the transitive closure of the
/// neighbor relation.
///
/// Junction ids are dense and ordered by the first site, in source order,
/// that belongs to each junction. A site without close neighbors forms a
/// junction of its own.
pub fn merge_sites(sites: &[BindingSite], neighbors: &NeighborTable) -> Vec<Junction> {
    let n = sites.len();
    let mut sets = DisjointSet::new(n);

    for (i, list) in neighbors.iter() {
        for neighbor in list {
            if neighbor.site < n {
                sets.union(i, neighbor.site);
            }
        }
    }

    let mut label_of_root: Vec<Option<usize>> = vec![None; n];
    let mut groups: Vec<Vec<usize>> = Vec::new();

    for i in 0..n {
        let root = sets.find(i);
        let label = match label_of_root[root] {
            Some(label) => label,
            None => {
                let label = groups.len();
                label_of_root[root] = Some(label);
                groups.push(Vec::new());
                label
            }
        };
        groups[label].push(i);
    }

    let junctions: Vec<Junction> = groups
        .iter()
        .enumerate()
        .map(|(id, members)| build_junction(id, sites, members))
        .collect();

    debug!(
        "merged {} binding sites into {} junctions",
        n,
        junctions.len()
    );

    junctions
}

fn build_junction(id: usize, sites: &[BindingSite], members: &[usize]) -> Junction {
    let mut sum = [0.0; 3];
    for &i in members {
        for (acc, c) in sum.iter_mut().zip(sites[i].coords) {
            *acc += c;
        }
    }
    let count = members.len().max(1) as f64;
    let centroid = [sum[0] / count, sum[1] / count, sum[2] / count];

    let keys: Vec<SiteKey> = members.iter().map(|&i| sites[i].key).collect();
    Junction::new(id, centroid, keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::metric::Metric;
    use crate::network::neighbors::neighbor_search;

    fn site(id: usize, chain: usize, position: usize, coords: [f64; 3]) -> BindingSite {
        BindingSite::new(id, chain, position, coords)
    }

    fn merge(sites: &[BindingSite], radius: f64) -> Vec<Junction> {
        let table = neighbor_search(sites, radius, &Metric::periodic(20.0));
        merge_sites(sites, &table)
    }

    #[test]
    fn disjoint_set_unions() {
        let mut sets = DisjointSet::new(5);
        assert!(sets.union(0, 1));
        assert!(sets.union(3, 4));
        assert!(!sets.union(1, 0));
        assert!(sets.union(1, 4));
        assert_eq!(sets.find(0), sets.find(3));
        assert_ne!(sets.find(2), sets.find(0));
    }

    #[test]
    fn empty_input_yields_no_junctions() {
        assert!(merge(&[], 1.0).is_empty());
    }

    #[test]
    fn isolated_sites_stay_single() {
        let sites = vec![
            site(0, 0, 0, [1.0, 1.0, 1.0]),
            site(1, 0, 1, [5.0, 1.0, 1.0]),
        ];
        let junctions = merge(&sites, 1.0);
        assert_eq!(junctions.len(), 2);
        assert!(junctions.iter().all(|j| j.mass == 1));
        assert_eq!(junctions[0].centroid, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn merging_is_transitive() {
        // A-B and B-C are within radius, A-C is not.
        let sites = vec![
            site(0, 0, 0, [2.0, 2.0, 2.0]),
            site(1, 5, 3, [8.0, 8.0, 8.0]),
            site(2, 1, 0, [2.9, 2.0, 2.0]),
            site(3, 2, 0, [3.8, 2.0, 2.0]),
        ];
        let junctions = merge(&sites, 1.0);

        assert_eq!(junctions.len(), 2);
        let big = &junctions[0];
        assert_eq!(big.mass, 3);
        assert!(big.contains(&SiteKey::new(0, 0)));
        assert!(big.contains(&SiteKey::new(1, 0)));
        assert!(big.contains(&SiteKey::new(2, 0)));
        assert!((big.centroid[0] - 2.9).abs() < 1e-12);
        assert_eq!(junctions[1].members, vec![SiteKey::new(5, 3)]);
    }

    #[test]
    fn discovery_order_does_not_change_partition() {
        let forward = vec![
            site(0, 0, 0, [1.0, 1.0, 1.0]),
            site(1, 1, 0, [1.8, 1.0, 1.0]),
            site(2, 2, 0, [2.6, 1.0, 1.0]),
            site(3, 3, 0, [3.4, 1.0, 1.0]),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let a = merge(&forward, 1.0);
        let b = merge(&reversed, 1.0);
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
        assert_eq!(a[0].members, b[0].members);
    }

    #[test]
    fn every_site_in_exactly_one_junction() {
        let sites: Vec<BindingSite> = (0..30)
            .map(|i| {
                let x = (i % 7) as f64 * 0.8;
                let y = (i / 7) as f64 * 1.7;
                site(i, i / 6, i % 6, [x, y, 1.0])
            })
            .collect();
        let junctions = merge(&sites, 1.0);

        let mut seen: Vec<SiteKey> = junctions.iter().flat_map(|j| j.members.clone()).collect();
        assert_eq!(seen.len(), sites.len());
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), sites.len());

        let total_mass: usize = junctions.iter().map(|j| j.mass).sum();
        assert_eq!(total_mass, sites.len());
    }

    #[test]
    fn ids_follow_first_site_order() {
        let sites = vec![
            site(0, 0, 0, [10.0, 10.0, 10.0]),
            site(1, 0, 1, [1.0, 1.0, 1.0]),
            site(2, 0, 2, [10.5, 10.0, 10.0]),
        ];
        let junctions = merge(&sites, 1.0);
        assert_eq!(junctions.len(), 2);
        assert_eq!(junctions[0].id, 0);
        assert_eq!(junctions[0].mass, 2);
        assert_eq!(junctions[1].members, vec![SiteKey::new(0, 1)]);
    }
}
