//! Fixed-radius neighbor search over the binding sites of a snapshot.

use log::debug;

use super::metric::Metric;
use super::spatial::SpatialGrid;
use crate::model::site::{BindingSite, SiteKey};

/// Below this many sites a full pairwise scan is cheaper than building a grid.
const GRID_MIN_SITES: usize = 64;

/// A site found within the search radius of another one.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    pub distance: f64,
    /// Index of the neighbor in the searched slice.
    pub site: usize,
    /// Identifier of the neighbor point.
    pub id: usize,
    pub key: SiteKey,
}

/// Per-site neighbor lists, indexed like the searched slice of sites.
///
/// Each list is sorted by ascending distance, ties broken by ascending
/// point id, and never contains the site itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NeighborTable {
    lists: Vec<Vec<Neighbor>>,
}

impl NeighborTable {
    #[inline]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Neighbors of the site at slice index `site`.
    pub fn get(&self, site: usize) -> &[Neighbor] {
        self.lists.get(site).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Neighbor])> {
        self.lists.iter().enumerate().map(|(i, l)| (i, l.as_slice()))
    }

    /// Number of unordered close pairs.
    pub fn pair_count(&self) -> usize {
        self.lists.iter().map(Vec::len).sum::<usize>() / 2
    }
}

/// Finds, for every site, all other sites strictly closer than `radius`.
///
/// A cell list is used when it is guaranteed to return exactly the pairs of
/// the full pairwise scan; otherwise every pair is measured.
pub fn neighbor_search(sites: &[BindingSite], radius: f64, metric: &Metric) -> NeighborTable {
    let positions: Vec<[f64; 3]> = sites.iter().map(|s| s.coords).collect();

    let grid = if sites.len() >= GRID_MIN_SITES && radius > 0.0 {
        build_grid(&positions, radius, metric)
    } else {
        None
    };

    let table = match grid {
        Some(grid) => grid_search(sites, &positions, &grid, radius, metric),
        None => brute_force_search(sites, radius, metric),
    };

    debug!(
        "neighbor search: {} sites, {} close pairs (radius {})",
        table.len(),
        table.pair_count(),
        radius
    );

    table
}

fn build_grid(positions: &[[f64; 3]], radius: f64, metric: &Metric) -> Option<SpatialGrid> {
    if metric.boundary.is_periodic() {
        SpatialGrid::periodic_from_positions(positions, metric.box_size, radius)
    } else {
        Some(SpatialGrid::from_positions(positions, radius))
    }
}

/// Reference search: upper-triangular scan over every pair.
pub fn brute_force_search(sites: &[BindingSite], radius: f64, metric: &Metric) -> NeighborTable {
    let n = sites.len();
    let mut lists: Vec<Vec<Neighbor>> = vec![Vec::new(); n];

    for i in 0..n {
        for j in (i + 1)..n {
            let d = metric.distance(sites[i].coords, sites[j].coords);
            if d < radius {
                push_pair(&mut lists, sites, i, j, d);
            }
        }
    }

    finish(lists)
}

fn grid_search(
    sites: &[BindingSite],
    positions: &[[f64; 3]],
    grid: &SpatialGrid,
    radius: f64,
    metric: &Metric,
) -> NeighborTable {
    let mut lists: Vec<Vec<Neighbor>> = vec![Vec::new(); sites.len()];

    for (i, pos) in positions.iter().enumerate() {
        for j in grid.candidates(*pos) {
            if j <= i {
                continue;
            }
            let d = metric.distance(*pos, positions[j]);
            if d < radius {
                push_pair(&mut lists, sites, i, j, d);
            }
        }
    }

    finish(lists)
}

fn push_pair(lists: &mut [Vec<Neighbor>], sites: &[BindingSite], i: usize, j: usize, d: f64) {
    lists[i].push(Neighbor {
        distance: d,
        site: j,
        id: sites[j].id,
        key: sites[j].key,
    });
    lists[j].push(Neighbor {
        distance: d,
        site: i,
        id: sites[i].id,
        key: sites[i].key,
    });
}

fn finish(mut lists: Vec<Vec<Neighbor>>) -> NeighborTable {
    for list in &mut lists {
        list.sort_by(|a, b| a.distance.total_cmp(&b.distance).then(a.id.cmp(&b.id)));
    }
    NeighborTable { lists }
}
