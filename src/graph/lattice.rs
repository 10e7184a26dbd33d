//! Synthetic cubic droplets with known clustering averages.
//!
//! A droplet is a `side × side × side` block of unit-spaced lattice points,
//! each linked to every other point within a fixed distance. Two link rules
//! have closed-form average clustering coefficients, which makes droplets a
//! convenient reference for the whole graph stage.

use std::fmt;

use crate::model::junction::{Junction, Link};
use crate::network::metric::euclidean_distance;

use super::clustering::average_clustering;
use super::edges::EdgeList;
use super::multigraph::MultiGraph;

/// Neighborhood rule of a lattice droplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    /// Axis neighbors and square diagonals (distances 1 and √2).
    SquareDiagonal,
    /// Axis neighbors, square diagonals and cube diagonals (up to √3).
    CubeDiagonal,
}

impl Connectivity {
    /// Largest link distance of the rule, with slack above the last shell.
    pub fn max_dist(self) -> f64 {
        match self {
            Connectivity::SquareDiagonal => 1.5,
            Connectivity::CubeDiagonal => 1.8,
        }
    }

    /// Closed-form average clustering of a droplet of `side`.
    pub fn analytic_average(self, side: usize) -> f64 {
        match self {
            Connectivity::SquareDiagonal => square_diagonal_average(side),
            Connectivity::CubeDiagonal => cube_diagonal_average(side),
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connectivity::SquareDiagonal => f.write_str("square-diagonal"),
            Connectivity::CubeDiagonal => f.write_str("cube-diagonal"),
        }
    }
}

/// Lattice points and their neighbor lists.
#[derive(Debug, Clone)]
pub struct Droplet {
    pub side: usize,
    pub max_dist: f64,
    pub points: Vec<[f64; 3]>,
    /// Neighbor indices of each point, ascending.
    pub neighbors: Vec<Vec<usize>>,
}

impl Droplet {
    /// Builds a droplet linking points with `0 < d <= max_dist`.
    ///
    /// Points are numbered with `z` varying fastest.
    pub fn new(side: usize, max_dist: f64) -> Self {
        let mut points = Vec::with_capacity(side * side * side);
        for i in 0..side {
            for j in 0..side {
                for k in 0..side {
                    points.push([i as f64, j as f64, k as f64]);
                }
            }
        }

        let neighbors = points
            .iter()
            .map(|&p| {
                points
                    .iter()
                    .enumerate()
                    .filter(|&(_, &q)| {
                        let d = euclidean_distance(p, q);
                        d > 0.0 && d <= max_dist
                    })
                    .map(|(idx, _)| idx)
                    .collect()
            })
            .collect();

        Self {
            side,
            max_dist,
            points,
            neighbors,
        }
    }

    pub fn with_connectivity(side: usize, connectivity: Connectivity) -> Self {
        Self::new(side, connectivity.max_dist())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// One junction per lattice point, every link carrying `multiplicity`.
    pub fn junctions(&self, multiplicity: usize) -> Vec<Junction> {
        self.points
            .iter()
            .zip(&self.neighbors)
            .enumerate()
            .map(|(id, (&p, neighbors))| {
                let mut junction = Junction::new(id, p, Vec::new());
                junction.neighbors = neighbors
                    .iter()
                    .map(|&n| Link::new(n, euclidean_distance(p, self.points[n]), multiplicity))
                    .collect();
                junction
            })
            .collect()
    }

    pub fn edge_list(&self, multiplicity: usize) -> EdgeList {
        EdgeList::from_junctions(&self.junctions(multiplicity), true)
    }

    pub fn graph(&self, multiplicity: usize) -> MultiGraph {
        MultiGraph::from_edge_list(&self.edge_list(multiplicity))
    }

    /// Average clustering of the droplet's simple graph.
    pub fn average_clustering(&self) -> f64 {
        average_clustering(&self.graph(1))
    }
}

/// Average clustering of a droplet whose points are linked along axes and
/// square diagonals.
pub fn square_diagonal_average(side: usize) -> f64 {
    shell_average(side, [4.0 / 5.0, 7.0 / 12.0, 6.0 / 13.0, 20.0 / 51.0])
}

/// Average clustering of a droplet whose points are linked along axes,
/// square diagonals and cube diagonals.
pub fn cube_diagonal_average(side: usize) -> f64 {
    shell_average(side, [1.0, 39.0 / 55.0, 9.0 / 17.0, 132.0 / 325.0])
}

/// Weights per-point coefficients by how many vertex, edge, facet and core
/// points a droplet of `side` has.
fn shell_average(side: usize, [vertex, edge, facet, core]: [f64; 4]) -> f64 {
    if side < 2 {
        return 0.0;
    }
    let s = side as f64;
    let inner = s - 2.0;
    let total = 8.0 * vertex
        + 12.0 * inner * edge
        + 6.0 * inner * inner * facet
        + inner * inner * inner * core;
    total / (s * s * s)
}
