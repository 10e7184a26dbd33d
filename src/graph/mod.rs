//! Graph views of a junction network and their clustering metrics.
//!
//! - [`EdgeList`] – Flat list of parallel edges derived from junction links.
//! - [`MultiGraph`] – Adjacency with parallel-edge counts, built from an edge list.
//! - [`clustering_coefficients`] / [`average_clustering`] – Multigraph
//!   clustering coefficient, equal to the classical one on simple graphs.
//! - [`lattice`] – Synthetic cubic droplets with closed-form clustering
//!   averages.

mod clustering;
mod edges;
pub mod lattice;
mod multigraph;

pub use clustering::{average_clustering, clustering_coefficients};
pub use edges::{Edge, EdgeList};
pub use multigraph::MultiGraph;
