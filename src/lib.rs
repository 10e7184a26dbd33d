//! Junction graphs and topology metrics for coarse-grained polymer-network snapshots.
//!
//! A snapshot lists the binding sites of every chain with their positions in a
//! cubic simulation box. The pipeline merges binding sites that touch into
//! cross-link junctions, links junctions along the chain backbones and derives
//! the topology of the resulting network.
//!
//! # Features
//!
//! - **Neighbor search** — Minimum-image or Euclidean distances, with a cell
//!   list for large snapshots
//! - **Junction merging** — Transitive closure of the contact relation
//! - **Backbone links** — Immediate or far-reaching scans along each chain,
//!   aggregated into link multiplicities
//! - **Topology** — Connected components, small junctions, bridges, degree and
//!   multidegree
//! - **Clustering** — Multigraph clustering coefficient, equal to the classical
//!   one on simple graphs
//!
//! # Quick Start
//!
//! The main entry point is [`build_network`], which takes a [`Snapshot`] and a
//! [`NetworkConfig`] and produces a classified [`Network`]:
//!
//! ```
//! use polynet::{BindingSite, Boundary, NetworkConfig, Snapshot};
//! use polynet::{build_network, NetworkError};
//!
//! // Two chains of three binding sites. Their first and last sites touch.
//! let mut sites = Vec::new();
//! for chain in 0..2 {
//!     let dy = 0.4 * chain as f64;
//!     sites.push(BindingSite::new(sites.len(), chain, 0, [1.0, 1.0 + dy, 1.0]));
//!     sites.push(BindingSite::new(sites.len(), chain, 1, [4.0, 1.0 + 4.0 * dy, 1.0]));
//!     sites.push(BindingSite::new(sites.len(), chain, 2, [7.0, 1.0 + dy, 1.0]));
//! }
//! let snapshot = Snapshot::new(sites);
//!
//! let config = NetworkConfig {
//!     boundary: Boundary::NonPeriodic,
//!     ..NetworkConfig::default()
//! };
//! let network = build_network(&snapshot, &config)?;
//!
//! // Two mass-2 ends plus one singleton per chain middle.
//! assert_eq!(network.len(), 4);
//! assert_eq!(network.junctions[0].mass, 2);
//! assert_eq!(network.component_count, 1);
//!
//! // Every junction is below the default mass threshold of 3.
//! assert_eq!(network.small_count(), 4);
//! # Ok::<(), NetworkError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — Snapshot readers and junction table writers
//! - [`graph`] — Edge lists, multigraphs, clustering coefficients and lattice droplets
//! - [`build_network`] — The full junction pipeline
//!
//! # Data Types
//!
//! - [`BindingSite`] — One binding site with its `(chain, position)` key
//! - [`Snapshot`] — Binding sites of one time step and the chain length
//! - [`Junction`] — A cross-link node with its links and classification
//! - [`JunctionRecord`] — Flat, serializable junction row
//! - [`Network`] — Classified junctions of one snapshot

mod model;
mod network;

pub mod graph;
pub mod io;

pub use model::junction::{Junction, JunctionRecord, Link};
pub use model::site::{BindingSite, SiteKey};
pub use model::snapshot::Snapshot;

pub use network::{
    Boundary, DEFAULT_SMALL_THRESHOLD, DisjointSet, LinkMode, Metric, Neighbor, NeighborTable,
    Network, NetworkConfig, NetworkSummary, SiteIndex, brute_force_search, build_network,
    classify, component_sizes, label_components, main_component, merge_sites, neighbor_search,
    resolve_links,
};

pub use network::Error as NetworkError;
