use std::collections::{HashMap, HashSet};

use crate::model::junction::Junction;

/// One parallel edge between two junctions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    /// Total number of parallel edges between `source` and `target`.
    pub links: usize,
}

/// Edges spanned by junction links, one entry per parallel edge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    pub edges: Vec<Edge>,
}

impl EdgeList {
    /// Collects the edges of `junctions`.
    ///
    /// Each unordered pair is taken once, from the first junction (in slice
    /// order) that lists it, and repeated `multiplicity` times. Links to
    /// junctions outside the slice are dropped. With `include_small` unset,
    /// small non-bridge junctions and every edge touching them are dropped
    /// as well.
    pub fn from_junctions(junctions: &[Junction], include_small: bool) -> Self {
        let kept: HashMap<usize, &Junction> = junctions
            .iter()
            .filter(|j| include_small || !j.is_dangling())
            .map(|j| (j.id, j))
            .collect();

        let mut seen: HashSet<(usize, usize)> = HashSet::new();
        let mut edges = Vec::new();

        for junction in junctions {
            if !kept.contains_key(&junction.id) {
                continue;
            }
            for link in &junction.neighbors {
                if link.junction == junction.id || !kept.contains_key(&link.junction) {
                    continue;
                }
                let pair = (
                    junction.id.min(link.junction),
                    junction.id.max(link.junction),
                );
                if !seen.insert(pair) {
                    continue;
                }
                let edge = Edge {
                    source: junction.id,
                    target: link.junction,
                    links: link.multiplicity,
                };
                edges.extend(std::iter::repeat_n(edge, link.multiplicity));
            }
        }

        Self { edges }
    }

    /// Number of parallel edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// `(source, target)` endpoint pairs, one per parallel edge.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().map(|e| (e.source, e.target))
    }
}
