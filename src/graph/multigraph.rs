use std::collections::BTreeMap;

use super::edges::EdgeList;

/// Undirected graph with parallel-edge counts.
///
/// Nodes are stored compactly in ascending label order; only labels that
/// appear in at least one edge become nodes. Self loops are dropped, so the
/// adjacency diagonal is always zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiGraph {
    labels: Vec<usize>,
    index: BTreeMap<usize, usize>,
    adjacency: Vec<BTreeMap<usize, usize>>,
}

impl MultiGraph {
    /// Builds a graph from `(source, target)` pairs, one pair per parallel
    /// edge.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let edges: Vec<(usize, usize)> = edges.into_iter().filter(|(a, b)| a != b).collect();

        let mut labels: Vec<usize> = edges.iter().flat_map(|&(a, b)| [a, b]).collect();
        labels.sort_unstable();
        labels.dedup();

        let index: BTreeMap<usize, usize> = labels
            .iter()
            .enumerate()
            .map(|(i, &label)| (label, i))
            .collect();

        let mut adjacency: Vec<BTreeMap<usize, usize>> = vec![BTreeMap::new(); labels.len()];
        for (a, b) in edges {
            let (ia, ib) = (index[&a], index[&b]);
            *adjacency[ia].entry(ib).or_insert(0) += 1;
            *adjacency[ib].entry(ia).or_insert(0) += 1;
        }

        Self {
            labels,
            index,
            adjacency,
        }
    }

    pub fn from_edge_list(list: &EdgeList) -> Self {
        Self::from_edges(list.pairs())
    }

    /// The same graph with every parallel bundle collapsed to one edge.
    pub fn simple(&self) -> Self {
        let adjacency = self
            .adjacency
            .iter()
            .map(|row| row.keys().map(|&k| (k, 1)).collect())
            .collect();
        Self {
            labels: self.labels.clone(),
            index: self.index.clone(),
            adjacency,
        }
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Total number of edges, parallel edges counted individually.
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .map(|row| row.values().sum::<usize>())
            .sum::<usize>()
            / 2
    }

    /// Original labels, in node order.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn node_of(&self, label: usize) -> Option<usize> {
        self.index.get(&label).copied()
    }

    /// Number of parallel edges between two labels.
    pub fn multiplicity(&self, a: usize, b: usize) -> usize {
        match (self.node_of(a), self.node_of(b)) {
            (Some(ia), Some(ib)) => self.adjacency[ia].get(&ib).copied().unwrap_or(0),
            _ => 0,
        }
    }

    /// Neighbors of node `i` (compact index) with their edge counts.
    pub(crate) fn row(&self, i: usize) -> &BTreeMap<usize, usize> {
        &self.adjacency[i]
    }

    /// Number of distinct neighbors of node `i` (compact index).
    #[inline]
    pub fn distinct_degree(&self, i: usize) -> usize {
        self.adjacency[i].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_are_relabelled_compactly() {
        let g = MultiGraph::from_edges([(10, 4), (4, 7), (10, 4)]);
        assert_eq!(g.labels(), &[4, 7, 10]);
        assert_eq!(g.node_of(10), Some(2));
        assert_eq!(g.node_of(5), None);
        assert_eq!(g.multiplicity(4, 10), 2);
        assert_eq!(g.multiplicity(10, 4), 2);
        assert_eq!(g.multiplicity(7, 10), 0);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn self_loops_are_dropped() {
        let g = MultiGraph::from_edges([(1, 1), (1, 2)]);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.multiplicity(1, 1), 0);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn simple_collapses_parallel_edges() {
        let g = MultiGraph::from_edges([(0, 1), (0, 1), (0, 1), (1, 2)]);
        let s = g.simple();
        assert_eq!(s.multiplicity(0, 1), 1);
        assert_eq!(s.edge_count(), 2);
        assert_eq!(s.distinct_degree(1), g.distinct_degree(1));
    }

    #[test]
    fn empty_graph() {
        let g = MultiGraph::from_edges(std::iter::empty());
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
    }
}
