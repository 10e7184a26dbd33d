use super::multigraph::MultiGraph;

/// Multigraph clustering coefficient of every node, in node order.
///
/// `C_i = (A^3)_ii / max(k_i (k_i - 1), 1)` where `A` counts parallel edges
/// and `k_i` is the number of distinct neighbors of `i`. On a simple graph
/// this is the classical clustering coefficient.
pub fn clustering_coefficients(graph: &MultiGraph) -> Vec<f64> {
    (0..graph.node_count())
        .map(|i| {
            let k = graph.distinct_degree(i);
            closed_walks(graph, i) as f64 / (k * k.saturating_sub(1)).max(1) as f64
        })
        .collect()
}

/// Mean clustering coefficient over all nodes, 0 for an empty graph.
pub fn average_clustering(graph: &MultiGraph) -> f64 {
    let coefficients = clustering_coefficients(graph);
    if coefficients.is_empty() {
        return 0.0;
    }
    coefficients.iter().sum::<f64>() / coefficients.len() as f64
}

/// `(A^3)_ii`: closed walks of length three through node `i`, weighted by
/// the edge counts along the walk.
fn closed_walks(graph: &MultiGraph, i: usize) -> usize {
    let row_i = graph.row(i);
    let mut total = 0usize;
    for (&j, &a_ij) in row_i {
        for (&k, &a_jk) in graph.row(j) {
            if let Some(&a_ki) = row_i.get(&k) {
                total += a_ij * a_jk * a_ki;
            }
        }
    }
    total
}
