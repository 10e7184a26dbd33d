//! Connected components of the junction graph.

use std::collections::HashMap;

use log::debug;

use crate::model::junction::Junction;

/// Slice position of every junction id. The first junction wins when an id
/// repeats.
pub fn index_by_id(junctions: &[Junction]) -> HashMap<usize, usize> {
    let mut index = HashMap::with_capacity(junctions.len());
    for (i, junction) in junctions.iter().enumerate() {
        index.entry(junction.id).or_insert(i);
    }
    index
}

/// Symmetrised adjacency of the junction link lists, by slice position.
///
/// A link recorded on only one side still connects both junctions.
/// Links pointing to ids absent from the slice are ignored.
pub fn adjacency(junctions: &[Junction]) -> Vec<Vec<usize>> {
    let index = index_by_id(junctions);
    let mut adj: Vec<Vec<usize>> = vec![Vec::new(); junctions.len()];

    for (i, junction) in junctions.iter().enumerate() {
        for link in &junction.neighbors {
            let Some(&other) = index.get(&link.junction) else {
                continue;
            };
            if other == i {
                continue;
            }
            adj[i].push(other);
            adj[other].push(i);
        }
    }

    for list in &mut adj {
        list.sort_unstable();
        list.dedup();
    }
    adj
}

/// Assigns a connected-component id to every junction and returns the
/// number of components.
///
/// Links are resolved by junction id, so the slice may hold any subset of a
/// network. The first unassigned junction in slice order seeds each
/// component, so ids follow discovery order.
pub fn label_components(junctions: &mut [Junction]) -> usize {
    let adj = adjacency(junctions);
    let mut labels: Vec<Option<usize>> = vec![None; junctions.len()];
    let mut count = 0usize;
    let mut worklist: Vec<usize> = Vec::new();

    for seed in 0..junctions.len() {
        if labels[seed].is_some() {
            continue;
        }
        labels[seed] = Some(count);
        worklist.push(seed);

        while let Some(current) = worklist.pop() {
            for &next in &adj[current] {
                if labels[next].is_none() {
                    labels[next] = Some(count);
                    worklist.push(next);
                }
            }
        }
        count += 1;
    }

    for (junction, label) in junctions.iter_mut().zip(labels) {
        junction.component = label;
    }

    debug!(
        "labeled {} connected components over {} junctions",
        count,
        junctions.len()
    );
    count
}

/// Junction count per component id.
pub fn component_sizes(junctions: &[Junction]) -> Vec<usize> {
    let mut sizes: Vec<usize> = Vec::new();
    for component in junctions.iter().filter_map(|j| j.component) {
        if component >= sizes.len() {
            sizes.resize(component + 1, 0);
        }
        sizes[component] += 1;
    }
    sizes
}

/// The component holding more than half of the junctions, or failing that
/// the largest one. Ties go to the lowest component id.
pub fn main_component(junctions: &[Junction]) -> Option<usize> {
    let sizes = component_sizes(junctions);
    let total = junctions.len();

    if let Some(majority) = sizes.iter().position(|&s| 2 * s > total) {
        return Some(majority);
    }

    sizes
        .iter()
        .enumerate()
        .filter(|(_, s)| **s > 0)
        .max_by(|(ia, a), (ib, b)| a.cmp(b).then(ib.cmp(ia)))
        .map(|(id, _)| id)
}
