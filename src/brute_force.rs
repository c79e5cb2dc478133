//! Exhaustive reference solver used to confirm optimality on small graphs.

use itertools::Itertools;

use crate::probe::subset_indices;
use crate::{Cover, Graph, Mask};

/// Smallest vertex cover found by trying every combination of k vertices for k = 0, 1, …
///
/// The first cover found for the smallest k is returned, so the result is deterministic.
pub fn minimum_cover(graph: &Graph) -> Cover {
    let n = graph.num_vertices();
    // k = n always succeeds, the full vertex set covers everything
    let mask = (0..=n)
        .find_map(|k| {
            (0..n)
                .combinations(k)
                .map(|indices| indices.iter().fold(0 as Mask, |mask, &i| mask | (1 << i)))
                .find(|&mask| graph.covers_mask(mask))
        })
        .unwrap_or_else(|| graph.full_mask());
    Cover::from_vertices(subset_indices(mask).map(|i| graph.label(i)).collect())
}

pub fn minimum_cover_size(graph: &Graph) -> usize {
    minimum_cover(graph).size()
}

/// Whether `cover` is a vertex cover and no cover with fewer vertices exists
pub fn is_minimum_cover(graph: &Graph, cover: &Cover) -> bool {
    graph.is_vertex_cover(cover.vertices()) && cover.size() == minimum_cover_size(graph)
}
