//! Recover one optimal cover set by walking the DP backpointers.

use std::collections::BTreeSet;

use tracing::debug;

use crate::dp::DpTable;
use crate::{Cover, CoverError, CoverResult, Graph};

/// Walk backpointers from the full vertex set down to an edge-free subset,
/// collecting every removed vertex.
///
/// The result is checked before it is returned: it must contain exactly
/// `min_cover_size(full)` vertices and cover every edge of `graph`.
pub fn reconstruct(graph: &Graph, table: &DpTable) -> CoverResult<Cover> {
    let full = graph.full_mask();
    if table.full_mask() != full {
        return Err(CoverError::InvalidCover(format!(
            "table covers {} vertices, graph has {}",
            table.vertex_count(),
            graph.num_vertices()
        )));
    }

    let mut vertices = BTreeSet::new();
    let mut current = full;
    while current != 0 {
        let (Some(removed), Some(parent)) =
            (table.entry(current).removed(), table.parent(current))
        else {
            break;
        };
        vertices.insert(graph.label(removed));
        current = parent;
    }

    let expected = table.min_cover_size(full);
    if vertices.len() != expected {
        return Err(CoverError::InvalidCover(format!(
            "collected {} vertices, optimum is {}",
            vertices.len(),
            expected
        )));
    }
    let cover = Cover::from_vertices(vertices);
    if !graph.is_vertex_cover(cover.vertices()) {
        return Err(CoverError::InvalidCover(format!(
            "{:?} leaves an edge uncovered",
            cover.vertices()
        )));
    }

    debug!(size = cover.size(), "cover reconstructed");
    Ok(cover)
}
