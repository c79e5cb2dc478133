//! Edge queries on the subgraph induced by a vertex subset.

use crate::{CoverError, CoverResult, Graph, Mask};

/// Indices of the set bits of `mask`, lowest first
pub fn subset_indices(mask: Mask) -> impl Iterator<Item = usize> {
    let mut rest = mask;
    std::iter::from_fn(move || {
        if rest == 0 {
            return None;
        }
        let index = rest.trailing_zeros() as usize;
        rest &= rest - 1;
        Some(index)
    })
}

/// Canonical edge of the induced subgraph: the lowest index u with a neighbour
/// above it inside the subset, paired with the lowest such neighbour.
fn first_edge(graph: &Graph, subset: Mask) -> Option<(usize, usize)> {
    subset_indices(subset).find_map(|u| {
        let above = graph.neighbours(u) & subset & !((2 << u) - 1);
        (above != 0).then(|| (u, above.trailing_zeros() as usize))
    })
}

/// Whether the subgraph induced by `subset` contains at least one edge
pub fn has_edges(graph: &Graph, subset: Mask) -> bool {
    first_edge(graph, subset).is_some()
}

/// Return one edge (u, v), u < v, of the subgraph induced by `subset`.
///
/// The same subset always yields the same edge. Asking for an edge of an
/// edge-free subset is a caller bug and reported as [`CoverError::NoEdgeInSubset`].
pub fn find_any_edge(graph: &Graph, subset: Mask) -> CoverResult<(usize, usize)> {
    first_edge(graph, subset).ok_or(CoverError::NoEdgeInSubset { subset })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> Graph {
        // 0 - 1 - 2 - 3
        Graph::from_edges(&[0, 1, 2, 3], &[(0, 1), (1, 2), (2, 3)]).unwrap()
    }

    #[test]
    fn test_subset_indices() {
        assert_eq!(subset_indices(0).count(), 0);
        assert_eq!(subset_indices(0b1011_0100).collect::<Vec<_>>(), vec![2, 4, 5, 7]);
        assert_eq!(subset_indices(1 << 31).collect::<Vec<_>>(), vec![31]);
    }

    #[test]
    fn test_empty_subset_has_no_edges() {
        assert!(!has_edges(&path(), 0));
    }

    #[test]
    fn test_induced_edges() {
        let g = path();
        assert!(has_edges(&g, 0b0011));
        assert!(!has_edges(&g, 0b0101));
        assert!(!has_edges(&g, 0b1001));
        assert!(has_edges(&g, 0b1100));
    }

    #[test]
    fn test_find_any_edge_is_canonical() {
        let g = path();
        assert_eq!(find_any_edge(&g, 0b1111).unwrap(), (0, 1));
        assert_eq!(find_any_edge(&g, 0b1110).unwrap(), (1, 2));
        assert_eq!(find_any_edge(&g, 0b1101).unwrap(), (2, 3));
    }

    #[test]
    fn test_find_any_edge_prefers_lowest_neighbour() {
        let g = Graph::from_edges(&[0, 1, 2, 3], &[(0, 3), (0, 2), (1, 3)]).unwrap();
        assert_eq!(find_any_edge(&g, 0b1111).unwrap(), (0, 2));
        assert_eq!(find_any_edge(&g, 0b1011).unwrap(), (0, 3));
    }

    #[test]
    fn test_find_any_edge_on_edge_free_subset_fails() {
        let g = path();
        assert!(matches!(
            find_any_edge(&g, 0b0101),
            Err(CoverError::NoEdgeInSubset { subset: 0b0101 })
        ));
        assert!(matches!(
            find_any_edge(&g, 0),
            Err(CoverError::NoEdgeInSubset { subset: 0 })
        ));
    }
}
