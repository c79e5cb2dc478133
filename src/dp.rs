//! Dynamic programming over all vertex subsets.
//!
//! `size[S]` is the minimum vertex cover size of the subgraph induced by `S`.
//! For an edge-free `S` it is 0. Otherwise pick the canonical edge (u, v) of `S`:
//!
//! ```text
//! size[S] = 1 + min(size[S \ {u}], size[S \ {v}])
//! ```
//!
//! Both children are numerically smaller than `S`, so filling the table in
//! increasing mask order always finds them computed.

use tracing::{debug, trace};

use crate::probe::{find_any_edge, has_edges};
use crate::{CoverError, CoverResult, Graph, Mask, MAX_VERTICES};

/// Optimum of one subset. The parent subset is implied: it is the mask with
/// `removed` cleared, so only the vertex index is stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DpEntry {
    /// Minimum cover size of the induced subgraph, at most `MAX_VERTICES`
    pub size: u8,
    /// Vertex index removed to reach the parent, `None` for edge-free subsets
    pub removed: Option<u8>,
}

impl DpEntry {
    pub fn removed(&self) -> Option<usize> {
        self.removed.map(usize::from)
    }

    /// Subset this entry's optimum was derived from, given the entry's own mask
    pub fn parent(&self, mask: Mask) -> Option<Mask> {
        self.removed.map(|removed| mask & !(1 << removed))
    }
}

/// Dense table with one entry per subset mask in [0, 2^n)
#[derive(Debug, Clone)]
pub struct DpTable {
    vertex_count: usize,
    entries: Vec<DpEntry>,
}

impl DpTable {
    /// Fill the table for every subset of the graph's vertices.
    pub fn build(graph: &Graph) -> CoverResult<Self> {
        let n = graph.num_vertices();
        if n > MAX_VERTICES {
            return Err(CoverError::TooManyVertices {
                vertices: n,
                max: MAX_VERTICES,
            });
        }
        let len = 1usize << n;
        debug!(vertices = n, entries = len, "building subset DP table");

        let mut entries = Vec::new();
        entries
            .try_reserve_exact(len)
            .map_err(|source| CoverError::TableAllocation {
                entries: len,
                source,
            })?;
        entries.push(DpEntry::default());

        for mask in 1..len as Mask {
            let entry = if has_edges(graph, mask) {
                Self::branch(graph, &entries, mask)?
            } else {
                DpEntry::default()
            };
            entries.push(entry);
        }

        trace!(size = entries[len - 1].size, "DP table complete");
        Ok(DpTable {
            vertex_count: n,
            entries,
        })
    }

    /// Resolve a mask with at least one edge from its two already computed children.
    fn branch(graph: &Graph, entries: &[DpEntry], mask: Mask) -> CoverResult<DpEntry> {
        let (u, v) = find_any_edge(graph, mask)?;
        let without_u = mask & !(1 << u);
        let without_v = mask & !(1 << v);
        let size_without_u = entries[without_u as usize].size;
        let size_without_v = entries[without_v as usize].size;

        // Ties remove the first endpoint
        let (size, removed) = if size_without_u <= size_without_v {
            (size_without_u, u)
        } else {
            (size_without_v, v)
        };
        Ok(DpEntry {
            size: size + 1,
            // n <= MAX_VERTICES, so vertex indices fit in a byte
            removed: Some(removed as u8),
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of entries, always 2^n
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn full_mask(&self) -> Mask {
        (self.entries.len() - 1) as Mask
    }

    pub fn entry(&self, mask: Mask) -> &DpEntry {
        &self.entries[mask as usize]
    }

    pub fn min_cover_size(&self, mask: Mask) -> usize {
        usize::from(self.entry(mask).size)
    }

    /// Subset reached from `mask` by removing its recorded vertex
    pub fn parent(&self, mask: Mask) -> Option<Mask> {
        self.entry(mask).parent(mask)
    }
}
