use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::debug;

/// External vertex label as it appears in graph files
pub type VertexId = usize;

/// Subset of vertex indices, bit i set means the vertex at index i is included
pub type Mask = u64;

/// Largest vertex count accepted by the solver. The DP table holds 2^n entries.
pub const MAX_VERTICES: usize = 32;

/// Undirected simple graph with vertices normalized to the index range [0, n)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    /// labels[i] = external identifier of the vertex at index i
    labels: Vec<VertexId>,
    /// neighbours[i] = bitmask of the indices adjacent to vertex i
    neighbours: Vec<Mask>,
}

impl Graph {
    /// Build a graph from an adjacency mapping and the vertex order to use for indexing.
    ///
    /// The adjacency must be symmetric and free of self-loops, and every vertex it
    /// mentions must appear in `vertices`. Vertices without neighbours may be left
    /// out of the mapping.
    pub fn new(
        adjacency: &BTreeMap<VertexId, BTreeSet<VertexId>>,
        vertices: &[VertexId],
    ) -> CoverResult<Self> {
        if vertices.len() > MAX_VERTICES {
            return Err(CoverError::TooManyVertices {
                vertices: vertices.len(),
                max: MAX_VERTICES,
            });
        }

        let mut index = HashMap::with_capacity(vertices.len());
        for (i, &v) in vertices.iter().enumerate() {
            if index.insert(v, i).is_some() {
                return Err(CoverError::DuplicateVertex(v));
            }
        }

        let mut neighbours = vec![0; vertices.len()];
        for (&u, adjacent) in adjacency {
            let &ui = index.get(&u).ok_or(CoverError::UnknownVertex(u))?;
            for &v in adjacent {
                if u == v {
                    return Err(CoverError::SelfLoop(u));
                }
                let &vi = index.get(&v).ok_or(CoverError::UnknownVertex(v))?;
                let symmetric = adjacency.get(&v).is_some_and(|back| back.contains(&u));
                if !symmetric {
                    return Err(CoverError::AsymmetricAdjacency { u, v });
                }
                neighbours[ui] |= 1 << vi;
            }
        }

        debug!(vertices = vertices.len(), "graph normalized");
        Ok(Graph {
            labels: vertices.to_vec(),
            neighbours,
        })
    }

    /// Build a graph from an undirected edge list. Both directions are inserted.
    pub fn from_edges(vertices: &[VertexId], edges: &[(VertexId, VertexId)]) -> CoverResult<Self> {
        let mut adjacency: BTreeMap<VertexId, BTreeSet<VertexId>> = BTreeMap::new();
        for &(u, v) in edges {
            adjacency.entry(u).or_default().insert(v);
            adjacency.entry(v).or_default().insert(u);
        }
        Graph::new(&adjacency, vertices)
    }

    pub fn num_vertices(&self) -> usize {
        self.labels.len()
    }

    /// External identifier of the vertex at `index`
    pub fn label(&self, index: usize) -> VertexId {
        self.labels[index]
    }

    pub fn labels(&self) -> &[VertexId] {
        &self.labels
    }

    pub fn index_of(&self, label: VertexId) -> Option<usize> {
        self.labels.iter().position(|&l| l == label)
    }

    pub fn neighbours(&self, index: usize) -> Mask {
        self.neighbours[index]
    }

    /// Mask containing every vertex of the graph
    pub fn full_mask(&self) -> Mask {
        (1 << self.labels.len()) - 1
    }

    /// Every edge once, as index pairs (u, v) with u < v in ascending order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.neighbours.iter().enumerate().flat_map(|(u, &adjacent)| {
            probe::subset_indices(adjacent & !((2 << u) - 1)).map(move |v| (u, v))
        })
    }

    pub fn num_edges(&self) -> usize {
        self.edges().count()
    }

    /// Whether removing the vertices in `mask` leaves no edge behind
    pub fn covers_mask(&self, mask: Mask) -> bool {
        self.neighbours
            .iter()
            .enumerate()
            .all(|(u, &adjacent)| mask & (1 << u) != 0 || adjacent & !mask == 0)
    }

    /// Whether every edge has at least one endpoint in `cover`.
    /// Labels that are not part of the graph are ignored.
    pub fn is_vertex_cover(&self, cover: &BTreeSet<VertexId>) -> bool {
        let mask = cover
            .iter()
            .filter_map(|&label| self.index_of(label))
            .fold(0, |mask, i| mask | (1 << i));
        self.covers_mask(mask)
    }
}

/// A vertex cover, stored as its external vertex identifiers in ascending order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cover {
    vertices: BTreeSet<VertexId>,
}

impl Cover {
    pub fn from_vertices(vertices: BTreeSet<VertexId>) -> Self {
        Cover { vertices }
    }

    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &BTreeSet<VertexId> {
        &self.vertices
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }

    pub fn into_vertices(self) -> BTreeSet<VertexId> {
        self.vertices
    }
}

/// Compute a minimum vertex cover with the subset DP and reconstruct one optimal set.
pub fn minimum_vertex_cover(graph: &Graph) -> CoverResult<Cover> {
    let table = dp::DpTable::build(graph)?;
    reconstruct::reconstruct(graph, &table)
}

// Module declarations
pub mod brute_force;
pub mod dp;
pub mod error;
pub mod format;
pub mod generator;
pub mod harness;
pub mod logging;
pub mod parser;
pub mod probe;
pub mod reconstruct;
pub mod suite;

pub use error::{CoverError, CoverResult};
