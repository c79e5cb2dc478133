//! Seeded random graph generators. Every generator takes its RNG explicitly.

use std::collections::{BTreeMap, BTreeSet};

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::parser::Instance;
use crate::VertexId;

/// Seeded RNG, or one seeded from system entropy when no seed is given
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => {
            let seed: u64 = rand::thread_rng().gen();
            StdRng::seed_from_u64(seed)
        }
    }
}

/// Vertices 0..n with the given edges, inserted in both directions
fn build(n: usize, edges: BTreeSet<(VertexId, VertexId)>) -> Instance {
    let mut adjacency: BTreeMap<VertexId, BTreeSet<VertexId>> = BTreeMap::new();
    for (u, v) in edges {
        adjacency.entry(u).or_default().insert(v);
        adjacency.entry(v).or_default().insert(u);
    }
    Instance {
        adjacency,
        vertices: (0..n).collect(),
    }
}

/// Random graph on vertices 0..n, each pair joined independently with `edge_probability`
pub fn random_graph<R: Rng>(n: usize, edge_probability: f64, rng: &mut R) -> Instance {
    let mut edges = BTreeSet::new();
    for u in 0..n {
        for v in u + 1..n {
            if rng.gen::<f64>() < edge_probability {
                edges.insert((u, v));
            }
        }
    }
    build(n, edges)
}

/// Connected graph on vertices 0..n with min(m, n(n-1)/2) edges.
///
/// A random spanning tree comes first (vertex i hangs off a uniform parent
/// below it), then uniformly random extra edges are added.
pub fn connected_graph<R: Rng>(n: usize, m: usize, rng: &mut R) -> Instance {
    let mut edges = BTreeSet::new();
    for i in 1..n {
        let parent = rng.gen_range(0..i);
        edges.insert((parent, i));
    }

    let max_edges = n * n.saturating_sub(1) / 2;
    let target = m.max(edges.len()).min(max_edges);
    while edges.len() < target {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            edges.insert((u.min(v), u.max(v)));
        }
    }
    build(n, edges)
}
