use crate::{Cover, CoverError, CoverResult, Graph, VertexId, MAX_VERTICES};
use nom::{
    branch::alt,
    character::complete::{digit1, space0, space1},
    combinator::{all_consuming, map, map_res},
    sequence::{delimited, separated_pair},
    IResult,
};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Graph as read from a file: adjacency keyed by external labels plus the sorted vertex list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Instance {
    /// Symmetric adjacency, every vertex with at least one edge has an entry
    pub adjacency: BTreeMap<VertexId, BTreeSet<VertexId>>,
    /// Sorted, distinct vertex labels
    pub vertices: Vec<VertexId>,
}

impl Instance {
    /// Vertices 0..declared plus every edge endpoint. Duplicate edges collapse.
    pub fn from_edges(
        declared: usize,
        edges: impl IntoIterator<Item = (VertexId, VertexId)>,
    ) -> CoverResult<Self> {
        let mut vertices: BTreeSet<VertexId> = (0..declared).collect();
        let mut adjacency: BTreeMap<VertexId, BTreeSet<VertexId>> = BTreeMap::new();
        for (u, v) in edges {
            if u == v {
                return Err(CoverError::SelfLoop(u));
            }
            vertices.insert(u);
            vertices.insert(v);
            adjacency.entry(u).or_default().insert(v);
            adjacency.entry(v).or_default().insert(u);
        }
        Ok(Instance {
            adjacency,
            vertices: vertices.into_iter().collect(),
        })
    }

    /// Normalize into the solver's dense representation, indexed in sorted label order
    pub fn graph(&self) -> CoverResult<Graph> {
        Graph::new(&self.adjacency, &self.vertices)
    }

    /// Every edge once as (u, v) with u < v, ascending
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(&u, adjacent)| adjacent.range(u + 1..).map(move |&v| (u, v)))
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }
}

/// One meaningful line of a graph file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    Count(usize),
    Edge(VertexId, VertexId),
}

/// Parse a single unsigned integer
fn parse_usize(input: &str) -> IResult<&str, usize> {
    map_res(digit1, |s: &str| s.parse::<usize>())(input)
}

/// Parse a whole line: either "u v" or a lone integer
fn parse_line(input: &str) -> IResult<&str, Line> {
    all_consuming(delimited(
        space0,
        alt((
            map(separated_pair(parse_usize, space1, parse_usize), |(u, v)| {
                Line::Edge(u, v)
            }),
            map(parse_usize, Line::Count),
        )),
        space0,
    ))(input)
}

/// Parse a line holding a single integer
fn parse_value(input: &str) -> IResult<&str, usize> {
    all_consuming(delimited(space0, parse_usize, space0))(input)
}

/// Non-empty lines with their 1-based line numbers
fn content_lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

fn parse_error(line: usize, content: &str) -> CoverError {
    CoverError::Parse {
        line,
        content: content.to_string(),
    }
}

/// Parse a graph file.
///
/// The first non-empty line may be a vertex count `n`, registering vertices 0..n.
/// Every other line is an undirected edge "u v". Blank lines are skipped.
pub fn parse_instance(input: &str) -> CoverResult<Instance> {
    let mut declared = 0;
    let mut edges = Vec::new();

    for (position, (number, line)) in content_lines(input).enumerate() {
        let (_, parsed) = parse_line(line).map_err(|_| parse_error(number, line))?;
        match parsed {
            // Reject before registering 0..n, the solver could never take it anyway
            Line::Count(n) if position == 0 && n > MAX_VERTICES => {
                return Err(CoverError::TooManyVertices {
                    vertices: n,
                    max: MAX_VERTICES,
                })
            }
            Line::Count(n) if position == 0 => declared = n,
            Line::Count(_) => return Err(parse_error(number, line)),
            Line::Edge(u, v) => edges.push((u, v)),
        }
    }

    Instance::from_edges(declared, edges)
}

/// Parse input file containing one graph description
pub fn parse_input_file(path: &Path) -> CoverResult<Instance> {
    let content = std::fs::read_to_string(path).map_err(|e| CoverError::io(path, e))?;
    parse_instance(&content)
}

/// Parse a cover file: the size on the first line, then one vertex per line
pub fn parse_cover(input: &str) -> CoverResult<Cover> {
    let mut values = content_lines(input).map(|(number, line)| {
        parse_value(line)
            .map(|(_, value)| value)
            .map_err(|_| parse_error(number, line))
    });

    let declared = match values.next() {
        Some(size) => size?,
        None => return Err(parse_error(1, "")),
    };
    let listed = values.collect::<CoverResult<Vec<VertexId>>>()?;
    let vertices: BTreeSet<VertexId> = listed.iter().copied().collect();
    if vertices.len() != declared || listed.len() != declared {
        return Err(CoverError::CoverSizeMismatch {
            declared,
            listed: listed.len(),
        });
    }
    Ok(Cover::from_vertices(vertices))
}

pub fn read_cover_file(path: &Path) -> CoverResult<Cover> {
    let content = std::fs::read_to_string(path).map_err(|e| CoverError::io(path, e))?;
    parse_cover(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_vertex_count() {
        let instance = parse_instance("4\n0 1\n1 2\n").unwrap();
        assert_eq!(instance.vertices, vec![0, 1, 2, 3]);
        assert_eq!(instance.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);
        assert!(instance.adjacency.get(&3).is_none());
    }

    #[test]
    fn test_parse_without_vertex_count() {
        let instance = parse_instance("7 3\n\n  3 12 \r\n").unwrap();
        assert_eq!(instance.vertices, vec![3, 7, 12]);
        assert_eq!(instance.edge_count(), 2);
    }

    #[test]
    fn test_count_extended_by_edges() {
        let instance = parse_instance("2\n0 5\n").unwrap();
        assert_eq!(instance.vertices, vec![0, 1, 5]);
    }

    #[test]
    fn test_duplicate_edges_collapse() {
        let instance = parse_instance("3\n0 1\n1 0\n0\t1\n").unwrap();
        assert_eq!(instance.edge_count(), 1);
        assert_eq!(instance.graph().unwrap().num_edges(), 1);
    }

    #[test]
    fn test_empty_input() {
        let instance = parse_instance("\n\n").unwrap();
        assert!(instance.vertices.is_empty());
    }

    #[test]
    fn test_malformed_lines() {
        assert!(matches!(
            parse_instance("3\n0 x\n"),
            Err(CoverError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            parse_instance("3\n0 1 2\n"),
            Err(CoverError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            parse_instance("0 1\n4\n"),
            Err(CoverError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            parse_instance("-1 2\n"),
            Err(CoverError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            parse_instance("3\n2 2\n"),
            Err(CoverError::SelfLoop(2))
        ));
    }

    #[test]
    fn test_huge_vertex_count_fails_fast() {
        let start = std::time::Instant::now();
        assert!(matches!(
            parse_instance("4000000000\n"),
            Err(CoverError::TooManyVertices {
                vertices: 4000000000,
                max: MAX_VERTICES
            })
        ));
        assert!(matches!(
            parse_instance("20000000\n0 1\n"),
            Err(CoverError::TooManyVertices { .. })
        ));
        assert!(start.elapsed() < std::time::Duration::from_secs(1));

        let largest = parse_instance(&format!("{}\n", MAX_VERTICES)).unwrap();
        assert_eq!(largest.vertices.len(), MAX_VERTICES);
    }

    #[test]
    fn test_parse_cover() {
        let cover = parse_cover("2\n1\n4\n").unwrap();
        assert_eq!(cover.vertices(), &BTreeSet::from([1, 4]));
        assert_eq!(parse_cover("0\n").unwrap(), Cover::default());
        assert!(matches!(
            parse_cover("3\n1\n4\n"),
            Err(CoverError::CoverSizeMismatch {
                declared: 3,
                listed: 2
            })
        ));
        assert!(matches!(
            parse_cover("2\n1\n1\n"),
            Err(CoverError::CoverSizeMismatch { .. })
        ));
        assert!(parse_cover("").is_err());
    }
}
