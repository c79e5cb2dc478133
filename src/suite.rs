//! Benchmark and functional-test corpora written to disk.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use rand::{rngs::StdRng, SeedableRng};
use rayon::prelude::*;
use tracing::info;

use crate::format::write_instance;
use crate::generator::random_graph;
use crate::parser::Instance;
use crate::{CoverError, CoverResult};

/// Shape of the benchmark corpus
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteConfig {
    pub sizes: RangeInclusive<usize>,
    pub instances_per_size: usize,
    /// (first instance index, density), instance i uses the last tier starting at or below i
    pub density_tiers: Vec<(usize, f64)>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        SuiteConfig {
            sizes: 5..=24,
            instances_per_size: 10,
            density_tiers: vec![(0, 0.2), (3, 0.4), (6, 0.6)],
        }
    }
}

impl SuiteConfig {
    pub fn density(&self, instance: usize) -> f64 {
        self.density_tiers
            .iter()
            .take_while(|(first, _)| *first <= instance)
            .last()
            .map_or(0.0, |&(_, density)| density)
    }

    /// Seed of instance `instance` of size `n`, stable across runs
    pub fn seed(n: usize, instance: usize) -> u64 {
        (n * 100 + instance) as u64
    }
}

pub fn size_dir(base: &Path, n: usize) -> PathBuf {
    base.join(format!("size_{}", n))
}

/// Zero-padded 1-based file name, e.g. `instance_03.txt`
pub fn numbered(prefix: &str, id: usize) -> String {
    format!("{}_{:02}.txt", prefix, id)
}

fn create_dir(path: &Path) -> CoverResult<()> {
    std::fs::create_dir_all(path).map_err(|e| CoverError::io(path, e))
}

/// Write the benchmark corpus under `base`, returning the number of instances written.
pub fn generate_benchmark_suite(base: &Path, config: &SuiteConfig) -> CoverResult<usize> {
    create_dir(base)?;
    let sizes: Vec<usize> = config.sizes.clone().collect();

    let written = sizes
        .par_iter()
        .map(|&n| {
            let dir = size_dir(base, n);
            create_dir(&dir)?;
            for i in 0..config.instances_per_size {
                let mut rng = StdRng::seed_from_u64(SuiteConfig::seed(n, i));
                let instance = random_graph(n, config.density(i), &mut rng);
                write_instance(&dir.join(numbered("instance", i + 1)), &instance)?;
            }
            Ok(config.instances_per_size)
        })
        .collect::<CoverResult<Vec<usize>>>()?
        .into_iter()
        .sum();

    info!(
        instances = written,
        sizes = sizes.len(),
        dir = %base.display(),
        "benchmark suite generated"
    );
    Ok(written)
}

/// A fixed graph with a known shape, used for black-box checks of the solver
#[derive(Debug, Clone)]
pub struct FunctionalCase {
    pub id: usize,
    pub description: &'static str,
    pub instance: Instance,
}

/// The hand-written functional cases, in id order
pub fn functional_cases() -> CoverResult<Vec<FunctionalCase>> {
    let cases: [(usize, &[(usize, usize)], &'static str); 9] = [
        (3, &[], "Empty graph - no edges, all isolated vertices"),
        (2, &[(0, 1)], "Single edge - minimum cover is 1"),
        (3, &[(0, 1), (1, 2)], "Path graph P3 - linear structure"),
        (
            3,
            &[(0, 1), (0, 2), (1, 2)],
            "Triangle K3 - complete graph on 3 vertices",
        ),
        (
            4,
            &[(0, 1), (0, 2), (0, 3)],
            "Star graph - center vertex covers all edges",
        ),
        (4, &[(0, 1), (1, 2), (2, 3), (3, 0)], "Cycle C4 - even cycle"),
        (
            4,
            &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)],
            "Complete graph K4 - all vertices connected",
        ),
        (
            4,
            &[(0, 1), (2, 3)],
            "Disconnected graph - two separate edges",
        ),
        (
            5,
            &[(0, 1), (0, 2), (1, 2), (1, 3), (2, 4), (3, 4)],
            "5-vertex graph - triangle joined to a path",
        ),
    ];

    cases
        .into_iter()
        .enumerate()
        .map(|(i, (n, edges, description))| {
            Ok(FunctionalCase {
                id: i + 1,
                description,
                instance: Instance::from_edges(n, edges.iter().copied())?,
            })
        })
        .collect()
}

/// Write every functional case as `instance_XX.txt` with a `description_XX.txt` next to it.
pub fn write_functional_cases(dir: &Path) -> CoverResult<usize> {
    create_dir(dir)?;
    let cases = functional_cases()?;
    for case in &cases {
        write_instance(&dir.join(numbered("instance", case.id)), &case.instance)?;
        let description = dir.join(numbered("description", case.id));
        std::fs::write(
            &description,
            format!("Test Case {}: {}\n", case.id, case.description),
        )
        .map_err(|e| CoverError::io(&description, e))?;
    }
    info!(cases = cases.len(), dir = %dir.display(), "functional cases written");
    Ok(cases.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_input_file;

    #[test]
    fn test_density_tiers() {
        let config = SuiteConfig::default();
        let densities: Vec<f64> = (0..10).map(|i| config.density(i)).collect();
        assert_eq!(
            densities,
            vec![0.2, 0.2, 0.2, 0.4, 0.4, 0.4, 0.6, 0.6, 0.6, 0.6]
        );
        assert_eq!(SuiteConfig::seed(7, 3), 703);
    }

    #[test]
    fn test_generate_small_suite() {
        let dir = tempfile::tempdir().unwrap();
        let config = SuiteConfig {
            sizes: 3..=5,
            instances_per_size: 4,
            ..SuiteConfig::default()
        };
        assert_eq!(generate_benchmark_suite(dir.path(), &config).unwrap(), 12);

        let path = size_dir(dir.path(), 4).join("instance_04.txt");
        let instance = parse_input_file(&path).unwrap();
        assert_eq!(instance.vertices, vec![0, 1, 2, 3]);

        let mut rng = StdRng::seed_from_u64(SuiteConfig::seed(4, 3));
        assert_eq!(instance, random_graph(4, 0.4, &mut rng));
    }

    #[test]
    fn test_functional_cases() {
        let cases = functional_cases().unwrap();
        assert_eq!(cases.len(), 9);
        assert_eq!(cases[0].instance.vertices, vec![0, 1, 2]);
        assert_eq!(cases[0].instance.edge_count(), 0);
        assert_eq!(cases[6].instance.edge_count(), 6);
        assert!(cases.iter().enumerate().all(|(i, case)| case.id == i + 1));
    }

    #[test]
    fn test_write_functional_cases() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(write_functional_cases(dir.path()).unwrap(), 9);
        let star = parse_input_file(&dir.path().join("instance_05.txt")).unwrap();
        assert_eq!(star.edge_count(), 3);
        let description = std::fs::read_to_string(dir.path().join("description_05.txt")).unwrap();
        assert!(description.starts_with("Test Case 5: Star graph"));
    }
}
