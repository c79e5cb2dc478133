//! Runs the solver over the generated corpora: timed benchmarks and oracle-checked functional cases.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::brute_force::is_minimum_cover;
use crate::format::write_cover;
use crate::parser::parse_input_file;
use crate::{minimum_vertex_cover, Cover, CoverError, CoverResult, Graph};

/// Aggregated solve times for one graph size, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeTiming {
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl SizeTiming {
    fn from_durations(times: &[Duration]) -> Self {
        let seconds: Vec<f64> = times.iter().map(Duration::as_secs_f64).collect();
        if seconds.is_empty() {
            return SizeTiming {
                average: 0.0,
                min: 0.0,
                max: 0.0,
                count: 0,
            };
        }
        SizeTiming {
            average: seconds.iter().sum::<f64>() / seconds.len() as f64,
            min: seconds.iter().copied().fold(f64::INFINITY, f64::min),
            max: seconds.iter().copied().fold(0.0, f64::max),
            count: seconds.len(),
        }
    }
}

/// Outcome of the functional cases
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestSummary {
    pub passed: usize,
    pub failed: usize,
}

/// Entries of `dir` named `<prefix>_<number>.txt`, sorted by number
fn numbered_files(dir: &Path, prefix: &str) -> CoverResult<Vec<(usize, PathBuf)>> {
    let entries = std::fs::read_dir(dir).map_err(|e| CoverError::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| CoverError::io(dir, e))?.path();
        let number = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_prefix(prefix))
            .and_then(|rest| rest.strip_prefix('_'))
            .and_then(|rest| rest.strip_suffix(".txt"))
            .and_then(|digits| digits.parse::<usize>().ok());
        if let Some(number) = number {
            files.push((number, path));
        }
    }
    files.sort();
    Ok(files)
}

/// `instance_07.txt` -> `output_07.txt` in the same directory
fn output_path(instance: &Path) -> PathBuf {
    let name = instance
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .replacen("instance_", "output_", 1);
    instance.with_file_name(name)
}

/// Parse, solve and write the output file next to the instance. Only the solve itself is timed.
fn solve_file(path: &Path) -> CoverResult<(Graph, Cover, Duration)> {
    let graph = parse_input_file(path)?.graph()?;
    let start = Instant::now();
    let cover = minimum_vertex_cover(&graph)?;
    let elapsed = start.elapsed();
    write_cover(&output_path(path), &cover)?;
    Ok((graph, cover, elapsed))
}

/// Solve every `size_<n>/instance_<xx>.txt` under `base`, one at a time, and aggregate solve times per size.
///
/// An instance that fails to parse or solve is reported and left out of its size's timing.
pub fn run_benchmarks(base: &Path) -> CoverResult<BTreeMap<usize, SizeTiming>> {
    let mut results = BTreeMap::new();
    for (n, dir) in numbered_dirs(base)? {
        info!(size = n, "running benchmarks");
        let mut times = Vec::new();
        for (_, instance) in numbered_files(&dir, "instance")? {
            let (_, cover, elapsed) = match solve_file(&instance) {
                Ok(solved) => solved,
                Err(e) => {
                    warn!(instance = %instance.display(), error = %e, "benchmark instance failed");
                    println!("Error running {}: {}", instance.display(), e);
                    continue;
                }
            };
            info!(
                instance = %instance.display(),
                cover = cover.size(),
                seconds = elapsed.as_secs_f64(),
                "solved"
            );
            times.push(elapsed);
        }
        let timing = SizeTiming::from_durations(&times);
        println!(
            "Size {}: avg={:.4}s, min={:.4}s, max={:.4}s, count={}",
            n, timing.average, timing.min, timing.max, timing.count
        );
        results.insert(n, timing);
    }
    Ok(results)
}

/// Sub-directories of `base` named `size_<n>`, sorted by n
fn numbered_dirs(base: &Path) -> CoverResult<Vec<(usize, PathBuf)>> {
    let entries = std::fs::read_dir(base).map_err(|e| CoverError::io(base, e))?;
    let mut dirs = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| CoverError::io(base, e))?.path();
        let size = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_prefix("size_"))
            .and_then(|digits| digits.parse::<usize>().ok());
        if let (true, Some(size)) = (path.is_dir(), size) {
            dirs.push((size, path));
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Write timing results as pretty JSON keyed by size
pub fn write_results(path: &Path, results: &BTreeMap<usize, SizeTiming>) -> CoverResult<()> {
    let json = serde_json::to_string_pretty(results)?;
    std::fs::write(path, json).map_err(|e| CoverError::io(path, e))
}

/// Solve every `instance_<xx>.txt` in `dir`, write its output, and check it against the exhaustive oracle.
pub fn run_functional_tests(dir: &Path) -> CoverResult<TestSummary> {
    let files = numbered_files(dir, "instance")?;

    let outcomes: Vec<(usize, Result<(), String>)> = files
        .par_iter()
        .map(|(id, path)| {
            let outcome = check_case(path).map_err(|e| e.to_string()).and_then(|ok| {
                if ok {
                    Ok(())
                } else {
                    Err("cover is not a minimum vertex cover".to_string())
                }
            });
            (*id, outcome)
        })
        .collect();

    let mut summary = TestSummary::default();
    for (id, outcome) in outcomes {
        match outcome {
            Ok(()) => {
                println!("Test {:02}: PASSED", id);
                summary.passed += 1;
            }
            Err(reason) => {
                warn!(case = id, %reason, "functional case failed");
                println!("Test {:02}: FAILED - {}", id, reason);
                summary.failed += 1;
            }
        }
    }
    println!(
        "\nSummary: {} passed, {} failed",
        summary.passed, summary.failed
    );
    Ok(summary)
}

fn check_case(path: &Path) -> CoverResult<bool> {
    let (graph, cover, _) = solve_file(path)?;
    Ok(is_minimum_cover(&graph, &cover))
}
