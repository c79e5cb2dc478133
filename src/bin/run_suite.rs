use clap::{Parser, Subcommand};
use subset_dp_vertex_cover::{
    harness::{run_benchmarks, run_functional_tests, write_results},
    logging::init_logging,
};
use std::path::PathBuf;

/// Run the solver over generated benchmark or functional-test corpora
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Time every instance under `size_<n>` directories and aggregate per size
    Benchmarks {
        #[arg(long, default_value = "benchmarks")]
        dir: PathBuf,

        /// JSON file receiving average/min/max/count per size
        #[arg(long, default_value = "benchmark_results.json")]
        results: PathBuf,
    },
    /// Solve every functional case and check optimality exhaustively
    Tests {
        #[arg(long, default_value = "tests")]
        dir: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Benchmarks { dir, results } => {
            let timings = run_benchmarks(&dir)?;
            write_results(&results, &timings)?;
            println!("\nResults saved to {:?}", results);
        }
        Command::Tests { dir } => {
            let summary = run_functional_tests(&dir)?;
            if summary.failed > 0 {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
