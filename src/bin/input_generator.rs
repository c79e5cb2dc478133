use clap::{Parser, Subcommand};
use subset_dp_vertex_cover::{
    format::write_instance,
    generator::{connected_graph, random_graph, rng_from_seed},
    logging::init_logging,
    parser::Instance,
    suite::{generate_benchmark_suite, write_functional_cases, SuiteConfig},
};
use std::path::{Path, PathBuf};

/// Input Generator for minimum vertex cover instances.
///
/// Graph files list the vertex count on the first line and one undirected
/// edge "u v" per following line, the format read by `vertex-cover`.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate graph instances for the subset-DP vertex cover solver"
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Random graph, every pair joined independently
    Random {
        /// Number of vertices (labeled 0 to n-1)
        #[arg(short)]
        n: usize,

        /// Probability of including each edge
        #[arg(long, default_value_t = 0.3)]
        density: f64,

        /// Random seed (if omitted, uses entropy)
        #[arg(long)]
        seed: Option<u64>,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Connected graph: random spanning tree plus random extra edges
    Connected {
        /// Number of vertices (labeled 0 to n-1)
        #[arg(short)]
        n: usize,

        /// Target number of edges, capped at n(n-1)/2
        #[arg(short)]
        m: usize,

        /// Random seed (if omitted, uses entropy)
        #[arg(long)]
        seed: Option<u64>,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Benchmark corpus: 10 instances for every size from 5 to 24
    Benchmarks {
        #[arg(long, default_value = "benchmarks")]
        dir: PathBuf,
    },
    /// Hand-written functional test cases
    Tests {
        #[arg(long, default_value = "tests")]
        dir: PathBuf,
    },
}

fn print_instance(instance: &Instance, output: &Path, seed: Option<u64>) {
    println!("Generated instance:");
    println!("  vertices = {}", instance.vertices.len());
    println!("  edges = {}", instance.edge_count());
    if let Some(seed) = seed {
        println!("  seed = {}", seed);
    }
    println!("  output file: {:?}", output);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Random {
            n,
            density,
            seed,
            output,
        } => {
            if !(0.0..=1.0).contains(&density) {
                eprintln!("Error: density must be in [0,1].");
                std::process::exit(1);
            }
            let instance = random_graph(n, density, &mut rng_from_seed(seed));
            write_instance(&output, &instance)?;
            print_instance(&instance, &output, seed);
        }
        Command::Connected { n, m, seed, output } => {
            let instance = connected_graph(n, m, &mut rng_from_seed(seed));
            write_instance(&output, &instance)?;
            print_instance(&instance, &output, seed);
        }
        Command::Benchmarks { dir } => {
            let config = SuiteConfig::default();
            let written = generate_benchmark_suite(&dir, &config)?;
            println!(
                "Generated {} benchmark instances across {} sizes",
                written,
                config.sizes.clone().count()
            );
            println!(
                "Size range: {} to {} vertices",
                config.sizes.start(),
                config.sizes.end()
            );
        }
        Command::Tests { dir } => {
            let written = write_functional_cases(&dir)?;
            println!("Generated {} test cases in {:?}", written, dir);
        }
    }

    Ok(())
}
