use clap::Parser;
use subset_dp_vertex_cover::{
    format::write_cover, logging::init_logging, minimum_vertex_cover, parser::parse_input_file,
};
use std::path::PathBuf;
use tracing::info;

/// Exact minimum vertex cover by dynamic programming over vertex subsets
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph file: optional vertex count line, then one "u v" edge per line
    input_file: PathBuf,

    /// Where to write the cover size followed by the cover vertices
    output_file: PathBuf,

    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let instance = match parse_input_file(&args.input_file) {
        Ok(instance) => instance,
        Err(e) => {
            eprintln!("Error parsing input file: {}", e);
            std::process::exit(1);
        }
    };

    if instance.vertices.is_empty() {
        eprintln!("Error: No vertices in graph");
        std::process::exit(1);
    }
    info!(
        vertices = instance.vertices.len(),
        edges = instance.edge_count(),
        "graph loaded"
    );

    let start_time = std::time::Instant::now();
    let cover = match instance.graph().and_then(|graph| minimum_vertex_cover(&graph)) {
        Ok(cover) => cover,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    info!(elapsed_ms = start_time.elapsed().as_millis() as u64, "solved");

    if let Err(e) = write_cover(&args.output_file, &cover) {
        eprintln!("Error writing output file: {}", e);
        std::process::exit(1);
    }

    println!("Minimum vertex cover size: {}", cover.size());
    println!(
        "Vertices in cover: {:?}",
        cover.vertices().iter().collect::<Vec<_>>()
    );
}
