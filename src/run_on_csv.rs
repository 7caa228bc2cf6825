use anyhow::{Context, Result};
use clap::Parser;
use dijkstra_paths::input::parse_csv;
use dijkstra_paths::{dijkstra_with, init_tracing, Strategy};
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "csv")]
#[command(about = "Build an undirected graph from a CSV with node_id,neighbor_id,weight per row and time Dijkstra runs from several sources.", long_about = None)]
struct Cli {
    /// Path to the .csv file
    #[arg(short, long)]
    csv: PathBuf,

    /// Number of runs. Picks a new (deterministic) source id per run (0, 1, 2, 3, ...num_runs).
    #[arg(short, long)]
    num_runs: usize,

    #[arg(short, long, value_enum, default_value_t = Strategy::Lazy)]
    strategy: Strategy,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let file = File::open(&cli.csv).with_context(|| format!("opening {}", cli.csv.display()))?;
    let graph = parse_csv(file).with_context(|| format!("parsing {}", cli.csv.display()))?;
    println!("Graph: {} nodes, {} edges", graph.num_nodes(), graph.num_edges());

    let mut duration_millis = Vec::with_capacity(cli.num_runs);
    let mut reachable = Vec::with_capacity(cli.num_runs);
    for src_idx in 0..cli.num_runs {
        if src_idx >= graph.num_nodes() {
            warn!(
                runs = cli.num_runs,
                nodes = graph.num_nodes(),
                "more runs requested than nodes, stopping early"
            );
            break;
        }
        let now = Instant::now();
        let paths = dijkstra_with(&graph, src_idx, cli.strategy)?;
        duration_millis.push(now.elapsed().as_secs_f64() * 1000.0);
        reachable.push(paths.reachable_count());
    }
    println!("{:?}", duration_millis);
    println!("Reachable per source: {:?}", reachable);

    Ok(())
}
