use anyhow::{Context, Result};
use clap::Parser;
use dijkstra_paths::input::load_graph;
use dijkstra_paths::prompt::{read_start_node, validate_start};
use dijkstra_paths::report::{write_csv, write_report};
use dijkstra_paths::{dijkstra_with, init_tracing, Strategy};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "paths")]
#[command(about = "Load a weighted undirected graph and print the cheapest path from a start node to every node.", long_about = None)]
struct Cli {
    /// Graph file: `n_nodes n_edges` then `src dest cost` triples, or a .csv edge list
    #[arg(short, long, default_value = "airports.dat")]
    graph: PathBuf,

    /// Start node index. If omitted, asks on stdin.
    #[arg(short, long, allow_negative_numbers = true)]
    start: Option<i64>,

    #[arg(long, value_enum, default_value_t = Strategy::Lazy)]
    strategy: Strategy,

    /// Output CSV (node_id, distance, path). If omitted, prints the report to stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Include unreachable nodes in the CSV with infinite distance
    #[arg(long, default_value_t = false)]
    include_unreachable: bool,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let graph = load_graph(&cli.graph).with_context(|| format!("loading {}", cli.graph.display()))?;
    info!(
        nodes = graph.num_nodes(),
        edges = graph.num_edges(),
        "graph loaded"
    );

    let start = match cli.start {
        Some(start) => validate_start(start, graph.num_nodes())?,
        None => read_start_node(&mut io::stdin().lock(), &mut io::stdout(), graph.num_nodes())?,
    };

    let paths = dijkstra_with(&graph, start, cli.strategy)?;

    if let Some(out_path) = cli.out {
        let file = File::create(&out_path).with_context(|| format!("creating CSV {}", out_path.display()))?;
        let rows = write_csv(&paths, BufWriter::new(file), cli.include_unreachable)
            .with_context(|| format!("writing CSV {}", out_path.display()))?;
        println!("Wrote {} rows to {}", rows, out_path.display());
    } else {
        let mut stdout = io::stdout().lock();
        write_report(&paths, &mut stdout)?;
        stdout.flush()?;
    }

    Ok(())
}
