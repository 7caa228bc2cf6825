//! Single-source shortest paths over weighted undirected graphs.
//!
//! [`graph::Graph`] holds the adjacency lists, [`pq::MinHeap`] is the binary heap the search runs
//! on, and [`dijkstra::dijkstra`] produces distances and predecessor links from which
//! [`dijkstra::ShortestPaths::path_to`] rebuilds each cheapest path. The `input`, `prompt` and
//! `report` modules are the file, console and output collaborators used by the binaries.

use tracing_subscriber::{fmt, EnvFilter};

pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod input;
pub mod pq;
pub mod prompt;
pub mod report;

pub use dijkstra::{dijkstra, dijkstra_with, SearchStats, ShortestPaths, Strategy};
pub use error::{GraphError, GraphResult};
pub use graph::{Cost, Distance, Edge, Graph, NodeId};
pub use pq::MinHeap;

/// Logs to stderr so stdout stays the report. `RUST_LOG` wins when no `-v` is given.
pub fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
