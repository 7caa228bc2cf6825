use std::io::{self, Write};

use csv::Writer;

use crate::dijkstra::ShortestPaths;
use crate::error::GraphResult;
use crate::graph::NodeId;

const ARROW: &str = " -> ";

/// Joins a path with arrows: `0 -> 2 -> 1`.
pub fn format_path(path: &[NodeId]) -> String {
    path.iter()
        .map(|node| node.to_string())
        .collect::<Vec<_>>()
        .join(ARROW)
}

/// One console line for `node`.
pub fn describe(paths: &ShortestPaths, node: NodeId) -> String {
    let start = paths.source();
    if node == start {
        return String::from("(Starting node, cost: 0)");
    }
    match (paths.path_to(node), paths.distance(node)) {
        (Some(path), Some(cost)) => format!("{} (cost: {cost})", format_path(&path)),
        _ => format!("{start} -> (No path)"),
    }
}

/// Header plus one line per node.
pub fn write_report<W: Write>(paths: &ShortestPaths, out: &mut W) -> io::Result<()> {
    writeln!(out, "Shortest paths from node #{}:", paths.source())?;
    for node in 0..paths.num_nodes() {
        writeln!(out, "{}", describe(paths, node))?;
    }
    Ok(())
}

/// CSV rows `node_id,distance,path`. Unreachable nodes get `inf` and an empty path, and are only
/// written when `include_unreachable` is set. Returns the number of rows written.
pub fn write_csv<W: Write>(paths: &ShortestPaths, writer: W, include_unreachable: bool) -> GraphResult<usize> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(["node_id", "distance", "path"])?;
    let mut rows = 0;
    for node in 0..paths.num_nodes() {
        let record = match (paths.distance(node), paths.path_to(node)) {
            (Some(d), Some(path)) => [node.to_string(), d.to_string(), format_path(&path)],
            _ if include_unreachable => [node.to_string(), String::from("inf"), String::new()],
            _ => continue,
        };
        wtr.write_record(&record)?;
        rows += 1;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(rows)
}
