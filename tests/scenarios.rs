use std::fs;

use dijkstra_paths::input::load_graph;
use dijkstra_paths::report::write_report;
use dijkstra_paths::{dijkstra, dijkstra_with, GraphError, Strategy};

fn run_file(contents: &str, start: usize) -> String {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("airports.dat");
    fs::write(&path, contents).unwrap();
    let graph = load_graph(&path).unwrap();
    let paths = dijkstra(&graph, start).unwrap();
    let mut out = Vec::new();
    write_report(&paths, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn four_node_graph() {
    let report = run_file("4 4\n0 1 4\n0 2 1\n2 1 1\n1 3 1\n", 0);
    assert_eq!(
        report,
        "Shortest paths from node #0:\n\
         (Starting node, cost: 0)\n\
         0 -> 2 -> 1 (cost: 2)\n\
         0 -> 2 (cost: 1)\n\
         0 -> 2 -> 1 -> 3 (cost: 3)\n"
    );
}

#[test]
fn four_node_graph_from_the_far_end() {
    let report = run_file("4 4\n0 1 4\n0 2 1\n2 1 1\n1 3 1\n", 3);
    assert!(report.contains("3 -> 1 -> 2 -> 0 (cost: 3)"));
    assert!(report.contains("3 -> 1 -> 2 (cost: 2)"));
}

#[test]
fn single_isolated_node() {
    let report = run_file("1 0\n", 0);
    assert_eq!(report, "Shortest paths from node #0:\n(Starting node, cost: 0)\n");
}

#[test]
fn disconnected_node() {
    let report = run_file("3 1\n0 1 5\n", 1);
    assert_eq!(
        report,
        "Shortest paths from node #1:\n\
         1 -> 0 (cost: 5)\n\
         (Starting node, cost: 0)\n\
         1 -> (No path)\n"
    );
}

#[test]
fn strategies_agree_on_a_grid() {
    // 6x6 grid with varying weights, written in the .dat format.
    let side = 6;
    let mut edges = Vec::new();
    for r in 0..side {
        for c in 0..side {
            let node = r * side + c;
            if c + 1 < side {
                edges.push(format!("{} {} {}", node, node + 1, (r * 7 + c * 3) % 5 + 1));
            }
            if r + 1 < side {
                edges.push(format!("{} {} {}", node, node + side, (r * 2 + c * 5) % 4 + 1));
            }
        }
    }
    let text = format!("{} {}\n{}\n", side * side, edges.len(), edges.join("\n"));
    let graph = dijkstra_paths::input::parse_dat(&text).unwrap();

    let lazy = dijkstra_with(&graph, 0, Strategy::Lazy).unwrap();
    let indexed = dijkstra_with(&graph, 0, Strategy::DecreaseKey).unwrap();
    assert_eq!(lazy.distances(), indexed.distances());
    assert_eq!(lazy.reachable_count(), side * side);
    assert!(lazy.stats().pushes >= indexed.stats().pushes);
}

#[test]
fn bad_start_is_reported_not_panicked() {
    let graph = dijkstra_paths::input::parse_dat("2 1 0 1 1").unwrap();
    let err = dijkstra(&graph, 5).unwrap_err();
    assert!(matches!(err, GraphError::StartOutOfRange { start: 5, n_nodes: 2 }));
    assert_eq!(err.to_string(), "start node 5 is out of range (expected 0 - 1)");
}
