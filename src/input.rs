/*
Graph file readers.

`.dat`: whitespace-separated integers. A header `n_nodes n_edges`, then `n_edges` triples
`src dest cost`. Line breaks carry no meaning.

`.csv`: an edge list with a header row and columns `node_id,neighbor_id,weight`. The node count is
one more than the largest id seen. Every row is one undirected edge.
*/

use std::fs::{self, File};
use std::io::Read;
use std::iter::Enumerate;
use std::path::Path;
use std::str::SplitWhitespace;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::graph::{Cost, Edge, Graph, NodeId};

struct Tokens<'a> {
    iter: Enumerate<SplitWhitespace<'a>>,
    consumed: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            iter: text.split_whitespace().enumerate(),
            consumed: 0,
        }
    }

    fn next_int(&mut self, field: &'static str) -> GraphResult<(usize, i64)> {
        let Some((idx, token)) = self.iter.next() else {
            return Err(GraphError::parse(self.consumed + 1, field, "missing value"));
        };
        self.consumed = idx + 1;
        let value = token
            .parse::<i64>()
            .map_err(|_| GraphError::parse(idx + 1, field, format!("expected an integer, found `{token}`")))?;
        Ok((idx + 1, value))
    }

    fn next_count(&mut self, field: &'static str) -> GraphResult<usize> {
        let (pos, value) = self.next_int(field)?;
        usize::try_from(value).map_err(|_| GraphError::parse(pos, field, format!("count must be non-negative, found {value}")))
    }

    fn next_node(&mut self, field: &'static str) -> GraphResult<NodeId> {
        let (pos, value) = self.next_int(field)?;
        usize::try_from(value).map_err(|_| GraphError::parse(pos, field, format!("node index must be non-negative, found {value}")))
    }
}

fn to_cost(edge: usize, pos: usize, value: i64) -> GraphResult<Cost> {
    if value < 0 {
        return Err(GraphError::NegativeCost { edge, cost: value });
    }
    Cost::try_from(value).map_err(|_| GraphError::parse(pos, "cost", format!("cost {value} does not fit in 32 bits")))
}

/// Parses the whitespace `.dat` format.
pub fn parse_dat(text: &str) -> GraphResult<Graph> {
    let mut tokens = Tokens::new(text);
    let n_nodes = tokens.next_count("n_nodes")?;
    let n_edges = tokens.next_count("n_edges")?;

    let mut edges = Vec::new();
    for edge in 0..n_edges {
        let src = tokens.next_node("src")?;
        let dest = tokens.next_node("dest")?;
        let (pos, raw_cost) = tokens.next_int("cost")?;
        edges.push(Edge::new(src, dest, to_cost(edge, pos, raw_cost)?));
    }
    if let Some((idx, token)) = tokens.iter.next() {
        return Err(GraphError::parse(
            idx + 1,
            "edge list",
            format!("unexpected token `{token}` after {n_edges} edges"),
        ));
    }

    Graph::build(n_nodes, edges)
}

/// Parses a CSV edge list. Errors inside a row report the 1-based row number (header excluded)
/// in place of a token position.
pub fn parse_csv<R: Read>(reader: R) -> GraphResult<Graph> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut edges = Vec::new();
    let mut n_nodes = 0;
    for (row, result) in rdr.records().enumerate() {
        let record = result?;
        let row = row + 1;
        let field = |idx: usize, name: &'static str| -> GraphResult<i64> {
            let raw = record
                .get(idx)
                .ok_or_else(|| GraphError::parse(row, name, "missing column"))?;
            raw.parse::<i64>()
                .map_err(|_| GraphError::parse(row, name, format!("expected an integer, found `{raw}`")))
        };
        let node = |idx: usize, name: &'static str| -> GraphResult<NodeId> {
            let value = field(idx, name)?;
            usize::try_from(value)
                .map_err(|_| GraphError::parse(row, name, format!("node index must be non-negative, found {value}")))
        };
        let src = node(0, "node_id")?;
        let dest = node(1, "neighbor_id")?;
        let cost = to_cost(row - 1, row, field(2, "weight")?)?;
        n_nodes = n_nodes.max(src.max(dest) + 1);
        edges.push(Edge::new(src, dest, cost));
    }

    Graph::build(n_nodes, edges)
}

/// Loads a graph file, choosing the reader by extension: `.csv` is an edge list, anything else is
/// the `.dat` format.
pub fn load_graph(path: impl AsRef<Path>) -> GraphResult<Graph> {
    let path = path.as_ref();
    let io_err = |source| GraphError::Io {
        path: path.to_path_buf(),
        source,
    };
    let is_csv = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("csv"));

    let graph = if is_csv {
        parse_csv(File::open(path).map_err(io_err)?)?
    } else {
        parse_dat(&fs::read_to_string(path).map_err(io_err)?)?
    };
    debug!(
        path = %path.display(),
        nodes = graph.num_nodes(),
        edges = graph.num_edges(),
        "loaded graph"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "4 4\n0 1 4\n0 2 1\n2 1 1\n1 3 1\n";

    #[test]
    fn parses_sample_file() {
        let graph = parse_dat(SAMPLE).unwrap();
        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(graph.num_edges(), 4);
        assert_eq!(graph.neighbors(2).collect::<Vec<_>>(), vec![(0, 1), (1, 1)]);
    }

    #[test]
    fn line_breaks_do_not_matter() {
        let graph = parse_dat("  3 2 0 1 5\n\n 1\n2 6  ").unwrap();
        assert_eq!(graph.neighbors(1).collect::<Vec<_>>(), vec![(0, 5), (2, 6)]);
    }

    #[test]
    fn empty_edge_list() {
        let graph = parse_dat("1 0").unwrap();
        assert_eq!(graph.num_nodes(), 1);
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn missing_field_names_position() {
        let err = parse_dat("2 1\n0 1").unwrap_err();
        match err {
            GraphError::Parse { token, field, .. } => {
                assert_eq!(token, 5);
                assert_eq!(field, "cost");
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(matches!(parse_dat("").unwrap_err(), GraphError::Parse { token: 1, field: "n_nodes", .. }));
    }

    #[test]
    fn non_integer_token() {
        let err = parse_dat("2 1\n0 x 3").unwrap_err();
        assert!(matches!(err, GraphError::Parse { token: 4, field: "dest", .. }));
        assert!(err.to_string().contains("`x`"));
    }

    #[test]
    fn negative_values_are_rejected() {
        assert!(matches!(
            parse_dat("2 1\n0 1 -3").unwrap_err(),
            GraphError::NegativeCost { edge: 0, cost: -3 }
        ));
        assert!(matches!(parse_dat("2 1\n-1 1 3").unwrap_err(), GraphError::Parse { field: "src", .. }));
        assert!(matches!(parse_dat("-2 0").unwrap_err(), GraphError::Parse { field: "n_nodes", .. }));
    }

    #[test]
    fn out_of_range_node_is_rejected() {
        assert!(matches!(
            parse_dat("2 1\n0 2 3").unwrap_err(),
            GraphError::NodeOutOfRange { node: 2, n_nodes: 2 }
        ));
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        assert!(matches!(
            parse_dat("2 1\n0 1 3\n1 0 3").unwrap_err(),
            GraphError::Parse { token: 6, .. }
        ));
    }

    #[test]
    fn parses_csv_edge_list() {
        let text = "node_id,neighbor_id,weight\n0,1,4\n0, 2, 1\n2,1,1\n1,3,1\n";
        let graph = parse_csv(text.as_bytes()).unwrap();
        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(graph.num_edges(), 4);
        assert_eq!(graph.neighbors(3).collect::<Vec<_>>(), vec![(1, 1)]);

        let empty = parse_csv("node_id,neighbor_id,weight\n".as_bytes()).unwrap();
        assert_eq!(empty.num_nodes(), 0);
    }

    #[test]
    fn csv_errors_name_the_row() {
        let err = parse_csv("node_id,neighbor_id,weight\n0,1,4\n0,z,1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, GraphError::Parse { token: 2, field: "neighbor_id", .. }));
        let err = parse_csv("node_id,neighbor_id,weight\n0,1,-4\n".as_bytes()).unwrap_err();
        assert!(matches!(err, GraphError::NegativeCost { edge: 0, cost: -4 }));
    }

    #[test]
    fn loads_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let dat = dir.path().join("airports.dat");
        fs::write(&dat, SAMPLE).unwrap();
        assert_eq!(load_graph(&dat).unwrap().num_edges(), 4);

        let csv_path = dir.path().join("edges.csv");
        let mut file = File::create(&csv_path).unwrap();
        writeln!(file, "node_id,neighbor_id,weight").unwrap();
        writeln!(file, "0,5,2").unwrap();
        drop(file);
        assert_eq!(load_graph(&csv_path).unwrap().num_nodes(), 6);

        let missing = load_graph(dir.path().join("nope.dat")).unwrap_err();
        assert!(matches!(missing, GraphError::Io { .. }));
    }
}
