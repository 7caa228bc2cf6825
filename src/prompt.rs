use std::io::{BufRead, Write};

use crate::error::{GraphError, GraphResult};
use crate::graph::NodeId;

/// Checks a user-supplied start index against the graph size.
pub fn validate_start(start: i64, n_nodes: usize) -> GraphResult<NodeId> {
    usize::try_from(start)
        .ok()
        .filter(|&node| node < n_nodes)
        .ok_or(GraphError::StartOutOfRange { start, n_nodes })
}

/// Asks for a start node until a valid one is entered. Bad answers are explained on `output` and
/// the question is asked again; running out of input is `NoStartNode`.
pub fn read_start_node<R: BufRead, W: Write>(input: &mut R, output: &mut W, n_nodes: usize) -> GraphResult<NodeId> {
    if n_nodes == 0 {
        return Err(GraphError::StartOutOfRange { start: 0, n_nodes });
    }

    let mut line = String::new();
    loop {
        write!(output, "Input starting node (0 - {}): ", n_nodes - 1)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(GraphError::NoStartNode);
        }
        let answer = line.trim();
        match answer.parse::<i64>() {
            Ok(start) => match validate_start(start, n_nodes) {
                Ok(node) => return Ok(node),
                Err(err) => writeln!(output, "{err}")?,
            },
            Err(_) => writeln!(output, "`{answer}` is not a node index")?,
        }
    }
}
