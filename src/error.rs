use std::path::PathBuf;

use thiserror::Error;

use crate::graph::NodeId;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    /// An edge endpoint is not a node of the graph.
    #[error("edge endpoint {node} is out of range for a graph with {n_nodes} nodes")]
    NodeOutOfRange { node: NodeId, n_nodes: usize },

    /// The requested start node is not a node of the graph.
    #[error("start node {start} is out of range (expected 0 - {})", .n_nodes.saturating_sub(1))]
    StartOutOfRange { start: i64, n_nodes: usize },

    #[error("edge {edge} has negative cost {cost}")]
    NegativeCost { edge: usize, cost: i64 },

    /// Malformed graph description. `token` is 1-based.
    #[error("parse error at token {token} ({field}): {reason}")]
    Parse {
        token: usize,
        field: &'static str,
        reason: String,
    },

    #[error("reading CSV edge list: {0}")]
    Csv(#[from] csv::Error),

    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("console I/O failed: {0}")]
    Console(#[from] std::io::Error),

    #[error("no start node given before end of input")]
    NoStartNode,
}

impl GraphError {
    pub(crate) fn parse(token: usize, field: &'static str, reason: impl Into<String>) -> Self {
        GraphError::Parse {
            token,
            field,
            reason: reason.into(),
        }
    }
}
