use std::iter::Copied;
use std::slice::Iter;

use crate::error::{GraphError, GraphResult};

pub type NodeId = usize;
/// Weight of a single edge. Unsigned, so the non-negative precondition of Dijkstra holds by type.
pub type Cost = u32;
/// Sum of edge costs along a path.
pub type Distance = u64;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub src: NodeId,
    pub dest: NodeId,
    pub cost: Cost,
}

impl Edge {
    pub fn new(src: NodeId, dest: NodeId, cost: Cost) -> Self {
        Self { src, dest, cost }
    }
}

impl From<(NodeId, NodeId, Cost)> for Edge {
    fn from((src, dest, cost): (NodeId, NodeId, Cost)) -> Self {
        Edge::new(src, dest, cost)
    }
}

/// Undirected graph stored as one adjacency list per node. Every edge (u, v, c) is stored twice,
/// as (v, c) on u and (u, c) on v. Read-only once built.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    adj: Vec<Vec<(NodeId, Cost)>>,
    n_edges: usize,
}

/// Restartable iterator over a node's (neighbor, cost) pairs: clone it to walk the list again.
pub type Neighbors<'a> = Copied<Iter<'a, (NodeId, Cost)>>;

impl Graph {
    pub fn build<I, E>(n_nodes: usize, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut adj: Vec<Vec<(NodeId, Cost)>> = vec![Vec::new(); n_nodes];
        let mut n_edges = 0;
        for edge in edges {
            let Edge { src, dest, cost } = edge.into();
            for node in [src, dest] {
                if node >= n_nodes {
                    return Err(GraphError::NodeOutOfRange { node, n_nodes });
                }
            }
            adj[src].push((dest, cost));
            adj[dest].push((src, cost));
            n_edges += 1;
        }
        Ok(Self { adj, n_edges })
    }

    pub fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    /// Number of logical (undirected) edges.
    pub fn num_edges(&self) -> usize {
        self.n_edges
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node < self.adj.len()
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.adj[node].len()
    }

    /// Neighbors of `node` in edge insertion order. Panics if `node` is not in the graph.
    pub fn neighbors(&self, node: NodeId) -> Neighbors<'_> {
        self.adj[node].iter().copied()
    }
}
