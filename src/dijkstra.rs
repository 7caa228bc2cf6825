use clap::ValueEnum;
use orx_priority_queue::{BinaryHeapWithMap, PriorityQueue, PriorityQueueDecKey};
use tracing::{debug, trace};

use crate::error::{GraphError, GraphResult};
use crate::graph::{Distance, Graph, NodeId};
use crate::pq::MinHeap;

/// How the search handles a node whose tentative distance improves while it is queued.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Push a second, cheaper entry and skip the stale one when it is popped.
    #[default]
    Lazy,
    /// Keep one entry per node in an indexed heap and lower its key in place.
    DecreaseKey,
}

/// Queue activity of one search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub pushes: usize,
    pub pops: usize,
    /// Popped entries for nodes that were already finalized.
    pub stale_pops: usize,
    pub relaxations: usize,
    pub finalized: usize,
}

/// Result of a single-source search: one distance and one predecessor slot per node.
/// `None` distance means unreachable; `None` predecessor means the source or unreachable.
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    source: NodeId,
    dist: Vec<Option<Distance>>,
    prev: Vec<Option<NodeId>>,
    stats: SearchStats,
}

impl ShortestPaths {
    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn num_nodes(&self) -> usize {
        self.dist.len()
    }

    pub fn distance(&self, node: NodeId) -> Option<Distance> {
        self.dist.get(node).copied().flatten()
    }

    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.prev.get(node).copied().flatten()
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_some()
    }

    pub fn distances(&self) -> &[Option<Distance>] {
        &self.dist
    }

    pub fn predecessors(&self) -> &[Option<NodeId>] {
        &self.prev
    }

    pub fn reachable_count(&self) -> usize {
        self.dist.iter().filter(|d| d.is_some()).count()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Nodes from the source to `target`, walking predecessors back and reversing.
    /// `None` if `target` is unreachable or not in the graph.
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        if !self.is_reachable(target) {
            return None;
        }
        let mut path = vec![target];
        let mut cur = target;
        while cur != self.source {
            cur = self.prev[cur]?;
            path.push(cur);
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra from `source` to all nodes with lazy decrease-key. Edge costs are unsigned, so the
/// greedy finalize-on-pop step is always sound.
pub fn dijkstra(graph: &Graph, source: NodeId) -> GraphResult<ShortestPaths> {
    dijkstra_with(graph, source, Strategy::Lazy)
}

pub fn dijkstra_with(graph: &Graph, source: NodeId, strategy: Strategy) -> GraphResult<ShortestPaths> {
    let n = graph.num_nodes();
    if source >= n {
        return Err(GraphError::StartOutOfRange {
            start: i64::try_from(source).unwrap_or(i64::MAX),
            n_nodes: n,
        });
    }

    let paths = match strategy {
        Strategy::Lazy => run_lazy(graph, source),
        Strategy::DecreaseKey => run_decrease_key(graph, source),
    };
    debug!(
        source = source,
        ?strategy,
        reachable = paths.reachable_count(),
        nodes = n,
        stats = ?paths.stats,
        "search finished"
    );
    Ok(paths)
}

fn run_lazy(graph: &Graph, source: NodeId) -> ShortestPaths {
    let n = graph.num_nodes();
    let mut dist: Vec<Option<Distance>> = vec![None; n];
    let mut prev: Vec<Option<NodeId>> = vec![None; n];
    let mut finalized = vec![false; n];
    let mut stats = SearchStats::default();
    let mut heap: MinHeap<NodeId> = MinHeap::with_capacity(n);

    dist[source] = Some(0);
    heap.insert(source, 0);
    stats.pushes += 1;

    while let Some((u, cost_to_u)) = heap.pop() {
        stats.pops += 1;
        if finalized[u] {
            stats.stale_pops += 1;
            continue;
        }
        // The first pop of a node carries its latest (smallest) distance.
        debug_assert_eq!(dist[u], Some(cost_to_u));
        finalized[u] = true;
        stats.finalized += 1;

        for (v, cost) in graph.neighbors(u) {
            if finalized[v] {
                continue;
            }
            let candidate = cost_to_u + Distance::from(cost);
            if dist[v].map_or(true, |current| candidate < current) {
                trace!(from = u, to = v, distance = candidate, "relaxed");
                dist[v] = Some(candidate);
                prev[v] = Some(u);
                heap.insert(v, candidate);
                stats.pushes += 1;
                stats.relaxations += 1;
            }
        }
    }

    ShortestPaths {
        source,
        dist,
        prev,
        stats,
    }
}

fn run_decrease_key(graph: &Graph, source: NodeId) -> ShortestPaths {
    let n = graph.num_nodes();
    let mut dist: Vec<Option<Distance>> = vec![None; n];
    let mut prev: Vec<Option<NodeId>> = vec![None; n];
    let mut finalized = vec![false; n];
    let mut stats = SearchStats::default();
    let mut heap: BinaryHeapWithMap<NodeId, Distance> = BinaryHeapWithMap::new();

    dist[source] = Some(0);
    heap.push(source, 0);
    stats.pushes += 1;

    while let Some((u, cost_to_u)) = heap.pop() {
        stats.pops += 1;
        finalized[u] = true;
        stats.finalized += 1;

        for (v, cost) in graph.neighbors(u) {
            if finalized[v] {
                continue;
            }
            let candidate = cost_to_u + Distance::from(cost);
            if dist[v].map_or(true, |current| candidate < current) {
                trace!(from = u, to = v, distance = candidate, "relaxed");
                dist[v] = Some(candidate);
                prev[v] = Some(u);
                if !heap.contains(&v) {
                    stats.pushes += 1;
                }
                heap.decrease_key_or_push(&v, candidate);
                stats.relaxations += 1;
            }
        }
    }

    ShortestPaths {
        source,
        dist,
        prev,
        stats,
    }
}
