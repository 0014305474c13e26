//! Simple-path enumeration — depth-bounded backtracking search.

use tracing::debug;

use super::store::AttackGraph;
use super::types::NodeIdx;

/// Enumerate every simple path from `source` to `target` up to
/// `max_depth` nodes long, in discovery order.
///
/// Depth-first backtracking: the visited set is seeded with the source,
/// expansion follows outgoing edges in insertion order, and a path that
/// reaches the target is recorded without being extended further. Paths
/// are acyclic by construction. Cost is exponential in branching factor
/// bounded by `max_depth`; keep the bound small on dense graphs.
///
/// An unknown source or target yields an empty list. `source == target`
/// yields the single-node path.
pub fn find_paths(
    graph: &AttackGraph,
    source: &str,
    target: &str,
    max_depth: usize,
) -> Vec<Vec<NodeIdx>> {
    let (Some(source), Some(target)) = (graph.node_idx(source), graph.node_idx(target)) else {
        return Vec::new();
    };

    let mut visited = vec![false; graph.node_count()];
    let mut path = Vec::with_capacity(max_depth.min(64));
    let mut found = Vec::new();

    visited[source as usize] = true;
    path.push(source);
    expand(graph, source, target, max_depth, &mut path, &mut visited, &mut found);
    found
}

/// Enumerate paths from `source` to every node whose `value` exceeds
/// `threshold` (excluding the source itself), in node insertion order,
/// and concatenate the results.
pub fn find_paths_to_high_value(
    graph: &AttackGraph,
    source: &str,
    threshold: f64,
    max_depth: usize,
) -> Vec<Vec<NodeIdx>> {
    let mut all = Vec::new();
    for node in graph.nodes() {
        if node.value > threshold && node.id != source {
            debug!(dest = %node.id, value = node.value, "searching paths to high-value target");
            all.extend(find_paths(graph, source, &node.id, max_depth));
        }
    }
    all
}

fn expand(
    graph: &AttackGraph,
    current: NodeIdx,
    target: NodeIdx,
    max_depth: usize,
    path: &mut Vec<NodeIdx>,
    visited: &mut [bool],
    found: &mut Vec<Vec<NodeIdx>>,
) {
    if current == target {
        found.push(path.clone());
        return;
    }
    if path.len() >= max_depth {
        return;
    }

    let current_id = graph.node_at(current).id.as_str();
    for &edge_idx in graph.outgoing(current_id) {
        let edge = graph.edge_at(edge_idx);
        // Edges into ids with no node are stored but never traversed.
        let Some(next) = graph.node_idx(&edge.target) else {
            continue;
        };
        if visited[next as usize] {
            continue;
        }

        visited[next as usize] = true;
        path.push(next);
        expand(graph, next, target, max_depth, path, visited, found);
        path.pop();
        visited[next as usize] = false;
    }
}
