//! The attack graph store — node arena, edge arena, adjacency lists.

use foray_core::types::collections::{FxHashMap, SmallVec8};

use super::types::{AssetNode, EdgeIdx, GraphStats, NodeIdx, TransitionEdge};

/// A directed graph of assets and feasible attacker transitions.
///
/// Nodes are interned into a `u32` arena on insertion; per-source
/// adjacency lists keep path expansion at array-indexing cost. Edges are
/// kept in insertion order: `find_edge` returns the first structural
/// match between an ordered pair, so parallel edges are allowed and the
/// earliest inserted one governs scoring.
///
/// Adjacency is keyed by source id rather than arena index so an edge
/// inserted before its endpoint nodes becomes traversable once the node
/// arrives. An edge whose target id never gets a node is stored (and
/// counted by [`AttackGraph::statistics`]) but never traversed.
pub struct AttackGraph {
    nodes: Vec<AssetNode>,
    /// Map from node id → arena index for O(1) lookup.
    node_index: FxHashMap<String, NodeIdx>,
    edges: Vec<TransitionEdge>,
    /// Map from source id → outgoing edge indices in insertion order.
    adjacency: FxHashMap<String, SmallVec8<EdgeIdx>>,
}

impl AttackGraph {
    /// Create an empty attack graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            node_index: FxHashMap::default(),
            edges: Vec::new(),
            adjacency: FxHashMap::default(),
        }
    }

    /// Number of assets in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of transitions in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Add a node. A duplicate id overwrites the existing node in place
    /// (last write wins, no merge); its arena index stays stable.
    pub fn add_node(&mut self, node: AssetNode) -> NodeIdx {
        if let Some(&idx) = self.node_index.get(&node.id) {
            self.nodes[idx as usize] = node;
            return idx;
        }
        let idx = self.nodes.len() as NodeIdx;
        self.node_index.insert(node.id.clone(), idx);
        self.nodes.push(node);
        idx
    }

    /// Add an edge unconditionally. Endpoints are not checked: the
    /// caller may insert an edge before its nodes, or one that stays
    /// dangling forever. Neither is an error.
    pub fn add_edge(&mut self, edge: TransitionEdge) -> EdgeIdx {
        let idx = self.edges.len() as EdgeIdx;
        self.adjacency
            .entry(edge.source.clone())
            .or_default()
            .push(idx);
        self.edges.push(edge);
        idx
    }

    /// First edge between an ordered pair in insertion order, or `None`.
    pub fn find_edge(&self, source: &str, target: &str) -> Option<&TransitionEdge> {
        self.find_edge_idx(source, target)
            .map(|idx| &self.edges[idx as usize])
    }

    /// Arena index of the first edge between an ordered pair.
    pub(crate) fn find_edge_idx(&self, source: &str, target: &str) -> Option<EdgeIdx> {
        self.adjacency.get(source).and_then(|out| {
            out.iter()
                .copied()
                .find(|&idx| self.edges[idx as usize].target == target)
        })
    }

    /// Look up a node's arena index by id.
    pub fn node_idx(&self, id: &str) -> Option<NodeIdx> {
        self.node_index.get(id).copied()
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&AssetNode> {
        self.node_idx(id).map(|idx| &self.nodes[idx as usize])
    }

    /// Node at an arena index.
    pub(crate) fn node_at(&self, idx: NodeIdx) -> &AssetNode {
        &self.nodes[idx as usize]
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[AssetNode] {
        &self.nodes
    }

    /// Outgoing edge indices of a node id, in insertion order.
    pub(crate) fn outgoing(&self, id: &str) -> &[EdgeIdx] {
        self.adjacency
            .get(id)
            .map(|out| out.as_slice())
            .unwrap_or(&[])
    }

    /// Edge at an arena index.
    pub(crate) fn edge_at(&self, idx: EdgeIdx) -> &TransitionEdge {
        &self.edges[idx as usize]
    }

    /// Graph statistics: totals, per-kind counts, attribute averages.
    /// Averages are 0.0 for an empty graph.
    pub fn statistics(&self) -> GraphStats {
        let mut stats = GraphStats {
            total_nodes: self.nodes.len(),
            total_edges: self.edges.len(),
            ..GraphStats::default()
        };

        for node in &self.nodes {
            *stats.node_kinds.entry(node.kind.name().into()).or_default() += 1;
        }
        for edge in &self.edges {
            *stats.edge_kinds.entry(edge.kind.name().into()).or_default() += 1;
        }

        if !self.nodes.is_empty() {
            let n = self.nodes.len() as f64;
            stats.avg_exposure = self.nodes.iter().map(|node| node.exposure).sum::<f64>() / n;
            stats.avg_weakness = self.nodes.iter().map(|node| node.weakness).sum::<f64>() / n;
            stats.avg_controls = self.nodes.iter().map(|node| node.controls).sum::<f64>() / n;
        }

        stats
    }

    /// Discard all nodes and edges.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.node_index.clear();
        self.edges.clear();
        self.adjacency.clear();
    }
}

impl Default for AttackGraph {
    fn default() -> Self {
        Self::new()
    }
}
