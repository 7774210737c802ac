#[cfg(test)]
#[path = "../../tests/unit/models/graph_test.rs"]
mod graph_test;

use rustc_hash::FxHashMap;

/// An opaque node identifier. Identifiers are not required to be contiguous.
pub type NodeId = i64;

/// Represents the cost of a transition between two nodes.
pub type Cost = f64;

/// An undirected weighted graph.
///
/// Each node identifier is assigned a dense index in the order it is first seen, adjacency is
/// kept per index, so lookups of `weight(u, v)` are symmetric and take constant time.
/// The graph is not supposed to be modified once a search is started.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: Vec<NodeId>,
    index: FxHashMap<NodeId, usize>,
    adjacency: Vec<FxHashMap<usize, Cost>>,
    edges: usize,
}

impl Graph {
    /// Creates a new empty graph with preallocated space for the given amount of nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            index: FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
            adjacency: Vec::with_capacity(nodes),
            edges: 0,
        }
    }

    /// Adds an undirected edge registering both endpoints as known nodes. Adding the same pair
    /// again replaces its weight. A self-loop registers the node, but no edge is stored.
    /// Weight is not validated.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Cost) {
        let from = self.register(from);
        let to = self.register(to);

        if from == to {
            return;
        }

        if self.adjacency[from].insert(to, weight).is_none() {
            self.edges += 1;
        }
        self.adjacency[to].insert(from, weight);
    }

    /// Registers a node without edges, returns true if it was not known before.
    pub fn add_node(&mut self, node: NodeId) -> bool {
        let size = self.nodes.len();

        self.register(node) == size
    }

    /// Returns amount of known nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns amount of undirected edges: a pair of nodes is counted once.
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Returns true if the node is known.
    pub fn contains(&self, node: NodeId) -> bool {
        self.index.contains_key(&node)
    }

    /// Returns known nodes in the order they were registered.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// Returns neighbours of the node with corresponding edge weights.
    /// Unknown node has no neighbours.
    pub fn neighbours(&self, node: NodeId) -> impl Iterator<Item = (NodeId, Cost)> + '_ {
        self.index_of(node)
            .into_iter()
            .flat_map(move |idx| self.neighbours_by_index(idx).map(move |(other, weight)| (self.nodes[other], weight)))
    }

    /// Returns weight of the edge between two nodes or `None` if there is no such edge.
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<Cost> {
        let from = self.index_of(from)?;
        let to = self.index_of(to)?;

        self.weight_by_index(from, to)
    }

    /// Returns dense index of the node.
    pub(crate) fn index_of(&self, node: NodeId) -> Option<usize> {
        self.index.get(&node).copied()
    }

    /// Returns node identifier by its dense index.
    pub(crate) fn node_at(&self, idx: usize) -> NodeId {
        self.nodes[idx]
    }

    pub(crate) fn neighbours_by_index(&self, idx: usize) -> impl Iterator<Item = (usize, Cost)> + '_ {
        self.adjacency[idx].iter().map(|(&other, &weight)| (other, weight))
    }

    pub(crate) fn weight_by_index(&self, from: usize, to: usize) -> Option<Cost> {
        self.adjacency[from].get(&to).copied()
    }

    fn register(&mut self, node: NodeId) -> usize {
        if let Some(&idx) = self.index.get(&node) {
            return idx;
        }

        let idx = self.nodes.len();
        self.nodes.push(node);
        self.index.insert(node, idx);
        self.adjacency.push(FxHashMap::default());

        idx
    }
}
