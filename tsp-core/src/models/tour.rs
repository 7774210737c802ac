#[cfg(test)]
#[path = "../../tests/unit/models/tour_test.rs"]
mod tour_test;

use super::{Cost, Graph, NodeId};
use crate::utils::GenericResult;
use rustc_hash::FxHashSet;

/// A tour is a sequence of nodes that visits each node exactly once and returns to the first one.
/// Nodes are kept as dense graph indices together with the total tour cost.
#[derive(Clone, Debug, PartialEq)]
pub struct Tour {
    pub(crate) path: Vec<usize>,
    pub(crate) cost: Cost,
}

impl Tour {
    /// Creates a new tour from dense indices and its known cost.
    pub(crate) fn new(path: Vec<usize>, cost: Cost) -> Self {
        Self { path, cost }
    }

    /// Returns total cost of the tour including the closing edge.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Returns amount of nodes in the tour.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Returns true if the tour has no nodes.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Translates the tour into node identifiers of the given graph.
    pub fn nodes(&self, graph: &Graph) -> Vec<NodeId> {
        self.path.iter().map(|&idx| graph.node_at(idx)).collect()
    }
}

/// Checks that the tour is a Hamiltonian cycle in the graph and returns its total cost.
pub fn check_tour(graph: &Graph, tour: &[NodeId]) -> GenericResult<Cost> {
    if tour.len() != graph.node_count() {
        return Err(format!("tour has {} nodes, graph has {}", tour.len(), graph.node_count()).into());
    }

    let mut visited = FxHashSet::default();
    if let Some(node) = tour.iter().find(|&&node| !visited.insert(node)) {
        return Err(format!("node '{node}' is visited more than once").into());
    }

    if let Some(node) = tour.iter().find(|&&node| !graph.contains(node)) {
        return Err(format!("node '{node}' is not in the graph").into());
    }

    if tour.len() < 2 {
        return Ok(0.);
    }

    tour.iter().zip(tour.iter().cycle().skip(1)).try_fold(0., |total, (&from, &to)| {
        graph
            .edge_weight(from, to)
            .map(|weight| total + weight)
            .ok_or_else(|| format!("no edge between '{from}' and '{to}'").into())
    })
}
