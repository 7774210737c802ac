#[cfg(test)]
#[path = "../../tests/unit/construction/nearest_neighbour_test.rs"]
mod nearest_neighbour_test;

use crate::models::{Cost, Graph, NodeId, Tour};
use crate::utils::{Random, compare_floats};

/// A default amount of closest unvisited neighbours considered on each step.
pub const DEFAULT_CANDIDATES_SIZE: usize = 3;

/// Builds a tour using nearest neighbour heuristic with random choice among `k` closest
/// unvisited neighbours.
pub struct NearestNeighbour {
    candidates_size: usize,
}

#[derive(Clone, Copy)]
struct Candidate {
    node: usize,
    weight: Cost,
}

impl Default for NearestNeighbour {
    fn default() -> Self {
        Self::new(DEFAULT_CANDIDATES_SIZE)
    }
}

impl NearestNeighbour {
    /// Creates a new instance of `NearestNeighbour`. Candidates size is at least one, with one
    /// the heuristic is a strict greedy nearest neighbour.
    pub fn new(candidates_size: usize) -> Self {
        Self { candidates_size: candidates_size.max(1) }
    }

    /// Returns amount of closest neighbours considered on each step.
    pub fn candidates_size(&self) -> usize {
        self.candidates_size
    }

    /// Constructs a tour starting from the given node. Returns `None` if the walk gets into a
    /// dead end or the last visited node has no edge back to the start node.
    pub fn construct(&self, graph: &Graph, start: NodeId, random: &dyn Random) -> Option<Tour> {
        self.construct_from(graph, graph.index_of(start)?, random)
    }

    pub(crate) fn construct_from(&self, graph: &Graph, start: usize, random: &dyn Random) -> Option<Tour> {
        let size = graph.node_count();
        if size == 1 {
            return Some(Tour::new(vec![start], 0.));
        }

        let mut path = Vec::with_capacity(size);
        let mut visited = vec![false; size];
        let mut candidates = Vec::with_capacity(self.candidates_size);
        let mut total_cost = 0.;

        let mut current = start;
        path.push(current);
        visited[current] = true;

        while path.len() < size {
            candidates.clear();
            self.select_candidates(graph, current, &visited, &mut candidates);

            if candidates.is_empty() {
                return None;
            }

            let Candidate { node, weight } = candidates[random.uniform_index(candidates.len())];

            current = node;
            path.push(current);
            visited[current] = true;
            total_cost += weight;
        }

        total_cost += graph.weight_by_index(current, start)?;

        Some(Tour::new(path, total_cost))
    }

    /// Keeps up to `k` unvisited neighbours with the smallest weights.
    fn select_candidates(&self, graph: &Graph, current: usize, visited: &[bool], candidates: &mut Vec<Candidate>) {
        for (node, weight) in graph.neighbours_by_index(current) {
            if visited[node] {
                continue;
            }

            if candidates.len() < self.candidates_size {
                candidates.push(Candidate { node, weight });
                continue;
            }

            let worst = candidates
                .iter()
                .enumerate()
                .max_by(|(_, a), (_, b)| compare_floats(a.weight, b.weight))
                .map(|(idx, candidate)| (idx, candidate.weight));

            if let Some((idx, worst_weight)) = worst {
                if weight < worst_weight {
                    candidates[idx] = Candidate { node, weight };
                }
            }
        }
    }
}
