#[cfg(test)]
#[path = "../../tests/unit/refinement/two_opt_test.rs"]
mod two_opt_test;

use crate::models::{Cost, Graph, Tour};
use crate::utils::Quota;

/// A minimal cost change which is considered as an improvement. Protects from endless
/// toggling between tours of equal cost due to floating point noise.
pub const IMPROVEMENT_EPSILON: Cost = 1E-9;

/// Keeps track of the work done by [`TwoOpt`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TwoOptStats {
    /// Amount of started sweeps over all position pairs.
    pub sweeps: usize,
    /// Amount of applied moves.
    pub moves: usize,
    /// True if the search was stopped by quota before reaching a local optimum.
    pub is_interrupted: bool,
}

/// Implements a classical TSP's two opt local search with first improvement strategy.
///
/// A move removes edges `(u1, v1)` and `(u2, v2)` starting at positions `i` and `j`, then
/// reconnects the tour with `(u1, u2)` and `(v1, v2)` by reversing the segment between them.
/// Moves which need an edge absent from the graph are ignored, so the graph does not have to be
/// complete. For algorithm details, see https://en.wikipedia.org/wiki/2-opt
#[derive(Default)]
pub struct TwoOpt {}

impl TwoOpt {
    /// Improves the tour until no improving move exists or the quota is reached.
    /// The quota is checked before every sweep, the returned tour is never worse than the given one.
    pub fn improve(&self, graph: &Graph, tour: Tour, quota: &dyn Quota) -> (Tour, TwoOptStats) {
        let Tour { mut path, mut cost } = tour;
        let mut stats = TwoOptStats::default();
        let size = path.len();

        loop {
            if quota.is_reached() {
                stats.is_interrupted = true;
                break;
            }

            stats.sweeps += 1;
            let mut has_improvement = false;

            for i in 0..size {
                for j in (i + 2)..size {
                    // exchanging the edges adjacent through the first node does not change the cycle
                    if i == 0 && j == size - 1 {
                        continue;
                    }

                    if let Some(delta) = get_delta(graph, &path, i, j) {
                        if delta < -IMPROVEMENT_EPSILON {
                            path[i + 1..=j].reverse();
                            cost += delta;
                            stats.moves += 1;
                            has_improvement = true;
                        }
                    }
                }
            }

            if !has_improvement {
                break;
            }
        }

        (Tour::new(path, cost), stats)
    }
}

/// Returns cost change of the move for positions `i` and `j` or `None` if one of the new edges
/// does not exist.
fn get_delta(graph: &Graph, path: &[usize], i: usize, j: usize) -> Option<Cost> {
    let size = path.len();
    let (u1, v1) = (path[i], path[(i + 1) % size]);
    let (u2, v2) = (path[j], path[(j + 1) % size]);

    let added = graph.weight_by_index(u1, u2)? + graph.weight_by_index(v1, v2)?;
    let removed = graph.weight_by_index(u1, v1)? + graph.weight_by_index(u2, v2)?;

    Some(added - removed)
}
