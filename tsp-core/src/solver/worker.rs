#[cfg(test)]
#[path = "../../tests/unit/solver/worker_test.rs"]
mod worker_test;

use super::{SearchState, Telemetry};
use crate::construction::NearestNeighbour;
use crate::models::Graph;
use crate::refinement::TwoOpt;
use crate::utils::{DefaultRandom, Quota, Random};

/// Keeps statistics of one worker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorkerStats {
    /// Amount of completed attempts: constructed and refined tours.
    pub attempts: usize,
    /// Amount of constructions which failed to produce a tour.
    pub failures: usize,
    /// Amount of local search sweeps.
    pub sweeps: usize,
}

/// Shared, read-only context of all workers of one search.
pub(crate) struct SearchContext<'a> {
    pub graph: &'a Graph,
    pub construction: NearestNeighbour,
    pub local_search: TwoOpt,
    pub quota: &'a (dyn Quota + Send + Sync),
    pub state: SearchState,
    pub telemetry: &'a Telemetry,
    pub seed: Option<u64>,
    pub max_attempts: Option<usize>,
}

impl SearchContext<'_> {
    /// Runs randomized restarts until the quota is reached.
    pub fn run_worker(&self, worker_idx: usize) -> WorkerStats {
        let random = DefaultRandom::new_with_optional_seed(self.seed.map(|seed| seed.wrapping_add(worker_idx as u64)));
        let size = self.graph.node_count();
        let mut stats = WorkerStats::default();

        while !self.is_terminated() {
            let start = random.uniform_index(size);

            let Some(tour) = self.construction.construct_from(self.graph, start, &random) else {
                stats.failures += 1;
                continue;
            };

            let (tour, ls_stats) = self.local_search.improve(self.graph, tour, self.quota);

            stats.attempts += 1;
            stats.sweeps += ls_stats.sweeps;

            if let Some(attempts) = self.state.accept(&tour) {
                self.telemetry.on_improvement(worker_idx, tour.cost(), attempts);
            }
        }

        stats
    }

    fn is_terminated(&self) -> bool {
        self.quota.is_reached() || self.max_attempts.is_some_and(|max_attempts| self.state.attempts() >= max_attempts)
    }
}
