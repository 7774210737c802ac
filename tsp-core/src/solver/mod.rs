//! This module contains the search orchestrator: it runs independent randomized restarts on
//! parallel workers against a shared time limit and keeps the best tour found.
//!
//! # Search
//!
//! Each worker repeats the following steps until the quota is reached:
//!
//! - picks a random start node;
//! - builds a tour using randomized nearest neighbour heuristic, a failed construction (dead end
//!   or no closing edge) is silently retried with another start node;
//! - improves the tour with 2-opt local search which also stops when the quota is reached;
//! - counts the attempt and keeps the tour if it is strictly better than the best known.
//!
//! # Degenerate inputs
//!
//! An empty graph gives an empty tour, a graph with one node gives a tour with this node and
//! one attempt. Both cases do not depend on the amount of workers, with zero workers any other
//! graph gives an empty tour. When no worker manages to build a tour (e.g. the graph is disconnected), the
//! result has an empty tour: it should be treated as no solution, not as zero cost.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use tsp_core::models::Graph;
//! use tsp_core::solver::Builder;
//!
//! let mut graph = Graph::default();
//! graph.add_edge(1, 2, 1.);
//! graph.add_edge(2, 3, 1.);
//! graph.add_edge(3, 4, 1.);
//! graph.add_edge(4, 1, 1.);
//! graph.add_edge(1, 3, 2f64.sqrt());
//! graph.add_edge(2, 4, 2f64.sqrt());
//!
//! let solution = Builder::new(Arc::new(graph))
//!     .with_max_time(Some(0.1))
//!     .with_max_workers(Some(2))
//!     .build()
//!     .and_then(|solver| solver.solve())
//!     .expect("cannot solve");
//!
//! assert_eq!(solution.tour.len(), 4);
//! assert!((solution.cost - 4.).abs() < 1E-9);
//! ```

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

mod builder;
pub use self::builder::*;

mod state;
use self::state::SearchState;

mod telemetry;
pub use self::telemetry::*;

mod worker;
use self::worker::SearchContext;
pub use self::worker::WorkerStats;

use crate::construction::NearestNeighbour;
use crate::models::{Cost, Graph, NodeId};
use crate::refinement::TwoOpt;
use crate::utils::*;
use std::sync::Arc;

/// A result of the search.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Solution {
    /// Best found tour, the edge from the last node to the first one is implicit.
    /// Empty when no tour was found.
    pub tour: Vec<NodeId>,
    /// Total cost of the tour including the closing edge, zero if tour is empty.
    pub cost: Cost,
    /// Amount of completed attempts: constructed and improved tours.
    pub attempts: usize,
    /// Search metrics.
    pub metrics: Metrics,
}

impl Solution {
    /// Returns true if no tour was found.
    pub fn is_empty(&self) -> bool {
        self.tour.is_empty()
    }
}

/// Solver settings, see [`Builder`] for details.
pub(crate) struct SolverConfig {
    pub max_time: f64,
    pub max_workers: Option<usize>,
    pub max_attempts: Option<usize>,
    pub candidates_size: usize,
    pub seed: Option<u64>,
    pub quota: Option<Arc<dyn Quota + Send + Sync>>,
    pub telemetry: TelemetryMode,
}

/// Searches for a short Hamiltonian cycle using parallel randomized restarts.
pub struct Solver {
    graph: Arc<Graph>,
    config: SolverConfig,
}

impl Solver {
    pub(crate) fn new(graph: Arc<Graph>, config: SolverConfig) -> Self {
        Self { graph, config }
    }

    /// Runs the search and blocks until all workers are stopped.
    pub fn solve(&self) -> GenericResult<Solution> {
        let graph = self.graph.as_ref();
        let telemetry = Telemetry::new(self.config.telemetry.clone());

        match graph.node_count() {
            0 => return Ok(Solution::default()),
            1 => {
                let metrics = Metrics { attempts: 1, ..Metrics::default() };
                return Ok(Solution { tour: graph.nodes().collect(), cost: 0., attempts: 1, metrics });
            }
            _ => {}
        }

        let workers = get_workers(self.config.max_workers);
        if workers == 0 {
            return Ok(Solution::default());
        }

        let pool = ThreadPool::new(workers)?;
        let quota = self.create_quota();

        telemetry.on_start(graph.node_count(), graph.edge_count(), pool.size(), self.config.max_time);

        let context = SearchContext {
            graph,
            construction: NearestNeighbour::new(self.config.candidates_size),
            local_search: TwoOpt::default(),
            quota: quota.as_ref(),
            state: SearchState::new(),
            telemetry: &telemetry,
            seed: self.config.seed,
            max_attempts: self.config.max_attempts,
        };

        let stats = pool.execute(|| parallel_into_collect((0..workers).collect(), |idx| context.run_worker(idx)));

        let (best, attempts) = context.state.into_best();
        let mut solution = best
            .map(|tour| Solution { tour: tour.nodes(graph), cost: tour.cost(), attempts, ..Solution::default() })
            .unwrap_or_else(|| Solution { attempts, ..Solution::default() });

        solution.metrics = telemetry.on_result(&solution, stats.as_slice());

        Ok(solution)
    }

    /// Creates a quota which is reached when time limit is exceeded or external quota is reached.
    fn create_quota(&self) -> Arc<dyn Quota + Send + Sync> {
        let time_quota: Arc<dyn Quota + Send + Sync> = Arc::new(TimeQuota::new(self.config.max_time));

        match self.config.quota.clone() {
            Some(quota) => Arc::new(CompositeQuota::new(vec![time_quota, quota])),
            None => time_quota,
        }
    }
}

/// Solves the problem using given amount of parallel workers and time limit in seconds.
pub fn solve(graph: Arc<Graph>, max_parallelism: usize, max_seconds: f64) -> GenericResult<Solution> {
    Builder::new(graph).with_max_workers(Some(max_parallelism)).with_max_time(Some(max_seconds)).build()?.solve()
}
