#[cfg(test)]
#[path = "../../tests/unit/solver/builder_test.rs"]
mod builder_test;

use super::{Solver, SolverConfig, TelemetryMode};
use crate::construction::DEFAULT_CANDIDATES_SIZE;
use crate::models::Graph;
use crate::utils::{GenericResult, Quota};
use std::sync::Arc;

/// A default time limit in seconds.
pub const DEFAULT_MAX_TIME: f64 = 59.;

/// Provides configurable way to build solver.
pub struct Builder {
    graph: Arc<Graph>,
    config: SolverConfig,
}

impl Builder {
    /// Creates a new instance of `Builder` for the given graph.
    pub fn new(graph: Arc<Graph>) -> Self {
        Self {
            graph,
            config: SolverConfig {
                max_time: DEFAULT_MAX_TIME,
                max_workers: None,
                max_attempts: None,
                candidates_size: DEFAULT_CANDIDATES_SIZE,
                seed: None,
                quota: None,
                telemetry: TelemetryMode::None,
            },
        }
    }

    /// Sets max running time limit in seconds.
    /// Default is 59 seconds.
    pub fn with_max_time(mut self, limit: Option<f64>) -> Self {
        if let Some(limit) = limit {
            self.config.max_time = limit;
        }
        self
    }

    /// Sets max amount of parallel workers, it is additionally limited by amount of available CPUs.
    /// With zero workers no search is run, so only an empty or a single node graph gets a tour.
    /// Default is amount of available CPUs.
    pub fn with_max_workers(mut self, max_workers: Option<usize>) -> Self {
        self.config.max_workers = max_workers;
        self
    }

    /// Sets max amount of completed attempts after which workers stop.
    /// Since workers run in parallel, a few extra attempts may be completed.
    /// Default is no limit.
    pub fn with_max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.config.max_attempts = max_attempts;
        self
    }

    /// Sets amount of closest neighbours considered by tour construction on each step.
    /// Default is 3.
    pub fn with_candidates_size(mut self, candidates_size: Option<usize>) -> Self {
        if let Some(candidates_size) = candidates_size {
            self.config.candidates_size = candidates_size;
        }
        self
    }

    /// Sets randomization seed, each worker uses the seed shifted by its index.
    /// Default is none: workers are seeded from OS entropy.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.config.seed = seed;
        self
    }

    /// Sets an external quota, e.g. a user interruption, which is checked together with time limit.
    /// Default is none.
    pub fn with_quota(mut self, quota: Option<Arc<dyn Quota + Send + Sync>>) -> Self {
        self.config.quota = quota;
        self
    }

    /// Sets telemetry.
    /// Default is no telemetry.
    pub fn with_telemetry(mut self, telemetry: TelemetryMode) -> Self {
        self.config.telemetry = telemetry;
        self
    }

    /// Validates settings and builds a solver.
    pub fn build(self) -> GenericResult<Solver> {
        let config = &self.config;

        if !config.max_time.is_finite() || config.max_time < 0. {
            return Err(format!("max time should be a non-negative finite number, got: '{}'", config.max_time).into());
        }

        if config.candidates_size == 0 {
            return Err("candidates size should be positive".into());
        }

        Ok(Solver::new(self.graph, self.config))
    }
}
