//! A module which provides the logic to collect metrics about search execution and simple logging.

use crate::models::Cost;
use crate::solver::{Solution, WorkerStats};
use crate::utils::Timer;
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the solver.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Specifies a telemetry mode.
#[derive(Clone, Default)]
pub enum TelemetryMode {
    /// No telemetry at all.
    #[default]
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
    },
}

/// Encapsulates different measurements regarding search evaluation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metrics {
    /// Search duration in milliseconds.
    pub duration: u128,
    /// Amount of completed attempts.
    pub attempts: usize,
    /// Amount of constructions which failed to produce a tour.
    pub failures: usize,
    /// Amount of local search sweeps done by all workers.
    pub sweeps: usize,
    /// Speed: attempts per second.
    pub speed: f64,
}

/// Provides way to collect metrics and write information into log.
pub struct Telemetry {
    mode: TelemetryMode,
    time: Timer,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry` and starts its timer.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { mode, time: Timer::start() }
    }

    /// Reports search configuration.
    pub fn on_start(&self, nodes: usize, edges: usize, workers: usize, max_time: f64) {
        self.log(&format!("search on {nodes} nodes / {edges} edges using {workers} workers and {max_time}s time limit"));
    }

    /// Reports a new best tour found by a worker.
    pub fn on_improvement(&self, worker_idx: usize, cost: Cost, attempts: usize) {
        self.log(&format!(
            "[{:.3}s] worker {worker_idx} found new best cost {cost:.4} after {attempts} attempts",
            self.time.elapsed_secs_as_f64()
        ));
    }

    /// Reports final search statistics and returns collected metrics.
    pub fn on_result(&self, solution: &Solution, stats: &[WorkerStats]) -> Metrics {
        let duration = self.time.elapsed_millis();
        let failures = stats.iter().map(|stats| stats.failures).sum();
        let sweeps = stats.iter().map(|stats| stats.sweeps).sum();
        let speed = if duration > 0 { solution.attempts as f64 * 1000. / duration as f64 } else { 0. };

        let metrics = Metrics { duration, attempts: solution.attempts, failures, sweeps, speed };

        if solution.tour.is_empty() {
            self.log(&format!(
                "[{:.3}s] no tour found: {} failed constructions",
                self.time.elapsed_secs_as_f64(),
                metrics.failures
            ));
        } else {
            self.log(&format!(
                "[{:.3}s] best cost {:.4} after {} attempts ({:.2} attempts/s), {} failed constructions, {} sweeps",
                self.time.elapsed_secs_as_f64(),
                solution.cost,
                metrics.attempts,
                metrics.speed,
                metrics.failures,
                metrics.sweeps
            ));
        }

        metrics
    }

    /// Writes message to the log if logging is enabled.
    pub fn log(&self, message: &str) {
        if let TelemetryMode::OnlyLogging { logger } = &self.mode {
            logger(message);
        }
    }
}
