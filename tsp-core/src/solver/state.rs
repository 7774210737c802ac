#[cfg(test)]
#[path = "../../tests/unit/solver/state_test.rs"]
mod state_test;

use crate::models::{Cost, Tour};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Keeps the best tour found by all workers together with the amount of completed attempts.
/// All updates happen under one lock, the attempts counter can be read without locking.
pub(crate) struct SearchState {
    inner: Mutex<BestState>,
    attempts: AtomicUsize,
}

struct BestState {
    path: Vec<usize>,
    cost: Cost,
}

impl SearchState {
    pub fn new() -> Self {
        Self { inner: Mutex::new(BestState { path: Vec::new(), cost: Cost::INFINITY }), attempts: AtomicUsize::new(0) }
    }

    /// Counts a completed attempt and keeps its tour if it is strictly better than the best known.
    /// Returns the amount of attempts when the tour is accepted as a new best.
    pub fn accept(&self, tour: &Tour) -> Option<usize> {
        let mut state = self.lock();

        let attempts = self.attempts.fetch_add(1, Ordering::Relaxed) + 1;

        if tour.cost < state.cost {
            state.cost = tour.cost;
            state.path.clone_from(&tour.path);

            Some(attempts)
        } else {
            None
        }
    }

    /// Returns amount of completed attempts.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::Relaxed)
    }

    /// Returns the best tour, if any, and amount of completed attempts.
    pub fn into_best(self) -> (Option<Tour>, usize) {
        let BestState { path, cost } = self.inner.into_inner().unwrap_or_else(PoisonError::into_inner);
        let attempts = self.attempts.into_inner();

        let tour = if path.is_empty() { None } else { Some(Tour::new(path, cost)) };

        (tour, attempts)
    }

    fn lock(&self) -> MutexGuard<'_, BestState> {
        // NOTE the state is always consistent, so it is safe to ignore poisoning
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
