
use crate::utils::Quota;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// A quota which is never reached.
pub struct NoQuota;

impl Quota for NoQuota {
    fn is_reached(&self) -> bool {
        false
    }
}

/// A quota which state is controlled by test.
#[derive(Default)]
pub struct FlagQuota {
    is_reached: AtomicBool,
}

impl FlagQuota {
    pub fn new(is_reached: bool) -> Self {
        Self { is_reached: AtomicBool::new(is_reached) }
    }

    pub fn set(&self, is_reached: bool) {
        self.is_reached.store(is_reached, Ordering::Relaxed);
    }
}

impl Quota for FlagQuota {
    fn is_reached(&self) -> bool {
        self.is_reached.load(Ordering::Relaxed)
    }
}

/// A quota which is reached after it is checked given amount of times.
pub struct CountQuota {
    checks: AtomicUsize,
    limit: usize,
}

impl CountQuota {
    pub fn new(limit: usize) -> Self {
        Self { checks: AtomicUsize::new(0), limit }
    }
}

impl Quota for CountQuota {
    fn is_reached(&self) -> bool {
        self.checks.fetch_add(1, Ordering::Relaxed) >= self.limit
    }
}
