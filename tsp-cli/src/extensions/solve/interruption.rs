//! Interruption handler.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/interruption_test.rs"]
mod interruption_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tsp_core::utils::{GenericResult, Quota};

/// Creates a quota which is reached once user presses Ctrl-C (or process receives termination
/// signal). Can be called only once per process.
pub fn create_interruption_quota() -> GenericResult<Arc<dyn Quota + Send + Sync>> {
    let quota = InterruptionQuota::default();

    ctrlc::set_handler({
        let should_interrupt = quota.should_interrupt.clone();
        move || {
            should_interrupt.store(true, Ordering::Relaxed);
        }
    })
    .map_err(|err| format!("cannot set interruption handler: '{err}'"))?;

    Ok(Arc::new(quota))
}

/// A quota which is reached when interruption flag is set.
#[derive(Default)]
pub struct InterruptionQuota {
    should_interrupt: Arc<AtomicBool>,
}

impl InterruptionQuota {
    /// Sets interruption flag.
    pub fn interrupt(&self) {
        self.should_interrupt.store(true, Ordering::Relaxed);
    }
}

impl Quota for InterruptionQuota {
    fn is_reached(&self) -> bool {
        self.should_interrupt.load(Ordering::Relaxed)
    }
}
