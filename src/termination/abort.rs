//! External cancellation.

use super::TerminationCondition;
use crate::candidate::GenerationStats;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Stops the run once [`abort`](Self::abort) has been called.
///
/// Clones share the same flag, so one clone can be handed to the engine and
/// another kept by the caller (or moved to another thread). The flag is only
/// looked at between generations; the generation in progress always
/// completes.
///
/// ```
/// use u_evolve::termination::UserAbort;
///
/// let abort = UserAbort::new();
/// let handle = abort.clone();
/// assert!(!abort.is_aborted());
/// handle.abort();
/// assert!(abort.is_aborted());
/// ```
#[derive(Debug, Clone, Default)]
pub struct UserAbort {
    flag: Arc<AtomicBool>,
}

impl UserAbort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing cancellation flag.
    pub fn from_flag(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }

    /// Requests the run to stop after the current generation.
    pub fn abort(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_aborted(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Clears the flag so the condition can be reused for another run.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}

impl TerminationCondition for UserAbort {
    fn should_terminate(&self, _stats: &GenerationStats) -> bool {
        self.is_aborted()
    }
}
