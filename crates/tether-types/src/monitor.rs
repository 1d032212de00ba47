use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::CancelledError;

/// Cancellation-aware monitor handed to every long-running call.
///
/// The monitor is cloned freely; all clones observe the same cancellation
/// flag. Callers cancel from any thread via [`ProgressMonitor::cancel`];
/// workers poll [`ProgressMonitor::check_cancelled`] at dispatch boundaries
/// and before expensive work.
///
/// [`ProgressMonitor::dummy`] produces a monitor that ignores cancellation
/// requests entirely, for operations that are not cancellable by contract.
#[derive(Clone)]
pub struct ProgressMonitor {
    cancelled: Arc<AtomicBool>,
    cancel_enabled: bool,
}

impl ProgressMonitor {
    /// Create a cancellable monitor.
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            cancel_enabled: true,
        }
    }

    /// Create a monitor that ignores cancellation requests.
    ///
    /// Used for operations where cancellation is impossible by contract;
    /// `is_cancelled` on a dummy monitor never returns `true`.
    pub fn dummy() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            cancel_enabled: false,
        }
    }

    /// Request cancellation. No-op on a dummy monitor.
    pub fn cancel(&self) {
        if self.cancel_enabled {
            self.cancelled.store(true, Ordering::SeqCst);
        }
    }

    /// Returns `true` if cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Poll for cancellation, failing if it has been requested.
    pub fn check_cancelled(&self) -> Result<(), CancelledError> {
        if self.is_cancelled() {
            Err(CancelledError)
        } else {
            Ok(())
        }
    }
}

impl Default for ProgressMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProgressMonitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressMonitor")
            .field("cancelled", &self.is_cancelled())
            .field("cancel_enabled", &self.cancel_enabled)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_monitor_is_not_cancelled() {
        let monitor = ProgressMonitor::new();
        assert!(!monitor.is_cancelled());
        assert!(monitor.check_cancelled().is_ok());
    }

    #[test]
    fn cancel_is_observed_by_clones() {
        let monitor = ProgressMonitor::new();
        let clone = monitor.clone();
        monitor.cancel();
        assert!(clone.is_cancelled());
        assert_eq!(clone.check_cancelled(), Err(CancelledError));
    }

    #[test]
    fn dummy_monitor_ignores_cancel() {
        let monitor = ProgressMonitor::dummy();
        monitor.cancel();
        assert!(!monitor.is_cancelled());
        assert!(monitor.check_cancelled().is_ok());
    }

    #[test]
    fn cancel_from_another_thread() {
        let monitor = ProgressMonitor::new();
        let remote = monitor.clone();
        std::thread::spawn(move || remote.cancel())
            .join()
            .expect("thread should not panic");
        assert!(monitor.is_cancelled());
    }
}
