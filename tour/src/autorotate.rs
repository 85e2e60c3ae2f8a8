//! Auto-rotation timer driver.
//!
//! The driver owns at most one live timer handle `T`. Handles are expected to
//! cancel themselves on drop (as `gloo_timers::callback::Interval` does), so
//! releasing the handle is the only teardown needed. Each handle is bound to
//! the session epoch it was started under: a room or unit switch bumps the
//! epoch and the next [`AutoRotationDriver::sync`] replaces the old timer.

#[cfg(test)]
#[path = "autorotate_test.rs"]
mod autorotate_test;

#[derive(Debug)]
pub struct AutoRotationDriver<T> {
    timer: Option<(u64, T)>,
}

impl<T> Default for AutoRotationDriver<T> {
    fn default() -> Self {
        Self { timer: None }
    }
}

impl<T> AutoRotationDriver<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile the timer with the viewer's `enabled` flag and the current
    /// session `epoch`.
    ///
    /// - disabled: any running timer is dropped.
    /// - enabled, same epoch: the running timer is kept and `start` is not called.
    /// - enabled, no timer or stale epoch: the old timer is dropped before
    ///   `start` builds a new one.
    ///
    /// Returns `true` when a new timer was started.
    pub fn sync(&mut self, enabled: bool, epoch: u64, start: impl FnOnce() -> T) -> bool {
        if !enabled {
            self.stop();
            return false;
        }
        if matches!(self.timer, Some((current, _)) if current == epoch) {
            return false;
        }
        self.stop();
        log::debug!("autorotate: starting timer for epoch {epoch}");
        self.timer = Some((epoch, start()));
        true
    }

    /// Drop the running timer, if any. Returns whether one was running.
    pub fn stop(&mut self) -> bool {
        match self.timer.take() {
            Some((epoch, handle)) => {
                log::debug!("autorotate: stopping timer for epoch {epoch}");
                drop(handle);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Epoch the running timer was started under.
    #[must_use]
    pub fn epoch(&self) -> Option<u64> {
        self.timer.as_ref().map(|(epoch, _)| *epoch)
    }
}
