//! Auto-dismiss timer for the notification banner.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Time a notification stays visible before it closes itself.
pub const NOTIFICATION_DISMISS_DELAY: Duration = Duration::from_millis(3000);

/// Owns at most one pending close callback.
///
/// Arming replaces any pending callback; dropping the timer cancels it, so no
/// callback fires after its owner is gone.
#[derive(Debug)]
pub struct NotificationTimer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Default for NotificationTimer {
    fn default() -> Self {
        Self::new(NOTIFICATION_DISMISS_DELAY)
    }
}

impl NotificationTimer {
    /// Timer firing `delay` after each arm.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `on_close` to run after the delay, cancelling any pending one.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn arm<F>(&mut self, on_close: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let deadline = Instant::now() + self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            on_close();
        }));
    }

    /// Drop the pending callback, if any.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }

    /// Whether a callback is scheduled and has not yet run.
    pub fn is_armed(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| !pending.is_finished())
    }
}

impl Drop for NotificationTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
