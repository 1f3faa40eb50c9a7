//! Browser timers behind the core [`Scheduler`] trait.

use std::time::Duration;

use folio_core::{Scheduler, Task};
use gloo::timers::callback::Timeout;

/// Longest delay `setTimeout` honors; larger values fire immediately.
pub const MAX_TIMEOUT_MS: u32 = i32::MAX as u32;

/// Schedules tasks with `setTimeout`. Timers are never cancelled, so each
/// handle is forgotten as soon as it is created.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        Timeout::new(timeout_millis(delay), task).forget();
    }
}

/// Delay in whole milliseconds, saturating at [`MAX_TIMEOUT_MS`].
pub fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis())
        .unwrap_or(u32::MAX)
        .min(MAX_TIMEOUT_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_delays_pass_through() {
        assert_eq!(timeout_millis(Duration::ZERO), 0);
        assert_eq!(timeout_millis(Duration::from_millis(5000)), 5000);
    }

    #[test]
    fn long_delays_saturate_below_the_signed_limit() {
        assert_eq!(timeout_millis(Duration::from_millis(i32::MAX as u64)), MAX_TIMEOUT_MS);
        assert_eq!(timeout_millis(Duration::from_millis(i32::MAX as u64 + 1)), MAX_TIMEOUT_MS);
        assert_eq!(timeout_millis(Duration::from_millis(u64::MAX)), MAX_TIMEOUT_MS);
    }
}
