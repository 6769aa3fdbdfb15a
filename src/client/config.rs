//! # Client configuration.
//!
//! Provides [`ClientConfig`], the knobs for one [`LifecycleClient`].
//!
//! There is deliberately little here: per-call timeouts are arguments to
//! each operation, not configuration. The only standing setting is the
//! reachability polling interval.
//!
//! ## Sentinel values
//! - `poll_interval = 0` → clamped to 1 ms by
//!   [`poll_interval_clamped`](ClientConfig::poll_interval_clamped) so the
//!   availability wait cannot busy-spin.
//!
//! [`LifecycleClient`]: crate::LifecycleClient

use std::time::Duration;

/// Configuration for a lifecycle client.
///
/// ## Field semantics
/// - `poll_interval`: how long to sleep between reachability probes while an
///   endpoint is absent. Applies to both wait strategies (the unbounded
///   command-side wait and the bounded status-side wait).
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Delay between reachability probes while waiting for an endpoint.
    pub poll_interval: Duration,
}

impl ClientConfig {
    /// Returns the polling interval clamped to a minimum of 1 ms.
    ///
    /// The wait loops should use this accessor rather than the raw field so
    /// a zero interval cannot turn the availability wait into a busy loop.
    #[inline]
    pub fn poll_interval_clamped(&self) -> Duration {
        self.poll_interval.max(Duration::from_millis(1))
    }
}

impl Default for ClientConfig {
    /// Default configuration:
    ///
    /// - `poll_interval = 1s` (one probe per second while an endpoint is
    ///   absent)
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_poll_interval_is_one_second() {
        assert_eq!(ClientConfig::default().poll_interval, Duration::from_secs(1));
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let cfg = ClientConfig {
            poll_interval: Duration::ZERO,
        };
        assert_eq!(cfg.poll_interval_clamped(), Duration::from_millis(1));
    }
}
