//! # The two availability-wait strategies.
//!
//! Before sending anything, the client waits for the target endpoint to
//! become reachable. The two call families wait differently, and the
//! difference is an observable part of the contract, so the strategies are
//! kept separate and named:
//!
//! - [`until_ready_unbounded`] — command calls. No deadline of its own; it
//!   re-probes forever until the endpoint appears or the process-wide
//!   shutdown token fires. The caller's timeout only governs the response
//!   wait that follows.
//! - [`until_ready_bounded`] — status queries. Hard deadline: once the
//!   caller's window elapses the wait returns `false` promptly, regardless
//!   of remote state.
//!
//! Both strategies check cancellation at least once per polling interval and
//! probe the endpoint before the first sleep, so an already-reachable
//! endpoint costs no delay.

use std::time::Duration;

use tokio::select;
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::transport::ServiceTransport;

/// Waits for `endpoint` to become reachable, with no deadline.
///
/// Returns `true` once a probe succeeds, or `false` if `shutdown` fires
/// while the endpoint is still absent. This is the command-side wait: it can
/// block indefinitely while the remote manager is down.
pub(crate) async fn until_ready_unbounded(
    transport: &dyn ServiceTransport,
    endpoint: &str,
    poll_interval: Duration,
    shutdown: &CancellationToken,
) -> bool {
    loop {
        if transport.is_ready(endpoint).await {
            return true;
        }
        debug!("waiting for the {endpoint} service to appear...");
        select! {
            _ = time::sleep(poll_interval) => {}
            _ = shutdown.cancelled() => return false,
        }
    }
}

/// Waits for `endpoint` to become reachable, up to `timeout`.
///
/// Returns `true` once a probe succeeds, `false` once the deadline elapses
/// or `shutdown` fires. The endpoint is probed at least once even when
/// `timeout` is zero. Sleeps never overshoot the deadline: the last nap is
/// shortened to whatever window remains.
pub(crate) async fn until_ready_bounded(
    transport: &dyn ServiceTransport,
    endpoint: &str,
    poll_interval: Duration,
    timeout: Duration,
    shutdown: &CancellationToken,
) -> bool {
    let deadline = Instant::now() + timeout;
    loop {
        if transport.is_ready(endpoint).await {
            return true;
        }
        let now = Instant::now();
        if now >= deadline {
            return false;
        }
        debug!("waiting for the {endpoint} service to appear...");
        select! {
            _ = time::sleep(poll_interval.min(deadline - now)) => {}
            _ = shutdown.cancelled() => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::transport::{ManageRequest, ServiceResponse};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Transport whose endpoint becomes reachable after a fixed number of
    /// probes. `u32::MAX` means never.
    struct ReadyAfter {
        probes_left: AtomicU32,
    }

    impl ReadyAfter {
        fn new(probes: u32) -> Self {
            Self {
                probes_left: AtomicU32::new(probes),
            }
        }
    }

    #[async_trait]
    impl ServiceTransport for ReadyAfter {
        async fn is_ready(&self, _endpoint: &str) -> bool {
            let left = self.probes_left.load(Ordering::SeqCst);
            if left == 0 {
                return true;
            }
            if left != u32::MAX {
                self.probes_left.fetch_sub(1, Ordering::SeqCst);
            }
            false
        }

        async fn call_manage(
            &self,
            _endpoint: &str,
            _request: ManageRequest,
        ) -> Result<ServiceResponse, TransportError> {
            Err(TransportError::ChannelClosed)
        }

        async fn call_status(&self, _endpoint: &str) -> Result<ServiceResponse, TransportError> {
            Err(TransportError::ChannelClosed)
        }
    }

    const POLL: Duration = Duration::from_secs(1);

    #[tokio::test(start_paused = true)]
    async fn test_unbounded_returns_once_ready() {
        let transport = ReadyAfter::new(3);
        let token = CancellationToken::new();

        let started = Instant::now();
        let ready = until_ready_unbounded(&transport, "x/manage_nodes", POLL, &token).await;

        assert!(ready);
        assert_eq!(started.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unbounded_aborts_on_cancellation() {
        let transport = ReadyAfter::new(u32::MAX);
        let token = CancellationToken::new();

        let canceller = token.clone();
        let cancel = async move {
            time::sleep(Duration::from_secs(5)).await;
            canceller.cancel();
        };
        let (ready, ()) = tokio::join!(
            until_ready_unbounded(&transport, "x/manage_nodes", POLL, &token),
            cancel
        );

        assert!(!ready);
    }

    #[tokio::test(start_paused = true)]
    async fn test_bounded_respects_deadline() {
        let transport = ReadyAfter::new(u32::MAX);
        let token = CancellationToken::new();

        let started = Instant::now();
        let ready = until_ready_bounded(
            &transport,
            "x/is_active",
            POLL,
            Duration::from_millis(2500),
            &token,
        )
        .await;

        assert!(!ready);
        assert_eq!(started.elapsed(), Duration::from_millis(2500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_bounded_probes_once_with_zero_timeout() {
        let reachable = ReadyAfter::new(0);
        let absent = ReadyAfter::new(u32::MAX);
        let token = CancellationToken::new();

        assert!(until_ready_bounded(&reachable, "x/is_active", POLL, Duration::ZERO, &token).await);
        assert!(!until_ready_bounded(&absent, "x/is_active", POLL, Duration::ZERO, &token).await);
    }
}
