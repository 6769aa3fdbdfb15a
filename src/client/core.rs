//! # LifecycleClient: bounded-time calls against a remote lifecycle manager.
//!
//! One client targets one remote manager, addressed by two endpoints derived
//! from the base name at construction. Every public operation runs the same
//! per-call protocol; nothing persists between calls.
//!
//! ## Call flow
//! ```text
//! startup/shutdown/pause/resume/reset(timeout)     is_active(timeout)
//!                 │                                        │
//!                 ▼                                        ▼
//!      send_command(code, timeout)                 status query
//!                 │                                        │
//!   wait: UNBOUNDED + cancellation           wait: BOUNDED by timeout
//!                 │                                        │
//!      (cancelled → false) ──┐             (deadline hit → Timeout) ──┐
//!                 │          │                             │          │
//!                 ▼          │                             ▼          │
//!          send one request  │                      send one request  │
//!                 │          │                             │          │
//!        response within     │                    response within     │
//!        timeout?            │                    timeout?            │
//!        yes → success flag  │                    yes → Active /      │
//!        no  → false ◄───────┘                          Inactive      │
//!                                                 no  → Timeout ◄─────┘
//! ```
//!
//! ## Rules
//! - Exactly **one** request per call, sent only after the availability wait
//!   completes; a cancelled wait sends nothing.
//! - Timeouts are **hard deadlines** measured from the start of the
//!   respective wait, never renewed on partial progress.
//! - Runtime outcomes are return values, never errors; the only `Err` in
//!   this module is construction with an empty base name.

use std::fmt;
use std::time::Duration;

use tokio::time;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::client::config::ClientConfig;
use crate::client::wait;
use crate::command::{Command, SystemStatus};
use crate::error::ClientError;
use crate::transport::{ManageRequest, TransportRef};

/// Suffix of the endpoint accepting lifecycle commands.
const MANAGE_SUFFIX: &str = "/manage_nodes";
/// Suffix of the endpoint answering status queries.
const ACTIVE_SUFFIX: &str = "/is_active";

/// Client for issuing lifecycle commands and status queries to a remote
/// manager, with caller-supplied deadlines.
///
/// ### Responsibilities
/// - **Endpoint identity**: derives the two service addresses once, at
///   construction, and never changes them.
/// - **Availability wait**: blocks until the target endpoint is reachable,
///   using the wait strategy of the call family (see below).
/// - **Bounded call**: sends exactly one request and classifies the outcome
///   as success, failure, or timeout.
///
/// ### The two wait strategies
/// Command calls wait for the manage endpoint **without a deadline**: only
/// the process-wide shutdown token can end the wait early, and the caller's
/// timeout applies solely to the response. Status queries wait **at most
/// `timeout`** for the endpoint, then give up with
/// [`SystemStatus::Timeout`]. The asymmetry is an observable part of the
/// remote manager's calling convention and is preserved deliberately.
///
/// ### Concurrency
/// All operations take `&self` and the client holds no cross-call mutable
/// state, so one instance may be shared across tasks. Concurrent calls race
/// independently against the remote endpoint; the client imposes no ordering
/// between them.
#[derive(Clone)]
pub struct LifecycleClient {
    /// Transport collaborator used for probes and calls.
    transport: TransportRef,
    /// Process-wide liveness signal; ends unbounded waits early.
    shutdown: CancellationToken,
    /// Standing settings (polling interval).
    config: ClientConfig,
    /// Identity string used in log lines.
    client_id: String,
    /// Derived address of the command channel.
    manage_endpoint: String,
    /// Derived address of the status channel.
    active_endpoint: String,
}

impl LifecycleClient {
    /// Creates a client targeting the manager named `name`, with the default
    /// configuration.
    ///
    /// `namespace`, when present, qualifies the client's log identity; it
    /// does not alter the derived service addresses.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::EmptyName`] if `name` is empty or whitespace
    /// only. This is the only failure; no I/O happens at construction.
    ///
    /// # Example
    /// ```
    /// # use std::sync::Arc;
    /// # use lifectl::{LifecycleClient, ServiceTransport, ManageRequest, ServiceResponse, TransportError};
    /// # use tokio_util::sync::CancellationToken;
    /// # use async_trait::async_trait;
    /// # struct Nowhere;
    /// # #[async_trait]
    /// # impl ServiceTransport for Nowhere {
    /// #     async fn is_ready(&self, _: &str) -> bool { false }
    /// #     async fn call_manage(&self, _: &str, _: ManageRequest) -> Result<ServiceResponse, TransportError> {
    /// #         Err(TransportError::ChannelClosed)
    /// #     }
    /// #     async fn call_status(&self, _: &str) -> Result<ServiceResponse, TransportError> {
    /// #         Err(TransportError::ChannelClosed)
    /// #     }
    /// # }
    /// let client = LifecycleClient::new(
    ///     Arc::new(Nowhere),
    ///     CancellationToken::new(),
    ///     "controller",
    ///     None,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(client.manage_endpoint(), "controller/manage_nodes");
    /// assert_eq!(client.active_endpoint(), "controller/is_active");
    /// ```
    pub fn new(
        transport: TransportRef,
        shutdown: CancellationToken,
        name: &str,
        namespace: Option<&str>,
    ) -> Result<Self, ClientError> {
        Self::with_config(transport, shutdown, name, namespace, ClientConfig::default())
    }

    /// Creates a client with an explicit [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::EmptyName`] if `name` is empty or whitespace
    /// only.
    pub fn with_config(
        transport: TransportRef,
        shutdown: CancellationToken,
        name: &str,
        namespace: Option<&str>,
        config: ClientConfig,
    ) -> Result<Self, ClientError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ClientError::EmptyName);
        }

        let client_id = match namespace.map(str::trim).filter(|ns| !ns.is_empty()) {
            Some(ns) => format!("{ns}/{name}_service_client"),
            None => format!("{name}_service_client"),
        };

        Ok(Self {
            transport,
            shutdown,
            config,
            client_id,
            manage_endpoint: format!("{name}{MANAGE_SUFFIX}"),
            active_endpoint: format!("{name}{ACTIVE_SUFFIX}"),
        })
    }

    /// Address of the command channel (`<base>/manage_nodes`).
    pub fn manage_endpoint(&self) -> &str {
        &self.manage_endpoint
    }

    /// Address of the status channel (`<base>/is_active`).
    pub fn active_endpoint(&self) -> &str {
        &self.active_endpoint
    }

    /// Identity string this client uses in log lines.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Requests startup of the managed system.
    ///
    /// Returns `true` iff the manager was reached and reported success.
    /// See [`is_active`](Self::is_active) for the status-side counterpart.
    pub async fn startup(&self, timeout: Duration) -> bool {
        self.send_command(Command::Startup, timeout).await
    }

    /// Requests shutdown of the managed system.
    pub async fn shutdown(&self, timeout: Duration) -> bool {
        self.send_command(Command::Shutdown, timeout).await
    }

    /// Requests that the managed system pause.
    pub async fn pause(&self, timeout: Duration) -> bool {
        self.send_command(Command::Pause, timeout).await
    }

    /// Requests that the managed system resume from pause.
    pub async fn resume(&self, timeout: Duration) -> bool {
        self.send_command(Command::Resume, timeout).await
    }

    /// Requests a reset of the managed system to its initial state.
    pub async fn reset(&self, timeout: Duration) -> bool {
        self.send_command(Command::Reset, timeout).await
    }

    /// Queries whether the managed system is currently active.
    ///
    /// Unlike the command calls, the availability wait here is bounded by
    /// `timeout`: if the status endpoint does not appear within the window
    /// the call returns [`SystemStatus::Timeout`] promptly instead of
    /// blocking. A transport-reported call failure also maps to `Timeout`
    /// (the round trip did not complete). Timeout is a normal return value;
    /// this method never raises.
    pub async fn is_active(&self, timeout: Duration) -> SystemStatus {
        info!(
            "{}: waiting for the {} service...",
            self.client_id, self.active_endpoint
        );
        let ready = wait::until_ready_bounded(
            self.transport.as_ref(),
            &self.active_endpoint,
            self.config.poll_interval_clamped(),
            timeout,
            &self.shutdown,
        )
        .await;
        if !ready {
            return SystemStatus::Timeout;
        }

        info!(
            "{}: sending {} request",
            self.client_id, self.active_endpoint
        );
        match time::timeout(timeout, self.transport.call_status(&self.active_endpoint)).await {
            Ok(Ok(response)) => {
                if response.success {
                    SystemStatus::Active
                } else {
                    SystemStatus::Inactive
                }
            }
            Ok(Err(err)) => {
                warn!(
                    "{}: {} call failed ({}), reporting timeout",
                    self.client_id,
                    self.active_endpoint,
                    err.as_label()
                );
                SystemStatus::Timeout
            }
            Err(_elapsed) => SystemStatus::Timeout,
        }
    }

    /// Shared dispatch for the five command operations.
    ///
    /// Waits for the manage endpoint with the unbounded strategy, sends one
    /// request carrying `command`, and classifies the outcome. `timeout`
    /// bounds only the response wait.
    async fn send_command(&self, command: Command, timeout: Duration) -> bool {
        info!(
            "{}: waiting for the {} service...",
            self.client_id, self.manage_endpoint
        );
        let ready = wait::until_ready_unbounded(
            self.transport.as_ref(),
            &self.manage_endpoint,
            self.config.poll_interval_clamped(),
            &self.shutdown,
        )
        .await;
        if !ready {
            error!(
                "{}: interrupted while waiting for the {} service to appear",
                self.client_id, self.manage_endpoint
            );
            return false;
        }

        info!(
            "{}: sending {command} request to {}",
            self.client_id, self.manage_endpoint
        );
        let request = ManageRequest {
            command: command.code(),
        };
        match time::timeout(
            timeout,
            self.transport.call_manage(&self.manage_endpoint, request),
        )
        .await
        {
            Ok(Ok(response)) => response.success,
            Ok(Err(err)) => {
                warn!(
                    "{}: {command} call failed ({})",
                    self.client_id,
                    err.as_label()
                );
                false
            }
            Err(_elapsed) => false,
        }
    }
}

impl fmt::Debug for LifecycleClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleClient")
            .field("client_id", &self.client_id)
            .field("manage_endpoint", &self.manage_endpoint)
            .field("active_endpoint", &self.active_endpoint)
            .finish_non_exhaustive()
    }
}
