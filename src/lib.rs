//! # lifectl
//!
//! **lifectl** is a bounded-time client for a remote lifecycle manager.
//!
//! It issues discrete lifecycle commands (startup, shutdown, pause, resume,
//! reset) to a remote managed system and queries that system's activity
//! status, all under caller-supplied timeouts. The client is a leaf: the
//! manager's own state machine, the message transport, and process
//! construction are external collaborators.
//!
//! ## Architecture
//! ```text
//!            ┌───────────────────────────────────────────────┐
//!            │  LifecycleClient                              │
//!            │  endpoints derived once from the base name:   │
//!            │    <base>/manage_nodes   <base>/is_active     │
//!            └──────┬───────────────────────────┬────────────┘
//!     commands      │                           │   status query
//!  (startup, …)     ▼                           ▼
//!     ┌──────────────────────────┐   ┌──────────────────────────┐
//!     │ wait: UNBOUNDED          │   │ wait: BOUNDED by timeout │
//!     │ (cancellation token only)│   │ (deadline → Timeout)     │
//!     └──────────┬───────────────┘   └──────────┬───────────────┘
//!                ▼                              ▼
//!     ┌──────────────────────────────────────────────────────────┐
//!     │  ServiceTransport (collaborator seam)                    │
//!     │  is_ready / call_manage / call_status                    │
//!     └──────────────────────────┬───────────────────────────────┘
//!                                ▼
//!                    remote lifecycle manager
//! ```
//!
//! Per call, the protocol is always: wait for the endpoint, send exactly one
//! request, classify the outcome. Commands return `bool` (reached and
//! succeeded); status queries return [`SystemStatus`], where `Timeout` is a
//! normal value, never an error. The two call families wait for their
//! endpoint differently: commands poll with no deadline of their own,
//! terminable only by the process-wide
//! [`CancellationToken`](tokio_util::sync::CancellationToken), while status
//! queries give up once the caller's window elapses. That asymmetry is part
//! of the contract.
//!
//! The client holds no state between calls apart from its endpoint identity,
//! so a single instance can be shared and reused for arbitrarily many calls.
//! Nothing is retried automatically; retry and backoff policy belong to the
//! caller.
//!
//! ## Quick start
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use async_trait::async_trait;
//! use lifectl::{
//!     LifecycleClient, ManageRequest, ServiceResponse, ServiceTransport, SystemStatus,
//!     TransportError,
//! };
//! use tokio_util::sync::CancellationToken;
//!
//! /// Toy transport: always reachable, always succeeds.
//! struct Loopback;
//!
//! #[async_trait]
//! impl ServiceTransport for Loopback {
//!     async fn is_ready(&self, _endpoint: &str) -> bool {
//!         true
//!     }
//!
//!     async fn call_manage(
//!         &self,
//!         _endpoint: &str,
//!         _request: ManageRequest,
//!     ) -> Result<ServiceResponse, TransportError> {
//!         Ok(ServiceResponse { success: true })
//!     }
//!
//!     async fn call_status(&self, _endpoint: &str) -> Result<ServiceResponse, TransportError> {
//!         Ok(ServiceResponse { success: true })
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     // The token is the process-wide liveness signal; cancel it on
//!     // shutdown to abort any in-progress unbounded wait.
//!     let shutdown = CancellationToken::new();
//!     let client =
//!         LifecycleClient::new(Arc::new(Loopback), shutdown, "controller", None).unwrap();
//!
//!     assert!(client.startup(Duration::from_secs(5)).await);
//!     assert_eq!(
//!         client.is_active(Duration::from_secs(5)).await,
//!         SystemStatus::Active
//!     );
//! }
//! ```

mod client;
mod command;
mod error;
mod transport;

// ---- Public re-exports ----

pub use client::{ClientConfig, LifecycleClient};
pub use command::{Command, SystemStatus};
pub use error::{ClientError, TransportError};
pub use transport::{ManageRequest, ServiceResponse, ServiceTransport, TransportRef};
