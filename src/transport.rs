//! # Transport seam: how the client reaches the remote manager.
//!
//! The client does not own any transport mechanics. It talks to the remote
//! lifecycle manager through the [`ServiceTransport`] trait, which a
//! surrounding application implements on top of whatever messaging layer it
//! uses. The common handle type is [`TransportRef`], an
//! `Arc<dyn ServiceTransport>` suitable for sharing across clients.
//!
//! The trait exposes the two wire contracts verbatim:
//!
//! - manage channel: request carries one command code
//!   ([`ManageRequest`]), response carries one success flag
//!   ([`ServiceResponse`]);
//! - status channel: request carries nothing, response carries one success
//!   flag interpreted as "is active".
//!
//! Deadlines are the client's job: `call_manage` / `call_status` may pend
//! indefinitely while waiting for a response, and the client wraps them in a
//! bounded wait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TransportError;

/// Request sent on the manage channel.
///
/// `command` is one of the five codes from
/// [`Command::code`](crate::Command::code).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManageRequest {
    /// Lifecycle command code the remote manager should execute.
    pub command: u8,
}

/// Response shared by both channels: a single success flag.
///
/// On the manage channel the flag means "the command was carried out". On
/// the status channel it means "the system is currently active".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceResponse {
    /// The remote manager's verdict, returned to the caller verbatim.
    pub success: bool,
}

/// # Asynchronous access to the two remote endpoints.
///
/// An endpoint is addressed by the string the client derived at
/// construction (`<base>/manage_nodes` or `<base>/is_active`).
///
/// ## Contract
/// - [`is_ready`](ServiceTransport::is_ready) is a single cheap probe: it
///   answers "is the endpoint reachable right now" and returns promptly.
///   The client drives its own polling loop on top of it.
/// - [`call_manage`](ServiceTransport::call_manage) /
///   [`call_status`](ServiceTransport::call_status) send exactly one request
///   and resolve with the matching response. They may pend forever if the
///   remote never answers; the client enforces the caller's deadline.
/// - Implementations must tolerate overlapping calls from separate tasks,
///   or serialize internally if the underlying layer cannot.
#[async_trait]
pub trait ServiceTransport: Send + Sync + 'static {
    /// Probes whether `endpoint` is currently reachable.
    async fn is_ready(&self, endpoint: &str) -> bool;

    /// Sends one lifecycle command request and waits for the response.
    async fn call_manage(
        &self,
        endpoint: &str,
        request: ManageRequest,
    ) -> Result<ServiceResponse, TransportError>;

    /// Sends one status-query request (no payload) and waits for the
    /// response.
    async fn call_status(&self, endpoint: &str) -> Result<ServiceResponse, TransportError>;
}

/// Shared handle to a transport implementation.
pub type TransportRef = Arc<dyn ServiceTransport>;
