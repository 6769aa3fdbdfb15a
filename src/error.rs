//! Error types used by the lifecycle client.
//!
//! This module defines two error enums:
//!
//! - [`ClientError`] — construction-time errors (programmer mistakes that
//!   should fail fast).
//! - [`TransportError`] — failures reported by the transport collaborator
//!   during a call.
//!
//! Only [`ClientError`] ever reaches a caller as an `Err`. Everything that
//! can go wrong at runtime (endpoint unreachable, response timeout, remote
//! declined, transport fault) is recovered into the return value of the
//! operation: `false` for command calls, [`SystemStatus::Timeout`] for
//! status queries.
//!
//! [`SystemStatus::Timeout`]: crate::SystemStatus::Timeout

use thiserror::Error;

/// # Errors raised at client construction.
///
/// These indicate invalid input to [`LifecycleClient::new`](crate::LifecycleClient::new)
/// and are the only hard failures in the crate. Runtime conditions are never
/// surfaced as errors.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The base name was empty (or whitespace only). The two endpoint
    /// addresses are derived from it, so there is nothing to target.
    #[error("client base name must be non-empty")]
    EmptyName,
}

impl ClientError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use lifectl::ClientError;
    ///
    /// assert_eq!(ClientError::EmptyName.as_label(), "client_empty_name");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ClientError::EmptyName => "client_empty_name",
        }
    }
}

/// # Failures reported by a [`ServiceTransport`](crate::ServiceTransport) call.
///
/// A transport returns one of these when a request cannot complete at all
/// (as opposed to completing with `success = false`, which is a normal
/// response). The client never propagates these: a failed manage call
/// becomes `false`, a failed status call becomes
/// [`SystemStatus::Timeout`](crate::SystemStatus::Timeout).
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request was sent but the call failed before a response arrived.
    #[error("service call failed: {reason}")]
    CallFailed {
        /// Transport-specific description of the failure.
        reason: String,
    },

    /// The underlying channel to the endpoint is closed; no request was or
    /// will be delivered.
    #[error("service channel closed")]
    ChannelClosed,
}

impl TransportError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use lifectl::TransportError;
    ///
    /// let err = TransportError::CallFailed { reason: "peer reset".into() };
    /// assert_eq!(err.as_label(), "transport_call_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            TransportError::CallFailed { .. } => "transport_call_failed",
            TransportError::ChannelClosed => "transport_channel_closed",
        }
    }
}
