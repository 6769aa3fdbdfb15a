//! Client core: construction, waits, and call dispatch.
//!
//! The only public API from this module is [`LifecycleClient`] and its
//! [`ClientConfig`].
//!
//! Internal modules:
//! - [`core`]: the client itself — endpoint derivation, the five command
//!   operations, the status query, outcome classification;
//! - [`wait`]: the two availability-wait strategies (unbounded with
//!   cancellation for commands, bounded for status);
//! - [`config`]: standing settings (polling interval).

mod config;
mod core;
mod wait;

pub use config::ClientConfig;
pub use core::LifecycleClient;
