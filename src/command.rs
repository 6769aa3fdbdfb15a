//! # Lifecycle command codes and status classification.
//!
//! [`Command`] enumerates the five actions the remote lifecycle manager
//! accepts on its manage channel. The numeric wire values are the manager's
//! contract and must not be renumbered.
//!
//! [`SystemStatus`] is the tri-state result of a status query. `Timeout` is
//! a normal return value, not an error: it covers both "the endpoint never
//! became reachable within the window" and "reachable, but no response
//! before the deadline".

use std::fmt;

/// One of the five lifecycle actions a caller may request.
///
/// Each variant maps to a fixed request code on the wire (see
/// [`Command::code`]). Commands are call arguments only; the client keeps no
/// record of what it has sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Bring the managed system up.
    Startup,
    /// Bring the managed system down.
    Shutdown,
    /// Suspend activity without tearing down.
    Pause,
    /// Resume from a paused state.
    Resume,
    /// Tear down and return to the initial state.
    Reset,
}

impl Command {
    /// Returns the request code the remote manager expects for this command.
    ///
    /// # Example
    /// ```
    /// use lifectl::Command;
    ///
    /// assert_eq!(Command::Startup.code(), 1);
    /// assert_eq!(Command::Reset.code(), 5);
    /// ```
    pub const fn code(self) -> u8 {
        match self {
            Command::Startup => 1,
            Command::Shutdown => 2,
            Command::Pause => 3,
            Command::Resume => 4,
            Command::Reset => 5,
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub const fn as_label(self) -> &'static str {
        match self {
            Command::Startup => "startup",
            Command::Shutdown => "shutdown",
            Command::Pause => "pause",
            Command::Resume => "resume",
            Command::Reset => "reset",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Outcome of a status query against the remote lifecycle manager.
///
/// `Active` and `Inactive` both require a successful round trip; they differ
/// only in the flag the manager reported. `Timeout` means the round trip did
/// not complete within the caller's window, for whatever reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemStatus {
    /// The manager was reached and reports the system as active.
    Active,
    /// The manager was reached and reports the system as not active.
    Inactive,
    /// No response within the window: unreachable, silent, or the call
    /// failed in transit.
    Timeout,
}

impl SystemStatus {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub const fn as_label(self) -> &'static str {
        match self {
            SystemStatus::Active => "active",
            SystemStatus::Inactive => "inactive",
            SystemStatus::Timeout => "timeout",
        }
    }
}

impl fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}
