//! Unified error types for the modem link.
//!
//! A single `Error` enum that the port-level errors convert into.  All
//! variants are `Copy` so they can be logged and passed around without
//! allocation.  None of these cross [`NetworkPort`](crate::app::ports::NetworkPort):
//! the adapters translate them into a [`NetworkStatus`](crate::app::status::NetworkStatus)
//! or a log line.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The serial transport to the modem failed.
    Serial(SerialError),
    /// The modem rejected or did not answer a command.
    Modem(ModemError),
    /// Configuration is invalid or could not be decoded.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serial(e) => write!(f, "serial: {e}"),
            Self::Modem(e) => write!(f, "modem: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Serial transport errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialError {
    /// `println` was called before `begin`.
    NotStarted,
    /// The requested baud rate is not supported by the UART.
    InvalidBaud,
    /// The UART driver refused the write or accepted only part of it.
    WriteFailed,
}

impl fmt::Display for SerialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "transport not started"),
            Self::InvalidBaud => write!(f, "unsupported baud rate"),
            Self::WriteFailed => write!(f, "write failed"),
        }
    }
}

impl From<SerialError> for Error {
    fn from(e: SerialError) -> Self {
        Self::Serial(e)
    }
}

// ---------------------------------------------------------------------------
// Modem errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModemError {
    /// No `OK` to the initial `AT` command: module absent or powered down.
    NotResponding,
    /// The module answered `ERROR` / `+CME ERROR`.
    CommandFailed,
}

impl fmt::Display for ModemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotResponding => write!(f, "modem not responding"),
            Self::CommandFailed => write!(f, "command rejected"),
        }
    }
}

impl From<ModemError> for Error {
    fn from(e: ModemError) -> Self {
        Self::Modem(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

pub type Result<T> = core::result::Result<T, Error>;
