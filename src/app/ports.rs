//! Port traits: the hexagonal boundary between the connectivity client and
//! the hardware.
//!
//! ```text
//!   connectivity client ──▶ NetworkPort ──▶ CellularAdapter ──▶ ModemDriver
//!                                                          └──▶ SerialTransport
//! ```
//!
//! The connectivity client (MQTT session, reconnect policy) only ever sees
//! [`NetworkPort`].  Transport adapters implement it on top of the driven
//! ports below, which wrap the modem's AT-command driver and the UART.

use crate::app::status::NetworkStatus;
use crate::error::{ModemError, SerialError};

// ───────────────────────────────────────────────────────────────
// Serial transport (driven: adapter → UART)
// ───────────────────────────────────────────────────────────────

/// Byte link to the modem.
pub trait SerialTransport {
    /// Open the link at the given speed.
    fn begin(&mut self, baud: u32) -> Result<(), SerialError>;

    /// Write a raw command line.  The transport appends the line terminator.
    fn println(&mut self, line: &str) -> Result<(), SerialError>;
}

// ───────────────────────────────────────────────────────────────
// Modem driver (driven: adapter → AT-command layer)
// ───────────────────────────────────────────────────────────────

/// `+CREG` registration state as reported by the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStatus {
    NotRegistered,
    RegisteredHome,
    Searching,
    Denied,
    Unknown,
    RegisteredRoaming,
}

impl RegistrationStatus {
    /// Decode the numeric `<stat>` field of a `+CREG` response.
    pub const fn from_code(code: u8) -> Self {
        match code {
            0 => Self::NotRegistered,
            1 => Self::RegisteredHome,
            2 => Self::Searching,
            3 => Self::Denied,
            5 => Self::RegisteredRoaming,
            _ => Self::Unknown,
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            Self::NotRegistered => 0,
            Self::RegisteredHome => 1,
            Self::Searching => 2,
            Self::Denied => 3,
            Self::Unknown => 4,
            Self::RegisteredRoaming => 5,
        }
    }

    /// Only home-network registration (stat 1) counts.
    pub const fn is_registered(self) -> bool {
        matches!(self, Self::RegisteredHome)
    }
}

/// AT-command driver for the cellular module.
///
/// The adapter owns the transport, so every call borrows it for the
/// duration of the command.
pub trait ModemDriver<S: SerialTransport> {
    /// Detect and initialise the module over `serial`.
    fn begin(&mut self, serial: &mut S) -> Result<(), ModemError>;

    /// Store the APN used for the next GPRS attach.  Later calls replace
    /// earlier ones.
    fn set_gprs_network_settings(
        &mut self,
        apn: &str,
        username: Option<&str>,
        password: Option<&str>,
    );

    /// Whether the GPRS bearer is currently up.
    fn gprs_state(&mut self, serial: &mut S) -> bool;

    /// Current circuit-switched registration state.
    fn network_status(&mut self, serial: &mut S) -> RegistrationStatus;

    /// Bring the GPRS bearer up (`true`) or down (`false`).
    fn enable_gprs(&mut self, serial: &mut S, enable: bool) -> Result<(), ModemError>;
}

// ───────────────────────────────────────────────────────────────
// Network port (driving: connectivity client → adapter)
// ───────────────────────────────────────────────────────────────

/// Contract every network transport adapter offers the connectivity client.
///
/// None of these methods return errors.  Failures surface as
/// [`NetworkStatus::ConnectFailed`] or as log output.
pub trait NetworkPort {
    /// Bring up the transport.  Re-calling after a failure is the only way
    /// out of [`NetworkStatus::ConnectFailed`].
    fn connect(&mut self);

    /// Tear down the network link.  Always leaves the adapter
    /// [`NetworkStatus::Disconnected`].
    fn disconnect(&mut self);

    /// Poll the network.  May advance the link (e.g. attach GPRS) but never
    /// blocks waiting for it.
    fn network_status(&mut self) -> NetworkStatus;

    /// Static transport identifier.
    fn connection_type(&self) -> &'static str;

    /// Status last set by `connect` / `disconnect`.
    fn status(&self) -> NetworkStatus;
}
