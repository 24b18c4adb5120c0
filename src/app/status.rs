//! Network connection status reported to the connectivity client.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Network-layer status of a transport adapter.
///
/// `ConnectFailed` is sticky: once set, [`NetworkPort::network_status`]
/// keeps returning it until the owner calls
/// [`NetworkPort::connect`] again.
///
/// [`NetworkPort::network_status`]: crate::app::ports::NetworkPort::network_status
/// [`NetworkPort::connect`]: crate::app::ports::NetworkPort::connect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NetworkStatus {
    /// `connect` has not been called yet.
    #[default]
    Idle,
    /// Transport is up but there is no network link yet.
    Disconnected,
    /// Network link established.
    Connected,
    /// Transport bring-up failed.
    ConnectFailed,
}

impl NetworkStatus {
    /// Human-readable status line for serial consoles and dashboards.
    pub const fn text(self) -> &'static str {
        match self {
            Self::Idle => "Idle. Waiting for connect to be called...",
            Self::Disconnected => "Network disconnected.",
            Self::Connected => "Network connected.",
            Self::ConnectFailed => "Network connection failed.",
        }
    }

    pub const fn is_connected(self) -> bool {
        matches!(self, Self::Connected)
    }

    /// True once bring-up has failed and only a new `connect` can help.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::ConnectFailed)
    }
}

impl fmt::Display for NetworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
