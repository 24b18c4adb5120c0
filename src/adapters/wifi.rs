//! WiFi station-mode adapter.
//!
//! Sibling of [`CellularAdapter`](crate::adapters::fona::CellularAdapter):
//! implements the same [`NetworkPort`] so the connectivity client can be
//! composed with either transport.  The radio is reached through
//! [`StationLink`]; the host build ships [`SimStation`].

use core::fmt;
use log::{debug, info, warn};

use crate::app::ports::NetworkPort;
use crate::app::status::NetworkStatus;

/// Identifier reported by [`NetworkPort::connection_type`].
pub const CONNECTION_TYPE: &str = "wifi";

// ───────────────────────────────────────────────────────────────
// Station link
// ───────────────────────────────────────────────────────────────

/// Minimal view of a WiFi STA driver.
pub trait StationLink {
    /// Start association.  `false` if the driver refused outright.
    fn associate(&mut self, ssid: &str, password: &str) -> bool;
    fn is_associated(&self) -> bool;
    /// Leave the AP.  `false` if the driver reported an error.
    fn leave(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Credential validation
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    InvalidSsid,
    InvalidPassword,
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSsid => write!(f, "SSID invalid (must be 1-32 printable ASCII bytes)"),
            Self::InvalidPassword => write!(f, "password invalid (must be 8-64 bytes for WPA2, or empty for open)"),
        }
    }
}

fn is_printable_ascii(s: &str) -> bool {
    s.bytes().all(|b| (0x20..=0x7E).contains(&b))
}

fn validate_ssid(ssid: &str) -> Result<(), CredentialError> {
    if ssid.is_empty() || ssid.len() > 32 || !is_printable_ascii(ssid) {
        return Err(CredentialError::InvalidSsid);
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), CredentialError> {
    if password.is_empty() {
        return Ok(());
    }
    if password.len() < 8 || password.len() > 64 {
        return Err(CredentialError::InvalidPassword);
    }
    Ok(())
}

// ───────────────────────────────────────────────────────────────
// WiFi adapter
// ───────────────────────────────────────────────────────────────

pub struct WifiAdapter<L> {
    status: NetworkStatus,
    ssid: heapless::String<32>,
    password: heapless::String<64>,
    link: L,
}

impl<L: StationLink> WifiAdapter<L> {
    pub fn new(link: L) -> Self {
        Self {
            status: NetworkStatus::Idle,
            ssid: heapless::String::new(),
            password: heapless::String::new(),
            link,
        }
    }

    pub fn set_credentials(&mut self, ssid: &str, password: &str) -> Result<(), CredentialError> {
        validate_ssid(ssid)?;
        validate_password(password)?;
        self.ssid.clear();
        self.ssid.push_str(ssid).map_err(|()| CredentialError::InvalidSsid)?;
        self.password.clear();
        self.password
            .push_str(password)
            .map_err(|()| CredentialError::InvalidPassword)?;
        info!("WiFi: credentials updated (SSID='{}')", self.ssid);
        Ok(())
    }

    pub fn link(&self) -> &L {
        &self.link
    }
}

impl<L: StationLink> NetworkPort for WifiAdapter<L> {
    fn connect(&mut self) {
        if self.ssid.is_empty() {
            warn!("WiFi: connect without credentials");
            self.status = NetworkStatus::ConnectFailed;
            return;
        }

        info!("WiFi: associating with '{}'", self.ssid);
        if !self.link.associate(&self.ssid, &self.password) {
            warn!("WiFi: driver refused association");
            self.status = NetworkStatus::ConnectFailed;
            return;
        }
        self.status = NetworkStatus::Disconnected;
    }

    fn disconnect(&mut self) {
        if !self.link.leave() {
            warn!("WiFi: failed to leave AP");
        }
        self.status = NetworkStatus::Disconnected;
        info!("WiFi: disconnected");
    }

    fn network_status(&mut self) -> NetworkStatus {
        if self.status == NetworkStatus::ConnectFailed {
            return self.status;
        }
        if self.link.is_associated() {
            NetworkStatus::Connected
        } else {
            NetworkStatus::Disconnected
        }
    }

    fn connection_type(&self) -> &'static str {
        CONNECTION_TYPE
    }

    fn status(&self) -> NetworkStatus {
        self.status
    }
}

// ───────────────────────────────────────────────────────────────
// Host simulation
// ───────────────────────────────────────────────────────────────

/// Simulated station: association completes immediately inside
/// `associate`, and every 10th attempt is refused to exercise failure paths.
#[cfg(not(target_os = "espidf"))]
#[derive(Debug, Default)]
pub struct SimStation {
    attempts: u32,
    associated: bool,
}

#[cfg(not(target_os = "espidf"))]
impl SimStation {
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

#[cfg(not(target_os = "espidf"))]
impl StationLink for SimStation {
    fn associate(&mut self, ssid: &str, _password: &str) -> bool {
        self.attempts = self.attempts.wrapping_add(1);
        if self.attempts % 10 == 0 {
            debug!("WiFi(sim): refused '{}' (attempt {})", ssid, self.attempts);
            return false;
        }
        self.associated = true;
        true
    }

    fn is_associated(&self) -> bool {
        self.associated
    }

    fn leave(&mut self) -> bool {
        self.associated = false;
        true
    }
}

// ───────────────────────────────────────────────────────────────
// Tests
// ───────────────────────────────────────────────────────────────
