//! Simulated FONA module for host builds.
//!
//! Behaves like a module sitting on a bench: it answers the init command
//! (unless told it is absent), registers on the home network after a fixed
//! number of `+CREG?` polls, and raises the GPRS bearer when asked to.

use log::{debug, info, warn};

use crate::app::ports::{ModemDriver, RegistrationStatus, SerialTransport};
use crate::error::ModemError;

/// APN triple as last stored by `set_gprs_network_settings`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApnSettings {
    pub apn: heapless::String<64>,
    pub username: Option<heapless::String<32>>,
    pub password: Option<heapless::String<32>>,
}

/// Copy `s` into a fixed buffer, keeping whole characters.  A real module
/// would also cut an over-long APN, so the sim stores the cut value.
fn bounded<const N: usize>(field: &str, s: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            warn!(
                "modem(sim): {} truncated to {} bytes (was {})",
                field,
                out.len(),
                s.len()
            );
            break;
        }
    }
    out
}

pub struct SimModem {
    reset_pin: i32,
    present: bool,
    polls_until_registered: u32,
    registration_polls: u32,
    gprs: bool,
    fail_gprs_disable: bool,
    apn: Option<ApnSettings>,
    gprs_enable_calls: u32,
}

impl SimModem {
    /// A responsive module that registers on the first poll.
    pub fn new(reset_pin: i32) -> Self {
        Self {
            reset_pin,
            present: true,
            polls_until_registered: 0,
            registration_polls: 0,
            gprs: false,
            fail_gprs_disable: false,
            apn: None,
            gprs_enable_calls: 0,
        }
    }

    /// Module missing or unpowered: `begin` never succeeds.
    pub fn absent(mut self) -> Self {
        self.present = false;
        self
    }

    /// Report `Searching` for the first `polls` registration queries.
    pub fn registers_after(mut self, polls: u32) -> Self {
        self.polls_until_registered = polls;
        self
    }

    /// Make `enable_gprs(false)` fail, as a module does when the bearer is
    /// stuck mid-teardown.
    pub fn fail_gprs_disable(mut self, fail: bool) -> Self {
        self.fail_gprs_disable = fail;
        self
    }

    pub fn reset_pin(&self) -> i32 {
        self.reset_pin
    }

    pub fn apn(&self) -> Option<&ApnSettings> {
        self.apn.as_ref()
    }

    pub fn gprs_enable_calls(&self) -> u32 {
        self.gprs_enable_calls
    }
}

impl<S: SerialTransport> ModemDriver<S> for SimModem {
    fn begin(&mut self, serial: &mut S) -> Result<(), ModemError> {
        if !self.present {
            warn!("modem(sim): no answer on reset pin {}", self.reset_pin);
            return Err(ModemError::NotResponding);
        }
        serial.println("AT").map_err(|_| ModemError::NotResponding)?;
        info!("modem(sim): FONA ready");
        Ok(())
    }

    fn set_gprs_network_settings(
        &mut self,
        apn: &str,
        username: Option<&str>,
        password: Option<&str>,
    ) {
        self.apn = Some(ApnSettings {
            apn: bounded("apn", apn),
            username: username.map(|u| bounded("username", u)),
            password: password.map(|p| bounded("password", p)),
        });
        debug!("modem(sim): APN set to '{}'", apn);
    }

    fn gprs_state(&mut self, _serial: &mut S) -> bool {
        self.gprs
    }

    fn network_status(&mut self, _serial: &mut S) -> RegistrationStatus {
        if self.registration_polls < self.polls_until_registered {
            self.registration_polls += 1;
            return RegistrationStatus::Searching;
        }
        RegistrationStatus::RegisteredHome
    }

    fn enable_gprs(&mut self, _serial: &mut S, enable: bool) -> Result<(), ModemError> {
        if enable {
            self.gprs_enable_calls += 1;
            self.gprs = true;
            return Ok(());
        }
        if self.fail_gprs_disable {
            return Err(ModemError::CommandFailed);
        }
        self.gprs = false;
        Ok(())
    }
}
