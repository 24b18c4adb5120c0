//! Mock serial transport and modem driver for integration tests.
//!
//! Records every call so tests can assert on the full command history
//! without a real UART or module.

use fona_link::app::ports::{ModemDriver, RegistrationStatus, SerialTransport};
use fona_link::error::{ModemError, SerialError};

// ── Serial call record ────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum SerialCall {
    Begin(u32),
    Println(String),
}

pub struct MockSerial {
    pub calls: Vec<SerialCall>,
    pub begin_ok: bool,
    pub println_ok: bool,
}

impl Default for MockSerial {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            begin_ok: true,
            println_ok: true,
        }
    }
}

#[allow(dead_code)]
impl MockSerial {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SerialCall::Println(l) => Some(l.as_str()),
                SerialCall::Begin(_) => None,
            })
            .collect()
    }
}

impl SerialTransport for MockSerial {
    fn begin(&mut self, baud: u32) -> Result<(), SerialError> {
        self.calls.push(SerialCall::Begin(baud));
        if self.begin_ok { Ok(()) } else { Err(SerialError::InvalidBaud) }
    }

    fn println(&mut self, line: &str) -> Result<(), SerialError> {
        self.calls.push(SerialCall::Println(line.to_owned()));
        if self.println_ok { Ok(()) } else { Err(SerialError::WriteFailed) }
    }
}

// ── Modem call record ─────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ModemCall {
    Begin,
    SetApn {
        apn: String,
        username: Option<String>,
        password: Option<String>,
    },
    GprsState,
    NetworkStatus,
    EnableGprs(bool),
}

/// Modem whose answers are fixed by the test.
pub struct MockModem {
    pub calls: Vec<ModemCall>,
    pub begin_ok: bool,
    pub gprs_active: bool,
    pub registration: RegistrationStatus,
    pub enable_ok: bool,
    pub disable_ok: bool,
}

#[allow(dead_code)]
impl MockModem {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            begin_ok: true,
            gprs_active: false,
            registration: RegistrationStatus::NotRegistered,
            enable_ok: true,
            disable_ok: true,
        }
    }

    pub fn count(&self, call: &ModemCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }
}

impl Default for MockModem {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SerialTransport> ModemDriver<S> for MockModem {
    fn begin(&mut self, _serial: &mut S) -> Result<(), ModemError> {
        self.calls.push(ModemCall::Begin);
        if self.begin_ok {
            Ok(())
        } else {
            Err(ModemError::NotResponding)
        }
    }

    fn set_gprs_network_settings(
        &mut self,
        apn: &str,
        username: Option<&str>,
        password: Option<&str>,
    ) {
        self.calls.push(ModemCall::SetApn {
            apn: apn.to_owned(),
            username: username.map(str::to_owned),
            password: password.map(str::to_owned),
        });
    }

    fn gprs_state(&mut self, _serial: &mut S) -> bool {
        self.calls.push(ModemCall::GprsState);
        self.gprs_active
    }

    fn network_status(&mut self, _serial: &mut S) -> RegistrationStatus {
        self.calls.push(ModemCall::NetworkStatus);
        self.registration
    }

    fn enable_gprs(&mut self, _serial: &mut S, enable: bool) -> Result<(), ModemError> {
        self.calls.push(ModemCall::EnableGprs(enable));
        let ok = if enable { self.enable_ok } else { self.disable_ok };
        if ok { Ok(()) } else { Err(ModemError::CommandFailed) }
    }
}
