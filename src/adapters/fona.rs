//! FONA cellular adapter.
//!
//! Implements [`NetworkPort`] over a GPRS modem.  The adapter exclusively
//! owns the serial transport, the modem driver and the MQTT link, and only
//! acts when the connectivity client calls into it.
//!
//! ## Lifecycle
//!
//! ```text
//!   Idle ──connect──▶ Disconnected ──network_status()──▶ Connected
//!     │                   ▲                                  │
//!     └─(init fails)─▶ ConnectFailed        disconnect ──────┘
//! ```
//!
//! `network_status` is a non-blocking poll: each call advances the link at
//! most one step (attach GPRS once registered) and reports the outcome.

use log::{debug, error, info, warn};

use crate::adapters::mqtt::{MqttLink, MqttOverModem};
use crate::app::ports::{ModemDriver, NetworkPort, SerialTransport};
use crate::app::status::NetworkStatus;
use crate::config::ModemConfig;
use crate::error::Result;

/// Identifier reported by [`NetworkPort::connection_type`].
pub const CONNECTION_TYPE: &str = "fona";

/// Error-report mode command sent once the modem answers.
pub const CMEE_COMMAND: &str = "AT+CMEE=2";

/// Service credentials handed to the adapter at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub key: String,
}

pub struct CellularAdapter<S, M> {
    status: NetworkStatus,
    credentials: Credentials,
    config: ModemConfig,
    serial: S,
    modem: M,
    mqtt: MqttOverModem,
}

impl<S, M> CellularAdapter<S, M>
where
    S: SerialTransport,
    M: ModemDriver<S>,
{
    /// `serial` must already be bound to `config.pins.tx`/`rx` and `modem`
    /// to `config.pins.reset`.
    pub fn new(user: &str, key: &str, config: ModemConfig, serial: S, modem: M) -> Self {
        let mqtt = MqttOverModem::from_config(&config);
        debug!(
            "FONA: adapter for {}:{} (packet timeout {:?})",
            mqtt.broker().host,
            mqtt.broker().port,
            mqtt.packet_read_timeout()
        );
        Self {
            status: NetworkStatus::Idle,
            credentials: Credentials {
                user: user.to_owned(),
                key: key.to_owned(),
            },
            config,
            serial,
            modem,
            mqtt,
        }
    }

    /// Configure the GPRS access point.  Call before [`NetworkPort::connect`].
    pub fn set_apn(&mut self, apn: &str, username: Option<&str>, password: Option<&str>) {
        self.modem.set_gprs_network_settings(apn, username, password);
        info!("FONA: APN set to '{}'", apn);
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn config(&self) -> &ModemConfig {
        &self.config
    }

    pub fn mqtt(&self) -> &MqttOverModem {
        &self.mqtt
    }

    pub fn mqtt_port(&self) -> u16 {
        self.mqtt.broker().port
    }

    /// Hand the MQTT client everything it needs to talk to the broker.
    pub fn mqtt_link(&mut self) -> MqttLink<'_, S, M> {
        MqttLink {
            session: &self.mqtt,
            modem: &mut self.modem,
            serial: &mut self.serial,
        }
    }

    /// Open the UART and initialise the modem.  Either failure is terminal for
    /// this bring-up attempt.
    fn bring_up(&mut self) -> Result<()> {
        self.serial.begin(self.config.baud)?;
        self.modem.begin(&mut self.serial)?;
        Ok(())
    }
}

// ───────────────────────────────────────────────────────────────
// NetworkPort
// ───────────────────────────────────────────────────────────────

impl<S, M> NetworkPort for CellularAdapter<S, M>
where
    S: SerialTransport,
    M: ModemDriver<S>,
{
    fn connect(&mut self) {
        info!("FONA: opening serial at {} baud", self.config.baud);
        if let Err(e) = self.bring_up() {
            error!("FONA: bring-up failed: {}", e);
            self.status = NetworkStatus::ConnectFailed;
            return;
        }

        // Best effort; the modem works the same without it.
        if let Err(e) = self.serial.println(CMEE_COMMAND) {
            debug!("FONA: {} not sent: {}", CMEE_COMMAND, e);
        }

        self.status = NetworkStatus::Disconnected;
        info!("FONA: modem ready, waiting for network");
    }

    fn disconnect(&mut self) {
        if let Err(e) = self.modem.enable_gprs(&mut self.serial, false) {
            warn!("FONA: failed to turn off GPRS: {}", e);
        }
        self.status = NetworkStatus::Disconnected;
        info!("FONA: disconnected");
    }

    fn network_status(&mut self) -> NetworkStatus {
        if self.status == NetworkStatus::ConnectFailed {
            return self.status;
        }

        if self.modem.gprs_state(&mut self.serial) {
            return NetworkStatus::Connected;
        }

        let registration = self.modem.network_status(&mut self.serial);
        if !registration.is_registered() {
            debug!("FONA: waiting for registration ({:?})", registration);
            return NetworkStatus::Disconnected;
        }

        // Optimistic: the next poll reports the real bearer state.
        if let Err(e) = self.modem.enable_gprs(&mut self.serial, true) {
            debug!("FONA: GPRS attach not accepted yet: {}", e);
        }
        NetworkStatus::Connected
    }

    fn connection_type(&self) -> &'static str {
        CONNECTION_TYPE
    }

    fn status(&self) -> NetworkStatus {
        self.status
    }
}

// ───────────────────────────────────────────────────────────────
// Tests
// ───────────────────────────────────────────────────────────────
