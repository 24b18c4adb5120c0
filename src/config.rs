//! Modem link configuration.
//!
//! Wiring, link speed and broker target for the cellular adapter.  Defaults
//! come from [`crate::pins`]; a board variant or a test can hand the adapter
//! any other values.  The struct is serde-serialisable so it can be stored
//! in flash as a postcard blob.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pins;

/// Default Adafruit IO broker.
pub const DEFAULT_BROKER_HOST: &str = "io.adafruit.com";
/// Insecure MQTT port.  The FONA has no TLS offload for the MQTT link.
pub const DEFAULT_MQTT_PORT: u16 = 1883;
/// Packet read timeout handed to the MQTT link (milliseconds).
pub const DEFAULT_PACKET_READ_TIMEOUT_MS: u32 = 500;

/// Upper bound for a postcard-encoded [`ModemConfig`].
pub const MAX_ENCODED_LEN: usize = 128;

/// GPIO numbers for the modem breakout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModemPins {
    pub rx: i32,
    pub tx: i32,
    pub reset: i32,
    /// Ring indicator.  Carried for completeness, never driven.
    pub ring_indicator: i32,
}

impl Default for ModemPins {
    fn default() -> Self {
        Self {
            rx: pins::FONA_RX_GPIO,
            tx: pins::FONA_TX_GPIO,
            reset: pins::FONA_RST_GPIO,
            ring_indicator: pins::FONA_RI_GPIO,
        }
    }
}

/// Everything the cellular adapter needs to know about its surroundings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModemConfig {
    pub pins: ModemPins,
    /// Serial link speed to the modem.
    pub baud: u32,
    /// MQTT broker host name.
    pub broker_host: heapless::String<64>,
    /// MQTT broker port.
    pub mqtt_port: u16,
    /// How long the MQTT link waits for a packet (milliseconds).
    pub packet_read_timeout_ms: u32,
}

impl Default for ModemConfig {
    fn default() -> Self {
        let mut broker_host = heapless::String::new();
        // Fits: the constant is well under the 64-byte capacity.
        let _ = broker_host.push_str(DEFAULT_BROKER_HOST);
        Self {
            pins: ModemPins::default(),
            baud: pins::FONA_BAUD,
            broker_host,
            mqtt_port: DEFAULT_MQTT_PORT,
            packet_read_timeout_ms: DEFAULT_PACKET_READ_TIMEOUT_MS,
        }
    }
}

impl ModemConfig {
    /// Replace the broker host.  Fails if the name exceeds 64 bytes.
    pub fn with_broker_host(mut self, host: &str) -> Result<Self> {
        self.broker_host.clear();
        self.broker_host
            .push_str(host)
            .map_err(|_| Error::Config("broker_host longer than 64 bytes"))?;
        Ok(self)
    }

    /// Reject values the adapter cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.baud == 0 {
            return Err(Error::Config("baud must be non-zero"));
        }
        if self.mqtt_port == 0 {
            return Err(Error::Config("mqtt_port must be non-zero"));
        }
        if self.broker_host.is_empty() {
            return Err(Error::Config("broker_host must not be empty"));
        }
        if self.packet_read_timeout_ms == 0 {
            return Err(Error::Config("packet_read_timeout_ms must be non-zero"));
        }
        if self.pins.rx == self.pins.tx {
            return Err(Error::Config("rx and tx pins must differ"));
        }
        if self.pins.reset == self.pins.rx || self.pins.reset == self.pins.tx {
            return Err(Error::Config("reset pin collides with a UART pin"));
        }
        Ok(())
    }

    /// Encode for flash storage.
    pub fn to_bytes(&self) -> Result<heapless::Vec<u8, MAX_ENCODED_LEN>> {
        let bytes =
            postcard::to_allocvec(self).map_err(|_| Error::Config("config encode failed"))?;
        heapless::Vec::from_slice(&bytes).map_err(|()| Error::Config("encoded config too large"))
    }

    /// Decode a stored blob.  The result is validated before it is returned.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let cfg: Self =
            postcard::from_bytes(bytes).map_err(|_| Error::Config("config decode failed"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
