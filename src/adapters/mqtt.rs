//! MQTT-over-modem link.
//!
//! The MQTT client itself lives in the connectivity client.  What the
//! cellular adapter owns is the wiring: which broker to reach, how long to
//! wait for a packet, and the modem the bytes travel through.  The client
//! borrows all of that at once through [`MqttLink`].

use core::time::Duration;

use crate::config::ModemConfig;

/// Broker host and port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerEndpoint {
    pub host: heapless::String<64>,
    pub port: u16,
}

/// Static MQTT session parameters for a modem-backed connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MqttOverModem {
    broker: BrokerEndpoint,
    packet_read_timeout: Duration,
}

impl MqttOverModem {
    pub fn from_config(config: &ModemConfig) -> Self {
        Self {
            broker: BrokerEndpoint {
                host: config.broker_host.clone(),
                port: config.mqtt_port,
            },
            packet_read_timeout: Duration::from_millis(u64::from(config.packet_read_timeout_ms)),
        }
    }

    pub fn broker(&self) -> &BrokerEndpoint {
        &self.broker
    }

    pub fn packet_read_timeout(&self) -> Duration {
        self.packet_read_timeout
    }
}

/// Exclusive borrow of the MQTT parameters together with the modem and
/// serial transport they run over.
pub struct MqttLink<'a, S, M> {
    pub session: &'a MqttOverModem,
    pub modem: &'a mut M,
    pub serial: &'a mut S,
}
