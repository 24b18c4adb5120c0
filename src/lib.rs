//! Cellular network adapter for MQTT cloud connectivity.
//!
//! Binds a FONA GPRS modem to a connectivity client through the
//! [`NetworkPort`](app::ports::NetworkPort) contract.  All ESP-IDF-specific
//! code is guarded by `#[cfg(target_os = "espidf")]` within each module;
//! host builds get simulation drivers instead.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;

pub use adapters::fona::CellularAdapter;
pub use app::ports::NetworkPort;
pub use app::status::NetworkStatus;
