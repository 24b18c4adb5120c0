//! Pin and UART assignments for the FONA cellular breakout.
//!
//! Single source of truth for the modem wiring.  `ModemConfig::default()`
//! is built from these values; tests and alternate boards override them
//! through [`ModemConfig`](crate::config::ModemConfig) rather than here.

// ---------------------------------------------------------------------------
// Modem UART (software-emulated on the original board)
// ---------------------------------------------------------------------------

/// Receive line: MCU RX <- modem TX.
pub const FONA_RX_GPIO: i32 = 9;
/// Transmit line: MCU TX -> modem RX.
pub const FONA_TX_GPIO: i32 = 8;
/// Fixed link speed.  The FONA auto-bauds, 4800 is what software serial
/// sustains reliably.
pub const FONA_BAUD: u32 = 4800;

// ---------------------------------------------------------------------------
// Modem control lines
// ---------------------------------------------------------------------------

/// Active-low hardware reset.
pub const FONA_RST_GPIO: i32 = 4;
/// Ring indicator.  Wired on the breakout but not read by the adapter.
pub const FONA_RI_GPIO: i32 = 7;
