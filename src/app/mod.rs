//! Application boundary: the network status model and the port traits.
//!
//! Nothing in here touches a UART or a modem.  Adapters in
//! [`crate::adapters`] implement [`ports::NetworkPort`] on top of the
//! driven ports ([`ports::SerialTransport`], [`ports::ModemDriver`]), which
//! are in turn implemented by [`crate::drivers`] or by the caller.

pub mod ports;
pub mod status;
