//! Serial, modem and reset-line drivers behind the driven ports.
//!
//! | Driver        | Implements        | Target         |
//! |---------------|-------------------|----------------|
//! | `serial`      | SerialTransport   | UART / host    |
//! | `sim_modem`   | ModemDriver       | host only      |
//! | `reset`       | -                 | any HAL        |

pub mod reset;
pub mod serial;
#[cfg(not(target_os = "espidf"))]
pub mod sim_modem;
