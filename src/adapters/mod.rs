//! Adapters: concrete implementations of the network port.
//!
//! | Adapter   | Implements   | Connects to                     |
//! |-----------|--------------|---------------------------------|
//! | `fona`    | NetworkPort  | FONA GPRS modem over UART       |
//! | `wifi`    | NetworkPort  | WiFi STA driver                 |
//! | `network` | NetworkPort  | whichever of the two is chosen  |
//! | `mqtt`    | -            | broker parameters for the modem |

pub mod fona;
pub mod mqtt;
pub mod network;
pub mod wifi;
