//! Composition-time transport selection.
//!
//! The connectivity client holds one `NetworkAdapter` and never needs to
//! know which radio is behind it.

use crate::adapters::fona::CellularAdapter;
use crate::adapters::wifi::{StationLink, WifiAdapter};
use crate::app::ports::{ModemDriver, NetworkPort, SerialTransport};
use crate::app::status::NetworkStatus;

pub enum NetworkAdapter<S, M, L> {
    Cellular(CellularAdapter<S, M>),
    Wifi(WifiAdapter<L>),
}

impl<S, M, L> NetworkAdapter<S, M, L>
where
    S: SerialTransport,
    M: ModemDriver<S>,
    L: StationLink,
{
    fn port(&mut self) -> &mut dyn NetworkPort {
        match self {
            Self::Cellular(a) => a,
            Self::Wifi(a) => a,
        }
    }
}

impl<S, M, L> NetworkPort for NetworkAdapter<S, M, L>
where
    S: SerialTransport,
    M: ModemDriver<S>,
    L: StationLink,
{
    fn connect(&mut self) {
        self.port().connect();
    }

    fn disconnect(&mut self) {
        self.port().disconnect();
    }

    fn network_status(&mut self) -> NetworkStatus {
        self.port().network_status()
    }

    fn connection_type(&self) -> &'static str {
        match self {
            Self::Cellular(a) => a.connection_type(),
            Self::Wifi(a) => a.connection_type(),
        }
    }

    fn status(&self) -> NetworkStatus {
        match self {
            Self::Cellular(a) => a.status(),
            Self::Wifi(a) => a.status(),
        }
    }
}
