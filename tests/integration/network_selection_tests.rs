//! Integration tests for composition-time transport selection.
//!
//! The connectivity client only sees `NetworkPort`; these drive both
//! variants through the same sequence.

use super::mock_modem::{MockModem, MockSerial};

use fona_link::adapters::network::NetworkAdapter;
use fona_link::adapters::wifi::{SimStation, WifiAdapter};
use fona_link::app::ports::RegistrationStatus;
use fona_link::config::ModemConfig;
use fona_link::{CellularAdapter, NetworkPort, NetworkStatus};

type Net = NetworkAdapter<MockSerial, MockModem, SimStation>;

/// What a connectivity client does: connect, then poll until connected
/// or failed, bounded.
fn bring_up(net: &mut impl NetworkPort, max_polls: usize) -> NetworkStatus {
    net.connect();
    let mut last = net.status();
    for _ in 0..max_polls {
        last = net.network_status();
        if last.is_connected() || last.is_terminal() {
            break;
        }
    }
    last
}

#[test]
fn cellular_and_wifi_share_one_lifecycle() {
    let mut modem = MockModem::new();
    modem.registration = RegistrationStatus::RegisteredHome;
    let cellular: Net = NetworkAdapter::Cellular(CellularAdapter::new(
        "u",
        "k",
        ModemConfig::default(),
        MockSerial::new(),
        modem,
    ));

    let mut wifi = WifiAdapter::new(SimStation::default());
    wifi.set_credentials("Workshop", "hunter22").unwrap();
    let wifi: Net = NetworkAdapter::Wifi(wifi);

    for mut net in [cellular, wifi] {
        assert_eq!(net.status(), NetworkStatus::Idle);
        assert_eq!(bring_up(&mut net, 5), NetworkStatus::Connected);
        net.disconnect();
        assert_eq!(net.status(), NetworkStatus::Disconnected);
    }
}

#[test]
fn failed_cellular_bring_up_stops_polling() {
    let mut modem = MockModem::new();
    modem.begin_ok = false;
    let mut net: Net = NetworkAdapter::Cellular(CellularAdapter::new(
        "u",
        "k",
        ModemConfig::default(),
        MockSerial::new(),
        modem,
    ));

    assert_eq!(bring_up(&mut net, 5), NetworkStatus::ConnectFailed);
    assert_eq!(net.connection_type(), "fona");
}

#[test]
fn wifi_without_credentials_fails() {
    let mut net: Net = NetworkAdapter::Wifi(WifiAdapter::new(SimStation::default()));
    assert_eq!(bring_up(&mut net, 5), NetworkStatus::ConnectFailed);
    assert_eq!(net.connection_type(), "wifi");
}
