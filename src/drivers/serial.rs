//! Serial transports to the modem.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: [`UartSerial`] drives a hardware UART via `esp_idf_hal`.
//! On host/test: [`LoopbackSerial`] records every line in memory.

use crate::app::ports::SerialTransport;
use crate::error::SerialError;

/// Line terminator the FONA expects after each AT command.
pub const LINE_END: &str = "\r\n";

// ───────────────────────────────────────────────────────────────
// Host loopback
// ───────────────────────────────────────────────────────────────

/// In-memory transport that keeps a transcript of everything written.
#[cfg(not(target_os = "espidf"))]
#[derive(Debug, Default)]
pub struct LoopbackSerial {
    tx_pin: i32,
    rx_pin: i32,
    baud: Option<u32>,
    lines: Vec<String>,
    fail_writes: bool,
}

#[cfg(not(target_os = "espidf"))]
impl LoopbackSerial {
    pub fn new(tx_pin: i32, rx_pin: i32) -> Self {
        Self {
            tx_pin,
            rx_pin,
            ..Self::default()
        }
    }

    /// Make every subsequent `println` fail with [`SerialError::WriteFailed`].
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn baud(&self) -> Option<u32> {
        self.baud
    }

    pub fn pins(&self) -> (i32, i32) {
        (self.tx_pin, self.rx_pin)
    }

    /// Lines written so far, without terminators.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

#[cfg(not(target_os = "espidf"))]
impl SerialTransport for LoopbackSerial {
    fn begin(&mut self, baud: u32) -> Result<(), SerialError> {
        if baud == 0 {
            return Err(SerialError::InvalidBaud);
        }
        log::debug!(
            "serial(sim): tx={} rx={} @ {} baud",
            self.tx_pin,
            self.rx_pin,
            baud
        );
        self.baud = Some(baud);
        Ok(())
    }

    fn println(&mut self, line: &str) -> Result<(), SerialError> {
        if self.baud.is_none() {
            return Err(SerialError::NotStarted);
        }
        if self.fail_writes {
            return Err(SerialError::WriteFailed);
        }
        self.lines.push(line.to_owned());
        Ok(())
    }
}

// ───────────────────────────────────────────────────────────────
// ESP-IDF hardware UART
// ───────────────────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
pub use esp::UartSerial;

#[cfg(target_os = "espidf")]
mod esp {
    use esp_idf_hal::gpio::{AnyIOPin, InputPin, OutputPin};
    use esp_idf_hal::peripheral::Peripheral;
    use esp_idf_hal::uart::{config::Config, Uart, UartDriver};
    use esp_idf_hal::units::Hertz;
    use log::info;

    use super::LINE_END;
    use crate::app::ports::SerialTransport;
    use crate::error::SerialError;

    /// Hardware UART wired to the modem's TX/RX lines.
    pub struct UartSerial<'d> {
        driver: UartDriver<'d>,
        started: bool,
    }

    impl<'d> UartSerial<'d> {
        /// Claim the UART and pins.  The link speed is set later by `begin`.
        pub fn new<U: Uart>(
            uart: impl Peripheral<P = U> + 'd,
            tx: impl Peripheral<P = impl OutputPin> + 'd,
            rx: impl Peripheral<P = impl InputPin> + 'd,
        ) -> anyhow::Result<Self> {
            let driver = UartDriver::new(
                uart,
                tx,
                rx,
                Option::<AnyIOPin>::None,
                Option::<AnyIOPin>::None,
                &Config::default().baudrate(Hertz(crate::pins::FONA_BAUD)),
            )?;
            Ok(Self { driver, started: false })
        }
    }

    impl SerialTransport for UartSerial<'_> {
        fn begin(&mut self, baud: u32) -> Result<(), SerialError> {
            if baud == 0 {
                return Err(SerialError::InvalidBaud);
            }
            self.driver
                .change_baudrate(Hertz(baud))
                .map_err(|_| SerialError::InvalidBaud)?;
            self.started = true;
            info!("serial: UART up at {} baud", baud);
            Ok(())
        }

        fn println(&mut self, line: &str) -> Result<(), SerialError> {
            if !self.started {
                return Err(SerialError::NotStarted);
            }
            for chunk in [line.as_bytes(), LINE_END.as_bytes()] {
                let written = self
                    .driver
                    .write(chunk)
                    .map_err(|_| SerialError::WriteFailed)?;
                if written != chunk.len() {
                    return Err(SerialError::WriteFailed);
                }
            }
            Ok(())
        }
    }
}
