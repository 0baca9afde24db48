//! Raspberry Pi LED bank backed by rppal.

use rppal::gpio::{Gpio, OutputPin};
use thiserror::Error;

use crate::config::schema::GpioConfig;
use crate::gpio::bank::{LedBank, LedLine};

/// Error claiming GPIO lines at startup.
#[derive(Debug, Error)]
pub enum GpioError {
    #[error("failed to access gpio: {0}")]
    Gpio(#[from] rppal::gpio::Error),
}

/// LED bank driving real pins (BCM numbering).
///
/// Pins are claimed low at construction and reset low again when the
/// bank is dropped, so no LED stays lit past process exit.
pub struct RpiLedBank {
    local: OutputPin,
    wan: OutputPin,
    unreachable: OutputPin,
}

impl RpiLedBank {
    /// Claim the three configured pins as outputs, all inactive.
    pub fn new(config: &GpioConfig) -> Result<Self, GpioError> {
        let gpio = Gpio::new()?;
        let local = gpio.get(config.local_pin)?.into_output_low();
        let wan = gpio.get(config.wan_pin)?.into_output_low();
        let unreachable = gpio.get(config.unreachable_pin)?.into_output_low();

        tracing::info!(
            local_pin = config.local_pin,
            wan_pin = config.wan_pin,
            unreachable_pin = config.unreachable_pin,
            "gpio lines claimed"
        );

        Ok(Self {
            local,
            wan,
            unreachable,
        })
    }

    fn pin(&mut self, line: LedLine) -> &mut OutputPin {
        match line {
            LedLine::Local => &mut self.local,
            LedLine::Wan => &mut self.wan,
            LedLine::Unreachable => &mut self.unreachable,
        }
    }
}

impl LedBank for RpiLedBank {
    fn set(&mut self, line: LedLine, on: bool) {
        let pin = self.pin(line);
        if on {
            pin.set_high();
        } else {
            pin.set_low();
        }
    }
}
