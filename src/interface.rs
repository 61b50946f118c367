use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin, PinState, StatefulOutputPin},
    spi::SpiDevice,
};
use log::{debug, warn};

use crate::error::ErrorKind;
use crate::traits::{BusyObserver, Transport};

/// The Connection Interface of the UC8176 and SSD1619 panels
///
/// Owns the SPI device, the busy/dc/reset pins and a delay, and implements
/// [`Transport`] on top of them. `OBS` gets notified while the busy line is polled.
pub struct DisplayInterface<SPI, BUSY, DC, RST, DELAY, OBS = ()> {
    /// SPI
    spi: SPI,
    /// Busy line, its active level depends on the controller
    busy: BUSY,
    /// Data/Command Control Pin (High for data, Low for command)
    dc: DC,
    /// Pin for Resetting
    rst: RST,
    /// Delay used for the reset pulse and between busy polls
    delay: DELAY,
    /// Progress hook for busy waits
    observer: OBS,
    /// number of us one busy poll sleeps, one timeout tick
    delay_us: u32,
}

impl<SPI, BUSY, DC, RST, DELAY> DisplayInterface<SPI, BUSY, DC, RST, DELAY, ()> {
    /// Creates a new `DisplayInterface` struct
    ///
    /// If no delay is given, busy polls are spaced by 1ms.
    pub fn new(spi: SPI, busy: BUSY, dc: DC, rst: RST, delay: DELAY, delay_us: Option<u32>) -> Self {
        // default poll interval of 1ms
        let delay_us = delay_us.unwrap_or(1_000);
        DisplayInterface {
            spi,
            busy,
            dc,
            rst,
            delay,
            observer: (),
            delay_us,
        }
    }
}

impl<SPI, BUSY, DC, RST, DELAY, OBS> DisplayInterface<SPI, BUSY, DC, RST, DELAY, OBS> {
    /// Attaches a busy wait observer, e.g. a [`LedObserver`]
    pub fn with_observer<O: BusyObserver>(
        self,
        observer: O,
    ) -> DisplayInterface<SPI, BUSY, DC, RST, DELAY, O> {
        DisplayInterface {
            spi: self.spi,
            busy: self.busy,
            dc: self.dc,
            rst: self.rst,
            delay: self.delay,
            observer,
            delay_us: self.delay_us,
        }
    }

    /// Access to the attached observer
    pub fn observer_mut(&mut self) -> &mut OBS {
        &mut self.observer
    }

    /// Gives the peripherals back
    pub fn release(self) -> (SPI, BUSY, DC, RST, DELAY) {
        (self.spi, self.busy, self.dc, self.rst, self.delay)
    }
}

impl<SPI, BUSY, DC, RST, DELAY, OBS> DisplayInterface<SPI, BUSY, DC, RST, DELAY, OBS>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
    OBS: BusyObserver,
{
    // spi write helper/abstraction function
    fn write(&mut self, data: &[u8]) -> Result<(), ErrorKind<SPI, BUSY, DC, RST>> {
        // transfer spi data
        // Be careful!! Linux has a default limit of 4096 bytes per spi transfer
        // see https://raspberrypi.stackexchange.com/questions/65595/spi-transfer-fails-with-buffer-size-greater-than-4096
        if cfg!(target_os = "linux") {
            for data_chunk in data.chunks(4096) {
                self.spi.write(data_chunk).map_err(ErrorKind::SpiError)?;
            }
            Ok(())
        } else {
            self.spi.write(data).map_err(ErrorKind::SpiError)
        }
    }

    /// Checks if the busy line reads `active`
    pub fn is_busy(&mut self, active: PinState) -> Result<bool, ErrorKind<SPI, BUSY, DC, RST>> {
        match active {
            PinState::Low => self.busy.is_low(),
            PinState::High => self.busy.is_high(),
        }
        .map_err(ErrorKind::BusyError)
    }

    fn poll_busy(
        &mut self,
        active: PinState,
        timeout_ticks: u32,
    ) -> Result<bool, ErrorKind<SPI, BUSY, DC, RST>> {
        let mut ticks = 0;
        while self.is_busy(active)? {
            if ticks >= timeout_ticks {
                warn!("busy timeout after {} ticks", ticks);
                return Ok(false);
            }
            self.observer.on_tick(ticks);
            self.delay.delay_us(self.delay_us);
            ticks += 1;
        }
        Ok(true)
    }
}

impl<SPI, BUSY, DC, RST, DELAY, OBS> Transport for DisplayInterface<SPI, BUSY, DC, RST, DELAY, OBS>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
    OBS: BusyObserver,
{
    type Error = ErrorKind<SPI, BUSY, DC, RST>;

    fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
        // low for commands
        self.dc.set_low().map_err(ErrorKind::DcError)?;

        // Transfer the command over spi
        self.write(&[command])
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        // high for data
        self.dc.set_high().map_err(ErrorKind::DcError)?;
        self.write(data)
    }

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        // 3-wire panels answer on the data line while dc is high
        self.dc.set_high().map_err(ErrorKind::DcError)?;
        let mut buf = [0u8; 1];
        self.spi.read(&mut buf).map_err(ErrorKind::SpiError)?;
        Ok(buf[0])
    }

    fn reset_pulse(&mut self, active: PinState, duration_ms: u32) -> Result<(), Self::Error> {
        self.rst.set_state(active).map_err(ErrorKind::RstError)?;
        self.delay.delay_ms(10);

        self.rst.set_state(!active).map_err(ErrorKind::RstError)?;
        self.delay.delay_ms(duration_ms);
        self.rst.set_state(active).map_err(ErrorKind::RstError)?;
        self.delay.delay_ms(duration_ms);
        Ok(())
    }

    fn wait_busy(&mut self, active: PinState, timeout_ticks: u32) -> Result<bool, Self::Error> {
        debug!("check busy");
        self.observer.on_wait_start();
        let result = self.poll_busy(active, timeout_ticks);
        self.observer
            .on_wait_end(!matches!(result, Ok(true)));
        debug!("busy release");
        result
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

/// Blinks a status LED while the panel is busy
///
/// Toggles the LED every `period` ticks and restores its previous state once the
/// wait is over. Pin errors are ignored, the LED is cosmetic.
pub struct LedObserver<LED> {
    led: LED,
    period: u32,
    was_high: bool,
}

impl<LED: StatefulOutputPin> LedObserver<LED> {
    /// Toggles every 100 ticks
    pub fn new(led: LED) -> Self {
        LedObserver::with_period(led, 100)
    }

    /// Toggles every `period` ticks
    pub fn with_period(led: LED, period: u32) -> Self {
        LedObserver {
            led,
            period: period.max(1),
            was_high: false,
        }
    }

    /// Gives the LED pin back
    pub fn release(self) -> LED {
        self.led
    }
}

impl<LED: StatefulOutputPin> BusyObserver for LedObserver<LED> {
    fn on_wait_start(&mut self) {
        self.was_high = self.led.is_set_high().unwrap_or(false);
    }

    fn on_tick(&mut self, elapsed_ticks: u32) {
        if elapsed_ticks % self.period == 0 {
            let _ = self.led.toggle();
        }
    }

    fn on_wait_end(&mut self, _timed_out: bool) {
        let _ = self.led.set_state(PinState::from(self.was_high));
    }
}
