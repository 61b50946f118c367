//! The panel driver, one type for every supported controller
//!
//! # Example
//!
//!```rust, no_run
//!# use embedded_hal_mock::eh1::*;
//!use epd_calendar::{model, prelude::*};
//!
//!fn show_bar<T: Transport>(epd: &mut Driver<T>) -> Result<(), DriverError<T::Error>> {
//!    let _ = epd.init()?;
//!
//!    // A 64x8 black bar at (8, 0)
//!    let black = [0u8; 64];
//!    epd.write_image(Some(&black), None, 8, 0, 64, 8)?;
//!    if epd.refresh()?.is_timed_out() {
//!        // the panel may still finish, the frame could be incomplete
//!    }
//!
//!    // Set the EPD to sleep
//!    let _ = epd.sleep()?;
//!    Ok(())
//!}
//!
//!# let expectations = [];
//!# let spi = spi::Mock::new(&expectations);
//!# let expectations = [];
//!# let busy_in = digital::Mock::new(&expectations);
//!# let dc = digital::Mock::new(&expectations);
//!# let rst = digital::Mock::new(&expectations);
//!# let delay = delay::NoopDelay::new();
//!// Setup EPD
//!let interface = DisplayInterface::new(spi, busy_in, dc, rst, delay, None);
//!let mut epd = Driver::new(interface, model::UC8176_420_BWR);
//!let _ = show_bar(&mut epd);
//!```
use log::debug;

use crate::error::DriverError;
use crate::model::{ChipVariant, DriverConfig, PanelModel};
use crate::traits::{Completion, PanelDriver, Transport};
use crate::window::PartialWindow;
use crate::{ssd1619, uc8176};

/// Life cycle of the panel controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Not initialised since power up
    Uninitialized,
    /// Accepts image data and refreshes
    Ready,
    /// Image data is being written
    Writing,
    /// A refresh waveform is running
    Refreshing,
    /// Deep sleep, RAM contents may be lost, needs `init()`
    Sleeping,
}

/// Driver for UC8176 and SSD1619 based panels
///
/// `T` is the [`Transport`] to the controller, usually a
/// [`DisplayInterface`](crate::interface::DisplayInterface).
/// If an operation fails halfway the driver stays in the intermediate state
/// and only accepts [`init`](PanelDriver::init) again.
pub struct Driver<T> {
    transport: T,
    config: DriverConfig,
    state: DriverState,
}

impl<T: Transport> Driver<T> {
    /// Creates a driver with default timings, call [`init`](PanelDriver::init) before use
    pub fn new(transport: T, model: PanelModel) -> Self {
        Driver::with_config(transport, DriverConfig::new(model))
    }

    /// Creates a driver with custom timings
    pub fn with_config(transport: T, config: DriverConfig) -> Self {
        Driver {
            transport,
            config,
            state: DriverState::Uninitialized,
        }
    }

    /// Current state
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// The attached panel
    pub fn model(&self) -> &PanelModel {
        &self.config.model
    }

    /// The configuration the driver was built with
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Gives the transport back
    pub fn release(self) -> T {
        self.transport
    }

    /// Sends a raw command byte, bypassing the state tracking
    pub fn send_command(&mut self, command: u8) -> Result<(), DriverError<T::Error>> {
        self.transport
            .write_command(command)
            .map_err(DriverError::Transport)
    }

    /// Sends raw data bytes, bypassing the state tracking
    pub fn send_data(&mut self, data: &[u8]) -> Result<(), DriverError<T::Error>> {
        self.transport
            .write_bytes(data)
            .map_err(DriverError::Transport)
    }

    fn ensure_ready(&self) -> Result<(), DriverError<T::Error>> {
        match self.state {
            DriverState::Ready => Ok(()),
            state => Err(DriverError::InvalidState(state)),
        }
    }

    fn check_plane(plane: Option<&[u8]>, needed: usize) -> Result<(), DriverError<T::Error>> {
        match plane {
            Some(plane) if plane.len() < needed => Err(DriverError::BufferTooSmall {
                needed,
                actual: plane.len(),
            }),
            _ => Ok(()),
        }
    }
}

impl<T: Transport> PanelDriver for Driver<T> {
    type Error = DriverError<T::Error>;

    fn init(&mut self) -> Result<Completion, Self::Error> {
        let completion = match self.config.model.chip {
            ChipVariant::Uc8176 => uc8176::init(&mut self.transport, &self.config),
            ChipVariant::Ssd1619 => ssd1619::init(&mut self.transport, &self.config),
        }
        .map_err(DriverError::Transport)?;
        self.state = DriverState::Ready;
        Ok(completion)
    }

    fn clear(&mut self) -> Result<Completion, Self::Error> {
        self.ensure_ready()?;
        self.state = DriverState::Writing;
        let completion = match self.config.model.chip {
            ChipVariant::Uc8176 => uc8176::clear(&mut self.transport, &self.config),
            ChipVariant::Ssd1619 => ssd1619::clear(&mut self.transport, &self.config),
        }
        .map_err(DriverError::Transport)?;
        self.state = DriverState::Ready;
        Ok(completion)
    }

    fn write_image(
        &mut self,
        black: Option<&[u8]>,
        color: Option<&[u8]>,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
    ) -> Result<(), Self::Error> {
        self.ensure_ready()?;
        let model = self.config.model;
        let window = PartialWindow::normalize(x, y, w, h, model.width(), model.height())
            .map_err(DriverError::RegionOutOfBounds)?;
        if !model.color_capable && black.is_none() {
            return Err(DriverError::MissingBlackPlane);
        }
        let needed = window.plane_len();
        Self::check_plane(black, needed)?;
        if model.color_capable {
            Self::check_plane(color, needed)?;
        }
        if window.is_empty() {
            return Ok(());
        }

        self.state = DriverState::Writing;
        match model.chip {
            ChipVariant::Uc8176 => {
                uc8176::write_image(&mut self.transport, &model, &window, black, color)
            }
            ChipVariant::Ssd1619 => {
                ssd1619::write_image(&mut self.transport, &model, &window, black, color)
            }
        }
        .map_err(DriverError::Transport)?;
        self.state = DriverState::Ready;
        Ok(())
    }

    fn refresh(&mut self) -> Result<Completion, Self::Error> {
        self.ensure_ready()?;
        self.state = DriverState::Refreshing;
        debug!("refresh begin");
        let completion = match self.config.model.chip {
            ChipVariant::Uc8176 => uc8176::refresh(&mut self.transport, &self.config),
            ChipVariant::Ssd1619 => ssd1619::refresh(&mut self.transport, &self.config),
        }
        .map_err(DriverError::Transport)?;
        debug!("refresh end");
        self.state = DriverState::Ready;
        Ok(completion)
    }

    fn sleep(&mut self) -> Result<Completion, Self::Error> {
        self.ensure_ready()?;
        let completion = match self.config.model.chip {
            ChipVariant::Uc8176 => uc8176::sleep(&mut self.transport, &self.config),
            ChipVariant::Ssd1619 => ssd1619::sleep(&mut self.transport),
        }
        .map_err(DriverError::Transport)?;
        self.state = DriverState::Sleeping;
        Ok(completion)
    }

    fn read_temp(&mut self) -> Result<i8, Self::Error> {
        self.ensure_ready()?;
        let temp = match self.config.model.chip {
            ChipVariant::Uc8176 => uc8176::read_temp(&mut self.transport),
            ChipVariant::Ssd1619 => ssd1619::read_temp(&mut self.transport),
        }
        .map_err(DriverError::Transport)?;
        debug!("temperature: {}", temp);
        Ok(temp)
    }

    fn force_temp(&mut self, value: i8) -> Result<(), Self::Error> {
        self.ensure_ready()?;
        match self.config.model.chip {
            ChipVariant::Uc8176 => uc8176::force_temp(&mut self.transport, value),
            ChipVariant::Ssd1619 => ssd1619::force_temp(&mut self.transport, value),
        }
        .map_err(DriverError::Transport)
    }

    fn width(&self) -> u16 {
        self.config.model.width()
    }

    fn height(&self) -> u16 {
        self.config.model.height()
    }

    fn is_color_capable(&self) -> bool {
        self.config.model.color_capable
    }
}

/// Streams the first `len` bytes of a plane, white (`0xFF`) if there is none.
///
/// With `invert` every byte is complemented, the substituted white included.
pub(crate) fn stream_plane<T: Transport>(
    transport: &mut T,
    plane: Option<&[u8]>,
    len: usize,
    invert: bool,
) -> Result<(), T::Error> {
    let mask = if invert { 0xFF } else { 0x00 };
    match plane {
        None => transport.write_repeated(0xFF ^ mask, len),
        Some(plane) if !invert => transport.write_bytes(&plane[..len]),
        Some(plane) => {
            let mut inverted = [0u8; 64];
            for chunk in plane[..len].chunks(inverted.len()) {
                for (dst, src) in inverted.iter_mut().zip(chunk) {
                    *dst = src ^ mask;
                }
                transport.write_bytes(&inverted[..chunk.len()])?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Event, RecordingTransport};
    use crate::model::{SSD1619_420_BW, SSD1619_420_BWR, UC8176_420_BW, UC8176_420_BWR};
    extern crate std;
    use std::vec;
    use std::vec::Vec;

    fn ready(model: PanelModel) -> Driver<RecordingTransport> {
        let mut driver = Driver::new(RecordingTransport::default(), model);
        let _ = driver.init().unwrap();
        driver.transport.events.clear();
        driver
    }

    #[test]
    fn needs_init() {
        let mut driver = Driver::new(RecordingTransport::default(), UC8176_420_BW);
        assert_eq!(driver.state(), DriverState::Uninitialized);
        assert_eq!(
            driver.refresh(),
            Err(DriverError::InvalidState(DriverState::Uninitialized))
        );
        assert!(driver.transport.events.is_empty());

        let _ = driver.init().unwrap();
        assert_eq!(driver.state(), DriverState::Ready);
    }

    #[test]
    fn sleeping_needs_init() {
        let mut driver = ready(SSD1619_420_BWR);
        let _ = driver.sleep().unwrap();
        assert_eq!(driver.state(), DriverState::Sleeping);
        assert_eq!(
            driver.write_image(Some(&[0; 8]), None, 0, 0, 8, 8),
            Err(DriverError::InvalidState(DriverState::Sleeping))
        );
        let _ = driver.init().unwrap();
        assert!(driver.write_image(Some(&[0; 8]), None, 0, 0, 8, 8).is_ok());
    }

    #[test]
    fn out_of_bounds_window_is_reported() {
        let mut driver = ready(UC8176_420_BWR);
        let black = [0u8; 16];
        assert_eq!(
            driver.write_image(Some(&black), None, 395, 0, 10, 8),
            Err(DriverError::RegionOutOfBounds(PartialWindow {
                x: 392,
                y: 0,
                w: 16,
                h: 8
            }))
        );
        assert_eq!(
            driver.write_image(Some(&black), None, 0, 299, 8, 2),
            Err(DriverError::RegionOutOfBounds(PartialWindow {
                x: 0,
                y: 299,
                w: 8,
                h: 2
            }))
        );
        assert!(driver.transport.events.is_empty());
        assert_eq!(driver.state(), DriverState::Ready);
    }

    #[test]
    fn black_plane_required_on_bw_panels() {
        let mut driver = ready(UC8176_420_BW);
        assert_eq!(
            driver.write_image(None, Some(&[0; 8]), 0, 0, 8, 8),
            Err(DriverError::MissingBlackPlane)
        );

        let mut driver = ready(UC8176_420_BWR);
        assert!(driver.write_image(None, Some(&[0; 8]), 0, 0, 8, 8).is_ok());
    }

    #[test]
    fn short_planes_are_rejected() {
        let mut driver = ready(SSD1619_420_BWR);
        assert_eq!(
            driver.write_image(Some(&[0; 16]), Some(&[0; 15]), 0, 0, 16, 8),
            Err(DriverError::BufferTooSmall {
                needed: 16,
                actual: 15
            })
        );
    }

    #[test]
    fn empty_window_is_a_no_op() {
        let mut driver = ready(UC8176_420_BW);
        assert!(driver.write_image(Some(&[]), None, 8, 8, 0, 8).is_ok());
        assert!(driver.transport.events.is_empty());
    }

    #[test]
    fn timeout_is_not_an_error() {
        let mut driver = ready(SSD1619_420_BW);
        driver.transport.busy_results.push_back(false);
        assert_eq!(driver.refresh(), Ok(Completion::TimedOut));
        assert_eq!(driver.state(), DriverState::Ready);
        assert_eq!(driver.refresh(), Ok(Completion::Done));
    }

    #[test]
    fn raw_passthrough() {
        let mut driver = Driver::new(RecordingTransport::default(), UC8176_420_BW);
        driver.send_command(0x12).unwrap();
        driver.send_data(&[0x01, 0x02]).unwrap();
        assert_eq!(
            driver.release().events,
            vec![Event::Command(0x12, vec![0x01, 0x02])]
        );
    }

    #[test]
    fn temperature() {
        let mut driver = ready(UC8176_420_BW);
        driver.transport.read_value = 0xFB;
        assert_eq!(driver.read_temp(), Ok(-5));
        driver.force_temp(25).unwrap();
        let events: Vec<Event> = driver.release().events;
        assert_eq!(
            events,
            vec![
                Event::Command(0x40, vec![]),
                Event::Read,
                Event::Command(0xE0, vec![0x02]),
                Event::Command(0xE5, vec![25]),
            ]
        );
    }

    #[test]
    fn inverted_planes() {
        let mut transport = RecordingTransport::default();
        transport.write_command(0x26).unwrap();
        stream_plane(&mut transport, Some(&[0x0F; 70]), 66, true).unwrap();
        stream_plane(&mut transport, None, 3, true).unwrap();
        stream_plane(&mut transport, None, 2, false).unwrap();
        let mut expected = vec![0xF0; 66];
        expected.extend([0x00, 0x00, 0x00, 0xFF, 0xFF]);
        assert_eq!(transport.events, vec![Event::Command(0x26, expected)]);
    }
}
