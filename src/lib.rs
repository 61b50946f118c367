//! A driver and renderer for 4.2" UC8176 and SSD1619 ePaper calendars
//!
//! This crate was built using [`embedded-hal`] traits. It has three parts:
//!
//! - [`driver`]: one parametrized driver for the UC8176 and SSD1619 controller
//!   families, talking to the panel through a [`Transport`](traits::Transport)
//! - [`graphics`]: a paged canvas, drawing a full panel scene one strip of rows
//!   at a time into a small caller supplied buffer
//! - [`lunar`] and [`time`]: Gregorian and Chinese lunar calendar arithmetic
//!
//! The [`composer`] glues them together into calendar and clock scenes.
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal/1.0.0
//!
//! # Requirements
//!
//! ### SPI
//!
//! - MISO is not connected/available, temperature reads share MOSI (3-wire)
//! - SPI_MODE_0 is used (CPHL = 0, CPOL = 0)
//! - 8 bits per word, MSB first
//!
//! ### Other....
//!
//! - Buffersize: image planes are always `ceil(w / 8) * h` bytes, where `w` and
//!   `h` are the size of the full panel or of the partial window written
//!
//! # Examples
//!
//!```rust, no_run
//!# use embedded_hal_mock::eh1::*;
//!use epd_calendar::composer::{render_and_refresh, Fonts, Mode, SceneData};
//!use epd_calendar::{model, prelude::*};
//!
//!fn show<T: Transport>(epd: &mut Driver<T>, fonts: &Fonts<'_>) {
//!    // 40 rows of the 400 px wide panel
//!    let mut buffer = [0u8; 50 * 40];
//!    let data = SceneData {
//!        timestamp: 1_735_689_600,
//!        temperature: 21,
//!        voltage: 3.9,
//!    };
//!
//!    let _ = epd.init();
//!    let _ = render_and_refresh(epd, &mut buffer, &data, Mode::Calendar, fonts);
//!    let _ = epd.sleep();
//!}
//!
//!# let expectations = [];
//!# let spi = spi::Mock::new(&expectations);
//!# let expectations = [];
//!# let busy_in = digital::Mock::new(&expectations);
//!# let dc = digital::Mock::new(&expectations);
//!# let rst = digital::Mock::new(&expectations);
//!# let delay = delay::NoopDelay::new();
//!let interface = DisplayInterface::new(spi, busy_in, dc, rst, delay, None);
//!let mut epd = Driver::new(interface, model::PanelModel::from_id_or_default(3));
//!# let _ = &mut epd;
//!```
//!
#![no_std]

pub mod color;
pub mod composer;
pub mod driver;
pub mod error;
pub mod graphics;
pub mod interface;
pub mod lunar;
pub mod model;
pub mod time;
pub mod traits;
pub mod window;

pub(crate) mod ssd1619;
pub(crate) mod uc8176;

#[cfg(test)]
mod mock;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::driver::{Driver, DriverState};
    pub use crate::error::{DriverError, ErrorKind};
    pub use crate::graphics::{Canvas, DisplayRotation, GlyphRenderer};
    pub use crate::interface::{DisplayInterface, LedObserver};
    pub use crate::model::{DriverConfig, PanelModel};
    pub use crate::traits::{BusyObserver, Completion, PanelDriver, Transport};
    pub use crate::SPI_MODE;
}

use embedded_hal::spi::{Mode, Phase, Polarity};

/// SPI mode -
/// For more infos see [Requirements: SPI](index.html#spi)
pub const SPI_MODE: Mode = Mode {
    phase: Phase::CaptureOnFirstTransition,
    polarity: Polarity::IdleLow,
};
