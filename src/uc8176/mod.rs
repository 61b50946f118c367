//! Command sequences for UC8176 (IL0398) controllers
//!
//! The busy line of this controller is low while it works.
//! Partial writes go through the partial window registers, the panel stays in
//! full refresh mode otherwise.

use embedded_hal::digital::PinState;

use crate::driver::stream_plane;
use crate::model::{DriverConfig, PanelModel};
use crate::traits::{Completion, Transport, TransportExt};
use crate::window::PartialWindow;

pub(crate) mod command;

use self::command::Command;

const IS_BUSY_LOW: PinState = PinState::Low;
const RESET_ACTIVE: PinState = PinState::High;

/// Value for the panel setting register
///
/// LUT from OTP, scan up, shift right, booster on, no soft reset.
/// Bit 4 selects black/white mode.
pub(crate) fn panel_setting(model: &PanelModel) -> u8 {
    let mut value = (model.resolution.uc8176_bits() << 6) | 0x0F;
    if !model.color_capable {
        value |= 0x10;
    }
    value
}

pub(crate) fn init<T: Transport>(t: &mut T, config: &DriverConfig) -> Result<Completion, T::Error> {
    t.reset_pulse(RESET_ACTIVE, config.reset_ms)?;
    t.cmd_with_data(Command::PanelSetting, &[panel_setting(&config.model)])?;
    if !config.model.color_capable {
        // VBD white border, default data interval
        t.cmd_with_data(Command::VcomAndDataIntervalSetting, &[0x97])?;
    }
    Ok(Completion::Done)
}

pub(crate) fn clear<T: Transport>(t: &mut T, config: &DriverConfig) -> Result<Completion, T::Error> {
    let model = &config.model;
    let len = model.plane_len();
    t.cmd(Command::DataStartTransmission1)?;
    t.write_repeated(0xFF, len)?;
    t.cmd(Command::DataStartTransmission2)?;
    stream_plane(t, None, len, model.invert_color_plane)?;
    refresh(t, config)
}

/// Encodes a window for the partial window register.
///
/// Horizontal start and end are byte aligned by the controller, the low three
/// bits of the end are set so the last byte is covered completely.
pub(crate) fn partial_window_bytes(window: &PartialWindow) -> [u8; 9] {
    let x = window.x & 0xFFF8;
    let x_end = window.x_end() | 0x0007;
    let y_end = window.y_end();
    [
        (x >> 8) as u8,
        x as u8,
        (x_end >> 8) as u8,
        x_end as u8,
        (window.y >> 8) as u8,
        window.y as u8,
        (y_end >> 8) as u8,
        y_end as u8,
        // gates scan inside and outside of the window
        0x01,
    ]
}

pub(crate) fn write_image<T: Transport>(
    t: &mut T,
    model: &PanelModel,
    window: &PartialWindow,
    black: Option<&[u8]>,
    color: Option<&[u8]>,
) -> Result<(), T::Error> {
    let len = window.plane_len();
    t.cmd(Command::PartialIn)?;
    t.cmd_with_data(Command::PartialWindow, &partial_window_bytes(window))?;
    if model.color_capable {
        t.cmd(Command::DataStartTransmission1)?;
        stream_plane(t, black, len, false)?;
        t.cmd(Command::DataStartTransmission2)?;
        stream_plane(t, color, len, model.invert_color_plane)?;
    } else {
        // B/W mode takes the new frame from the second data buffer
        t.cmd(Command::DataStartTransmission2)?;
        stream_plane(t, black, len, false)?;
    }
    t.cmd(Command::PartialOut)
}

pub(crate) fn refresh<T: Transport>(t: &mut T, config: &DriverConfig) -> Result<Completion, T::Error> {
    let timeouts = &config.timeouts;
    t.cmd(Command::PowerOn)?;
    let power_on = t.wait_busy(IS_BUSY_LOW, timeouts.power)?;
    t.cmd(Command::DisplayRefresh)?;
    let refreshed = t.wait_busy(IS_BUSY_LOW, timeouts.refresh)?;
    t.cmd(Command::PowerOff)?;
    let power_off = t.wait_busy(IS_BUSY_LOW, timeouts.power)?;
    Ok(Completion::from_released(power_on)
        .and(Completion::from_released(refreshed))
        .and(Completion::from_released(power_off)))
}

pub(crate) fn sleep<T: Transport>(t: &mut T, config: &DriverConfig) -> Result<Completion, T::Error> {
    t.cmd(Command::PowerOff)?;
    let released = t.wait_busy(IS_BUSY_LOW, config.timeouts.power)?;
    // check code
    t.cmd_with_data(Command::DeepSleep, &[0xA5])?;
    Ok(Completion::from_released(released))
}

pub(crate) fn read_temp<T: Transport>(t: &mut T) -> Result<i8, T::Error> {
    t.cmd(Command::TemperatureSensorCommand)?;
    Ok(t.read_byte()? as i8)
}

pub(crate) fn force_temp<T: Transport>(t: &mut T, value: i8) -> Result<(), T::Error> {
    // enable the temperature override
    t.cmd_with_data(Command::CascadeSetting, &[0x02])?;
    t.cmd_with_data(Command::ForceTemperature, &[value as u8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::Driver;
    use crate::mock::{Event, RecordingTransport};
    use crate::model::{Resolution, UC8176_420_BW, UC8176_420_BWR};
    use crate::traits::PanelDriver;
    extern crate std;
    use std::vec;

    #[test]
    fn panel_settings() {
        assert_eq!(panel_setting(&UC8176_420_BWR), 0x0F);
        assert_eq!(panel_setting(&UC8176_420_BW), 0x1F);
        let small = PanelModel {
            resolution: Resolution::R320x240,
            ..UC8176_420_BW
        };
        assert_eq!(panel_setting(&small), 0x9F);
    }

    #[test]
    fn window_encoding() {
        let window = PartialWindow::aligned(8, 0, 64, 8);
        assert_eq!(
            partial_window_bytes(&window),
            [0x00, 0x08, 0x00, 0x47, 0x00, 0x00, 0x00, 0x07, 0x01]
        );
        let window = PartialWindow::aligned(256, 290, 144, 10);
        assert_eq!(
            partial_window_bytes(&window),
            [0x01, 0x00, 0x01, 0x8F, 0x01, 0x22, 0x01, 0x2B, 0x01]
        );
    }

    #[test]
    fn bw_init() {
        let mut driver = Driver::new(RecordingTransport::default(), UC8176_420_BW);
        assert_eq!(driver.init(), Ok(Completion::Done));
        assert_eq!(
            driver.release().events,
            vec![
                Event::Reset(PinState::High, 10),
                Event::Command(0x00, vec![0x1F]),
                Event::Command(0x50, vec![0x97]),
            ]
        );
    }

    #[test]
    fn bwr_init_clear_write_refresh() {
        let mut driver = Driver::new(RecordingTransport::default(), UC8176_420_BWR);
        assert_eq!(driver.init(), Ok(Completion::Done));
        assert_eq!(driver.clear(), Ok(Completion::Done));
        let black = [0x00; 64];
        let color = [0xFF; 64];
        driver
            .write_image(Some(&black), Some(&color), 8, 0, 64, 8)
            .unwrap();
        assert_eq!(driver.refresh(), Ok(Completion::Done));

        let t = driver.release();
        assert_eq!(
            t.commands(),
            vec![
                0x00, // init
                0x10, 0x13, 0x04, 0x12, 0x02, // clear
                0x91, 0x90, 0x10, 0x13, 0x92, // write
                0x04, 0x12, 0x02, // refresh
            ]
        );
        assert_eq!(t.data_of(0x00), vec![&[0x0F][..]]);

        let full = t.data_of(0x10)[0];
        assert_eq!(full.len(), 15_000);
        assert!(full.iter().all(|&b| b == 0xFF));
        assert!(t.data_of(0x13)[0].iter().all(|&b| b == 0xFF));

        let window = t.data_of(0x90)[0];
        assert_eq!(window.len(), 9);
        // first and last byte column of x = 8, w = 64
        assert_eq!(window[1] >> 3, 1);
        assert_eq!(window[3] >> 3, 8);
        assert_eq!(t.data_of(0x10)[1], &black[..]);
        assert_eq!(t.data_of(0x13)[1], &color[..]);

        let waits = t
            .events
            .iter()
            .filter(|e| matches!(e, Event::WaitBusy(PinState::Low, _)))
            .count();
        assert_eq!(waits, 6);
    }

    #[test]
    fn bw_write_uses_second_buffer() {
        let mut driver = Driver::new(RecordingTransport::default(), UC8176_420_BW);
        let _ = driver.init().unwrap();
        driver
            .write_image(Some(&[0xAA; 2]), None, 0, 0, 16, 1)
            .unwrap();
        let t = driver.release();
        assert_eq!(t.data_of(0x13), vec![&[0xAA, 0xAA][..]]);
        assert!(t.data_of(0x10).is_empty());
    }

    #[test]
    fn refresh_timeout() {
        let mut t = RecordingTransport::default();
        t.busy_results.extend([true, false, true]);
        let config = DriverConfig::new(UC8176_420_BW);
        assert_eq!(refresh(&mut t, &config), Ok(Completion::TimedOut));
        assert_eq!(
            t.events[3],
            Event::WaitBusy(PinState::Low, config.timeouts.refresh)
        );
    }

    #[test]
    fn deep_sleep() {
        let mut t = RecordingTransport::default();
        let config = DriverConfig::new(UC8176_420_BWR);
        assert_eq!(sleep(&mut t, &config), Ok(Completion::Done));
        assert_eq!(
            t.events,
            vec![
                Event::Command(0x02, vec![]),
                Event::WaitBusy(PinState::Low, 100),
                Event::Command(0x07, vec![0xA5]),
            ]
        );
    }
}
