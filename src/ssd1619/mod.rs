//! Command sequences for SSD1619 controllers
//!
//! The busy line is high while the controller works. Writes address the RAM
//! window directly, there is no partial mode to enter.

use embedded_hal::digital::PinState;

use crate::driver::stream_plane;
use crate::model::{DriverConfig, PanelModel};
use crate::traits::{Completion, Transport, TransportExt};
use crate::window::PartialWindow;

pub(crate) mod command;

use self::command::Command;

const IS_BUSY_HIGH: PinState = PinState::High;
const RESET_ACTIVE: PinState = PinState::High;

pub(crate) fn init<T: Transport>(t: &mut T, config: &DriverConfig) -> Result<Completion, T::Error> {
    let model = &config.model;
    t.reset_pulse(RESET_ACTIVE, config.reset_ms)?;
    t.cmd(Command::SwReset)?;
    let reset = t.wait_busy(IS_BUSY_HIGH, config.timeouts.reset)?;

    t.cmd_with_data(Command::AnalogBlockControl, &[0x54])?;
    t.cmd_with_data(Command::DigitalBlockControl, &[0x3B])?;

    let last_gate = model.height().saturating_sub(1);
    t.cmd_with_data(
        Command::DriverOutputControl,
        &[last_gate as u8, (last_gate >> 8) as u8, 0x00],
    )?;
    set_ram_area(t, &full_window(model))?;

    t.cmd_with_data(Command::BorderWaveformControl, &[0x01])?;
    // internal temperature sensor
    t.cmd_with_data(Command::TemperatureSensorControl, &[0x80])?;
    // load temperature and waveform
    t.cmd_with_data(Command::DisplayUpdateControl2, &[0xB1])?;
    t.cmd(Command::MasterActivation)?;
    let loaded = t.wait_busy(IS_BUSY_HIGH, config.timeouts.reset)?;

    Ok(Completion::from_released(reset).and(Completion::from_released(loaded)))
}

fn full_window(model: &PanelModel) -> PartialWindow {
    PartialWindow::aligned(0, 0, model.width(), model.height())
}

/// Selects the RAM window and moves the address counters to its origin
pub(crate) fn set_ram_area<T: Transport>(t: &mut T, window: &PartialWindow) -> Result<(), T::Error> {
    // x increment, y increment
    t.cmd_with_data(Command::DataEntryModeSetting, &[0x03])?;
    t.cmd_with_data(
        Command::SetRamXAddressStartEndPosition,
        &[(window.x / 8) as u8, (window.x_end() / 8) as u8],
    )?;
    let y_end = window.y_end();
    t.cmd_with_data(
        Command::SetRamYAddressStartEndPosition,
        &[
            window.y as u8,
            (window.y >> 8) as u8,
            y_end as u8,
            (y_end >> 8) as u8,
        ],
    )?;
    t.cmd_with_data(Command::SetRamXAddressCounter, &[(window.x / 8) as u8])?;
    t.cmd_with_data(
        Command::SetRamYAddressCounter,
        &[window.y as u8, (window.y >> 8) as u8],
    )
}

pub(crate) fn clear<T: Transport>(t: &mut T, config: &DriverConfig) -> Result<Completion, T::Error> {
    let model = &config.model;
    let len = model.plane_len();
    set_ram_area(t, &full_window(model))?;
    t.cmd(Command::WriteRamBlackWhite)?;
    t.write_repeated(0xFF, len)?;
    t.cmd(Command::WriteRamRed)?;
    stream_plane(t, None, len, model.invert_color_plane)?;
    refresh(t, config)
}

pub(crate) fn write_image<T: Transport>(
    t: &mut T,
    model: &PanelModel,
    window: &PartialWindow,
    black: Option<&[u8]>,
    color: Option<&[u8]>,
) -> Result<(), T::Error> {
    let len = window.plane_len();
    set_ram_area(t, window)?;
    t.cmd(Command::WriteRamBlackWhite)?;
    stream_plane(t, black, len, false)?;
    t.cmd(Command::WriteRamRed)?;
    if model.color_capable {
        stream_plane(t, color, len, model.invert_color_plane)
    } else {
        // the red RAM holds the previous frame in B/W mode
        stream_plane(t, black, len, false)
    }
}

pub(crate) fn refresh<T: Transport>(t: &mut T, config: &DriverConfig) -> Result<Completion, T::Error> {
    // clock on, analog on, load temperature and LUT, display, analog off, clock off
    t.cmd_with_data(Command::DisplayUpdateControl2, &[0xC7])?;
    t.cmd(Command::MasterActivation)?;
    let released = t.wait_busy(IS_BUSY_HIGH, config.timeouts.refresh)?;
    // the update moves the RAM window, later writes expect the full panel again
    set_ram_area(t, &full_window(&config.model))?;
    Ok(Completion::from_released(released))
}

pub(crate) fn sleep<T: Transport>(t: &mut T) -> Result<Completion, T::Error> {
    t.cmd_with_data(Command::DeepSleepMode, &[0x01])?;
    t.delay_ms(100);
    Ok(Completion::Done)
}

pub(crate) fn read_temp<T: Transport>(t: &mut T) -> Result<i8, T::Error> {
    t.cmd(Command::TemperatureSensorRead)?;
    Ok(t.read_byte()? as i8)
}

pub(crate) fn force_temp<T: Transport>(t: &mut T, value: i8) -> Result<(), T::Error> {
    t.cmd_with_data(Command::TemperatureSensorWrite, &[value as u8])
}
