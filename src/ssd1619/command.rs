//! SPI Commands for the SSD1619 controller
use crate::traits;

/// SSD1619 commands
///
/// Should rarely (never?) be needed directly.
#[derive(Copy, Clone)]
pub(crate) enum Command {
    /// Gate count (height - 1, little endian) and scanning sequence
    DriverOutputControl = 0x01,
    /// 0x01 enters deep sleep mode 1, RAM is lost; wake up with a hardware reset
    DeepSleepMode = 0x10,
    /// Address counter direction, 0x03 = x increment, y increment
    DataEntryModeSetting = 0x11,
    /// Resets the commands and parameters to their S/W Reset default values except R10h-Deep Sleep Mode
    SwReset = 0x12,
    /// 0x80 selects the internal temperature sensor
    TemperatureSensorControl = 0x18,
    /// Writes the temperature register
    TemperatureSensorWrite = 0x1A,
    /// Reads the temperature register
    TemperatureSensorRead = 0x1B,
    /// Activate Display Update Sequence, wait on busy afterwards
    MasterActivation = 0x20,
    /// Selects the update sequence run by [`Command::MasterActivation`]
    ///
    /// - 0xB1: load temperature and OTP waveform
    /// - 0xC7: clock and analog on, display, analog and clock off
    DisplayUpdateControl2 = 0x22,
    /// Black/white RAM, a set bit is white
    WriteRamBlackWhite = 0x24,
    /// Red RAM, a set bit is red. B/W panels keep the reference frame here
    WriteRamRed = 0x26,
    /// Border waveform
    BorderWaveformControl = 0x3C,
    /// RAM X start and end, in bytes
    SetRamXAddressStartEndPosition = 0x44,
    /// RAM Y start and end, in rows, little endian
    SetRamYAddressStartEndPosition = 0x45,
    /// RAM X counter, in bytes
    SetRamXAddressCounter = 0x4E,
    /// RAM Y counter, little endian
    SetRamYAddressCounter = 0x4F,
    /// Analog block control, always 0x54
    AnalogBlockControl = 0x74,
    /// Digital block control, always 0x3B
    DigitalBlockControl = 0x7E,
}

impl traits::Command for Command {
    /// Returns the address of the command
    fn address(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Command as CommandTrait;

    #[test]
    fn command_addr() {
        assert_eq!(Command::DriverOutputControl.address(), 0x01);

        assert_eq!(Command::SetRamXAddressCounter.address(), 0x4E);

        assert_eq!(Command::DigitalBlockControl.address(), 0x7E);
    }
}
