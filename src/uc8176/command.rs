//! SPI Commands for the UC8176 controller
use crate::traits;

/// UC8176 commands
///
/// Should rarely (never?) be needed directly.
///
/// The description of the single commands is mostly taken from the UC8176 / IL0398 datasheets
#[derive(Copy, Clone)]
pub(crate) enum Command {
    /// Set Resolution, LUT selection, BWR pixels, gate scan direction, source shift direction, booster switch, soft reset
    /// One Byte of Data:
    ///     0x0F Red Mode, LUT from OTP, 400x300
    ///     0x1F B/W Mode, LUT from OTP, 400x300
    /// Bits 7:6 select the resolution
    PanelSetting = 0x00,
    /// After the Power Off command, the driver will power off following the Power Off Sequence. This command will turn off charge
    /// pump, T-con, source driver, gate driver, VCOM, and temperature sensor, but register data will be kept until VDD becomes OFF.
    PowerOff = 0x02,
    /// Turning On the Power
    PowerOn = 0x04,
    /// After this command is transmitted, the chip would enter the deep-sleep mode to save power.
    ///
    /// The deep sleep mode would return to standby by hardware reset.
    ///
    /// The only one parameter is a check code, the command would be excuted if check code = 0xA5.
    DeepSleep = 0x07,
    /// - In B/W mode, this command writes “OLD” data to SRAM.
    /// - In B/W/Red mode, this command writes “B/W” data to SRAM.
    DataStartTransmission1 = 0x10,
    /// While user sent this command, driver will refresh display (data/VCOM) according to SRAM data and LUT.
    ///
    /// After Display Refresh command, BUSY_N signal will become “0” and the refreshing of panel starts.
    DisplayRefresh = 0x12,
    /// - In B/W mode, this command writes “NEW” data to SRAM.
    /// - In B/W/Red mode, this command writes “RED” data to SRAM.
    DataStartTransmission2 = 0x13,
    /// This command reads the temperature sensed by the temperature sensor.
    TemperatureSensorCommand = 0x40,
    /// This command indicates the interval of Vcom and data output. When setting the vertical back porch, the total blanking will be kept (20 Hsync)
    VcomAndDataIntervalSetting = 0x50,
    /// This command sets partial window
    PartialWindow = 0x90,
    /// This command makes the display enter partial mode
    PartialIn = 0x91,
    /// This command makes the display exit partial mode and enter normal mode
    PartialOut = 0x92,
    /// Cascade setting, bit 1 (TSFIX) makes the controller use the temperature of [`Command::ForceTemperature`]
    CascadeSetting = 0xE0,
    /// Temperature value used when TSFIX is set
    ForceTemperature = 0xE5,
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
        assert_eq!(Command::PanelSetting.address(), 0x00);

        assert_eq!(Command::DisplayRefresh.address(), 0x12);

        assert_eq!(Command::PartialOut.address(), 0x92);

        assert_eq!(Command::ForceTemperature.address(), 0xE5);
    }
}
