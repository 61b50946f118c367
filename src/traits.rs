use core::fmt::Debug;
use embedded_hal::digital::PinState;

/// All commands need to have this trait which gives the address of the command
/// which needs to be send via SPI with activated CommandsPin (Data/Command Pin in CommandMode)
pub(crate) trait Command: Copy {
    fn address(self) -> u8;
}

/// Outcome of an operation that waits on the busy line.
///
/// A timeout is not an error: the panel may still finish on its own, so the caller
/// decides whether to retry, accept the frame or report it as stale.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Completion {
    /// Every busy wait was released before its timeout
    #[default]
    Done,
    /// At least one busy wait ran into its timeout
    TimedOut,
}

impl Completion {
    pub(crate) fn from_released(released: bool) -> Self {
        if released {
            Completion::Done
        } else {
            Completion::TimedOut
        }
    }

    /// Combines two outcomes, a single timeout taints the result
    pub fn and(self, other: Completion) -> Completion {
        match (self, other) {
            (Completion::Done, Completion::Done) => Completion::Done,
            _ => Completion::TimedOut,
        }
    }

    /// Returns true if a busy wait timed out
    pub fn is_timed_out(self) -> bool {
        self == Completion::TimedOut
    }
}

/// The byte level connection to a panel controller.
///
/// [`DisplayInterface`](crate::interface::DisplayInterface) implements it on top of
/// `embedded-hal`, tests record the traffic instead.
pub trait Transport {
    /// Error raised by the underlying bus or pins
    type Error: Debug;

    /// Sends a command byte (D/C low)
    fn write_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Sends a single data byte (D/C high)
    fn write_byte(&mut self, value: u8) -> Result<(), Self::Error> {
        self.write_bytes(&[value])
    }

    /// Sends a block of data bytes (D/C high)
    fn write_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Sends the same data byte `count` times
    fn write_repeated(&mut self, value: u8, count: usize) -> Result<(), Self::Error> {
        let chunk = [value; 32];
        let mut left = count;
        while left > 0 {
            let n = left.min(chunk.len());
            self.write_bytes(&chunk[..n])?;
            left -= n;
        }
        Ok(())
    }

    /// Reads one data byte back from the controller
    fn read_byte(&mut self) -> Result<u8, Self::Error>;

    /// Pulses the reset line: `active`, then the inverse for `duration_ms`, then `active` again
    fn reset_pulse(&mut self, active: PinState, duration_ms: u32) -> Result<(), Self::Error>;

    /// Polls the busy line while it reads `active`, one tick per poll.
    ///
    /// Returns `Ok(false)` if the line was still busy after `timeout_ticks` polls.
    fn wait_busy(&mut self, active: PinState, timeout_ticks: u32) -> Result<bool, Self::Error>;

    /// Blocks for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

/// Typed command helpers on top of [`Transport`]
pub(crate) trait TransportExt: Transport {
    fn cmd<C: Command>(&mut self, command: C) -> Result<(), Self::Error> {
        self.write_command(command.address())
    }

    fn cmd_with_data<C: Command>(&mut self, command: C, data: &[u8]) -> Result<(), Self::Error> {
        self.cmd(command)?;
        self.write_bytes(data)
    }
}

impl<T: Transport + ?Sized> TransportExt for T {}

/// Hook called while a [`Transport`] waits on the busy line
///
/// Replaces hard-wired status LEDs: attach an observer to get feedback during
/// multi-second refreshes.
pub trait BusyObserver {
    /// A busy wait starts
    fn on_wait_start(&mut self) {}

    /// Called once per poll while the panel is busy
    fn on_tick(&mut self, _elapsed_ticks: u32) {}

    /// The busy wait is over
    fn on_wait_end(&mut self, _timed_out: bool) {}
}

impl BusyObserver for () {}

/// All the functions to interact with a calendar panel
///
/// Implemented by [`Driver`](crate::driver::Driver); the
/// [composer](crate::composer) only talks to this trait.
pub trait PanelDriver {
    /// Error type of all operations
    type Error;

    /// Resets the controller and loads its register configuration
    fn init(&mut self) -> Result<Completion, Self::Error>;

    /// Fills the whole panel RAM with white and refreshes
    fn clear(&mut self) -> Result<Completion, Self::Error>;

    /// Writes the planes of the window `x, y, w, h` into panel RAM.
    ///
    /// `x` is rounded down and `w` up to whole bytes; both planes use a stride of
    /// `ceil(w / 8)` bytes. A missing plane is sent as white.
    fn write_image(
        &mut self,
        black: Option<&[u8]>,
        color: Option<&[u8]>,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
    ) -> Result<(), Self::Error>;

    /// Shows the RAM contents on the panel
    fn refresh(&mut self) -> Result<Completion, Self::Error>;

    /// Powers off and enters deep sleep, needs [`init`](PanelDriver::init) afterwards
    fn sleep(&mut self) -> Result<Completion, Self::Error>;

    /// Reads the built-in temperature sensor (degree Celsius)
    fn read_temp(&mut self) -> Result<i8, Self::Error>;

    /// Overrides the temperature used to pick the OTP waveform
    fn force_temp(&mut self, value: i8) -> Result<(), Self::Error>;

    /// Width of the panel in pixels
    fn width(&self) -> u16;

    /// Height of the panel in pixels
    fn height(&self) -> u16;

    /// True for black/white/red panels
    fn is_color_capable(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_and() {
        assert_eq!(Completion::Done.and(Completion::Done), Completion::Done);
        assert_eq!(Completion::Done.and(Completion::TimedOut), Completion::TimedOut);
        assert_eq!(Completion::TimedOut.and(Completion::Done), Completion::TimedOut);
        assert!(Completion::from_released(false).is_timed_out());
    }
}
