use core::fmt::{Debug, Display, Formatter};

use embedded_hal::{digital, spi};

use crate::driver::DriverState;
use crate::window::PartialWindow;

/// Error of the `embedded-hal` [`DisplayInterface`](crate::interface::DisplayInterface)
pub enum ErrorKind<SPI, BUSY, DC, RST>
where
    SPI: spi::ErrorType,
    BUSY: digital::ErrorType,
    DC: digital::ErrorType,
    RST: digital::ErrorType,
{
    /// Encountered an SPI error
    SpiError(SPI::Error),

    /// Encountered an error on Busy GPIO
    BusyError(BUSY::Error),

    /// Encountered an error on DC GPIO
    DcError(DC::Error),

    /// Encountered an error on RST GPIO
    RstError(RST::Error),
}

impl<SPI, BUSY, DC, RST> Debug for ErrorKind<SPI, BUSY, DC, RST>
where
    SPI: spi::ErrorType,
    BUSY: digital::ErrorType,
    DC: digital::ErrorType,
    RST: digital::ErrorType,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::SpiError(err) => f.debug_tuple("SpiError").field(err).finish(),
            Self::BusyError(err) => f.debug_tuple("BusyError").field(err).finish(),
            Self::DcError(err) => f.debug_tuple("DcError").field(err).finish(),
            Self::RstError(err) => f.debug_tuple("RstError").field(err).finish(),
        }
    }
}

impl<SPI, BUSY, DC, RST> Display for ErrorKind<SPI, BUSY, DC, RST>
where
    SPI: spi::ErrorType,
    BUSY: digital::ErrorType,
    DC: digital::ErrorType,
    RST: digital::ErrorType,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::SpiError(err) => write!(f, "spi transfer failed: {:?}", err),
            Self::BusyError(err) => write!(f, "reading the busy pin failed: {:?}", err),
            Self::DcError(err) => write!(f, "driving the dc pin failed: {:?}", err),
            Self::RstError(err) => write!(f, "driving the reset pin failed: {:?}", err),
        }
    }
}

/// Error of the panel [`Driver`](crate::driver::Driver)
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum DriverError<E> {
    /// The transport failed
    Transport(E),

    /// The byte aligned window does not fit on the panel
    RegionOutOfBounds(PartialWindow),

    /// A black and white panel needs a black plane
    MissingBlackPlane,

    /// A plane holds fewer bytes than the window needs
    BufferTooSmall {
        /// `h * ceil(w / 8)`
        needed: usize,
        /// Length of the slice that was passed
        actual: usize,
    },

    /// The operation is not allowed in the current state, call `init()` first
    InvalidState(DriverState),
}

impl<E: Debug> Debug for DriverError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Transport(err) => f.debug_tuple("Transport").field(err).finish(),
            Self::RegionOutOfBounds(window) => {
                f.debug_tuple("RegionOutOfBounds").field(window).finish()
            }
            Self::MissingBlackPlane => f.write_str("MissingBlackPlane"),
            Self::BufferTooSmall { needed, actual } => f
                .debug_struct("BufferTooSmall")
                .field("needed", needed)
                .field("actual", actual)
                .finish(),
            Self::InvalidState(state) => f.debug_tuple("InvalidState").field(state).finish(),
        }
    }
}

impl<E: Debug> Display for DriverError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "transport error: {:?}", err),
            Self::RegionOutOfBounds(w) => write!(
                f,
                "window {}x{} at ({}, {}) exceeds the panel",
                w.w, w.h, w.x, w.y
            ),
            Self::MissingBlackPlane => write!(f, "black/white panels need a black plane"),
            Self::BufferTooSmall { needed, actual } => {
                write!(f, "plane has {} bytes, window needs {}", actual, needed)
            }
            Self::InvalidState(state) => write!(f, "not allowed while {:?}", state),
        }
    }
}
