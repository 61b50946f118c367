//! B/W/R Color for the paged canvas

#[cfg(feature = "graphics")]
use embedded_graphics_core::pixelcolor::{BinaryColor, PixelColor};

/// Ink of a black/white/red panel
///
/// On black/white panels everything that is not white is drawn black.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Color {
    /// Paper, the color every page starts with
    #[default]
    White,
    /// Black ink
    Black,
    /// Red ink, only on color capable panels
    Red,
}

impl Color {
    /// Byte a plane is filled with when the whole page gets `self`
    ///
    /// Returns the black plane byte and the color plane byte. A set bit is white.
    pub(crate) fn fill_bytes(self) -> (u8, u8) {
        let black = if self == Color::White { 0xFF } else { 0x00 };
        let color = if self == Color::Red { 0x00 } else { 0xFF };
        (black, color)
    }
}

#[cfg(feature = "graphics")]
impl PixelColor for Color {
    type Raw = ();
}

#[cfg(feature = "graphics")]
impl From<BinaryColor> for Color {
    fn from(b: BinaryColor) -> Color {
        match b {
            BinaryColor::On => Color::Black,
            BinaryColor::Off => Color::White,
        }
    }
}
