//! Text on the canvas
//!
//! Glyph data is not part of this crate. A [`GlyphRenderer`] (for example an
//! u8g2 font decoder) breaks glyphs into horizontal or vertical runs and hands
//! them to a [`SegmentSink`], which the canvas implements.

use core::fmt;

use super::Canvas;
use crate::color::Color;

/// Writing direction, the glyphs are rotated along with it
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontDirection {
    /// Left to right
    #[default]
    LeftToRight,
    /// Top to bottom, glyphs rotated by 90°
    TopToBottom,
    /// Right to left, glyphs upside down
    RightToLeft,
    /// Bottom to top, glyphs rotated by 270°
    BottomToTop,
}

impl FontDirection {
    /// Moves `(x, y)` by `delta` along the writing direction
    pub fn advance(self, x: i32, y: i32, delta: i32) -> (i32, i32) {
        match self {
            FontDirection::LeftToRight => (x + delta, y),
            FontDirection::TopToBottom => (x, y + delta),
            FontDirection::RightToLeft => (x - delta, y),
            FontDirection::BottomToTop => (x, y - delta),
        }
    }
}

/// Which of the two text colors a run is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    /// The glyph itself
    Foreground,
    /// The box around the glyph, skipped in transparent mode
    Background,
}

/// Receives the pixel runs of a glyph
pub trait SegmentSink {
    /// Draws `len` pixels starting at `(x, y)`, running along `direction`
    fn draw_segment(&mut self, x: i32, y: i32, len: i32, direction: FontDirection, ink: Ink);
}

/// A font that can draw its glyphs into a [`SegmentSink`]
pub trait GlyphRenderer {
    /// Height of capital letters above the baseline
    fn ascent(&self) -> i8;

    /// Depth of descenders below the baseline, zero or negative
    fn descent(&self) -> i8;

    /// Ascent used for line breaks
    fn line_ascent(&self) -> i8 {
        self.ascent()
    }

    /// Descent used for line breaks
    fn line_descent(&self) -> i8 {
        self.descent()
    }

    /// Advance of the glyph for `encoding`, 0 if the font lacks it
    fn glyph_width(&self, encoding: u32) -> i32;

    /// Draws the glyph with its baseline origin at `(x, y)` and returns its advance
    fn draw_glyph(
        &self,
        sink: &mut dyn SegmentSink,
        x: i32,
        y: i32,
        encoding: u32,
        direction: FontDirection,
    ) -> i32;
}

/// Result of feeding one byte into a [`Utf8Decoder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    /// A NUL byte, the pending sequence is dropped
    End,
    /// More bytes are needed
    Pending,
    /// A complete code point
    Char(u32),
}

/// Byte at a time UTF-8 decoder for 1 to 6 byte sequences.
///
/// Keeps its state between calls, so text can be streamed in arbitrary pieces.
/// Malformed continuation bytes are not detected.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Utf8Decoder {
    remaining: u8,
    encoding: u32,
}

impl Utf8Decoder {
    /// A decoder waiting for the first byte of a sequence
    pub const fn new() -> Self {
        Utf8Decoder {
            remaining: 0,
            encoding: 0,
        }
    }

    /// Drops a pending sequence
    pub fn reset(&mut self) {
        *self = Utf8Decoder::new();
    }

    /// Feeds one byte
    pub fn push(&mut self, byte: u8) -> Decoded {
        if byte == 0 {
            self.reset();
            return Decoded::End;
        }
        if self.remaining == 0 {
            let (remaining, payload) = match byte {
                0xFC..=0xFF => (5, byte & 0x01),
                0xF8..=0xFB => (4, byte & 0x03),
                0xF0..=0xF7 => (3, byte & 0x07),
                0xE0..=0xEF => (2, byte & 0x0F),
                0xC0..=0xDF => (1, byte & 0x1F),
                _ => return Decoded::Char(u32::from(byte)),
            };
            self.remaining = remaining;
            self.encoding = u32::from(payload);
            return Decoded::Pending;
        }

        self.remaining -= 1;
        self.encoding = (self.encoding << 6) | u32::from(byte & 0x3F);
        if self.remaining == 0 {
            Decoded::Char(self.encoding)
        } else {
            Decoded::Pending
        }
    }
}

/// Font, colors and cursor of a canvas
pub(crate) struct TextState<'a> {
    font: Option<&'a dyn GlyphRenderer>,
    foreground: Color,
    background: Color,
    transparent: bool,
    direction: FontDirection,
    cursor: (i32, i32),
    decoder: Utf8Decoder,
}

impl Default for TextState<'_> {
    fn default() -> Self {
        TextState {
            font: None,
            foreground: Color::Black,
            background: Color::White,
            transparent: false,
            direction: FontDirection::default(),
            cursor: (0, 0),
            decoder: Utf8Decoder::new(),
        }
    }
}

impl<'a> Canvas<'a> {
    /// Moves the print cursor, the baseline origin of the next glyph
    pub fn set_cursor(&mut self, x: i32, y: i32) {
        self.text.cursor = (x, y);
        self.text.decoder.reset();
    }

    /// Current print cursor
    pub fn cursor(&self) -> (i32, i32) {
        self.text.cursor
    }

    /// Font used by the following glyphs, nothing is drawn without one
    pub fn set_font(&mut self, font: &'a dyn GlyphRenderer) {
        self.text.font = Some(font);
    }

    /// In transparent mode only the glyph itself is drawn
    pub fn set_font_mode(&mut self, transparent: bool) {
        self.text.transparent = transparent;
    }

    /// Direction the cursor advances in
    pub fn set_font_direction(&mut self, direction: FontDirection) {
        self.text.direction = direction;
    }

    /// Colors of the glyph and its background box
    pub fn set_text_color(&mut self, foreground: Color, background: Color) {
        self.text.foreground = foreground;
        self.text.background = background;
    }

    /// Ascent of the current font, 0 without a font
    pub fn font_ascent(&self) -> i8 {
        self.text.font.map_or(0, |font| font.ascent())
    }

    /// Descent of the current font, 0 without a font
    pub fn font_descent(&self) -> i8 {
        self.text.font.map_or(0, |font| font.descent())
    }

    /// Draws one glyph and returns its advance
    pub fn draw_glyph(&mut self, x: i32, y: i32, encoding: u32) -> i32 {
        match self.text.font {
            Some(font) => {
                let direction = self.text.direction;
                font.draw_glyph(self, x, y, encoding, direction)
            }
            None => 0,
        }
    }

    /// Draws a string starting at `(x, y)`, the cursor is not touched.
    ///
    /// Stops at the first NUL. Returns the sum of the glyph advances.
    pub fn draw_utf8(&mut self, x: i32, y: i32, text: &str) -> i32 {
        let (mut x, mut y) = (x, y);
        let mut sum = 0;
        for c in text.chars().take_while(|&c| c != '\0') {
            let delta = self.draw_glyph(x, y, u32::from(c));
            (x, y) = self.text.direction.advance(x, y, delta);
            sum += delta;
        }
        sum
    }

    /// Sum of the advances of `text` in the current font
    pub fn utf8_width(&self, text: &str) -> i32 {
        match self.text.font {
            Some(font) => text
                .chars()
                .take_while(|&c| c != '\0')
                .map(|c| font.glyph_width(u32::from(c)))
                .sum(),
            None => 0,
        }
    }

    /// Prints one byte of UTF-8 text at the cursor.
    ///
    /// `'\n'` moves the cursor to the start of the next line, `'\r'` to the
    /// start of the current one.
    pub fn print_byte(&mut self, byte: u8) {
        let encoding = match self.text.decoder.push(byte) {
            Decoded::Char(encoding) => encoding,
            Decoded::End | Decoded::Pending => return,
        };
        let (x, y) = self.text.cursor;
        match encoding {
            0x0A => {
                let line = self.text.font.map_or(0, |font| {
                    i32::from(font.line_ascent()) - i32::from(font.line_descent())
                });
                self.text.cursor = (0, y + line);
            }
            0x0D => self.text.cursor = (0, y),
            _ => {
                let delta = self.draw_glyph(x, y, encoding);
                self.text.cursor = self.text.direction.advance(x, y, delta);
            }
        }
    }
}

impl SegmentSink for Canvas<'_> {
    fn draw_segment(&mut self, x: i32, y: i32, len: i32, direction: FontDirection, ink: Ink) {
        let color = match ink {
            Ink::Foreground => self.text.foreground,
            Ink::Background if self.text.transparent => return,
            Ink::Background => self.text.background,
        };
        match direction {
            FontDirection::LeftToRight => self.draw_fast_hline(x, y, len, color),
            FontDirection::TopToBottom => self.draw_fast_vline(x, y, len, color),
            FontDirection::RightToLeft => self.draw_fast_hline(x - len + 1, y, len, color),
            FontDirection::BottomToTop => self.draw_fast_vline(x, y - len + 1, len, color),
        }
    }
}

/// `write!` support, the text is printed at the cursor
impl fmt::Write for Canvas<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            self.print_byte(byte);
        }
        Ok(())
    }
}
