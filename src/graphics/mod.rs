//! Paged graphics canvas
//!
//! A panel is usually far bigger than the RAM of the controller driving it. The
//! [`Canvas`] only holds `page_height` rows, the scene is drawn once per page
//! and only the pixels landing inside the current page are kept:
//!
//!```rust
//!use epd_calendar::color::Color;
//!use epd_calendar::graphics::Canvas;
//!
//!let mut buffer = [0u8; 50 * 40];
//!let mut canvas = Canvas::begin(&mut buffer, 400, 300, 40).unwrap();
//!let mut flushed = 0;
//!canvas.first_page();
//!loop {
//!    canvas.draw_line(0, 0, 399, 299, Color::Black);
//!    let more = canvas
//!        .next_page(|_black, _color, _x, _y, _w, _h| -> Result<(), ()> {
//!            flushed += 1;
//!            Ok(())
//!        })
//!        .unwrap();
//!    if !more {
//!        break;
//!    }
//!}
//!assert_eq!(flushed, 8);
//!```

use bit_field::BitField;
use core::fmt::{Debug, Display, Formatter};

use crate::color::Color;
use crate::window::width_bytes;

mod primitives;
mod text;

pub use self::text::{Decoded, FontDirection, GlyphRenderer, Ink, SegmentSink, Utf8Decoder};

/// Display rotation, only 90° increments supported
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DisplayRotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate by 90 degrees clockwise
    Rotate90,
    /// Rotate by 180 degrees clockwise
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

/// Error found while setting up a [`Canvas`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasError {
    /// The provided buffer was too small
    BufferTooSmall {
        /// Bytes the planes need
        needed: usize,
        /// Length of the buffer
        actual: usize,
    },
    /// A page needs at least one row
    ZeroPageHeight,
}

impl Display for CanvasError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            CanvasError::BufferTooSmall { needed, actual } => {
                write!(f, "buffer has {} bytes, the planes need {}", actual, needed)
            }
            CanvasError::ZeroPageHeight => write!(f, "page height is zero"),
        }
    }
}

/// One or two bit planes covering a horizontal strip of the panel
///
/// Bit convention: a set bit is white. The black plane comes first in the
/// buffer, the color plane (if any) directly after it.
pub struct Canvas<'a> {
    buffer: &'a mut [u8],
    raw_width: u16,
    raw_height: u16,
    rotation: DisplayRotation,
    page_height: u16,
    page: u16,
    total_pages: u16,
    two_plane: bool,
    text: text::TextState<'a>,
}

impl<'a> Canvas<'a> {
    /// Single plane canvas, for black/white panels.
    ///
    /// `buffer` must hold at least `ceil(width / 8) * page_height` bytes.
    pub fn begin(
        buffer: &'a mut [u8],
        width: u16,
        height: u16,
        page_height: u16,
    ) -> Result<Self, CanvasError> {
        Canvas::new(buffer, width, height, page_height, false)
    }

    /// Black and color plane canvas, for black/white/red panels.
    ///
    /// `buffer` is sized as for [`begin`](Canvas::begin), the page height is
    /// halved so both planes fit into it.
    pub fn begin_two_plane(
        buffer: &'a mut [u8],
        width: u16,
        height: u16,
        page_height: u16,
    ) -> Result<Self, CanvasError> {
        Canvas::new(buffer, width, height, page_height / 2, true)
    }

    fn new(
        buffer: &'a mut [u8],
        width: u16,
        height: u16,
        page_height: u16,
        two_plane: bool,
    ) -> Result<Self, CanvasError> {
        if page_height == 0 {
            return Err(CanvasError::ZeroPageHeight);
        }
        let plane_len = width_bytes(width) as usize * page_height as usize;
        let needed = if two_plane { plane_len * 2 } else { plane_len };
        if buffer.len() < needed {
            return Err(CanvasError::BufferTooSmall {
                needed,
                actual: buffer.len(),
            });
        }
        let total_pages = height / page_height + u16::from(height % page_height > 0);
        Ok(Canvas {
            buffer,
            raw_width: width,
            raw_height: height,
            rotation: DisplayRotation::default(),
            page_height,
            page: 0,
            total_pages,
            two_plane,
            text: text::TextState::default(),
        })
    }

    /// Set the display rotation.
    ///
    /// This only concerns future drawing made to it. Anything aready drawn
    /// stays as it is in the buffer.
    pub fn set_rotation(&mut self, rotation: DisplayRotation) {
        self.rotation = rotation;
    }

    /// Get current rotation
    pub fn rotation(&self) -> DisplayRotation {
        self.rotation
    }

    /// Width as seen by drawing calls, after rotation
    pub fn width(&self) -> u16 {
        match self.rotation {
            DisplayRotation::Rotate0 | DisplayRotation::Rotate180 => self.raw_width,
            DisplayRotation::Rotate90 | DisplayRotation::Rotate270 => self.raw_height,
        }
    }

    /// Height as seen by drawing calls, after rotation
    pub fn height(&self) -> u16 {
        match self.rotation {
            DisplayRotation::Rotate0 | DisplayRotation::Rotate180 => self.raw_height,
            DisplayRotation::Rotate90 | DisplayRotation::Rotate270 => self.raw_width,
        }
    }

    /// Index of the page being drawn
    pub fn page(&self) -> u16 {
        self.page
    }

    /// Pages needed to cover the panel
    pub fn total_pages(&self) -> u16 {
        self.total_pages
    }

    /// Rows per page
    pub fn page_height(&self) -> u16 {
        self.page_height
    }

    /// Bytes of one plane
    pub fn plane_len(&self) -> usize {
        self.row_bytes() * self.page_height as usize
    }

    /// true if the canvas carries a color plane
    pub fn is_two_plane(&self) -> bool {
        self.two_plane
    }

    /// The black plane of the current page
    pub fn black_plane(&self) -> &[u8] {
        &self.buffer[..self.plane_len()]
    }

    /// The color plane of the current page
    pub fn color_plane(&self) -> Option<&[u8]> {
        let len = self.plane_len();
        self.two_plane.then(|| &self.buffer[len..len * 2])
    }

    fn row_bytes(&self) -> usize {
        width_bytes(self.raw_width) as usize
    }

    /// Starts a render pass on page 0 with white planes
    pub fn first_page(&mut self) {
        self.fill_screen(Color::White);
        self.page = 0;
    }

    /// Hands the current page to `flush` and moves to the next one.
    ///
    /// `flush` gets the black plane, the color plane, the x and y origin of the
    /// page, the panel width and the number of rows of this page. It must
    /// consume the planes before it returns.
    ///
    /// Returns `true` while there are pages left to draw.
    pub fn next_page<F, E>(&mut self, mut flush: F) -> Result<bool, E>
    where
        F: FnMut(&[u8], Option<&[u8]>, u16, u16, u16, u16) -> Result<(), E>,
    {
        let page_y = self.page.saturating_mul(self.page_height);
        let rows = self
            .page_height
            .min(self.raw_height.saturating_sub(page_y));
        let len = self.plane_len();
        let (black, rest) = self.buffer.split_at(len);
        let color = self.two_plane.then(|| &rest[..len]);
        flush(black, color, 0, page_y, self.raw_width, rows)?;

        self.page += 1;
        self.fill_screen(Color::White);
        Ok(self.page < self.total_pages)
    }

    /// Fills the current page with one color
    pub fn fill_screen(&mut self, color: Color) {
        let len = self.plane_len();
        let (black, color_byte) = color.fill_bytes();
        self.buffer[..len].fill(black);
        if self.two_plane {
            self.buffer[len..len * 2].fill(color_byte);
        }
    }

    /// Set a specific pixel color on this canvas
    ///
    /// Pixels outside of the rotated canvas or the current page are dropped.
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= i32::from(self.width()) || y >= i32::from(self.height()) {
            return;
        }

        // final coordinates
        let (w, h) = (i32::from(self.raw_width), i32::from(self.raw_height));
        let (x, y) = match self.rotation {
            DisplayRotation::Rotate0 => (x, y),
            DisplayRotation::Rotate90 => (w - 1 - y, x),
            DisplayRotation::Rotate180 => (w - 1 - x, h - 1 - y),
            DisplayRotation::Rotate270 => (y, h - 1 - x),
        };

        let y = y - i32::from(self.page) * i32::from(self.page_height);
        if y < 0 || y >= i32::from(self.page_height) {
            return;
        }

        let index = x as usize / 8 + y as usize * self.row_bytes();
        // MSB is the leftmost pixel
        let bit = 7 - (x as usize % 8);
        if self.two_plane {
            let len = self.plane_len();
            let (black, rest) = self.buffer.split_at_mut(len);
            black[index].set_bit(bit, color != Color::Black);
            rest[index].set_bit(bit, color != Color::Red);
        } else {
            self.buffer[index].set_bit(bit, color == Color::White);
        }
    }
}

#[cfg(feature = "graphics")]
mod embedded {
    use super::Canvas;
    use crate::color::Color;
    use embedded_graphics_core::prelude::*;

    /// For use with embedded_grahics
    impl DrawTarget for Canvas<'_> {
        type Color = Color;
        type Error = core::convert::Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                self.draw_pixel(point.x, point.y, color);
            }
            Ok(())
        }
    }

    /// For use with embedded_grahics
    impl OriginDimensions for Canvas<'_> {
        fn size(&self) -> Size {
            Size::new(u32::from(self.width()), u32::from(self.height()))
        }
    }
}

impl Debug for Canvas<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.raw_width)
            .field("height", &self.raw_height)
            .field("rotation", &self.rotation)
            .field("page", &self.page)
            .field("total_pages", &self.total_pages)
            .field("page_height", &self.page_height)
            .field("two_plane", &self.two_plane)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::vec;
    use std::vec::Vec;

    #[test]
    fn plane_sizes() {
        let mut buffer = [0u8; 1000];
        let canvas = Canvas::begin(&mut buffer, 13, 30, 7).unwrap();
        assert_eq!(canvas.plane_len(), 2 * 7);
        assert_eq!(canvas.total_pages(), 5);

        let canvas = Canvas::begin_two_plane(&mut buffer, 400, 300, 20).unwrap();
        assert_eq!(canvas.page_height(), 10);
        assert_eq!(canvas.plane_len(), 500);
        assert_eq!(canvas.total_pages(), 30);
        assert!(canvas.color_plane().is_some());
    }

    #[test]
    fn page_count_covers_height() {
        let mut buffer = [0u8; 64];
        for height in 1..100u16 {
            for page_height in 1..20u16 {
                let canvas = Canvas::begin(&mut buffer, 8, height, page_height).unwrap();
                let pages = canvas.total_pages();
                assert!(pages * page_height >= height);
                assert!((pages - 1) * page_height < height);
            }
        }
    }

    #[test]
    fn setup_errors() {
        let mut buffer = [0u8; 99];
        assert_eq!(
            Canvas::begin(&mut buffer, 400, 300, 2).err(),
            Some(CanvasError::BufferTooSmall {
                needed: 100,
                actual: 99
            })
        );
        assert_eq!(
            Canvas::begin_two_plane(&mut buffer, 400, 300, 1).err(),
            Some(CanvasError::ZeroPageHeight)
        );
    }

    #[test]
    fn one_plane_pixels() {
        let mut buffer = [0u8; 4];
        let mut canvas = Canvas::begin(&mut buffer, 16, 4, 2).unwrap();
        canvas.first_page();
        canvas.draw_pixel(0, 0, Color::Black);
        canvas.draw_pixel(9, 1, Color::Red);
        // page 1 rows, out of range for page 0
        canvas.draw_pixel(0, 2, Color::Black);
        canvas.draw_pixel(-1, 0, Color::Black);
        canvas.draw_pixel(16, 0, Color::Black);
        assert_eq!(canvas.black_plane(), &[0x7F, 0xFF, 0xFF, 0xBF]);
        assert_eq!(canvas.color_plane(), None);

        canvas.draw_pixel(0, 0, Color::White);
        assert_eq!(canvas.black_plane()[0], 0xFF);
    }

    #[test]
    fn two_plane_pixels() {
        let mut buffer = [0u8; 4];
        let mut canvas = Canvas::begin_two_plane(&mut buffer, 16, 4, 2).unwrap();
        canvas.first_page();
        canvas.draw_pixel(0, 0, Color::Black);
        canvas.draw_pixel(1, 0, Color::Red);
        canvas.draw_pixel(2, 0, Color::Black);
        canvas.draw_pixel(2, 0, Color::Red);
        assert_eq!(canvas.black_plane(), &[0x7F, 0xFF]);
        assert_eq!(canvas.color_plane(), Some(&[0x9F, 0xFF][..]));
    }

    #[test]
    fn rotation() {
        let mut buffer = [0u8; 2 * 4];
        let mut canvas = Canvas::begin(&mut buffer, 16, 4, 4).unwrap();
        canvas.set_rotation(DisplayRotation::Rotate90);
        assert_eq!((canvas.width(), canvas.height()), (4, 16));
        canvas.first_page();
        // (0, 0) lands on the top right corner
        canvas.draw_pixel(0, 0, Color::Black);
        canvas.draw_pixel(0, 16, Color::Black);
        assert_eq!(
            canvas.black_plane(),
            &[0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
        );

        canvas.first_page();
        canvas.set_rotation(DisplayRotation::Rotate180);
        canvas.draw_pixel(0, 0, Color::Black);
        assert_eq!(canvas.black_plane()[7], 0xFE);

        canvas.first_page();
        canvas.set_rotation(DisplayRotation::Rotate270);
        canvas.draw_pixel(0, 0, Color::Black);
        assert_eq!(canvas.black_plane()[6], 0x7F);
    }

    #[test]
    fn pages_are_flushed_in_order() {
        let mut buffer = [0u8; 6];
        let mut canvas = Canvas::begin_two_plane(&mut buffer, 8, 7, 6).unwrap();
        let mut calls: Vec<(Vec<u8>, Option<Vec<u8>>, u16, u16, u16, u16)> = Vec::new();
        canvas.first_page();
        loop {
            // a vertical line through all pages
            for y in 0..7 {
                canvas.draw_pixel(0, y, Color::Black);
            }
            let more = canvas
                .next_page(|black, color, x, y, w, h| -> Result<(), ()> {
                    calls.push((black.to_vec(), color.map(|c| c.to_vec()), x, y, w, h));
                    Ok(())
                })
                .unwrap();
            if !more {
                break;
            }
        }
        assert_eq!(calls.len(), 3);
        assert_eq!((calls[0].2, calls[0].3, calls[0].4, calls[0].5), (0, 0, 8, 3));
        assert_eq!((calls[2].3, calls[2].5), (6, 1));
        assert_eq!(calls[0].0, vec![0x7F; 3]);
        assert_eq!(calls[0].1, Some(vec![0xFF; 3]));
        // only the first row of the last page is on the panel
        assert_eq!(calls[2].0, vec![0x7F, 0xFF, 0xFF]);
    }

    #[test]
    fn flush_error_stops() {
        let mut buffer = [0u8; 8];
        let mut canvas = Canvas::begin(&mut buffer, 8, 8, 4).unwrap();
        canvas.first_page();
        assert_eq!(canvas.next_page(|_, _, _, _, _, _| Err(7)), Err(7));
        assert_eq!(canvas.page(), 0);
    }

    #[test]
    fn fill_screen() {
        let mut buffer = [0u8; 4];
        let mut canvas = Canvas::begin_two_plane(&mut buffer, 8, 8, 4).unwrap();
        canvas.fill_screen(Color::Red);
        assert_eq!(canvas.black_plane(), &[0x00, 0x00]);
        assert_eq!(canvas.color_plane(), Some(&[0x00, 0x00][..]));
    }

    #[cfg(feature = "graphics")]
    #[test]
    fn draw_target() {
        use embedded_graphics::{
            prelude::*,
            primitives::{Line, PrimitiveStyle},
        };

        let mut buffer = [0u8; 50 * 4];
        let mut canvas = Canvas::begin(&mut buffer, 400, 300, 4).unwrap();
        canvas.first_page();
        assert_eq!(canvas.size(), Size::new(400, 300));
        let _ = Line::new(Point::new(0, 0), Point::new(7, 0))
            .into_styled(PrimitiveStyle::with_stroke(Color::Black, 1))
            .draw(&mut canvas);
        let black = canvas.black_plane();
        assert_eq!(black[0], 0x00);
        assert!(black.iter().skip(1).all(|&b| b == 0xFF));
    }
}
