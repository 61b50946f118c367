//! Byte aligned partial windows of panel RAM

/// A rectangle of panel RAM whose horizontal edges sit on byte boundaries
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct PartialWindow {
    /// Origin X, a multiple of 8
    pub x: u16,
    /// Origin Y
    pub y: u16,
    /// Width, a multiple of 8
    pub w: u16,
    /// Height
    pub h: u16,
}

impl PartialWindow {
    /// Rounds `x` down and the right edge up to whole bytes.
    ///
    /// The result covers every requested pixel, it is not checked against a panel.
    pub const fn aligned(x: u16, y: u16, w: u16, h: u16) -> PartialWindow {
        let skew = x % 8;
        let bytes = (skew as u32 + w as u32 + 7) / 8;
        PartialWindow {
            x: x - skew,
            y,
            w: if bytes * 8 > u16::MAX as u32 {
                u16::MAX - 7
            } else {
                (bytes * 8) as u16
            },
            h,
        }
    }

    /// Aligns the window like [`aligned`](PartialWindow::aligned) and checks that
    /// it fits into a `width` x `height` panel.
    ///
    /// Returns the aligned window as error if it does not fit.
    pub fn normalize(
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        width: u16,
        height: u16,
    ) -> Result<PartialWindow, PartialWindow> {
        let window = PartialWindow::aligned(x, y, w, h);
        if window.right() > u32::from(width) || window.bottom() > u32::from(height) {
            Err(window)
        } else {
            Ok(window)
        }
    }

    /// Bytes per row
    pub const fn width_bytes(&self) -> u16 {
        self.w / 8
    }

    /// Bytes per plane, `h` rows of [`width_bytes`](PartialWindow::width_bytes)
    pub const fn plane_len(&self) -> usize {
        self.width_bytes() as usize * self.h as usize
    }

    /// Last pixel column inside the window
    pub const fn x_end(&self) -> u16 {
        (self.x as u32 + self.w as u32).saturating_sub(1) as u16
    }

    /// Last pixel row inside the window
    pub const fn y_end(&self) -> u16 {
        (self.y as u32 + self.h as u32).saturating_sub(1) as u16
    }

    /// Test whether the window is empty.
    pub const fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    fn right(&self) -> u32 {
        u32::from(self.x) + u32::from(self.w)
    }

    fn bottom(&self) -> u32 {
        u32::from(self.y) + u32::from(self.h)
    }
}

/// Number of bytes needed for `width` pixels at one bit per pixel
pub(crate) const fn width_bytes(width: u16) -> u16 {
    // round to upper 8 bit count
    ((width as u32 + 7) / 8) as u16
}
