//! Shapes built on top of [`Canvas::draw_pixel`]
//!
//! Everything goes through `draw_pixel`, so rotation and paging apply to every
//! shape.

use core::mem::swap;

use super::Canvas;
use crate::color::Color;

impl Canvas<'_> {
    /// Bresenham line from `(x0, y0)` to `(x1, y1)`, both ends included
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let (mut x0, mut y0, mut x1, mut y1) = (x0, y0, x1, y1);
        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            swap(&mut x0, &mut y0);
            swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            swap(&mut x0, &mut x1);
            swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let dy = (y1 - y0).abs();
        let mut err = dx / 2;
        let ystep = if y0 < y1 { 1 } else { -1 };

        let mut y = y0;
        for x in x0..=x1 {
            if steep {
                self.draw_pixel(y, x, color);
            } else {
                self.draw_pixel(x, y, color);
            }
            err -= dy;
            if err < 0 {
                y += ystep;
                err += dx;
            }
        }
    }

    /// Vertical line of `h` pixels going down from `(x, y)`
    pub fn draw_fast_vline(&mut self, x: i32, y: i32, h: i32, color: Color) {
        if h > 0 {
            self.draw_line(x, y, x, y + h - 1, color);
        }
    }

    /// Horizontal line of `w` pixels going right from `(x, y)`
    pub fn draw_fast_hline(&mut self, x: i32, y: i32, w: i32, color: Color) {
        if w > 0 {
            self.draw_line(x, y, x + w - 1, y, color);
        }
    }

    /// Rectangle outline
    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.draw_fast_hline(x, y, w, color);
        self.draw_fast_hline(x, y + h - 1, w, color);
        self.draw_fast_vline(x, y, h, color);
        self.draw_fast_vline(x + w - 1, y, h, color);
    }

    /// Filled rectangle
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        for column in x..x + w {
            self.draw_fast_vline(column, y, h, color);
        }
    }

    /// Circle outline around `(x0, y0)`
    pub fn draw_circle(&mut self, x0: i32, y0: i32, r: i32, color: Color) {
        self.draw_pixel(x0, y0 + r, color);
        self.draw_pixel(x0, y0 - r, color);
        self.draw_pixel(x0 + r, y0, color);
        self.draw_pixel(x0 - r, y0, color);

        for (x, y) in MidpointCircle::new(r) {
            self.draw_pixel(x0 + x, y0 + y, color);
            self.draw_pixel(x0 - x, y0 + y, color);
            self.draw_pixel(x0 + x, y0 - y, color);
            self.draw_pixel(x0 - x, y0 - y, color);
            self.draw_pixel(x0 + y, y0 + x, color);
            self.draw_pixel(x0 - y, y0 + x, color);
            self.draw_pixel(x0 + y, y0 - x, color);
            self.draw_pixel(x0 - y, y0 - x, color);
        }
    }

    /// Quarter circle outlines, `corners` selects them:
    /// `0x1` top left, `0x2` top right, `0x4` bottom right, `0x8` bottom left
    pub fn draw_circle_helper(&mut self, x0: i32, y0: i32, r: i32, corners: u8, color: Color) {
        for (x, y) in MidpointCircle::new(r) {
            if corners & 0x4 != 0 {
                self.draw_pixel(x0 + x, y0 + y, color);
                self.draw_pixel(x0 + y, y0 + x, color);
            }
            if corners & 0x2 != 0 {
                self.draw_pixel(x0 + x, y0 - y, color);
                self.draw_pixel(x0 + y, y0 - x, color);
            }
            if corners & 0x8 != 0 {
                self.draw_pixel(x0 - y, y0 + x, color);
                self.draw_pixel(x0 - x, y0 + y, color);
            }
            if corners & 0x1 != 0 {
                self.draw_pixel(x0 - y, y0 - x, color);
                self.draw_pixel(x0 - x, y0 - y, color);
            }
        }
    }

    /// Filled circle around `(x0, y0)`
    pub fn fill_circle(&mut self, x0: i32, y0: i32, r: i32, color: Color) {
        self.draw_fast_vline(x0, y0 - r, 2 * r + 1, color);
        self.fill_circle_helper(x0, y0, r, 0x3, 0, color);
    }

    /// Filled half circles, `corners` selects them: `0x1` right, `0x2` left.
    ///
    /// `delta` stretches the halves vertically, for rounded rectangles.
    pub fn fill_circle_helper(
        &mut self,
        x0: i32,
        y0: i32,
        r: i32,
        corners: u8,
        delta: i32,
        color: Color,
    ) {
        let delta = delta + 1;
        let (mut px, mut py) = (0, r);

        for (x, y) in MidpointCircle::new(r) {
            // skip columns the other octant already covers
            if x < y + 1 {
                if corners & 0x1 != 0 {
                    self.draw_fast_vline(x0 + x, y0 - y, 2 * y + delta, color);
                }
                if corners & 0x2 != 0 {
                    self.draw_fast_vline(x0 - x, y0 - y, 2 * y + delta, color);
                }
            }
            if y != py {
                if corners & 0x1 != 0 {
                    self.draw_fast_vline(x0 + py, y0 - px, 2 * px + delta, color);
                }
                if corners & 0x2 != 0 {
                    self.draw_fast_vline(x0 - py, y0 - px, 2 * px + delta, color);
                }
                py = y;
            }
            px = x;
        }
    }

    /// Rounded rectangle outline, `r` is clamped to half the shorter side
    pub fn draw_round_rect(&mut self, x: i32, y: i32, w: i32, h: i32, r: i32, color: Color) {
        let r = r.min(w.min(h) / 2);
        self.draw_fast_hline(x + r, y, w - 2 * r, color);
        self.draw_fast_hline(x + r, y + h - 1, w - 2 * r, color);
        self.draw_fast_vline(x, y + r, h - 2 * r, color);
        self.draw_fast_vline(x + w - 1, y + r, h - 2 * r, color);

        self.draw_circle_helper(x + r, y + r, r, 0x1, color);
        self.draw_circle_helper(x + w - r - 1, y + r, r, 0x2, color);
        self.draw_circle_helper(x + w - r - 1, y + h - r - 1, r, 0x4, color);
        self.draw_circle_helper(x + r, y + h - r - 1, r, 0x8, color);
    }

    /// Filled rounded rectangle, `r` is clamped to half the shorter side
    pub fn fill_round_rect(&mut self, x: i32, y: i32, w: i32, h: i32, r: i32, color: Color) {
        let r = r.min(w.min(h) / 2);
        self.fill_rect(x + r, y, w - 2 * r, h, color);
        self.fill_circle_helper(x + w - r - 1, y + r, r, 0x1, h - 2 * r - 1, color);
        self.fill_circle_helper(x + r, y + r, r, 0x2, h - 2 * r - 1, color);
    }

    /// Triangle outline
    #[allow(clippy::too_many_arguments)]
    pub fn draw_triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
    ) {
        self.draw_line(x0, y0, x1, y1, color);
        self.draw_line(x1, y1, x2, y2, color);
        self.draw_line(x2, y2, x0, y0, color);
    }

    /// Filled triangle, scanline by scanline from the top vertex
    #[allow(clippy::too_many_arguments)]
    pub fn fill_triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
    ) {
        // sort by y: y0 <= y1 <= y2
        let mut v = [(x0, y0), (x1, y1), (x2, y2)];
        v.sort_unstable_by_key(|&(_, y)| y);
        let [(x0, y0), (x1, y1), (x2, y2)] = v;

        if y0 == y2 {
            // all on one line
            let a = x0.min(x1).min(x2);
            let b = x0.max(x1).max(x2);
            self.draw_fast_hline(a, y0, b - a + 1, color);
            return;
        }

        let (dx01, dy01) = (x1 - x0, y1 - y0);
        let (dx02, dy02) = (x2 - x0, y2 - y0);
        let (dx12, dy12) = (x2 - x1, y2 - y1);

        // a flat bottom includes the y1 scanline in the upper half, the lower
        // half is then empty
        let last = if y1 == y2 { y1 } else { y1 - 1 };

        let (mut sa, mut sb) = (0, 0);
        let mut y = y0;
        while y <= last {
            let a = x0 + sa / dy01;
            let b = x0 + sb / dy02;
            sa += dx01;
            sb += dx02;
            self.draw_span(a, b, y, color);
            y += 1;
        }

        let mut sa = dx12 * (y - y1);
        let mut sb = dx02 * (y - y0);
        while y <= y2 {
            let a = x1 + sa / dy12;
            let b = x0 + sb / dy02;
            sa += dx12;
            sb += dx02;
            self.draw_span(a, b, y, color);
            y += 1;
        }
    }

    fn draw_span(&mut self, a: i32, b: i32, y: i32, color: Color) {
        let (a, b) = if a > b { (b, a) } else { (a, b) };
        self.draw_fast_hline(a, y, b - a + 1, color);
    }

    /// Draws the set bits of a 1 bit per pixel bitmap in `color`, the other
    /// bits stay transparent. Rows are padded to whole bytes, MSB first.
    ///
    /// With `invert` the cleared bits are drawn instead.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_bitmap(
        &mut self,
        x: i32,
        y: i32,
        bitmap: &[u8],
        w: i32,
        h: i32,
        color: Color,
        invert: bool,
    ) {
        if w <= 0 || h <= 0 {
            return;
        }
        let byte_width = (w as usize + 7) / 8;
        for (j, row) in bitmap.chunks(byte_width).take(h as usize).enumerate() {
            for i in 0..w {
                let byte = row.get(i as usize / 8).copied().unwrap_or(0);
                let set = byte & (0x80 >> (i % 8)) != 0;
                if set != invert {
                    self.draw_pixel(x + i, y + j as i32, color);
                }
            }
        }
    }
}

/// First octant of a midpoint circle, from the top towards 45°.
///
/// Yields `(x, y)` offsets after each step, the four axis points are not part of it.
struct MidpointCircle {
    f: i32,
    ddf_x: i32,
    ddf_y: i32,
    x: i32,
    y: i32,
}

impl MidpointCircle {
    fn new(r: i32) -> Self {
        MidpointCircle {
            f: 1 - r,
            ddf_x: 1,
            ddf_y: -2 * r,
            x: 0,
            y: r,
        }
    }
}

impl Iterator for MidpointCircle {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.x >= self.y {
            return None;
        }
        if self.f >= 0 {
            self.y -= 1;
            self.ddf_y += 2;
            self.f += self.ddf_y;
        }
        self.x += 1;
        self.ddf_x += 2;
        self.f += self.ddf_x;
        Some((self.x, self.y))
    }
}
