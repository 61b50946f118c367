//! Large seven segment digits drawn from horizontal and vertical runs

use crate::color::Color;
use crate::graphics::Canvas;

/// Segments lit per glyph, bit 0 is the top segment going clockwise, bit 6 the middle
const DIGITS: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];
const MINUS: u8 = 0x40;

/// Size of `digits` seven segment digits drawn with `stroke` as `(width, height)`
pub const fn seven_segment_size(stroke: i32, digits: i32) -> (i32, i32) {
    (digits * (11 * stroke + 2) - 2 * stroke, 20 * stroke + 4)
}

/// Draws `value` right aligned in `digits` zero padded positions.
///
/// `(x, y)` is the upper left corner. Unlit segments are drawn with
/// `background`, so old digits get overwritten. A negative value puts a minus
/// into the leftmost position, which has to be included in `digits`. `stroke`
/// and `digits` are clamped to `1..=10`.
#[allow(clippy::too_many_arguments)]
pub fn draw_seven_segment(
    canvas: &mut Canvas<'_>,
    value: i32,
    x: i32,
    y: i32,
    stroke: i32,
    foreground: Color,
    background: Color,
    digits: u8,
) {
    let s = stroke.clamp(1, 10);
    let digits = i32::from(digits.clamp(1, 10));
    let pitch = 11 * s + 2;

    // (x offset, y offset, horizontal) of every segment
    let middle = 9 * s + 1;
    let segments = [
        (s + 1, 0, true),
        (7 * s + 1, s + 1, false),
        (7 * s + 1, middle + s + 1, false),
        (s + 1, 2 * middle, true),
        (0, middle + s + 1, false),
        (0, s + 1, false),
        (s + 1, middle, true),
    ];

    let mut rest = value.unsigned_abs();
    for position in (0..digits).rev() {
        let lit = if value < 0 && position == 0 {
            MINUS
        } else {
            DIGITS[(rest % 10) as usize]
        };
        rest /= 10;

        let digit_x = x + position * pitch;
        for (bit, &(dx, dy, horizontal)) in segments.iter().enumerate() {
            let color = if lit & (1 << bit) != 0 {
                foreground
            } else {
                background
            };
            draw_bar(canvas, digit_x + dx, y + dy, s, horizontal, color);
        }
    }
}

/// One segment: a bar with pointed ends, `2 * s` runs thick
fn draw_bar(canvas: &mut Canvas<'_>, x: i32, y: i32, s: i32, horizontal: bool, color: Color) {
    for k in 0..2 * s {
        let spread = if k < s { k } else { 2 * s - k };
        if horizontal {
            canvas.draw_fast_hline(x + s - spread, y + k, 5 * s + 2 * spread, color);
        } else {
            canvas.draw_fast_vline(x + k, y + s - spread, 7 * s + 2 * spread, color);
        }
    }
}
