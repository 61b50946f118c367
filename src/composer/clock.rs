//! Clock scene

use crate::color::Color;
use crate::graphics::Canvas;
use crate::lunar::{solar_term_countdown, LunarDate};
use crate::time::DateTime;

use super::seven_segment::{draw_seven_segment, seven_segment_size};
use super::{draw_battery, draw_date, draw_temperature, draw_weekday, print, Fonts, SceneData};

const STROKE: i32 = 5;
const DIGITS: u8 = 2;

pub(super) fn draw<'a>(
    canvas: &mut Canvas<'a>,
    now: &DateTime,
    lunar: &LunarDate,
    data: &SceneData,
    fonts: &Fonts<'a>,
) {
    draw_date(canvas, 40, 36, now, fonts);
    canvas.set_cursor(40, 58);
    draw_weekday(canvas, now, fonts);
    if lunar.is_valid() {
        canvas.set_cursor(138, 58);
        print(
            canvas,
            format_args!("{}{}", lunar.month_name(), lunar.day_name()),
        );
    }

    draw_battery(canvas, 330, 25, data.voltage, fonts);
    draw_temperature(canvas, 330, 58, data.temperature, fonts);

    canvas.draw_fast_hline(30, 68, 330, Color::Black);
    draw_time(canvas, now, 70, 98);
    canvas.draw_fast_hline(30, 232, 330, Color::Black);

    canvas.set_font(fonts.heading);
    if lunar.is_valid() {
        canvas.set_cursor(40, 275);
        print(
            canvas,
            format_args!(
                "{}{}{}年",
                lunar.stem_name(),
                lunar.branch_name(),
                lunar.zodiac_name()
            ),
        );
    }

    match solar_term_countdown(now.year, now.month, now.day) {
        Some(countdown) if countdown.days == 0 => {
            canvas.set_cursor(320, 275);
            print(canvas, format_args!("{}", countdown.term.name()));
        }
        Some(countdown) => {
            canvas.set_cursor(300, 265);
            print(canvas, format_args!("离{}", countdown.term.name()));
            canvas.set_cursor(290, 285);
            print(canvas, format_args!("还有{}天", countdown.days));
        }
        None => {}
    }
}

/// `HH:MM` in seven segment digits, `(x, y)` is the upper left corner
fn draw_time(canvas: &mut Canvas<'_>, now: &DateTime, x: i32, y: i32) {
    let (hours_width, _) = seven_segment_size(STROKE, i32::from(DIGITS));
    draw_seven_segment(
        canvas,
        i32::from(now.hour),
        x,
        y,
        STROKE,
        Color::Black,
        Color::White,
        DIGITS,
    );

    let colon_x = x + hours_width + 2 * STROKE;
    let dot = 2 * STROKE;
    canvas.fill_rect(colon_x, y + 9 * STROKE / 2 + 1, dot, dot, Color::Black);
    canvas.fill_rect(colon_x, y + 27 * STROKE / 2 + 3, dot, dot, Color::Black);

    draw_seven_segment(
        canvas,
        i32::from(now.minute),
        colon_x + 4 * STROKE,
        y,
        STROKE,
        Color::Black,
        Color::White,
        DIGITS,
    );
}
