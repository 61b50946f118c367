//! Month grid scene

use crate::color::Color;
use crate::graphics::Canvas;
use crate::lunar::{solar_term_on, LunarDate, WEEKDAY_NAMES};
use crate::time::{days_in_month, first_weekday_of_month, DateTime};

use super::{draw_battery, draw_date, draw_weekday, print, Fonts, SceneData};

pub(super) fn draw<'a>(
    canvas: &mut Canvas<'a>,
    now: &DateTime,
    lunar: &LunarDate,
    data: &SceneData,
    fonts: &Fonts<'a>,
) {
    draw_header(canvas, 10, 28, now, lunar, data, fonts);
    draw_week_header(canvas, 10, 32, fonts);
    draw_month_days(canvas, now, fonts);
}

fn draw_header<'a>(
    canvas: &mut Canvas<'a>,
    x: i32,
    y: i32,
    now: &DateTime,
    lunar: &LunarDate,
    data: &SceneData,
    fonts: &Fonts<'a>,
) {
    draw_date(canvas, x, y, now, fonts);
    draw_weekday(canvas, now, fonts);
    draw_battery(canvas, 365, 4, data.voltage, fonts);

    if !lunar.is_valid() {
        return;
    }
    canvas.set_cursor(x + 270, y);
    print(
        canvas,
        format_args!(
            "{}{} {}{}",
            lunar.month_name(),
            lunar.day_name(),
            lunar.stem_name(),
            lunar.branch_name()
        ),
    );
    canvas.set_text_color(Color::Red, Color::White);
    print(canvas, format_args!("{}", lunar.zodiac_name()));
    canvas.set_text_color(Color::Black, Color::White);
    print(canvas, format_args!("年"));
}

/// Red bar with the weekday names, black behind Monday to Friday
fn draw_week_header<'a>(canvas: &mut Canvas<'a>, x: i32, y: i32, fonts: &Fonts<'a>) {
    canvas.fill_rect(x, y, 380, 24, Color::Red);
    canvas.fill_rect(x + 50, y, 280, 24, Color::Black);
    canvas.set_font(fonts.label);
    for (i, name) in (0..).zip(WEEKDAY_NAMES) {
        let background = if (1..6).contains(&i) {
            Color::Black
        } else {
            Color::Red
        };
        canvas.set_text_color(Color::White, background);
        canvas.set_cursor(x + 15 + i * 55, y + 16);
        print(canvas, format_args!("{}", name));
    }
}

/// One cell per day: the day number and below it the solar term or lunar day
fn draw_month_days<'a>(canvas: &mut Canvas<'a>, now: &DateTime, fonts: &Fonts<'a>) {
    let first = i32::from(first_weekday_of_month(now.year, now.month));
    let days = days_in_month(now.year, now.month);
    let rows = 1 + (i32::from(days) - (7 - first) + 6) / 7;
    let (top, row_height, circle_dy) = if rows > 5 { (69, 39, 10) } else { (72, 48, 12) };

    for day in 1..=days {
        let cell = first + i32::from(day) - 1;
        let column = cell % 7;
        let weekend = column == 0 || column == 6;
        let x = 22 + column * 55;
        let y = top + cell / 7 * row_height;

        if day == now.day {
            canvas.fill_circle(x + 11, y + circle_dy, 20, Color::Red);
            canvas.set_text_color(Color::White, Color::Red);
        } else if weekend {
            canvas.set_text_color(Color::Red, Color::White);
        } else {
            canvas.set_text_color(Color::Black, Color::White);
        }

        canvas.set_font(fonts.day_digits);
        canvas.set_cursor(x + if day < 10 { 6 } else { 2 }, y + 10);
        print(canvas, format_args!("{}", day));

        canvas.set_font(fonts.label);
        canvas.set_cursor(x, y + 24);
        if let Some(term) = solar_term_on(now.year, now.month, day) {
            if day != now.day {
                canvas.set_text_color(Color::Red, Color::White);
            }
            print(canvas, format_args!("{}", term.name()));
            continue;
        }
        let lunar = LunarDate::from_solar(now.year, now.month, day);
        if lunar.day == 1 {
            print(canvas, format_args!("{}", lunar.month_name()));
        } else {
            print(canvas, format_args!("{}", lunar.day_name()));
        }
    }
}
