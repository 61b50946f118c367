//! Calendar and clock scenes
//!
//! The composer lays out a full panel scene on a [`Canvas`] and streams it page
//! by page into any [`PanelDriver`]. Fonts are supplied by the caller through
//! [`GlyphRenderer`].

use core::fmt::{self, Debug, Display, Formatter, Write};

use crate::color::Color;
use crate::graphics::{Canvas, CanvasError, GlyphRenderer};
use crate::lunar::{LunarDate, WEEKDAY_NAMES};
use crate::time::DateTime;
use crate::traits::PanelDriver;
use crate::window::width_bytes;

mod calendar;
mod clock;
mod seven_segment;

pub use self::seven_segment::{draw_seven_segment, seven_segment_size};

/// Scene drawn by [`render`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Blank panel
    #[default]
    None,
    /// Month grid with lunar dates and solar terms
    Calendar,
    /// Large clock with the solar term countdown
    Clock,
}

impl Mode {
    /// Mode as stored in the device configuration, unknown values are `None`
    pub fn from_u8(value: u8) -> Mode {
        match value {
            1 => Mode::Calendar,
            2 => Mode::Clock,
            _ => Mode::None,
        }
    }
}

/// Device readings shown in a scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneData {
    /// Local time in seconds since 1970-01-01
    pub timestamp: u32,
    /// Degree Celsius
    pub temperature: i8,
    /// Battery voltage
    pub voltage: f32,
}

/// The fonts of a scene
#[derive(Clone, Copy)]
pub struct Fonts<'a> {
    /// Small labels: weekdays, lunar days, battery and temperature
    pub label: &'a dyn GlyphRenderer,
    /// The 年/月/日 units and the clock footer
    pub heading: &'a dyn GlyphRenderer,
    /// Digits of the date header
    pub date_digits: &'a dyn GlyphRenderer,
    /// Digits of the calendar grid
    pub day_digits: &'a dyn GlyphRenderer,
}

/// Error of [`render`]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum RenderError<E> {
    /// The buffer can not hold a single page
    Canvas(CanvasError),
    /// Flushing a page failed
    Driver(E),
}

impl<E: Debug> Debug for RenderError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Canvas(e) => f.debug_tuple("Canvas").field(e).finish(),
            RenderError::Driver(e) => f.debug_tuple("Driver").field(e).finish(),
        }
    }
}

impl<E: Debug> Display for RenderError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Canvas(e) => write!(f, "canvas setup failed: {}", e),
            RenderError::Driver(e) => write!(f, "writing a page failed: {:?}", e),
        }
    }
}

impl<E> From<CanvasError> for RenderError<E> {
    fn from(e: CanvasError) -> Self {
        RenderError::Canvas(e)
    }
}

/// Draws `mode` into panel RAM without refreshing.
///
/// `buffer` holds as many full panel rows as fit, two plane panels split it
/// between black and color. The driver must be initialized.
pub fn render<D: PanelDriver>(
    driver: &mut D,
    buffer: &mut [u8],
    data: &SceneData,
    mode: Mode,
    fonts: &Fonts<'_>,
) -> Result<(), RenderError<D::Error>> {
    let (width, height) = (driver.width(), driver.height());
    let rows = buffer.len() / usize::from(width_bytes(width)).max(1);
    let page_height = u16::try_from(rows).unwrap_or(u16::MAX).min(height);

    let mut canvas = if driver.is_color_capable() {
        Canvas::begin_two_plane(buffer, width, height, page_height)?
    } else {
        Canvas::begin(buffer, width, height, page_height)?
    };
    log::debug!(
        "render {:?} in {} pages of {} rows",
        mode,
        canvas.total_pages(),
        canvas.page_height()
    );

    let now = DateTime::from_epoch(data.timestamp);
    let lunar = LunarDate::from_solar(now.year, now.month, now.day);

    canvas.first_page();
    loop {
        match mode {
            Mode::Calendar => calendar::draw(&mut canvas, &now, &lunar, data, fonts),
            Mode::Clock => clock::draw(&mut canvas, &now, &lunar, data, fonts),
            Mode::None => {}
        }
        let more = canvas.next_page(|black, color, x, y, w, h| {
            driver
                .write_image(Some(black), color, x, y, w, h)
                .map_err(RenderError::Driver)
        })?;
        if !more {
            return Ok(());
        }
    }
}

/// [`render`] followed by a refresh of the panel
pub fn render_and_refresh<D: PanelDriver>(
    driver: &mut D,
    buffer: &mut [u8],
    data: &SceneData,
    mode: Mode,
    fonts: &Fonts<'_>,
) -> Result<crate::traits::Completion, RenderError<D::Error>> {
    render(driver, buffer, data, mode, fonts)?;
    driver.refresh().map_err(RenderError::Driver)
}

fn print_styled<'a>(
    canvas: &mut Canvas<'a>,
    foreground: Color,
    font: &'a dyn GlyphRenderer,
    args: fmt::Arguments<'_>,
) {
    canvas.set_text_color(foreground, Color::White);
    canvas.set_font(font);
    print(canvas, args);
}

fn print(canvas: &mut Canvas<'_>, args: fmt::Arguments<'_>) {
    // a canvas never fails to take text
    let _ = canvas.write_fmt(args);
}

/// `2024年02月10日 `
fn draw_date<'a>(canvas: &mut Canvas<'a>, x: i32, y: i32, now: &DateTime, fonts: &Fonts<'a>) {
    canvas.set_cursor(x, y);
    print_styled(canvas, Color::Red, fonts.date_digits, format_args!("{}", now.year));
    print_styled(canvas, Color::Black, fonts.heading, format_args!("年"));
    print_styled(canvas, Color::Red, fonts.date_digits, format_args!("{:02}", now.month));
    print_styled(canvas, Color::Black, fonts.heading, format_args!("月"));
    print_styled(canvas, Color::Red, fonts.date_digits, format_args!("{:02}", now.day));
    print_styled(canvas, Color::Black, fonts.heading, format_args!("日 "));
}

fn draw_weekday<'a>(canvas: &mut Canvas<'a>, now: &DateTime, fonts: &Fonts<'a>) {
    canvas.set_font(fonts.label);
    let name = WEEKDAY_NAMES
        .get(usize::from(now.weekday))
        .copied()
        .unwrap_or_default();
    print(canvas, format_args!("星期{}", name));
}

/// Voltage label left of a 20x10 battery with a level bar, full at 4.2 V
fn draw_battery<'a>(canvas: &mut Canvas<'a>, x: i32, y: i32, voltage: f32, fonts: &Fonts<'a>) {
    let level = (voltage * 100.0 / 4.2).clamp(0.0, 100.0) as i32;
    canvas.set_cursor(x - 26, y + 9);
    canvas.set_font(fonts.label);
    print(canvas, format_args!("{:.1}V", voltage));
    canvas.fill_rect(x, y, 20, 10, Color::White);
    canvas.draw_rect(x, y, 20, 10, Color::Black);
    canvas.fill_rect(x + 20, y + 4, 2, 2, Color::Black);
    canvas.fill_rect(x + 2, y + 2, 16 * level / 100, 6, Color::Black);
}

fn draw_temperature<'a>(
    canvas: &mut Canvas<'a>,
    x: i32,
    y: i32,
    temperature: i8,
    fonts: &Fonts<'a>,
) {
    canvas.set_cursor(x, y);
    canvas.set_font(fonts.label);
    print(canvas, format_args!("{}℃", temperature));
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::driver::Driver;
    use crate::mock::{FixedFont, RecordingTransport};
    use crate::model;
    use crate::time::DateTime;
    use std::string::String;

    struct TestFonts {
        label: FixedFont,
        heading: FixedFont,
        date_digits: FixedFont,
        day_digits: FixedFont,
    }

    impl TestFonts {
        fn new() -> Self {
            TestFonts {
                label: FixedFont::new(8),
                heading: FixedFont::new(12),
                date_digits: FixedFont::new(12),
                day_digits: FixedFont::new(10),
            }
        }

        fn fonts(&self) -> Fonts<'_> {
            Fonts {
                label: &self.label,
                heading: &self.heading,
                date_digits: &self.date_digits,
                day_digits: &self.day_digits,
            }
        }
    }

    fn data() -> SceneData {
        let now = DateTime::from_ymd_hms(2026, 10, 16, 8, 30, 0).unwrap();
        SceneData {
            timestamp: now.to_epoch(),
            temperature: 26,
            voltage: 3.7,
        }
    }

    /// Text of one render pass, every page draws the full scene
    fn first_pass(text: String, pages: usize) -> String {
        let chars: std::vec::Vec<char> = text.chars().collect();
        assert_eq!(chars.len() % pages, 0);
        chars[..chars.len() / pages].iter().collect()
    }

    #[test]
    fn modes() {
        assert_eq!(Mode::from_u8(0), Mode::None);
        assert_eq!(Mode::from_u8(1), Mode::Calendar);
        assert_eq!(Mode::from_u8(2), Mode::Clock);
        assert_eq!(Mode::from_u8(9), Mode::None);
    }

    #[test]
    fn pages_are_written_as_windows() {
        let mut epd = Driver::new(RecordingTransport::default(), model::UC8176_420_BWR);
        let _ = epd.init().unwrap();
        let fonts = TestFonts::new();
        // 40 rows, 20 per plane
        let mut buffer = [0u8; 50 * 40];

        render(&mut epd, &mut buffer, &data(), Mode::None, &fonts.fonts()).unwrap();

        let t = epd.release();
        let windows = t.data_of(0x90);
        assert_eq!(windows.len(), 15);
        assert_eq!(windows[0], &[0x00, 0x00, 0x01, 0x8F, 0x00, 0x00, 0x00, 0x13, 0x01]);
        assert_eq!(windows[14], &[0x00, 0x00, 0x01, 0x8F, 0x01, 0x18, 0x01, 0x2B, 0x01]);
        assert!(t.data_of(0x10).iter().all(|plane| plane.len() == 50 * 20));
        // nothing drawn: white black plane, no red
        assert!(t.data_of(0x10).iter().all(|plane| plane.iter().all(|&b| b == 0xFF)));
        assert!(t.data_of(0x13).iter().all(|plane| plane.iter().all(|&b| b == 0xFF)));
        assert!(!t.commands().contains(&0x12));
    }

    #[test]
    fn black_white_panels_use_one_plane() {
        let mut epd = Driver::new(RecordingTransport::default(), model::UC8176_420_BW);
        let _ = epd.init().unwrap();
        let fonts = TestFonts::new();
        let mut buffer = [0u8; 50 * 40];

        let done = render_and_refresh(&mut epd, &mut buffer, &data(), Mode::Calendar, &fonts.fonts())
            .unwrap();
        assert_eq!(done, crate::traits::Completion::Done);

        let t = epd.release();
        assert_eq!(t.data_of(0x90).len(), 8);
        assert!(t.data_of(0x10).is_empty());
        assert_eq!(t.data_of(0x13).len(), 8);
        // the red header bar comes out black
        assert!(t.data_of(0x13)[1].iter().any(|&b| b == 0x00));
        assert_eq!(t.commands().last(), Some(&0x02));
        assert!(t.commands().contains(&0x12));
    }

    #[test]
    fn calendar_scene() {
        let mut epd = Driver::new(RecordingTransport::default(), model::UC8176_420_BWR);
        let _ = epd.init().unwrap();
        let fonts = TestFonts::new();
        let mut buffer = [0u8; 50 * 40];

        render(&mut epd, &mut buffer, &data(), Mode::Calendar, &fonts.fonts()).unwrap();

        assert_eq!(first_pass(fonts.date_digits.text(), 15), "20261016");
        assert_eq!(first_pass(fonts.heading.text(), 15), "年月日 ");
        let labels = first_pass(fonts.label.text(), 15);
        assert!(labels.starts_with("星期五3.7V九月初七 丙午马年日一二三四五六"), "{}", labels);
        assert!(labels.contains("霜降"));
        let days = first_pass(fonts.day_digits.text(), 15);
        assert!(days.starts_with("12345678910"));
        assert!(days.ends_with("3031"));

        // the red week header ends up in the color plane of the second page
        let t = epd.release();
        assert!(t.data_of(0x13)[1].iter().any(|&b| b != 0xFF));
    }

    #[test]
    fn clock_scene() {
        let mut epd = Driver::new(RecordingTransport::default(), model::SSD1619_420_BWR);
        let _ = epd.init().unwrap();
        let fonts = TestFonts::new();
        let mut buffer = [0u8; 50 * 40];

        render(&mut epd, &mut buffer, &data(), Mode::Clock, &fonts.fonts()).unwrap();

        assert_eq!(first_pass(fonts.date_digits.text(), 15), "20261016");
        assert_eq!(
            first_pass(fonts.heading.text(), 15),
            "年月日 丙午马年离霜降还有7天"
        );
        assert_eq!(
            first_pass(fonts.label.text(), 15),
            "星期五九月初七3.7V26℃"
        );
    }

    #[test]
    fn clock_on_a_solar_term() {
        let mut epd = Driver::new(RecordingTransport::default(), model::UC8176_420_BW);
        let _ = epd.init().unwrap();
        let fonts = TestFonts::new();
        let mut buffer = [0u8; 50 * 300];
        let mut data = data();
        data.timestamp = DateTime::from_ymd_hms(2026, 10, 23, 12, 0, 0).unwrap().to_epoch();

        render(&mut epd, &mut buffer, &data, Mode::Clock, &fonts.fonts()).unwrap();
        assert!(fonts.heading.text().ends_with("马年霜降"));
    }

    #[test]
    fn buffer_too_small() {
        let mut epd = Driver::new(RecordingTransport::default(), model::UC8176_420_BWR);
        let _ = epd.init().unwrap();
        let fonts = TestFonts::new();
        let mut buffer = [0u8; 60];

        let err = render(&mut epd, &mut buffer, &data(), Mode::Clock, &fonts.fonts()).unwrap_err();
        assert_eq!(err, RenderError::Canvas(CanvasError::ZeroPageHeight));
    }

    #[test]
    fn needs_an_initialized_driver() {
        let mut epd = Driver::new(RecordingTransport::default(), model::UC8176_420_BW);
        let fonts = TestFonts::new();
        let mut buffer = [0u8; 50 * 40];

        let err = render(&mut epd, &mut buffer, &data(), Mode::None, &fonts.fonts()).unwrap_err();
        assert!(matches!(err, RenderError::Driver(_)));
    }
}
