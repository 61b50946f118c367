//! Test doubles: a transport that records what the chip modules send and a
//! fixed width font

extern crate std;

use core::cell::RefCell;
use core::convert::Infallible;
use std::collections::VecDeque;
use std::vec::Vec;

use embedded_hal::digital::PinState;

use crate::graphics::{FontDirection, GlyphRenderer, Ink, SegmentSink};
use crate::traits::Transport;

/// One recorded bus transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    /// A command byte and every data byte that followed it
    Command(u8, Vec<u8>),
    /// Data without a preceding command
    Data(Vec<u8>),
    Read,
    Reset(PinState, u32),
    WaitBusy(PinState, u32),
    Delay(u32),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingTransport {
    pub(crate) events: Vec<Event>,
    /// Results for the next busy waits, `true` (released) once empty
    pub(crate) busy_results: VecDeque<bool>,
    pub(crate) read_value: u8,
}

impl RecordingTransport {
    /// Commands in the order they were sent
    pub(crate) fn commands(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Command(command, _) => Some(*command),
                _ => None,
            })
            .collect()
    }

    /// Data sent after every occurrence of `command`
    pub(crate) fn data_of(&self, command: u8) -> Vec<&[u8]> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Command(c, data) if *c == command => Some(data.as_slice()),
                _ => None,
            })
            .collect()
    }
}

impl Transport for RecordingTransport {
    type Error = Infallible;

    fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.events.push(Event::Command(command, Vec::new()));
        Ok(())
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        match self.events.last_mut() {
            Some(Event::Command(_, bytes)) | Some(Event::Data(bytes)) => {
                bytes.extend_from_slice(data)
            }
            _ => self.events.push(Event::Data(data.to_vec())),
        }
        Ok(())
    }

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        self.events.push(Event::Read);
        Ok(self.read_value)
    }

    fn reset_pulse(&mut self, active: PinState, duration_ms: u32) -> Result<(), Self::Error> {
        self.events.push(Event::Reset(active, duration_ms));
        Ok(())
    }

    fn wait_busy(&mut self, active: PinState, timeout_ticks: u32) -> Result<bool, Self::Error> {
        self.events.push(Event::WaitBusy(active, timeout_ticks));
        Ok(self.busy_results.pop_front().unwrap_or(true))
    }

    fn delay_ms(&mut self, ms: u32) {
        self.events.push(Event::Delay(ms));
    }
}

/// Every glyph is `width` pixels wide, ascent 10, descent -2.
///
/// Letters draw a single foreground run from the origin, spaces a background
/// run. Drawn glyphs are recorded with their origin.
pub(crate) struct FixedFont {
    width: i32,
    glyphs: RefCell<Vec<(i32, i32, char)>>,
}

impl FixedFont {
    pub(crate) fn new(width: i32) -> Self {
        FixedFont {
            width,
            glyphs: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn glyphs(&self) -> Vec<(i32, i32, char)> {
        self.glyphs.borrow().clone()
    }

    /// The recorded glyphs as one string
    pub(crate) fn text(&self) -> std::string::String {
        self.glyphs.borrow().iter().map(|&(_, _, c)| c).collect()
    }
}

impl GlyphRenderer for FixedFont {
    fn ascent(&self) -> i8 {
        10
    }

    fn descent(&self) -> i8 {
        -2
    }

    fn glyph_width(&self, _encoding: u32) -> i32 {
        self.width
    }

    fn draw_glyph(
        &self,
        sink: &mut dyn SegmentSink,
        x: i32,
        y: i32,
        encoding: u32,
        direction: FontDirection,
    ) -> i32 {
        let c = char::from_u32(encoding).unwrap_or(char::REPLACEMENT_CHARACTER);
        self.glyphs.borrow_mut().push((x, y, c));
        let ink = if c == ' ' {
            Ink::Background
        } else {
            Ink::Foreground
        };
        sink.draw_segment(x, y, self.width, direction, ink);
        self.width
    }
}
