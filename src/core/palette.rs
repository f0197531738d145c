//! Fixed colors for each part of a rendered record

use super::level::Level;
use colored::{Color, Colorize};

/// RGB value of an xterm-256 palette entry
const fn xterm(r: u8, g: u8, b: u8) -> Color {
    Color::TrueColor { r, g, b }
}

pub const DEBUG_COLOR: Color = xterm(95, 0, 255); // 57
pub const INFO_COLOR: Color = xterm(0, 215, 0); // 40
pub const WARN_COLOR: Color = xterm(255, 95, 0); // 202
pub const ERROR_COLOR: Color = xterm(255, 0, 0); // 196
pub const TIME_COLOR: Color = xterm(215, 175, 0); // 178
pub const MESSAGE_COLOR: Color = Color::White;
pub const ATTRS_COLOR: Color = xterm(138, 138, 138); // 245

/// The parts of a rendered line, each with its own color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Time,
    Level(Level),
    Message,
    Attrs,
}

impl Segment {
    /// `None` for levels other than the four named ones
    pub fn color(self) -> Option<Color> {
        match self {
            Segment::Time => Some(TIME_COLOR),
            Segment::Message => Some(MESSAGE_COLOR),
            Segment::Attrs => Some(ATTRS_COLOR),
            Segment::Level(Level::DEBUG) => Some(DEBUG_COLOR),
            Segment::Level(Level::INFO) => Some(INFO_COLOR),
            Segment::Level(Level::WARN) => Some(WARN_COLOR),
            Segment::Level(Level::ERROR) => Some(ERROR_COLOR),
            Segment::Level(_) => None,
        }
    }

    pub fn paint(self, text: &str) -> String {
        match self.color() {
            Some(color) => text.color(color).to_string(),
            None => text.to_string(),
        }
    }
}
