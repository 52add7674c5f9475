//! The sixteen console colors and their tag names.
//!
//! These are the render attributes of the reference registry: each tag name
//! such as `darkred` maps to one [`ConsoleColor`].

use std::fmt;
use std::str::FromStr;

use phf::phf_map;

use crate::error::ColorParseError;

/// One of the sixteen classic console foreground colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConsoleColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

/// Map of lowercase tag names to their console colors.
pub static COLOR_NAMES: phf::Map<&'static str, ConsoleColor> = phf_map! {
    "red" => ConsoleColor::Red,
    "green" => ConsoleColor::Green,
    "blue" => ConsoleColor::Blue,
    "yellow" => ConsoleColor::Yellow,
    "cyan" => ConsoleColor::Cyan,
    "white" => ConsoleColor::White,
    "gray" => ConsoleColor::Gray,
    "magenta" => ConsoleColor::Magenta,
    "black" => ConsoleColor::Black,
    "darkred" => ConsoleColor::DarkRed,
    "darkgreen" => ConsoleColor::DarkGreen,
    "darkblue" => ConsoleColor::DarkBlue,
    "darkyellow" => ConsoleColor::DarkYellow,
    "darkcyan" => ConsoleColor::DarkCyan,
    "darkgray" => ConsoleColor::DarkGray,
    "darkmagenta" => ConsoleColor::DarkMagenta,
};

impl ConsoleColor {
    /// All sixteen colors, in console palette order.
    pub const ALL: [ConsoleColor; 16] = [
        ConsoleColor::Black,
        ConsoleColor::DarkBlue,
        ConsoleColor::DarkGreen,
        ConsoleColor::DarkCyan,
        ConsoleColor::DarkRed,
        ConsoleColor::DarkMagenta,
        ConsoleColor::DarkYellow,
        ConsoleColor::Gray,
        ConsoleColor::DarkGray,
        ConsoleColor::Blue,
        ConsoleColor::Green,
        ConsoleColor::Cyan,
        ConsoleColor::Red,
        ConsoleColor::Magenta,
        ConsoleColor::Yellow,
        ConsoleColor::White,
    ];

    /// The lowercase tag name for this color.
    ///
    /// # Examples
    ///
    /// ```
    /// use markup::ConsoleColor;
    ///
    /// assert_eq!(ConsoleColor::DarkRed.name(), "darkred");
    /// ```
    pub fn name(self) -> &'static str {
        match self {
            ConsoleColor::Black => "black",
            ConsoleColor::DarkBlue => "darkblue",
            ConsoleColor::DarkGreen => "darkgreen",
            ConsoleColor::DarkCyan => "darkcyan",
            ConsoleColor::DarkRed => "darkred",
            ConsoleColor::DarkMagenta => "darkmagenta",
            ConsoleColor::DarkYellow => "darkyellow",
            ConsoleColor::Gray => "gray",
            ConsoleColor::DarkGray => "darkgray",
            ConsoleColor::Blue => "blue",
            ConsoleColor::Green => "green",
            ConsoleColor::Cyan => "cyan",
            ConsoleColor::Red => "red",
            ConsoleColor::Magenta => "magenta",
            ConsoleColor::Yellow => "yellow",
            ConsoleColor::White => "white",
        }
    }

    /// Look up a color by tag name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        if let Some(color) = COLOR_NAMES.get(name) {
            return Some(*color);
        }
        COLOR_NAMES.get(name.to_ascii_lowercase().as_str()).copied()
    }
}

impl FromStr for ConsoleColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::from_name(name).ok_or_else(|| ColorParseError::UnknownName(name.to_string()))
    }
}

impl fmt::Display for ConsoleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
