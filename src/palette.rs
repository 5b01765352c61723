//! Fixed color palettes and their ANSI escape codes.
//!
//! The chat renderer understands exactly eight foreground and eight
//! background colors. Both tables are static: lookups never insert, and a
//! color outside a table is handled by the per-channel fallback policy:
//!
//! - foreground: unknown colors render with the white foreground code
//! - background: unknown colors emit no background code at all

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The escape control character.
pub const ESC: char = '\x1b';

/// A single SGR escape sequence, stored as its parameter list (`2;31`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EscapeCode(&'static str);

impl EscapeCode {
    /// Bold on.
    pub const BOLD_ON: EscapeCode = EscapeCode("1");
    /// Normal intensity, cancels bold only.
    pub const BOLD_OFF: EscapeCode = EscapeCode("22");
    /// Underline on.
    pub const UNDERLINE_ON: EscapeCode = EscapeCode("4");
    /// Underline off.
    pub const UNDERLINE_OFF: EscapeCode = EscapeCode("24");
    /// Full reset of every attribute.
    pub const RESET: EscapeCode = EscapeCode("0");

    /// The SGR parameters without the `ESC[` prefix and `m` suffix.
    pub fn params(&self) -> &'static str {
        self.0
    }

    /// Append the full escape sequence to `out`.
    pub fn write_to(&self, out: &mut String) {
        out.push(ESC);
        out.push('[');
        out.push_str(self.0);
        out.push('m');
    }
}

impl fmt::Display for EscapeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}m", ESC, self.0)
    }
}

/// A canonical 24-bit color value.
///
/// Identity is the RGB value: `#FF0000`, `ff0000` and `#f00` are the same
/// color. Serialized as lowercase `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    /// Build a color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Red, green and blue channels.
    pub fn channels(&self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }

    /// Lowercase `#rrggbb` form.
    pub fn hex(&self) -> String {
        format!("#{:06x}", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// Errors from parsing a color or palette entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("Invalid color '{0}': expected #rrggbb or #rgb")]
    Malformed(String),

    #[error("Unknown text color '{0}'. Run 'ansifence palette' to see the choices.")]
    UnknownForeground(String),

    #[error("Unknown background color '{0}'. Run 'ansifence palette' to see the choices.")]
    UnknownBackground(String),
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let malformed = || ColorParseError::Malformed(s.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(malformed());
        }

        let expanded = match digits.len() {
            6 => digits.to_string(),
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            _ => return Err(malformed()),
        };

        u32::from_str_radix(&expanded, 16)
            .map(Color)
            .map_err(|_| malformed())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Text colors the renderer supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Foreground {
    Gray,
    Red,
    Green,
    Yellow,
    Blue,
    Pink,
    Cyan,
    White,
}

impl Foreground {
    /// Palette order, as offered to the user.
    pub const ALL: [Foreground; 8] = [
        Self::Gray,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Pink,
        Self::Cyan,
        Self::White,
    ];

    /// Used for any color the table doesn't know.
    pub const FALLBACK: Foreground = Self::White;

    pub fn name(&self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Pink => "pink",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Gray => Color::rgb(0x80, 0x80, 0x80),
            Self::Red => Color::rgb(0xff, 0x00, 0x00),
            Self::Green => Color::rgb(0x00, 0x80, 0x00),
            Self::Yellow => Color::rgb(0xff, 0xff, 0x00),
            Self::Blue => Color::rgb(0x00, 0x00, 0xff),
            Self::Pink => Color::rgb(0xff, 0x00, 0xff),
            Self::Cyan => Color::rgb(0x00, 0xff, 0xff),
            Self::White => Color::rgb(0xff, 0xff, 0xff),
        }
    }

    pub fn code(&self) -> EscapeCode {
        match self {
            Self::Gray => EscapeCode("2;30"),
            Self::Red => EscapeCode("2;31"),
            Self::Green => EscapeCode("2;32"),
            Self::Yellow => EscapeCode("2;33"),
            Self::Blue => EscapeCode("2;34"),
            Self::Pink => EscapeCode("2;35"),
            Self::Cyan => EscapeCode("2;36"),
            Self::White => EscapeCode("2;37"),
        }
    }

    /// Reverse lookup by color value.
    pub fn from_color(color: Color) -> Option<Self> {
        Self::ALL.into_iter().find(|fg| fg.color() == color)
    }
}

impl Default for Foreground {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl fmt::Display for Foreground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts a palette name (`red`) or a palette color value (`#ff0000`).
impl FromStr for Foreground {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        if let Some(fg) = Self::ALL.into_iter().find(|fg| fg.name() == wanted) {
            return Ok(fg);
        }
        match wanted.parse::<Color>() {
            Ok(color) => {
                Self::from_color(color).ok_or(ColorParseError::UnknownForeground(s.to_string()))
            }
            Err(_) => Err(ColorParseError::UnknownForeground(s.to_string())),
        }
    }
}

/// Background colors the renderer supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Background {
    FireflyDarkBlue,
    Orange,
    MarbleBlue,
    Turquoise,
    Gray,
    Indigo,
    LightGray,
    White,
}

impl Background {
    /// Palette order, as offered to the user.
    pub const ALL: [Background; 8] = [
        Self::FireflyDarkBlue,
        Self::Orange,
        Self::MarbleBlue,
        Self::Turquoise,
        Self::Gray,
        Self::Indigo,
        Self::LightGray,
        Self::White,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::FireflyDarkBlue => "firefly-dark-blue",
            Self::Orange => "orange",
            Self::MarbleBlue => "marble-blue",
            Self::Turquoise => "turquoise",
            Self::Gray => "gray",
            Self::Indigo => "indigo",
            Self::LightGray => "light-gray",
            Self::White => "white",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::FireflyDarkBlue => Color::rgb(0x0b, 0x3d, 0x91),
            Self::Orange => Color::rgb(0xff, 0x45, 0x00),
            Self::MarbleBlue => Color::rgb(0x1e, 0x90, 0xff),
            Self::Turquoise => Color::rgb(0xaf, 0xee, 0xee),
            Self::Gray => Color::rgb(0x80, 0x80, 0x80),
            Self::Indigo => Color::rgb(0x4b, 0x00, 0x82),
            Self::LightGray => Color::rgb(0xd3, 0xd3, 0xd3),
            Self::White => Color::rgb(0xff, 0xff, 0xff),
        }
    }

    pub fn code(&self) -> EscapeCode {
        match self {
            Self::FireflyDarkBlue => EscapeCode("2;40"),
            Self::Orange => EscapeCode("2;41"),
            Self::MarbleBlue => EscapeCode("2;42"),
            Self::Turquoise => EscapeCode("2;43"),
            Self::Gray => EscapeCode("2;44"),
            Self::Indigo => EscapeCode("2;45"),
            Self::LightGray => EscapeCode("2;46"),
            Self::White => EscapeCode("2;47"),
        }
    }

    /// Reverse lookup by color value.
    pub fn from_color(color: Color) -> Option<Self> {
        Self::ALL.into_iter().find(|bg| bg.color() == color)
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts a palette name (`orange`) or a palette color value (`#ff4500`).
impl FromStr for Background {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        if let Some(bg) = Self::ALL.into_iter().find(|bg| bg.name() == wanted) {
            return Ok(bg);
        }
        match wanted.parse::<Color>() {
            Ok(color) => {
                Self::from_color(color).ok_or(ColorParseError::UnknownBackground(s.to_string()))
            }
            Err(_) => Err(ColorParseError::UnknownBackground(s.to_string())),
        }
    }
}

macro_rules! palette_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

palette_serde!(Foreground);
palette_serde!(Background);

/// Escape code for a text color. Never fails: unknown colors get white.
pub fn foreground_code(color: Color) -> EscapeCode {
    Foreground::from_color(color)
        .unwrap_or(Foreground::FALLBACK)
        .code()
}

/// Escape code for a background color, or `None` if the color is not in
/// the background table.
pub fn background_code(color: Color) -> Option<EscapeCode> {
    Background::from_color(color).map(|bg| bg.code())
}
