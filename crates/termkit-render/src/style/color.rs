//! Named terminal colors.
//!
//! Only the eight standard ANSI colors are recognized. Names are matched
//! case-insensitively; anything else is not a color.

/// One of the eight standard ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl NamedColor {
    /// Parses a color name such as `red` or `Magenta`.
    pub fn parse(name: &str) -> Option<Self> {
        let color = match name.to_lowercase().as_str() {
            "black" => NamedColor::Black,
            "red" => NamedColor::Red,
            "green" => NamedColor::Green,
            "yellow" => NamedColor::Yellow,
            "blue" => NamedColor::Blue,
            "magenta" => NamedColor::Magenta,
            "cyan" => NamedColor::Cyan,
            "white" => NamedColor::White,
            _ => return None,
        };
        Some(color)
    }

    fn index(self) -> u8 {
        match self {
            NamedColor::Black => 0,
            NamedColor::Red => 1,
            NamedColor::Green => 2,
            NamedColor::Yellow => 3,
            NamedColor::Blue => 4,
            NamedColor::Magenta => 5,
            NamedColor::Cyan => 6,
            NamedColor::White => 7,
        }
    }

    /// SGR code selecting this color as foreground (30-37).
    pub fn fg_code(self) -> u8 {
        30 + self.index()
    }

    /// SGR code selecting this color as background (40-47).
    pub fn bg_code(self) -> u8 {
        40 + self.index()
    }
}
