use std::fmt;

/// Error returned when a `#rrggbb` literal cannot be parsed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorParseError {
    /// The literal did not start with `#`.
    #[error("color literal must start with '#': {0}")]
    MissingHash(String),
    /// The literal had the wrong number of hex digits.
    #[error("color literal must have 6 hex digits: {0}")]
    InvalidLength(String),
    /// The literal contained a non-hex digit.
    #[error("invalid hex digit in color literal: {0}")]
    InvalidDigit(String),
}

/// An sRGB color literal, packed as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rgb(u32);

impl Rgb {
    /// Creates a color from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self(hex & 0x00FF_FFFF)
    }

    /// Parses a `#rrggbb` literal.
    ///
    /// # Errors
    /// Returns [`ColorParseError`] if the literal is malformed.
    pub fn parse(literal: &str) -> Result<Self, ColorParseError> {
        let digits = literal
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(literal.to_string()))?;

        if digits.len() != 6 {
            return Err(ColorParseError::InvalidLength(literal.to_string()));
        }

        u32::from_str_radix(digits, 16)
            .map(Self::from_hex)
            .map_err(|_| ColorParseError::InvalidDigit(literal.to_string()))
    }

    /// Returns the packed `0xRRGGBB` value.
    #[must_use]
    pub const fn hex(self) -> u32 {
        self.0
    }

    /// Returns the red, green and blue channels.
    #[must_use]
    pub const fn channels(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xFF) as u8,
            ((self.0 >> 8) & 0xFF) as u8,
            (self.0 & 0xFF) as u8,
        )
    }

    /// Returns the channels normalized to `0.0..=1.0`, as expected by shaders.
    #[must_use]
    pub fn to_f32(self) -> [f32; 3] {
        let (r, g, b) = self.channels();
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
    }

    /// Formats the color as a CSS `rgba()` with the given alpha.
    #[must_use]
    pub fn css_alpha(self, alpha: f32) -> String {
        let (r, g, b) = self.channels();
        format!("rgba({r}, {g}, {b}, {alpha})")
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// Theme colors shared by the DOM styles and the 3D scene.
pub mod palette {
    use super::Rgb;

    /// `--primary`, neon cyan.
    pub const CYAN: Rgb = Rgb::from_hex(0x00FFFF);
    /// `--secondary`, hot pink.
    pub const PINK: Rgb = Rgb::from_hex(0xFF33CC);
    /// `--accent`, violet.
    pub const PURPLE: Rgb = Rgb::from_hex(0xC34DFF);
    /// Neon green used for status indicators.
    pub const GREEN: Rgb = Rgb::from_hex(0x00FF55);
    /// Amber used for private-repository badges.
    pub const AMBER: Rgb = Rgb::from_hex(0xFFBF00);

    /// Scene colors.
    pub const SCENE_CYAN: Rgb = Rgb::from_hex(0x00FFFF);
    pub const SCENE_MAGENTA: Rgb = Rgb::from_hex(0xFF00FF);
    pub const SCENE_VIOLET: Rgb = Rgb::from_hex(0xAA00FF);
    pub const SCENE_GREEN: Rgb = Rgb::from_hex(0x00FF88);
    pub const FLUTTER_BLUE: Rgb = Rgb::from_hex(0x02569B);
    pub const FLUTTER_TEAL: Rgb = Rgb::from_hex(0x00BCD4);
    pub const WINDOW_FRAME: Rgb = Rgb::from_hex(0x1A1A2E);

    /// Page background, `hsl(240 15% 10%)`.
    pub const BACKGROUND: Rgb = Rgb::from_hex(0x16161D);
}

/// Accent color family used by cards, badges and links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Accent {
    /// Primary cyan.
    Cyan,
    /// Secondary pink.
    Pink,
    /// Accent purple.
    Purple,
    /// Status green.
    Green,
    /// Warning amber.
    Amber,
}

impl Accent {
    /// CSS class suffix, e.g. `text-primary`, `border-primary`.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Accent::Cyan => "primary",
            Accent::Pink => "secondary",
            Accent::Purple => "accent",
            Accent::Green => "neon-green",
            Accent::Amber => "amber",
        }
    }

    /// The literal color of this accent.
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        match self {
            Accent::Cyan => palette::CYAN,
            Accent::Pink => palette::PINK,
            Accent::Purple => palette::PURPLE,
            Accent::Green => palette::GREEN,
            Accent::Amber => palette::AMBER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_display() {
        let color = Rgb::parse("#02569b").unwrap();
        assert_eq!(color, palette::FLUTTER_BLUE);
        assert_eq!(color.to_string(), "#02569b");
    }

    #[test]
    fn parse_rejects_malformed_literals() {
        assert_eq!(
            Rgb::parse("00ffff"),
            Err(ColorParseError::MissingHash("00ffff".into()))
        );
        assert_eq!(
            Rgb::parse("#0ff"),
            Err(ColorParseError::InvalidLength("#0ff".into()))
        );
        assert_eq!(
            Rgb::parse("#00ffzz"),
            Err(ColorParseError::InvalidDigit("#00ffzz".into()))
        );
    }

    #[test]
    fn normalized_channels() {
        assert_eq!(palette::SCENE_CYAN.to_f32(), [0.0, 1.0, 1.0]);
        assert_eq!(palette::SCENE_MAGENTA.channels(), (255, 0, 255));
        assert_eq!(palette::CYAN.css_alpha(0.5), "rgba(0, 255, 255, 0.5)");
    }
}
