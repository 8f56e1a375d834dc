//! Color values accepted by color-enabled validators.
//!
//! Only enough CSS color syntax is understood to normalize author input:
//! basic named colors, hex notation and the `rgb()`/`rgba()` functions.

use std::fmt;

use cssparser::{ParseError, Parser, ParserInput, Token};

/// RGBA color (8 bits per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };
    pub const TRANSPARENT: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Create a new opaque color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color with alpha.
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a CSS color string.
    ///
    /// Returns `None` if the text is not a color or has trailing content.
    pub fn parse(text: &str) -> Option<Color> {
        let mut input = ParserInput::new(text.trim());
        let mut parser = Parser::new(&mut input);
        let color = parse_color(&mut parser)?;
        parser.expect_exhausted().ok()?;
        Some(color)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            let alpha = self.a as f32 / 255.0;
            write!(f, "rgba({}, {}, {}, {:.2})", self.r, self.g, self.b, alpha)
        }
    }
}

fn parse_color(input: &mut Parser<'_, '_>) -> Option<Color> {
    if let Ok(token) = input.try_parse(|i| i.expect_ident_cloned()) {
        return named_color(&token.to_ascii_lowercase());
    }

    // cssparser yields IDHash for "#ff0000" and Hash for digit-leading values like "#222299".
    if let Ok(hash) = input.try_parse(|i| -> Result<_, ParseError<'_, ()>> {
        match i.next()? {
            Token::IDHash(h) | Token::Hash(h) => Ok(h.clone()),
            _ => Err(i.new_custom_error(())),
        }
    }) {
        return parse_hex_color(hash.as_ref());
    }

    input.try_parse(parse_rgb_function).ok()
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::BLACK,
        "white" => Color::WHITE,
        "transparent" => Color::TRANSPARENT,
        "red" => Color::rgb(255, 0, 0),
        "green" => Color::rgb(0, 128, 0),
        "lime" => Color::rgb(0, 255, 0),
        "blue" => Color::rgb(0, 0, 255),
        "navy" => Color::rgb(0, 0, 128),
        "yellow" => Color::rgb(255, 255, 0),
        "orange" => Color::rgb(255, 165, 0),
        "purple" => Color::rgb(128, 0, 128),
        "cyan" | "aqua" => Color::rgb(0, 255, 255),
        "magenta" | "fuchsia" => Color::rgb(255, 0, 255),
        "maroon" => Color::rgb(128, 0, 0),
        "olive" => Color::rgb(128, 128, 0),
        "teal" => Color::rgb(0, 128, 128),
        "silver" => Color::rgb(192, 192, 192),
        "gray" | "grey" => Color::rgb(128, 128, 128),
        "rebeccapurple" => Color::rgb(102, 51, 153),
        _ => return None,
    };
    Some(color)
}

/// Decode `rgb`, `rgba`, `rrggbb` or `rrggbbaa` hex digits.
fn parse_hex_color(hex: &str) -> Option<Color> {
    let nibbles: Vec<u8> = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<_>>()?;
    let channels: Vec<u8> = match nibbles.len() {
        3 | 4 => nibbles.iter().map(|n| n * 17).collect(),
        6 | 8 => nibbles.chunks(2).map(|pair| (pair[0] << 4) | pair[1]).collect(),
        _ => return None,
    };
    let alpha = channels.get(3).copied().unwrap_or(255);
    Some(Color::rgba(channels[0], channels[1], channels[2], alpha))
}

fn parse_rgb_function<'i>(input: &mut Parser<'i, '_>) -> Result<Color, ParseError<'i, ()>> {
    let location = input.current_source_location();
    let function = input.expect_function()?.clone();
    let with_alpha = if function.eq_ignore_ascii_case("rgba") {
        true
    } else if function.eq_ignore_ascii_case("rgb") {
        false
    } else {
        return Err(location.new_custom_error(()));
    };

    input.parse_nested_block(|input| {
        let mut channels = [0, 0, 0, 255];
        let count = if with_alpha { 4 } else { 3 };
        for (i, channel) in channels.iter_mut().take(count).enumerate() {
            if i > 0 {
                input.expect_comma()?;
            }
            *channel = parse_channel(input, i == 3)?;
        }
        let [r, g, b, a] = channels;
        Ok(Color::rgba(r, g, b, a))
    })
}

/// One channel of `rgb()`/`rgba()`.
///
/// Color channels are integers (clamped to 0-255) or percentages; the alpha
/// channel is a 0-1 number or a percentage.
fn parse_channel<'i>(input: &mut Parser<'i, '_>, alpha: bool) -> Result<u8, ParseError<'i, ()>> {
    let location = input.current_source_location();
    let scale = |fraction: f32| (fraction * 255.0).round().clamp(0.0, 255.0) as u8;
    match *input.next()? {
        Token::Number { value, .. } if alpha => Ok(scale(value)),
        Token::Number {
            int_value: Some(v), ..
        } => Ok(v.clamp(0, 255) as u8),
        Token::Percentage { unit_value, .. } => Ok(scale(unit_value)),
        _ => Err(location.new_custom_error(())),
    }
}
