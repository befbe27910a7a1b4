//! Length and percentage values for the subset the engine computes with.
//!
//! Property values are opaque strings everywhere except percentage
//! resolution of lengths, where the engine needs real numbers. This crate
//! parses exactly that subset (`px` lengths, unitless zero, and
//! percentages) out of the opaque value tokens and formats resolved
//! lengths back into canonical `px` strings.

#![forbid(unsafe_code)]

use core::fmt;

/// Parse error for values parsing utilities in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The text did not match the expected value grammar.
    UnexpectedToken,
}

/// Supported subset of length units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthUnit {
    /// Device-independent pixels.
    Pixels,
}

/// A length value with unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length {
    /// Numeric magnitude.
    pub value: f32,
    /// Unit of `value`.
    pub unit: LengthUnit,
}

impl Length {
    /// A pixel length.
    #[inline]
    pub const fn px(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::Pixels,
        }
    }
}

impl fmt::Display for Length {
    /// Canonical `px` form: whole values print without a fractional part
    /// (`24px`), others keep it (`13.5px`).
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.fract() == 0.0 {
            write!(formatter, "{:.0}px", self.value)
        } else {
            write!(formatter, "{}px", self.value)
        }
    }
}

/// A percentage stored as a fraction: `150%` is `Percentage(1.5)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Percentage(pub f32);

impl Percentage {
    /// Resolve against an absolute base: `percentage/100 × base`.
    #[inline]
    pub fn resolve_against(self, base_px: f32) -> Length {
        Length::px(self.0 * base_px)
    }
}

/// Parse a length token: `<number>px` (case-insensitive unit) or unitless
/// zero.
///
/// # Errors
/// Returns [`ParseError::UnexpectedToken`] for anything else.
pub fn parse_length(text: &str) -> Result<Length, ParseError> {
    let trimmed = text.trim();
    if let Some(number) = strip_unit_suffix(trimmed, "px") {
        return parse_number(number).map(Length::px);
    }
    // Unitless zero is a valid length.
    if parse_number(trimmed) == Ok(0.0) {
        return Ok(Length::px(0.0));
    }
    Err(ParseError::UnexpectedToken)
}

/// Parse a percentage token: `<number>%`.
///
/// # Errors
/// Returns [`ParseError::UnexpectedToken`] for anything else.
pub fn parse_percentage(text: &str) -> Result<Percentage, ParseError> {
    let trimmed = text.trim();
    let Some(number) = trimmed.strip_suffix('%') else {
        return Err(ParseError::UnexpectedToken);
    };
    parse_number(number).map(|value| Percentage(value / 100.0))
}

/// Strip a case-insensitive unit suffix, returning the numeric part.
fn strip_unit_suffix<'text>(text: &'text str, unit: &str) -> Option<&'text str> {
    let split = text.len().checked_sub(unit.len())?;
    // Inputs ending in a multibyte character put the split inside it.
    if !text.is_char_boundary(split) {
        return None;
    }
    let (number, suffix) = text.split_at(split);
    suffix.eq_ignore_ascii_case(unit).then_some(number)
}

/// Parse a non-negative decimal number (digits with an optional single `.`).
fn parse_number(text: &str) -> Result<f32, ParseError> {
    let valid = !text.is_empty()
        && text.bytes().all(|byte| byte.is_ascii_digit() || byte == b'.')
        && text.bytes().filter(|byte| *byte == b'.').count() <= 1;
    if !valid {
        return Err(ParseError::UnexpectedToken);
    }
    text.parse::<f32>().map_err(|_| ParseError::UnexpectedToken)
}
