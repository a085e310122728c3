//! Numeric coercion and summing helper
//!
//! Operands may be numbers, numeric strings, or absent. Strings are coerced
//! the way script runtimes coerce them to numbers: surrounding whitespace and
//! byte order marks are ignored, an empty string is zero, and `Infinity` plus `0x`/`0o`/`0b`
//! integer literals are understood.

use thiserror::Error;

/// Raised when an operand does not coerce to a number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("pass valid numbers")]
pub struct InvalidNumberError;

/// A value to be coerced into a number
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Number(f64),
    Text(String),
    Missing,
}

impl Operand {
    /// Coerce to a number; `None` stands for not-a-number
    pub fn coerce(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_nan() => None,
            Self::Number(n) => Some(*n),
            Self::Text(s) => coerce_str(s),
            Self::Missing => None,
        }
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Operand>> From<Option<T>> for Operand {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

fn coerce_str(s: &str) -> Option<f64> {
    let s = s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if s.is_empty() {
        return Some(0.0);
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() {
            return None;
        }
        // Folded into f64 so literals wider than any integer type still coerce
        return digits.chars().try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        });
    }

    // `f64::from_str` also accepts spellings such as "inf" and "NaN"; only
    // plain decimal notation is numeric here.
    let is_decimal = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !is_decimal {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Coerce both operands and add them
pub fn sum(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<f64, InvalidNumberError> {
    let a = a.into().coerce().ok_or(InvalidNumberError)?;
    let b = b.into().coerce().ok_or(InvalidNumberError)?;
    Ok(a + b)
}
