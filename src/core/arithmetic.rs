//! Two-operand arithmetic and display formatting for the calculator.
//!
//! Everything here is a pure function of its inputs. The only failure is
//! division by zero.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::error::{AppError, Result};

pub const DEFAULT_MAX_DISPLAY_DIGITS: usize = 12;
pub const DEFAULT_EXPONENT_DIGITS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "%")]
    Remainder,
}

impl Operator {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            "%" => Some(Operator::Remainder),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Remainder => "%",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Applies `op` to `a` and `b`.
///
/// `%` is the floating-point remainder, so the result takes the sign of `a`.
/// Dividing by either signed zero is the one failing case.
pub fn evaluate(a: f64, b: f64, op: Operator) -> Result<f64> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Subtract => Ok(a - b),
        Operator::Multiply => Ok(a * b),
        Operator::Divide => {
            if b == 0.0 {
                return Err(AppError::DivisionByZero);
            }
            Ok(a / b)
        }
        Operator::Remainder => Ok(a % b),
    }
}

/// Token-level entry point. An unrecognised token yields `b` unchanged.
pub fn evaluate_token(a: f64, b: f64, token: &str) -> Result<f64> {
    match Operator::from_token(token) {
        Some(op) => evaluate(a, b, op),
        None => Ok(b),
    }
}

pub fn square(a: f64) -> f64 {
    a * a
}

/// Width limits applied when rendering a value on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFormat {
    pub max_digits: usize,
    pub exponent_digits: usize,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            max_digits: DEFAULT_MAX_DISPLAY_DIGITS,
            exponent_digits: DEFAULT_EXPONENT_DIGITS,
        }
    }
}

impl DisplayFormat {
    /// Canonical rendering, switching to fixed-precision exponential form
    /// once the rendered text (minus its decimal point) exceeds `max_digits`.
    pub fn format(&self, value: f64) -> String {
        let text = canonical_string(value);
        if text.replacen('.', "", 1).chars().count() > self.max_digits {
            return to_exponential(value, self.exponent_digits);
        }
        text
    }
}

pub fn format_for_display(value: f64) -> String {
    DisplayFormat::default().format(value)
}

/// Shortest round-trip decimal text for `value`, using exponent form only
/// for magnitudes at or above 1e21 or below 1e-6.
pub fn canonical_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        sign_exponent(&format!("{:e}", value))
    } else {
        format!("{}", value)
    }
}

/// Exponential notation with `fraction_digits` digits after the point.
pub fn to_exponential(value: f64, fraction_digits: usize) -> String {
    if !value.is_finite() {
        return canonical_string(value);
    }
    sign_exponent(&format!("{:.*e}", fraction_digits, value))
}

// Rust writes `1.5e3`; the display shows `1.5e+3`.
fn sign_exponent(text: &str) -> String {
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text.to_string(),
    }
}

/// Reads display text back into a number using its longest numeric prefix.
/// Text with no numeric prefix (e.g. a lone `-`) reads as NaN.
pub fn parse_display(text: &str) -> f64 {
    let text = text.trim_start();
    if text.starts_with("Infinity") {
        return f64::INFINITY;
    }
    if text.starts_with("-Infinity") {
        return f64::NEG_INFINITY;
    }

    let mut end = text.len();
    while end > 0 {
        if text.is_char_boundary(end) {
            let prefix = &text[..end];
            // Rust also accepts "inf"/"nan" spellings the display never produces.
            let starts_numeric = prefix
                .trim_start_matches(['+', '-'])
                .starts_with(|c: char| c.is_ascii_digit() || c == '.');
            if starts_numeric {
                if let Ok(value) = prefix.parse::<f64>() {
                    return value;
                }
            }
        }
        end -= 1;
    }
    f64::NAN
}
