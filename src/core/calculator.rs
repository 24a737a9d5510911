//! Calculator session: turns key presses into engine calls and display text.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::core::arithmetic::{
    canonical_string, evaluate, parse_display, square, DisplayFormat, Operator,
};
use crate::domain::model::Notification;
use crate::domain::ports::Notifier;
use crate::utils::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Square,
    Equals,
    Clear,
    Backspace,
}

impl Key {
    /// Parses a button label. Terminal-friendly aliases are accepted for the
    /// labels that are awkward to type.
    pub fn parse(token: &str) -> Result<Key> {
        let key = match token {
            "." => Key::DecimalPoint,
            "=" => Key::Equals,
            "AC" | "C" | "clear" => Key::Clear,
            "⌫" | "back" | "bs" => Key::Backspace,
            "x²" | "x^2" | "sq" | "sqr" => Key::Square,
            _ => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Key::Digit(c as u8 - b'0'),
                    _ => Operator::from_token(token)
                        .map(Key::Operator)
                        .ok_or_else(|| AppError::UnknownKey {
                            token: token.to_string(),
                        })?,
                }
            }
        };
        Ok(key)
    }
}

impl FromStr for Key {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        Key::parse(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Digit(d) => write!(f, "{}", d),
            Key::DecimalPoint => f.write_str("."),
            Key::Operator(op) => write!(f, "{}", op),
            Key::Square => f.write_str("x²"),
            Key::Equals => f.write_str("="),
            Key::Clear => f.write_str("AC"),
            Key::Backspace => f.write_str("⌫"),
        }
    }
}

/// Whether the next digit starts a new literal or extends the displayed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Fresh,
    Appending,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    Empty,
    Operation(f64, Operator),
    /// Result of `=`; `repeat` is replayed by a further `=`.
    Settled { value: f64, repeat: (Operator, f64) },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorSnapshot {
    pub display: String,
    pub expression: String,
    pub first_operand: Option<f64>,
    pub operator: Option<Operator>,
    pub waiting_for_second_operand: bool,
}

pub struct CalculatorSession<N: Notifier> {
    display: String,
    expression: String,
    pending: Pending,
    entry: Entry,
    format: DisplayFormat,
    notifier: N,
}

impl<N: Notifier> CalculatorSession<N> {
    pub fn new(notifier: N) -> Self {
        Self::with_format(DisplayFormat::default(), notifier)
    }

    pub fn with_format(format: DisplayFormat, notifier: N) -> Self {
        Self {
            display: "0".to_string(),
            expression: String::new(),
            pending: Pending::Empty,
            entry: Entry::Appending,
            format,
            notifier,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn first_operand(&self) -> Option<f64> {
        match self.pending {
            Pending::Empty => None,
            Pending::Operation(first, _) => Some(first),
            Pending::Settled { value, .. } => Some(value),
        }
    }

    pub fn operator(&self) -> Option<Operator> {
        match self.pending {
            Pending::Operation(_, op) => Some(op),
            _ => None,
        }
    }

    pub fn is_waiting_for_second_operand(&self) -> bool {
        self.entry == Entry::Fresh
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn into_notifier(self) -> N {
        self.notifier
    }

    pub fn snapshot(&self) -> CalculatorSnapshot {
        CalculatorSnapshot {
            display: self.display.clone(),
            expression: self.expression.clone(),
            first_operand: self.first_operand(),
            operator: self.operator(),
            waiting_for_second_operand: self.is_waiting_for_second_operand(),
        }
    }

    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(d) => self.input_digit(d),
            Key::DecimalPoint => self.input_decimal_point(),
            Key::Operator(op) => self.choose_operator(op),
            Key::Square => self.square_display(),
            Key::Equals => self.equals(),
            Key::Clear => self.clear(),
            Key::Backspace => self.backspace(),
        }
        tracing::debug!(key = %key, display = %self.display, "calculator key pressed");
    }

    pub fn press_token(&mut self, token: &str) -> Result<()> {
        let key = Key::parse(token)?;
        self.press(key);
        Ok(())
    }

    /// Presses each token in order, stopping at the first unknown one.
    pub fn press_all<I, S>(&mut self, tokens: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.press_token(token.as_ref())?;
        }
        Ok(())
    }

    fn input_digit(&mut self, digit: u8) {
        let digit = char::from(b'0' + digit);
        match self.entry {
            Entry::Fresh => {
                self.display = digit.to_string();
                self.entry = Entry::Appending;
            }
            Entry::Appending if self.display == "0" => self.display = digit.to_string(),
            Entry::Appending => self.display.push(digit),
        }
    }

    fn input_decimal_point(&mut self) {
        match self.entry {
            Entry::Fresh => {
                self.display = "0.".to_string();
                self.entry = Entry::Appending;
            }
            Entry::Appending => {
                if !self.display.contains('.') {
                    self.display.push('.');
                }
            }
        }
    }

    // A settled result still on screen is reused exactly, not re-parsed
    // from its rounded rendering.
    fn display_value(&self) -> f64 {
        if let Pending::Settled { value, .. } = self.pending {
            if self.display == self.format.format(value) {
                return value;
            }
        }
        parse_display(&self.display)
    }

    fn choose_operator(&mut self, next: Operator) {
        let input = self.display_value();

        let first = match self.pending {
            Pending::Operation(first, op) => match evaluate(first, input, op) {
                Ok(result) => {
                    self.display = self.format.format(result);
                    result
                }
                Err(e) => return self.fail(e),
            },
            _ => input,
        };

        self.expression = format!("{} {}", canonical_string(first), next);
        self.pending = Pending::Operation(first, next);
        self.entry = Entry::Fresh;
    }

    fn equals(&mut self) {
        let (first, op, second) = match self.pending {
            Pending::Operation(first, op) => (first, op, parse_display(&self.display)),
            Pending::Settled {
                repeat: (op, second),
                ..
            } => (self.display_value(), op, second),
            Pending::Empty => return,
        };

        match evaluate(first, second, op) {
            Ok(result) => {
                self.display = self.format.format(result);
                self.expression = format!(
                    "{} {} {} =",
                    canonical_string(first),
                    op,
                    canonical_string(second)
                );
                self.pending = Pending::Settled {
                    value: result,
                    repeat: (op, second),
                };
                self.entry = Entry::Fresh;
            }
            Err(e) => self.fail(e),
        }
    }

    fn square_display(&mut self) {
        let value = self.display_value();
        self.display = self.format.format(square(value));
        self.expression = format!("sqr({})", canonical_string(value));
        self.entry = Entry::Fresh;
    }

    pub fn clear(&mut self) {
        self.display = "0".to_string();
        self.expression.clear();
        self.pending = Pending::Empty;
        self.entry = Entry::Appending;
    }

    fn backspace(&mut self) {
        if self.entry == Entry::Fresh {
            return;
        }
        if self.display.chars().count() > 1 {
            self.display.pop();
        } else {
            self.display = "0".to_string();
        }
    }

    fn fail(&mut self, error: AppError) {
        tracing::warn!(error = %error, "calculation failed, resetting calculator");
        self.notifier
            .notify(Notification::error("Error", error.to_string()));
        self.clear();
    }
}
