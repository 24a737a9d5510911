//! Drives the widget controllers from terminal input.

use std::io::{BufRead, Write};

use crate::core::calculator::CalculatorSession;
use crate::core::registration::{FormData, RegistrationForm};
use crate::domain::model::FieldId;
use crate::domain::ports::Notifier;
use crate::utils::error::Result;

/// Presses every token, skipping (and returning) the ones that are not keys.
pub fn press_tokens<N, I, S>(session: &mut CalculatorSession<N>, tokens: I) -> Vec<String>
where
    N: Notifier,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut skipped = Vec::new();
    for token in tokens {
        let token = token.as_ref();
        if let Err(e) = session.press_token(token) {
            tracing::warn!("⚠️ Skipping input: {}", e);
            skipped.push(token.to_string());
        }
    }
    skipped
}

/// Line-oriented calculator loop: each line holds whitespace-separated keys,
/// and the display is echoed after every line. `quit` or `exit` ends the loop.
pub fn run_calculator_repl<N, R, W>(
    session: &mut CalculatorSession<N>,
    input: R,
    mut output: W,
) -> Result<()>
where
    N: Notifier,
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed == "quit" || trimmed == "exit" {
            break;
        }
        if trimmed.is_empty() {
            continue;
        }

        let skipped = press_tokens(session, trimmed.split_whitespace());
        if !skipped.is_empty() {
            writeln!(output, "? unknown key(s): {}", skipped.join(" "))?;
        }
        if session.expression().is_empty() {
            writeln!(output, "{}", session.display())?;
        } else {
            writeln!(output, "{:>24}  [{}]", session.display(), session.expression())?;
        }
    }
    Ok(())
}

/// Types each field in form order. Fields that received a value are left
/// (blurred) afterwards; `touch_all` also marks the ones left empty.
pub fn fill_form<N: Notifier>(form: &mut RegistrationForm<N>, data: &FormData, touch_all: bool) {
    for field in FieldId::ALL {
        let value = data.get(field);
        form.change(field, value);
        if !value.is_empty() {
            form.blur(field);
        }
    }
    if touch_all {
        form.touch_all();
    }
}
