//! Command list helpers: unwrapping container text and splitting it into
//! individual command strings.

use scriptflow_foundation::{Error, Result};

/// Splits `text` into trimmed, non-empty commands.
///
/// A separator inside a `"..."` string literal does not split. An unclosed
/// literal runs to the end of the text.
#[must_use]
pub fn split_commands(text: &str, separator: char) -> Vec<String> {
    let mut commands = Vec::new();
    let mut current = String::new();
    let mut in_str = false;

    for ch in text.chars() {
        match ch {
            '"' => {
                in_str = !in_str;
                current.push(ch);
            }
            c if c == separator && !in_str => push_trimmed(&mut commands, &mut current),
            _ => current.push(ch),
        }
    }
    push_trimmed(&mut commands, &mut current);

    commands
}

fn push_trimmed(commands: &mut Vec<String>, current: &mut String) {
    let command = current.trim();
    if !command.is_empty() {
        commands.push(command.to_string());
    }
    current.clear();
}

/// Removes the first `open` and the last `close` marker from container text.
///
/// Missing markers are left alone.
#[must_use]
pub fn strip_container(text: &str, open: char, close: char) -> String {
    let mut text = text.to_string();
    if let Some(index) = text.rfind(close) {
        text.remove(index);
    }
    if let Some(index) = text.find(open) {
        text.remove(index);
    }
    text
}

/// Unwraps a parenthesized batch-file parameter such as `(setup.bat)`.
///
/// A parameter without any marker is returned trimmed as is.
///
/// # Errors
/// Returns [`ErrorKind::FileNotFound`](scriptflow_foundation::ErrorKind::FileNotFound)
/// if the parameter contains a marker but is not wrapped in exactly one pair.
pub fn unwrap_parameter(parameter: &str, open: char, close: char) -> Result<String> {
    let trimmed = parameter.trim();
    if !trimmed.contains(open) && !trimmed.contains(close) {
        return Ok(trimmed.to_string());
    }

    trimmed
        .strip_prefix(open)
        .and_then(|rest| rest.strip_suffix(close))
        .map(|inner| inner.trim().to_string())
        .ok_or_else(|| Error::file_not_found(parameter, "malformed path parameter"))
}
