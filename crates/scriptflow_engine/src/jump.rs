//! `goto`/`label` jump resolution over a split command list.
//!
//! A jump target is addressed by position in the command list. Labels are
//! matched by exact parameter text; the first matching `label` wins, wherever
//! it sits relative to the `goto`.

use scriptflow_foundation::Keyword;

use crate::config::ScriptConfig;

/// Returns the trimmed text between the first `open` and the last `close`
/// marker, or `None` if there is no non-empty parameter.
#[must_use]
pub fn jump_parameter(command: &str, open: char, close: char) -> Option<&str> {
    let start = command.find(open)? + open.len_utf8();
    let end = command.rfind(close)?;
    if end < start {
        return None;
    }
    let parameter = command[start..end].trim();
    (!parameter.is_empty()).then_some(parameter)
}

/// Finds the position of the first `label` command declaring `label`.
#[must_use]
pub fn find_label_position<S: AsRef<str>>(
    label: &str,
    commands: &[S],
    config: &ScriptConfig,
) -> Option<usize> {
    commands.iter().position(|command| {
        let command = command.as_ref();
        config.keywords.classify(command) == Some(Keyword::Label)
            && jump_parameter(command, config.param_open, config.param_close) == Some(label)
    })
}

/// Resolves the `goto` at `position` to the position of its label.
///
/// Returns `None` when the command has no parameter or no label matches.
#[must_use]
pub fn jump_target<S: AsRef<str>>(
    commands: &[S],
    position: usize,
    config: &ScriptConfig,
) -> Option<usize> {
    let command = commands.get(position)?.as_ref();
    let label = jump_parameter(command, config.param_open, config.param_close)?;
    let target = find_label_position(label, commands, config)?;
    Some(target.min(commands.len().saturating_sub(1)))
}
