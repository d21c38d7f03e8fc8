//! The command dispatch collaborator.
//!
//! The resolver does not execute commands. Every plain command is logged and
//! handed to a [`CommandDispatcher`]; terminal errors go to its error channel.

use scriptflow_foundation::Error;

/// Receives plain commands and terminal errors from a resolution pass.
pub trait CommandDispatcher {
    /// Logs a command before it is executed.
    fn log(&mut self, command: &str);

    /// Requests execution of a command.
    fn execute(&mut self, command: &str);

    /// Reports an error that stopped a pass.
    fn report_error(&mut self, error: &Error);
}

impl<T: CommandDispatcher + ?Sized> CommandDispatcher for &mut T {
    fn log(&mut self, command: &str) {
        (**self).log(command);
    }

    fn execute(&mut self, command: &str) {
        (**self).execute(command);
    }

    fn report_error(&mut self, error: &Error) {
        (**self).report_error(error);
    }
}

impl<T: CommandDispatcher + ?Sized> CommandDispatcher for Box<T> {
    fn log(&mut self, command: &str) {
        (**self).log(command);
    }

    fn execute(&mut self, command: &str) {
        (**self).execute(command);
    }

    fn report_error(&mut self, error: &Error) {
        (**self).report_error(error);
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullDispatcher;

impl CommandDispatcher for NullDispatcher {
    fn log(&mut self, _command: &str) {}

    fn execute(&mut self, _command: &str) {}

    fn report_error(&mut self, _error: &Error) {}
}

/// Keeps every call for later inspection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingDispatcher {
    /// Commands passed to [`log`](CommandDispatcher::log), in order.
    pub logged: Vec<String>,
    /// Commands passed to [`execute`](CommandDispatcher::execute), in order.
    pub executed: Vec<String>,
    /// Errors passed to [`report_error`](CommandDispatcher::report_error).
    pub errors: Vec<Error>,
}

impl RecordingDispatcher {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all recorded calls.
    pub fn clear(&mut self) {
        self.logged.clear();
        self.executed.clear();
        self.errors.clear();
    }
}

impl CommandDispatcher for RecordingDispatcher {
    fn log(&mut self, command: &str) {
        self.logged.push(command.to_string());
    }

    fn execute(&mut self, command: &str) {
        self.executed.push(command.to_string());
    }

    fn report_error(&mut self, error: &Error) {
        self.errors.push(error.clone());
    }
}
