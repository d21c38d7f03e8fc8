//! Configuration for script resolution.

use scriptflow_debug::TracerConfig;
use scriptflow_foundation::KeywordTable;

/// Default upper bound on commands visited in one resolution pass.
pub const DEFAULT_MAX_STEPS: usize = 10_000;

/// Configuration for a [`ScriptHandler`](crate::ScriptHandler).
///
/// Controls the markers used to split and unwrap script text, the keyword
/// table used to classify commands, and the step limit that stops passes
/// looping through backward jumps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptConfig {
    /// Separator between commands.
    pub separator: char,
    /// Opening marker of an inline container block.
    pub block_open: char,
    /// Closing marker of an inline container block.
    pub block_close: char,
    /// Opening marker around parameters (`goto(x)`, batch paths).
    pub param_open: char,
    /// Closing marker around parameters.
    pub param_close: char,
    /// Keyword table used to classify commands.
    pub keywords: KeywordTable,
    /// Maximum commands visited in one resolution pass.
    pub max_steps: usize,
    /// Tracing configuration for the handler's tracer.
    pub tracer: TracerConfig,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            separator: ';',
            block_open: '{',
            block_close: '}',
            param_open: '(',
            param_close: ')',
            keywords: KeywordTable::default(),
            max_steps: DEFAULT_MAX_STEPS,
            tracer: TracerConfig::default(),
        }
    }
}

impl ScriptConfig {
    /// Creates a configuration with the default markers and keywords.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the command separator.
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Builder method to set the container block markers.
    #[must_use]
    pub fn with_block_markers(mut self, open: char, close: char) -> Self {
        self.block_open = open;
        self.block_close = close;
        self
    }

    /// Builder method to set the parameter markers.
    #[must_use]
    pub fn with_param_markers(mut self, open: char, close: char) -> Self {
        self.param_open = open;
        self.param_close = close;
        self
    }

    /// Builder method to set the keyword table.
    #[must_use]
    pub fn with_keywords(mut self, keywords: KeywordTable) -> Self {
        self.keywords = keywords;
        self
    }

    /// Builder method to set the step limit.
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Builder method to set the tracer configuration.
    #[must_use]
    pub fn with_tracer(mut self, tracer: TracerConfig) -> Self {
        self.tracer = tracer;
        self
    }
}
