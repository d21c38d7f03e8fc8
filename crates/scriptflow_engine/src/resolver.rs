//! Control-flow resolution.
//!
//! A [`ScriptHandler`] turns container text or a batch file into a flat,
//! categorized command table. Resolution walks the split command list with a
//! cursor, one command at a time:
//!
//! 1. Commands with no keyword are logged and executed through the
//!    dispatcher and recorded as `COMMAND`.
//! 2. `if` increments the depth and is recorded as `IF_<depth>`.
//! 3. `else` is recorded as `ELSE_<depth>` at the current depth.
//! 4. `goto` is recorded as `GOTO` and moves the cursor to its label; the
//!    pass continues with the command after the label.
//! 5. `label` is recorded as `LABEL` and does nothing else.
//!
//! The `if` depth only ever grows during a pass, so `else` binds to the
//! deepest `if` seen so far rather than to its syntactic partner. A `goto`
//! without a matching label stops the pass; what was recorded up to that
//! point is kept.

use scriptflow_debug::Tracer;
use scriptflow_foundation::{
    CategorizedTable, Error, ErrorContext, Keyword, Result, SemanticLimit,
};
use scriptflow_language::{Lexer, Parser, Refine};

use crate::clause::Clause;
use crate::command::{split_commands, strip_container, unwrap_parameter};
use crate::condition::{CommandOutcome, ConditionResult, ConditionValidator};
use crate::config::ScriptConfig;
use crate::dispatch::CommandDispatcher;
use crate::jump::{jump_parameter, jump_target};
use crate::loader::{BatchLoader, FsLoader};

/// Category of a command with no keyword.
pub const COMMAND: &str = "COMMAND";
/// Category of a `goto` command.
pub const GOTO: &str = "GOTO";
/// Category of a `label` command.
pub const LABEL: &str = "LABEL";

/// Returns the category of an `if` at `depth`.
#[must_use]
pub fn if_category(depth: usize) -> String {
    format!("IF_{depth}")
}

/// Returns the category of an `else` at `depth`.
#[must_use]
pub fn else_category(depth: usize) -> String {
    format!("ELSE_{depth}")
}

// =============================================================================
// Resolution
// =============================================================================

/// The outcome of one resolution pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// The categorized command table, in visiting order.
    pub table: CategorizedTable,
    /// One record per classified `if`/`else`.
    pub clauses: Vec<Clause>,
    /// The error that stopped the pass, if any.
    pub halted: Option<Error>,
    /// Positions of the visited commands, in visiting order.
    pub visited: Vec<usize>,
}

impl Resolution {
    /// Returns true if the pass ran to the end of the command list.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.halted.is_none()
    }
}

// =============================================================================
// Pass State
// =============================================================================

/// Mutable state owned by a single pass.
#[derive(Default)]
struct Pass {
    if_depth: usize,
    table: CategorizedTable,
    clauses: Vec<Clause>,
    visited: Vec<usize>,
}

impl Pass {
    /// Appends an entry to the table and to the most recent clause.
    fn record(&mut self, category: &str, command: &str) {
        self.table.push(category, command);
        if let Some(clause) = self.clauses.last_mut() {
            clause.commands.push(category, command);
        }
    }

    /// Opens a clause for the `if`/`else` at `position`.
    fn open_clause(&mut self, position: usize, is_else: bool, command: &str) {
        let layer = self.if_depth;
        let parent_id = self
            .clauses
            .iter()
            .rev()
            .filter(|c| !c.is_else)
            .find(|c| if is_else { c.layer == layer } else { c.layer < layer })
            .map(|c| c.id);

        self.clauses.push(Clause {
            id: self.clauses.len(),
            parent_id,
            position,
            layer,
            is_else,
            nested: layer > 1,
            commands: CategorizedTable::new(),
            input: command.to_string(),
        });
    }

    fn finish(self, halted: Option<Error>) -> Resolution {
        Resolution {
            table: self.table,
            clauses: self.clauses,
            halted,
            visited: self.visited,
        }
    }
}

// =============================================================================
// Script Handler
// =============================================================================

/// Resolves container blocks and batch files.
///
/// Each call runs one independent pass; the `if` depth and the command table
/// start fresh every time.
pub struct ScriptHandler<D, L = FsLoader> {
    config: ScriptConfig,
    dispatcher: D,
    loader: L,
    tracer: Tracer,
    conditions: ConditionValidator,
    passes: u64,
}

impl<D: CommandDispatcher> ScriptHandler<D, FsLoader> {
    /// Creates a handler with the default configuration that loads batch
    /// files from disk.
    #[must_use]
    pub fn new(dispatcher: D) -> Self {
        Self::with_config(ScriptConfig::default(), dispatcher)
    }

    /// Creates a handler with the given configuration.
    #[must_use]
    pub fn with_config(config: ScriptConfig, dispatcher: D) -> Self {
        let tracer = Tracer::new(config.tracer.clone());
        Self {
            config,
            dispatcher,
            loader: FsLoader,
            tracer,
            conditions: ConditionValidator::new(),
            passes: 0,
        }
    }
}

impl<D: CommandDispatcher, L: BatchLoader> ScriptHandler<D, L> {
    /// Replaces the batch file loader.
    #[must_use]
    pub fn with_loader<L2: BatchLoader>(self, loader: L2) -> ScriptHandler<D, L2> {
        ScriptHandler {
            config: self.config,
            dispatcher: self.dispatcher,
            loader,
            tracer: self.tracer,
            conditions: self.conditions,
            passes: self.passes,
        }
    }

    /// Replaces the condition validator.
    #[must_use]
    pub fn with_conditions(mut self, conditions: ConditionValidator) -> Self {
        self.conditions = conditions;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ScriptConfig {
        &self.config
    }

    /// Returns the dispatcher.
    #[must_use]
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Returns the dispatcher mutably.
    pub fn dispatcher_mut(&mut self) -> &mut D {
        &mut self.dispatcher
    }

    /// Consumes the handler and returns its dispatcher.
    #[must_use]
    pub fn into_dispatcher(self) -> D {
        self.dispatcher
    }

    /// Returns the tracer.
    #[must_use]
    pub fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    /// Returns the tracer mutably.
    pub fn tracer_mut(&mut self) -> &mut Tracer {
        &mut self.tracer
    }

    /// Returns the condition validator.
    #[must_use]
    pub fn conditions(&self) -> &ConditionValidator {
        &self.conditions
    }

    /// Returns the number of passes run so far.
    #[must_use]
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Resolves inline container text after removing its outer block markers.
    pub fn command_container(&mut self, parameter: &str) -> Resolution {
        let text = strip_container(parameter, self.config.block_open, self.config.block_close);
        self.resolve(&text)
    }

    /// Loads the batch file named by `parameter` and resolves its text.
    ///
    /// The parameter may be wrapped in parameter markers, as in
    /// `(setup.bat)`.
    ///
    /// # Errors
    /// Returns [`ErrorKind::FileNotFound`](scriptflow_foundation::ErrorKind::FileNotFound)
    /// if the file cannot be read or is empty. The error is also sent to the
    /// dispatcher and no pass is run.
    pub fn batch_execute(&mut self, parameter: &str) -> Result<Resolution> {
        match self.load_batch(parameter) {
            Ok((path, text)) => Ok(self.run_pass(&text, Some(&path))),
            Err(err) => {
                self.tracer.batch_load_failed(parameter);
                self.dispatcher.report_error(&err);
                Err(err)
            }
        }
    }

    fn load_batch(&self, parameter: &str) -> Result<(String, String)> {
        let path = unwrap_parameter(parameter, self.config.param_open, self.config.param_close)?;
        let text = self.loader.load(&path)?;
        if text.trim().is_empty() {
            return Err(Error::file_not_found(path, "empty file"));
        }
        Ok((path, text))
    }

    /// Resolves raw command text.
    pub fn resolve(&mut self, text: &str) -> Resolution {
        self.run_pass(text, None)
    }

    /// Runs one pass. Errors from a named source carry it as context.
    fn run_pass(&mut self, text: &str, source: Option<&str>) -> Resolution {
        self.passes += 1;
        self.tracer.pass_start(self.passes, text.len());

        let commands = split_commands(text, self.config.separator);
        let mut pass = Pass::default();
        let halted = self.run(&commands, &mut pass).map(|err| match source {
            Some(source) => err.with_context(ErrorContext::new().with_source(source)),
            None => err,
        });

        if let Some(err) = &halted {
            self.dispatcher.report_error(err);
        }
        self.tracer.pass_end(pass.table.len(), halted.is_some());
        pass.finish(halted)
    }

    /// Walks the command list. Returns the error that stopped the walk.
    fn run(&mut self, commands: &[String], pass: &mut Pass) -> Option<Error> {
        let mut position = 0;

        while let Some(command) = commands.get(position) {
            if pass.visited.len() >= self.config.max_steps {
                return Some(Error::limit_exceeded(SemanticLimit::MaxSteps {
                    limit: self.config.max_steps,
                    command: Some(command.clone()),
                }));
            }
            pass.visited.push(position);

            match self.config.keywords.classify(command) {
                None => {
                    self.dispatcher.log(command);
                    self.dispatcher.execute(command);
                    self.tracer.plain_command(position, command);
                    pass.record(COMMAND, command);
                }
                Some(Keyword::If) => {
                    pass.if_depth += 1;
                    let category = if_category(pass.if_depth);
                    self.tracer.classified(position, &category);
                    pass.open_clause(position, false, command);
                    pass.record(&category, command);
                }
                Some(Keyword::Else) => {
                    let category = else_category(pass.if_depth);
                    self.tracer.classified(position, &category);
                    pass.open_clause(position, true, command);
                    pass.record(&category, command);
                }
                Some(Keyword::Goto) => {
                    self.tracer.classified(position, GOTO);
                    pass.record(GOTO, command);
                    match jump_target(commands, position, &self.config) {
                        Some(target) => {
                            let label = jump_parameter(
                                command,
                                self.config.param_open,
                                self.config.param_close,
                            )
                            .unwrap_or_default();
                            self.tracer.jump(position, target, label);
                            position = target;
                        }
                        None => {
                            self.tracer.jump_failed(position, command);
                            return Some(Error::unresolved_jump(command.clone(), position));
                        }
                    }
                }
                Some(Keyword::Label) => {
                    self.tracer.classified(position, LABEL);
                    pass.record(LABEL, command);
                }
            }

            position += 1;
        }

        None
    }

    /// Lexes, parses and refines block text into condition and branch
    /// entries, without resolving jumps or dispatching anything.
    pub fn parse_blocks(&mut self, text: &str) -> CategorizedTable {
        let tokens = Lexer::tokenize(text);
        let table = Parser::new(&tokens).parse().refine_semantic_structure();
        self.tracer.blocks_parsed(tokens.len(), table.len());
        table
    }

    /// Records the outcome of an executed command with the condition
    /// validator.
    pub fn observe(&mut self, outcome: &CommandOutcome) -> ConditionResult {
        let result = self.conditions.observe(outcome);
        if result != ConditionResult::NotApplicable {
            self.tracer
                .condition_recorded(&outcome.command, &result.to_string());
        }
        result
    }
}

// =============================================================================
// Tests
// =============================================================================
