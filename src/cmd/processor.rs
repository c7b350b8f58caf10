//! The read-parse-validate-execute loop.
//!
//! A [`CommandProcessor`] owns a read-only [`CommandRegistry`] and drives it
//! in one of two modes: an interactive prompt loop that survives every
//! command error, or a batch script runner that aborts on the first one.
//! Domain state is passed in by the caller and reaches handlers by reference;
//! the processor itself keeps nothing but display configuration.

use std::io::{self, BufRead, Write};

use tracing::error;

use crate::cmd::command::Handler;
use crate::cmd::error::{CommandError, CommandResult, ScriptError};
use crate::cmd::registry::CommandRegistry;

/// Whether the driving loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Dispatches input lines against a registry.
pub struct CommandProcessor<S> {
    registry: CommandRegistry<S>,
    prompt: String,
    banner: String,
}

impl<S> CommandProcessor<S> {
    pub fn new(registry: CommandRegistry<S>) -> Self {
        Self {
            registry,
            prompt: "> ".to_string(),
            banner: "Type help to list the supported commands.".to_string(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = banner.into();
        self
    }

    pub fn registry(&self) -> &CommandRegistry<S> {
        &self.registry
    }

    /// Tokenize and execute one input line.
    ///
    /// The line is trimmed and split on whitespace runs; the first token,
    /// lowercased, names the command and the rest are its raw positional
    /// arguments. A blank line is a no-op tick. Escape substitution is the
    /// argument layer's concern, so tokens pass through unmodified.
    pub fn execute(&self, state: &mut S, line: &str) -> CommandResult<Flow> {
        let mut tokens = line.split_whitespace();
        let Some(first) = tokens.next() else {
            return Ok(Flow::Continue);
        };
        let name = first.to_lowercase();
        let raw_args: Vec<&str> = tokens.collect();

        let spec = self
            .registry
            .lookup(&name)
            .ok_or(CommandError::NoSuchCommand { name })?;

        match spec.kind() {
            Handler::Exit => {
                spec.validate(&raw_args)?;
                Ok(Flow::Exit)
            }
            Handler::Help => {
                spec.validate(&raw_args)?;
                self.print_help();
                Ok(Flow::Continue)
            }
            Handler::Action(_) => {
                spec.invoke(state, &raw_args)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn print_help(&self) {
        println!("Supported commands:");
        for (name, description) in self.registry.listing() {
            println!("\t{name} - {description}");
        }
    }

    /// Run the interactive loop until `exit` or end-of-input.
    ///
    /// Every command error is printed and the loop continues; only the
    /// detail of unexpected handler failures is diverted to the log.
    pub fn run_interactive(&self, state: &mut S, mut input: impl BufRead) -> io::Result<()> {
        println!("{}", self.banner);
        let mut stdout = io::stdout();
        loop {
            write!(stdout, "{}", self.prompt)?;
            stdout.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(());
            }
            match self.execute(state, &line) {
                Ok(Flow::Exit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(err) => {
                    if let CommandError::Unexpected(detail) = &err {
                        error!("command failed: {detail:#}");
                    }
                    println!("{err}");
                }
            }
        }
    }

    /// Execute a whole script, one command per line, in order.
    ///
    /// Any error aborts the remaining lines with a [`ScriptError`] naming
    /// the 1-based line number; an `exit` line ends the run successfully.
    pub fn run_script(&self, state: &mut S, text: &str) -> Result<(), ScriptError> {
        for (index, raw_line) in text.lines().enumerate() {
            match self.execute(state, raw_line) {
                Ok(Flow::Exit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(source) => {
                    error!(
                        line = index + 1,
                        command = raw_line,
                        "script aborted: {source:?}"
                    );
                    return Err(ScriptError {
                        line: index + 1,
                        text: raw_line.to_string(),
                        source,
                    });
                }
            }
        }
        Ok(())
    }
}
