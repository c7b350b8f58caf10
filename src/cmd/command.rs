//! Command specifications and the handler contract.
//!
//! A [`CommandSpec`] binds a name, a description, an ordered sequence of
//! [`ArgSpec`]s, and a handler. Command sets are built as plain batches of
//! specs (see `crate::commands`) and merged into a registry at startup.

use crate::cmd::arg::{ArgSpec, ArgValue};
use crate::cmd::error::{CommandError, CommandResult};

/// What runs once a command's arguments validate.
///
/// `Help` and `Exit` are interpreted by the processor: `help` needs the
/// registry listing and `exit` controls the loop, neither of which an
/// ordinary handler can reach. Everything else is an `Action` taking the
/// shared state and the typed values of every set argument, in declared
/// order (unset optionals are omitted, not passed as placeholders).
pub enum Handler<S> {
    Action(Box<dyn Fn(&mut S, &[ArgValue]) -> anyhow::Result<()>>),
    Help,
    Exit,
}

/// A named, described, handler-bound sequence of positional arguments.
pub struct CommandSpec<S> {
    name: String,
    description: String,
    args: Vec<ArgSpec>,
    handler: Handler<S>,
}

impl<S> CommandSpec<S> {
    /// Start building a command. Finish with [`CommandSpec::action`] or by
    /// attaching a built-in handler via [`CommandSpec::handler`].
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            args: Vec::new(),
            handler: Handler::Action(Box::new(|_, _| Ok(()))),
        }
    }

    /// Append one positional argument. Declaration order is the contract.
    pub fn arg(mut self, arg: ArgSpec) -> Self {
        self.args.push(arg);
        self
    }

    /// Attach the domain handler.
    pub fn action(mut self, f: impl Fn(&mut S, &[ArgValue]) -> anyhow::Result<()> + 'static) -> Self {
        self.handler = Handler::Action(Box::new(f));
        self
    }

    /// Attach a built-in handler variant.
    pub fn handler(mut self, handler: Handler<S>) -> Self {
        self.handler = handler;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Description, or the placeholder when none was supplied.
    pub fn description(&self) -> &str {
        if self.description.is_empty() {
            "description unavailable"
        } else {
            &self.description
        }
    }

    pub(crate) fn kind(&self) -> &Handler<S> {
        &self.handler
    }

    /// Validate a whole raw argument list against the declared arguments.
    ///
    /// Excess raw arguments are rejected before any per-argument validation;
    /// missing trailing positions are treated as empty tokens so defaults and
    /// optional arguments apply. The first per-argument failure aborts the
    /// invocation and discards any values already produced.
    pub fn validate(&self, raw_args: &[&str]) -> CommandResult<Vec<ArgValue>> {
        if raw_args.len() > self.args.len() {
            return Err(CommandError::TooManyArguments {
                given: raw_args.len(),
                expected: self.args.len(),
            });
        }

        let mut values = Vec::with_capacity(self.args.len());
        for (position, arg) in self.args.iter().enumerate() {
            let raw = raw_args.get(position).copied().unwrap_or("");
            if let Some(value) = arg.validate_and_convert(raw)? {
                values.push(value);
            }
        }
        Ok(values)
    }

    /// Validate, then run the domain handler with the typed values.
    ///
    /// Handler failures surface as [`CommandError::Unexpected`]; built-in
    /// handlers do nothing here (the processor interprets them).
    pub fn invoke(&self, state: &mut S, raw_args: &[&str]) -> CommandResult<()> {
        let values = self.validate(raw_args)?;
        if let Handler::Action(action) = &self.handler {
            action(state, &values).map_err(CommandError::Unexpected)?;
        }
        Ok(())
    }
}

impl<S> std::fmt::Debug for CommandSpec<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}
