//! The command registry.
//!
//! One registry instance holds every addressable command: the built-ins
//! (`exit`, `help`), the base command set, and any plugin sets, merged in
//! load order at startup. Registration of an already-present name silently
//! replaces the earlier spec while keeping its listing position; that is the
//! plugin override mechanism, not a conflict.

use indexmap::IndexMap;

use crate::cmd::command::{CommandSpec, Handler};

/// Insertion-ordered mapping from lowercase command name to spec.
pub struct CommandRegistry<S> {
    commands: IndexMap<String, CommandSpec<S>>,
}

impl<S> CommandRegistry<S> {
    /// Create a registry seeded with the `exit` and `help` built-ins.
    pub fn new() -> Self {
        let mut registry = Self {
            commands: IndexMap::new(),
        };
        registry.register(
            CommandSpec::new("exit", "terminates the program").handler(Handler::Exit),
        );
        registry.register(
            CommandSpec::new("help", "lists the supported commands").handler(Handler::Help),
        );
        registry
    }

    /// Insert or overwrite the entry for `spec.name()`.
    ///
    /// Overwriting keeps the original listing position; lookups always
    /// resolve to the latest registration.
    pub fn register(&mut self, spec: CommandSpec<S>) {
        self.commands.insert(spec.name().to_lowercase(), spec);
    }

    /// Merge a whole command-set batch, in order.
    pub fn register_all(&mut self, specs: impl IntoIterator<Item = CommandSpec<S>>) {
        for spec in specs {
            self.register(spec);
        }
    }

    /// Look up a command, matching the name case-insensitively.
    pub fn lookup(&self, name: &str) -> Option<&CommandSpec<S>> {
        self.commands.get(&name.to_lowercase())
    }

    /// `(name, description)` pairs in registration order, with the
    /// description fallback applied. Drives the `help` built-in.
    pub fn listing(&self) -> impl Iterator<Item = (&str, &str)> {
        self.commands
            .values()
            .map(|spec| (spec.name(), spec.description()))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<S> Default for CommandRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}
