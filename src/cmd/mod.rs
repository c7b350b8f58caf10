//! The generic command engine.
//!
//! Everything needed to define, register, and dispatch line-oriented
//! commands: argument specifications ([`ArgSpec`]), command bindings
//! ([`CommandSpec`]), the merged registry ([`CommandRegistry`]), and the
//! interactive/batch driver ([`CommandProcessor`]). Domain commands live
//! elsewhere and plug in through [`CommandRegistry::register_all`].

pub mod arg;
pub mod command;
pub mod error;
pub mod processor;
pub mod registry;

pub use arg::{ArgKind, ArgSpec, ArgValue};
pub use command::{CommandSpec, Handler};
pub use error::{CommandError, CommandResult, ScriptError};
pub use processor::{CommandProcessor, Flow};
pub use registry::CommandRegistry;
