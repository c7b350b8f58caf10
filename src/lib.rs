pub mod cmd;
pub mod commands;
pub mod config;
pub mod logging;
pub mod storage;

pub use cmd::{
    ArgKind, ArgSpec, ArgValue, CommandError, CommandProcessor, CommandRegistry, CommandSpec,
    Flow, Handler, ScriptError,
};
pub use commands::{basic_commands, extra_commands};
pub use config::Settings;
pub use storage::NumberStore;
