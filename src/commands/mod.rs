//! Domain command sets for the number collection.
//!
//! Each set is a plain batch builder returning `Vec<CommandSpec>`; the entry
//! point merges them into one registry in load order (built-ins, base set,
//! then plugins).

pub mod basic;
pub mod extra;

pub use basic::basic_commands;
pub use extra::extra_commands;
