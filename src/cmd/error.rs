//! Error types for the command engine.
//!
//! Validation and lookup failures are ordinary values the caller turns into
//! user-facing messages; `Unexpected` is the channel for handler faults,
//! whose detail goes to the log rather than the terminal.

use thiserror::Error;

/// Errors from parsing, validating, or dispatching one command line.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("missing required argument '{name}'")]
    MissingRequiredArgument { name: String },

    #[error("argument '{name}' must be one of: {}", .choices.join(", "))]
    InvalidChoice { name: String, choices: Vec<String> },

    #[error("cannot convert \"{raw}\" to {target}")]
    ConversionFailed { raw: String, target: &'static str },

    #[error("got {given} arguments, expected at most {expected}")]
    TooManyArguments { given: usize, expected: usize },

    #[error("no such command: {name}")]
    NoSuchCommand { name: String },

    /// Anything a handler raised. The user sees only this generic notice;
    /// the full chain is recorded by the diagnostic sink.
    #[error("an unexpected error occurred, see the log file for details")]
    Unexpected(#[source] anyhow::Error),
}

pub type CommandResult<T> = Result<T, CommandError>;

/// A failure while running a batch script. Aborts the remaining lines.
#[derive(Error, Debug)]
#[error("script failed at line {line}: \"{text}\"")]
pub struct ScriptError {
    /// 1-based line number of the offending command.
    pub line: usize,
    /// The raw text of that line.
    pub text: String,
    #[source]
    pub source: CommandError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_choice_message_lists_choices() {
        let err = CommandError::InvalidChoice {
            name: "mode".to_string(),
            choices: vec!["asc".to_string(), "desc".to_string()],
        };
        assert_eq!(err.to_string(), "argument 'mode' must be one of: asc, desc");
    }

    #[test]
    fn test_unexpected_hides_detail_from_display() {
        let err = CommandError::Unexpected(anyhow::anyhow!("index 42 out of range"));
        assert!(!err.to_string().contains("42"));
    }

    #[test]
    fn test_script_error_reports_line_and_text() {
        let err = ScriptError {
            line: 2,
            text: "add nope".to_string(),
            source: CommandError::ConversionFailed {
                raw: "nope".to_string(),
                target: "integer",
            },
        };
        assert_eq!(err.to_string(), "script failed at line 2: \"add nope\"");
    }
}
