//! Positional argument specifications.
//!
//! An [`ArgSpec`] describes one positional parameter of a command: its
//! conversion target, an optional default, whether it is required, and an
//! optional set of allowed raw values. Validation is a pure function from a
//! raw token to a typed value (or "unset" for omitted optionals).

use crate::cmd::error::{CommandError, CommandResult};

/// Escape sequences substituted into a token before type conversion.
///
/// Each rule is applied exactly once, in table order, replacing every
/// occurrence left to right. `\\` runs last so its output cannot re-trigger
/// the whitespace rules.
const ESCAPE_TABLE: [(&str, &str); 3] = [(r"\s", " "), (r"\t", "\t"), (r"\\", "\\")];

/// Conversion target of an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    Int,
    Str,
}

impl ArgKind {
    /// Human-readable name used in conversion diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ArgKind::Int => "integer",
            ArgKind::Str => "string",
        }
    }
}

/// A typed argument value produced by validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Int(i64),
    Str(String),
}

impl ArgValue {
    /// The integer payload. Panics if the value is not an `Int`; handlers
    /// only see values already converted per their declared [`ArgKind`].
    pub fn as_int(&self) -> i64 {
        match self {
            ArgValue::Int(n) => *n,
            ArgValue::Str(s) => panic!("argument value is a string, not an integer: {s:?}"),
        }
    }

    /// The string payload. Panics if the value is not a `Str`.
    pub fn as_str(&self) -> &str {
        match self {
            ArgValue::Str(s) => s,
            ArgValue::Int(n) => panic!("argument value is an integer, not a string: {n}"),
        }
    }
}

/// Validation and conversion rules for one positional argument.
#[derive(Debug, Clone)]
pub struct ArgSpec {
    name: String,
    kind: ArgKind,
    default: Option<ArgValue>,
    required: bool,
    choices: Vec<String>,
}

impl ArgSpec {
    /// Create an optional argument converting to `kind`.
    pub fn new(name: impl Into<String>, kind: ArgKind) -> Self {
        Self {
            name: name.into(),
            kind,
            default: None,
            required: false,
            choices: Vec::new(),
        }
    }

    /// Mark the argument as required: an empty token with no default fails.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Value adopted when the token is empty. Skips choice checking and
    /// conversion entirely.
    pub fn default_value(mut self, value: ArgValue) -> Self {
        self.default = Some(value);
        self
    }

    /// Restrict the *raw* token to a fixed set of values, checked before
    /// escape substitution and conversion.
    pub fn choices<I, T>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }

    /// Argument name, used only in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validate and convert one raw token.
    ///
    /// Returns `Ok(None)` when the argument stays unset (empty token,
    /// not required, no default). Rule precedence:
    /// 1. empty + default -> the default, untouched by choices/conversion
    /// 2. empty + required -> [`CommandError::MissingRequiredArgument`]
    /// 3. token outside a non-empty choice set -> [`CommandError::InvalidChoice`]
    /// 4. empty otherwise -> unset
    /// 5. escape substitution, then conversion per [`ArgKind`]
    pub fn validate_and_convert(&self, raw: &str) -> CommandResult<Option<ArgValue>> {
        if raw.is_empty() {
            if let Some(default) = &self.default {
                return Ok(Some(default.clone()));
            }
            if self.required {
                return Err(CommandError::MissingRequiredArgument {
                    name: self.name.clone(),
                });
            }
        }
        if !self.choices.is_empty() && !self.choices.iter().any(|c| c == raw) {
            return Err(CommandError::InvalidChoice {
                name: self.name.clone(),
                choices: self.choices.clone(),
            });
        }
        if raw.is_empty() {
            return Ok(None);
        }

        let unescaped = replace_escaped(raw);
        let value = match self.kind {
            ArgKind::Int => unescaped
                .parse::<i64>()
                .map(ArgValue::Int)
                .map_err(|_| CommandError::ConversionFailed {
                    raw: raw.to_string(),
                    target: self.kind.name(),
                })?,
            ArgKind::Str => ArgValue::Str(unescaped),
        };
        Ok(Some(value))
    }
}

/// Apply the escape table to a raw token.
fn replace_escaped(raw: &str) -> String {
    let mut data = raw.to_string();
    for (old, new) in ESCAPE_TABLE {
        data = data.replace(old, new);
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_with_default_adopts_default() {
        let spec = ArgSpec::new("separator", ArgKind::Str)
            .default_value(ArgValue::Str("\t".to_string()));
        let value = spec.validate_and_convert("").unwrap();
        assert_eq!(value, Some(ArgValue::Str("\t".to_string())));
    }

    #[test]
    fn test_default_wins_over_choices_on_empty() {
        // The default bypasses the choice check even when it is not a member.
        let spec = ArgSpec::new("mode", ArgKind::Str)
            .default_value(ArgValue::Str("none".to_string()))
            .choices(["asc", "desc"]);
        let value = spec.validate_and_convert("").unwrap();
        assert_eq!(value, Some(ArgValue::Str("none".to_string())));
    }

    #[test]
    fn test_empty_required_without_default_fails() {
        let spec = ArgSpec::new("value", ArgKind::Int).required();
        let err = spec.validate_and_convert("").unwrap_err();
        assert!(matches!(
            err,
            CommandError::MissingRequiredArgument { name } if name == "value"
        ));
    }

    #[test]
    fn test_choice_miss_fails_even_when_convertible() {
        let spec = ArgSpec::new("mode", ArgKind::Str).choices(["asc", "desc"]);
        let err = spec.validate_and_convert("up").unwrap_err();
        assert!(matches!(err, CommandError::InvalidChoice { .. }));
    }

    #[test]
    fn test_choices_checked_against_raw_token() {
        // Membership is tested before escape substitution.
        let spec = ArgSpec::new("sep", ArgKind::Str).choices([r"\t"]);
        let value = spec.validate_and_convert(r"\t").unwrap();
        assert_eq!(value, Some(ArgValue::Str("\t".to_string())));
    }

    #[test]
    fn test_empty_optional_stays_unset() {
        let spec = ArgSpec::new("stop_index", ArgKind::Int);
        assert_eq!(spec.validate_and_convert("").unwrap(), None);
    }

    #[test]
    fn test_integer_conversion() {
        let spec = ArgSpec::new("value", ArgKind::Int).required();
        assert_eq!(
            spec.validate_and_convert("5").unwrap(),
            Some(ArgValue::Int(5))
        );
        assert_eq!(
            spec.validate_and_convert("-17").unwrap(),
            Some(ArgValue::Int(-17))
        );
    }

    #[test]
    fn test_conversion_failure_names_raw_and_target() {
        let spec = ArgSpec::new("value", ArgKind::Int).required();
        let err = spec.validate_and_convert("five").unwrap_err();
        match err {
            CommandError::ConversionFailed { raw, target } => {
                assert_eq!(raw, "five");
                assert_eq!(target, "integer");
            }
            other => panic!("expected ConversionFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_escape_table_substitutions() {
        assert_eq!(replace_escaped(r"a\sb"), "a b");
        assert_eq!(replace_escaped(r"a\tb"), "a\tb");
        assert_eq!(replace_escaped(r"a\\b"), r"a\b");
    }

    #[test]
    fn test_escape_applied_once_per_occurrence() {
        // A doubled backslash collapses once and the result is not rescanned.
        assert_eq!(replace_escaped(r"\\\\"), r"\\");
    }

    #[test]
    fn test_escaped_tab_converts_to_literal_tab() {
        let spec = ArgSpec::new("separator", ArgKind::Str);
        let value = spec.validate_and_convert(r"\t").unwrap();
        assert_eq!(value, Some(ArgValue::Str("\t".to_string())));
    }
}
