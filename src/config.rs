//! Configuration for the interpreter shell.
//!
//! Layered settings with three sources, later ones winning:
//! - Default values
//! - `numshell.toml` in the current directory
//! - Environment variable overrides
//!
//! # Environment Variables
//!
//! Variables must be prefixed with `NUMSHELL_` and use double underscores to
//! separate nested levels:
//! - `NUMSHELL_PROMPT=">> "` sets `prompt`
//! - `NUMSHELL_LOGGING__DEFAULT=debug` sets `logging.default`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

pub const CONFIG_FILE: &str = "numshell.toml";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Prompt printed before each interactive read.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Banner printed once when the interactive loop starts.
    #[serde(default = "default_banner")]
    pub banner: String,

    /// File the diagnostic sink appends to.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Default level filter (error, warn, info, debug, trace).
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-module level overrides, e.g. `processor = "debug"`.
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_banner() -> String {
    "Welcome to the integer collection manager.\nType help to list the supported commands."
        .to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("log.txt")
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            banner: default_banner(),
            log_file: default_log_file(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources.
    pub fn load() -> Result<Self, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed("NUMSHELL_").map(|key| {
                key.as_str()
                    .to_lowercase()
                    .replace("__", ".") // Double underscore becomes dot
                    .into()
            }))
            .extract()
            .map_err(Box::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.prompt, "> ");
        assert_eq!(settings.log_file, PathBuf::from("log.txt"));
        assert_eq!(settings.logging.default, "warn");
    }

    #[test]
    fn test_toml_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                    prompt = ">> "

                    [logging]
                    default = "debug"
                "#,
            )?;
            let settings = Settings::load().expect("settings should load");
            assert_eq!(settings.prompt, ">> ");
            assert_eq!(settings.logging.default, "debug");
            // Untouched fields keep their defaults.
            assert_eq!(settings.log_file, PathBuf::from("log.txt"));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_toml() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE, r#"prompt = ">> ""#)?;
            jail.set_env("NUMSHELL_PROMPT", "$ ");
            jail.set_env("NUMSHELL_LOGGING__DEFAULT", "trace");
            let settings = Settings::load().expect("settings should load");
            assert_eq!(settings.prompt, "$ ");
            assert_eq!(settings.logging.default, "trace");
            Ok(())
        });
    }
}
