//! numshell entry point.
//!
//! With no arguments, starts an interactive session; with a path argument,
//! runs that file as a batch script where the first failing line aborts the
//! run with a non-zero status.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use numshell::{
    CommandProcessor, CommandRegistry, NumberStore, Settings, basic_commands, extra_commands,
    logging,
};

#[derive(Parser)]
#[command(name = "numshell")]
#[command(about = "A line-oriented command interpreter managing a collection of integers")]
#[command(version)]
struct Cli {
    /// Script file to execute; starts an interactive session when omitted
    script: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Error: failed to load configuration: {err}");
            return ExitCode::from(1);
        }
    };
    if let Err(err) = logging::init_with_config(&settings.log_file, &settings.logging) {
        eprintln!(
            "Error: cannot open log file {}: {err}",
            settings.log_file.display()
        );
        return ExitCode::from(1);
    }

    // Load order is the override order: built-ins, base set, plugin sets.
    let mut registry = CommandRegistry::new();
    registry.register_all(basic_commands());
    registry.register_all(extra_commands());

    let processor = CommandProcessor::new(registry)
        .with_prompt(settings.prompt)
        .with_banner(settings.banner);
    let mut store = NumberStore::new();

    match cli.script {
        Some(path) => run_script_file(&processor, &mut store, &path),
        None => match processor.run_interactive(&mut store, io::stdin().lock()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("Error: {err}");
                ExitCode::from(1)
            }
        },
    }
}

fn run_script_file(
    processor: &CommandProcessor<NumberStore>,
    store: &mut NumberStore,
    path: &Path,
) -> ExitCode {
    if !path.exists() {
        eprintln!("Cannot find the script file, check the path: {}", path.display());
        return ExitCode::from(1);
    }
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("Error: cannot read {}: {err}", path.display());
            return ExitCode::from(1);
        }
    };
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(_) => {
            eprintln!("Convert the script to UTF-8; other encodings are not supported.");
            return ExitCode::from(1);
        }
    };

    match processor.run_script(store, &text) {
        Ok(()) => {
            println!("Script finished successfully");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!(
                "An error occurred while running the script:\nLine {}, command \"{}\"",
                err.line, err.text
            );
            println!("{}", err.source);
            ExitCode::from(1)
        }
    }
}
