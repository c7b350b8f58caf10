//! The base command set for the number collection.

use std::path::Path;

use anyhow::anyhow;
use tracing::error;

use crate::cmd::{ArgKind, ArgSpec, ArgValue, CommandSpec};
use crate::storage::NumberStore;

fn tab_default() -> ArgValue {
    ArgValue::Str("\t".to_string())
}

/// Convert a user-supplied index to a position, rejecting negatives.
fn index_from(value: i64) -> anyhow::Result<usize> {
    usize::try_from(value).map_err(|_| anyhow!("index {value} out of range"))
}

/// Build the base command set.
///
/// Registered right after the built-ins; plugin sets load later and may
/// override any of these by name.
pub fn basic_commands() -> Vec<CommandSpec<NumberStore>> {
    vec![
        CommandSpec::new("list", "prints the collection joined by the given separator")
            .arg(ArgSpec::new("separator", ArgKind::Str).default_value(tab_default()))
            .action(|store: &mut NumberStore, values| {
                println!("{}", store.join(values[0].as_str()));
                Ok(())
            }),
        CommandSpec::new("clear", "removes everything from the collection")
            .action(|store: &mut NumberStore, _| {
                store.clear();
                Ok(())
            }),
        CommandSpec::new("add", "appends a value to the collection")
            .arg(ArgSpec::new("value", ArgKind::Int).required())
            .action(|store: &mut NumberStore, values| {
                store.push(values[0].as_int());
                Ok(())
            }),
        CommandSpec::new("del", "removes the value at an index, or every value in a range")
            .arg(ArgSpec::new("start_index", ArgKind::Int).required())
            .arg(ArgSpec::new("stop_index", ArgKind::Int))
            .action(|store: &mut NumberStore, values| {
                let start = index_from(values[0].as_int())?;
                match values.get(1) {
                    Some(stop) => {
                        store.remove_range(start, index_from(stop.as_int())?);
                    }
                    None => {
                        store
                            .remove(start)
                            .ok_or_else(|| anyhow!("index {start} out of range"))?;
                    }
                }
                Ok(())
            }),
        CommandSpec::new("find", "searches the collection for a value")
            .arg(ArgSpec::new("value", ArgKind::Int).required())
            .action(|store: &mut NumberStore, values| {
                let value = values[0].as_int();
                match store.position(value) {
                    Some(index) => println!("Value {value} found at position {index}"),
                    None => println!("Value {value} not found"),
                }
                Ok(())
            }),
        // Inserts rather than overwrites, matching the long-standing behavior
        // of the command despite its name.
        CommandSpec::new("set", "inserts a value at the given position")
            .arg(ArgSpec::new("index", ArgKind::Int).required())
            .arg(ArgSpec::new("value", ArgKind::Int).required())
            .action(|store: &mut NumberStore, values| {
                let index = index_from(values[0].as_int())?;
                store.insert(index, values[1].as_int());
                Ok(())
            }),
        CommandSpec::new("get", "reads the value at the given position")
            .arg(ArgSpec::new("index", ArgKind::Int).required())
            .action(|store: &mut NumberStore, values| {
                let index = values[0].as_int();
                match usize::try_from(index).ok().and_then(|i| store.get(i)) {
                    Some(value) => println!("Position {index} holds the value {value}"),
                    None => println!("No value has been added at index {index} yet"),
                }
                Ok(())
            }),
        CommandSpec::new("unique", "removes duplicates from the collection")
            .action(|store: &mut NumberStore, _| {
                store.dedup();
                Ok(())
            }),
        CommandSpec::new("load", "loads a collection from a text file")
            .arg(ArgSpec::new("path", ArgKind::Str).required())
            .arg(ArgSpec::new("separator", ArgKind::Str).default_value(tab_default()))
            .action(|store: &mut NumberStore, values| {
                load(store, values[0].as_str(), values[1].as_str());
                Ok(())
            }),
        CommandSpec::new("count", "prints how many values the collection holds")
            .action(|store: &mut NumberStore, _| {
                println!("{}", store.len());
                Ok(())
            }),
    ]
}

/// Read `path` and extend the store with its separator-delimited values.
///
/// Every failure here is a user-facing message rather than an error: a bad
/// path or unparsable contents should not abort a script that merely probes
/// for an optional file.
fn load(store: &mut NumberStore, path: &str, separator: &str) {
    if !Path::new(path).exists() {
        println!("No such file exists");
        return;
    }
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            error!("failed to read {path}: {err}");
            println!("An error occurred while loading the file");
            return;
        }
    };

    let parsed: Result<Vec<i64>, _> = contents
        .split(separator)
        .map(|piece| piece.trim().parse::<i64>())
        .collect();
    match parsed {
        Ok(numbers) => store.extend(numbers),
        Err(_) => {
            println!("Wrong separator, or the file contains more than just numbers");
        }
    }
}
