//! The plugin command set: sorting and saving.
//!
//! Registered after the base set, so anything it declares under an existing
//! name would override that command.

use std::io::ErrorKind;

use crate::cmd::{ArgKind, ArgSpec, ArgValue, CommandSpec};
use crate::storage::NumberStore;

/// Build the plugin command set.
pub fn extra_commands() -> Vec<CommandSpec<NumberStore>> {
    vec![
        CommandSpec::new("sort", "sorts the collection ascending or descending")
            .arg(
                ArgSpec::new("mode", ArgKind::Str)
                    .default_value(ArgValue::Str("asc".to_string()))
                    .choices(["asc", "desc"]),
            )
            .action(|store: &mut NumberStore, values| {
                let mut sorted = store.values().to_vec();
                sorted.sort_unstable();
                if values[0].as_str() == "desc" {
                    sorted.reverse();
                }
                store.clear();
                store.extend(sorted);
                Ok(())
            }),
        CommandSpec::new("save", "saves the collection to a file in the given format")
            .arg(ArgSpec::new("path", ArgKind::Str).required())
            .arg(
                ArgSpec::new("format", ArgKind::Str)
                    .required()
                    .choices(["txt", "html"]),
            )
            .arg(ArgSpec::new("separator", ArgKind::Str).default_value(ArgValue::Str("\t".to_string())))
            .action(|store: &mut NumberStore, values| {
                let path = values[0].as_str();
                let body = store.join(values[2].as_str());
                let contents = match values[1].as_str() {
                    "html" => render_html(&body),
                    _ => body,
                };
                match std::fs::write(path, contents) {
                    Ok(()) => Ok(()),
                    Err(err) if err.kind() == ErrorKind::NotFound => {
                        println!("Missing file or directory: {path}");
                        Ok(())
                    }
                    Err(err) => Err(err.into()),
                }
            }),
    ]
}

fn render_html(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Saved data</title>
</head>
<body>
    <div>{body}</div>
</body>
</html>
"#
    )
}
