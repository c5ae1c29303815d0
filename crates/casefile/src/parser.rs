// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Casefile parsing and validation.
//!
//! A casefile is a YAML mapping. The keys `args`, `stdout` and `stderr` are
//! reserved; every other key names a virtual file:
//!
//! ```yaml
//! args: [input/a.txt]
//! input/a.txt: |
//!   hello
//! stdout: |
//!   hello
//! ```

use crate::error::SchemaError;
use crate::model::{Casefile, FixtureFile};
use serde_yaml::{Mapping, Value};

/// Keys that never name a fixture file
pub const RESERVED_KEYS: [&str; 3] = ["args", "stdout", "stderr"];

/// Which expected channels a document declared, regardless of their values
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct DeclaredChannels {
    pub stdout: bool,
    pub stderr: bool,
}

/// Replace CRLF line endings with LF.
pub fn normalize_line_endings(source: &str) -> String {
    source.replace("\r\n", "\n")
}

/// Parse and validate a casefile document.
pub fn parse(source: &str) -> Result<Casefile, SchemaError> {
    parse_with_channels(source).map(|(casefile, _)| casefile)
}

/// Parse a casefile, also reporting which channel keys were present.
///
/// Key presence is lost in [`Casefile`] (an empty `stdout` and an absent
/// one can both render as empty output), so it travels separately.
pub(crate) fn parse_with_channels(
    source: &str,
) -> Result<(Casefile, DeclaredChannels), SchemaError> {
    let mapping = parse_mapping(source)?;

    let args = parse_args(&mapping)?;

    let declared = DeclaredChannels {
        stdout: mapping.contains_key("stdout"),
        stderr: mapping.contains_key("stderr"),
    };
    if !declared.stdout && !declared.stderr {
        return Err(SchemaError::MissingExpectedOutput);
    }

    let expected_stdout = match mapping.get("stdout") {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => return Err(SchemaError::StdoutNotString),
    };
    let expected_stderr = match mapping.get("stderr") {
        None => None,
        Some(Value::String(s)) => Some(strip_trailing_newline(s)),
        Some(_) => return Err(SchemaError::StderrNotString),
    };

    let files = parse_files(&mapping)?;
    if files.is_empty() {
        return Err(SchemaError::NoFixtureFiles);
    }

    Ok((
        Casefile::new(args, files, expected_stdout, expected_stderr),
        declared,
    ))
}

fn parse_mapping(source: &str) -> Result<Mapping, SchemaError> {
    let normalized = normalize_line_endings(source);
    match serde_yaml::from_str::<Value>(&normalized).map_err(SchemaError::Yaml)? {
        Value::Mapping(mapping) => Ok(mapping),
        _ => Err(SchemaError::NotAMapping),
    }
}

fn parse_args(mapping: &Mapping) -> Result<Vec<String>, SchemaError> {
    let Some(Value::Sequence(items)) = mapping.get("args") else {
        return Err(SchemaError::MissingArgs);
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(arg) => Ok(arg.clone()),
            _ => Err(SchemaError::ArgNotString { index }),
        })
        .collect()
}

fn parse_files(mapping: &Mapping) -> Result<Vec<FixtureFile>, SchemaError> {
    let mut files = Vec::new();
    for (key, value) in mapping {
        let Some(path) = scalar_key(key) else {
            return Err(SchemaError::NonScalarKey {
                key: describe_key(key),
            });
        };
        if matches!(key, Value::String(_)) && RESERVED_KEYS.contains(&path.as_str()) {
            continue;
        }
        if path.trim().is_empty() {
            return Err(SchemaError::EmptyFileKey);
        }
        let Value::String(content) = value else {
            return Err(SchemaError::FileNotString { path });
        };
        files.push(FixtureFile::new(path, content.clone()));
    }
    Ok(files)
}

/// Scalar keys name files by their string form (`7: x` is file `7`).
fn scalar_key(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        _ => None,
    }
}

/// Drop exactly one trailing `\n`, the residue of a `|` block scalar.
fn strip_trailing_newline(s: &str) -> String {
    s.strip_suffix('\n').unwrap_or(s).to_string()
}

fn describe_key(key: &Value) -> String {
    match serde_yaml::to_string(key) {
        Ok(rendered) => format!("`{}`", rendered.trim_end()),
        Err(_) => "(unprintable)".to_string(),
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
