// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Casefile serialization.

use crate::error::{CasefileError, SchemaError};
use crate::model::{Casefile, FixtureFile};
use crate::parser::RESERVED_KEYS;
use serde_yaml::{Mapping, Value};

/// An unvalidated casefile document, ready to be written out.
///
/// `stdout`/`stderr` are emitted only when `Some`, so an empty string and an
/// absent channel stay distinguishable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CasefileDocument {
    pub args: Vec<String>,
    pub files: Vec<FixtureFile>,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
}

impl From<&Casefile> for CasefileDocument {
    /// Rebuild a document that parses back into an equal casefile.
    ///
    /// Parsing strips one trailing newline from stderr, so it is restored here.
    fn from(casefile: &Casefile) -> Self {
        Self {
            args: casefile.args().to_vec(),
            files: casefile.files().to_vec(),
            stdout: casefile.expected_stdout().map(str::to_string),
            stderr: casefile.expected_stderr().map(|s| format!("{s}\n")),
        }
    }
}

/// Serialize a document as YAML.
///
/// Keys are emitted as `args`, the files in order, then `stdout` and `stderr`.
pub fn render(document: &CasefileDocument) -> Result<String, CasefileError> {
    let mut mapping = Mapping::new();
    mapping.insert(
        Value::String("args".to_string()),
        Value::Sequence(
            document
                .args
                .iter()
                .map(|arg| Value::String(arg.clone()))
                .collect(),
        ),
    );

    for file in &document.files {
        if RESERVED_KEYS.contains(&file.path.as_str()) {
            return Err(SchemaError::ReservedFileKey {
                path: file.path.clone(),
            }
            .into());
        }
        let previous = mapping.insert(
            Value::String(file.path.clone()),
            Value::String(file.content.clone()),
        );
        if previous.is_some() {
            return Err(SchemaError::DuplicateFileKey {
                path: file.path.clone(),
            }
            .into());
        }
    }

    if let Some(stdout) = &document.stdout {
        mapping.insert(
            Value::String("stdout".to_string()),
            Value::String(stdout.clone()),
        );
    }
    if let Some(stderr) = &document.stderr {
        mapping.insert(
            Value::String("stderr".to_string()),
            Value::String(stderr.clone()),
        );
    }

    Ok(serde_yaml::to_string(&mapping)?)
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
