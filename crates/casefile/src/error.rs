// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for parsing and running casefiles.

use thiserror::Error;

/// Boxed error returned by executors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Malformed or incomplete fixture document.
///
/// Raised by the parser before any executor is invoked.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("casefile is not valid YAML: {0}")]
    Yaml(#[source] serde_yaml::Error),

    #[error("casefile must be a YAML object")]
    NotAMapping,

    #[error("casefile must declare `args` as a list of strings")]
    MissingArgs,

    #[error("casefile `args` entry at index {index} must be a string")]
    ArgNotString { index: usize },

    #[error("casefile must declare at least one expected channel (`stdout` or `stderr`)")]
    MissingExpectedOutput,

    #[error("casefile `stdout` must be a string")]
    StdoutNotString,

    #[error("casefile `stderr` must be a string")]
    StderrNotString,

    #[error("casefile contains an empty fixture file key")]
    EmptyFileKey,

    #[error("casefile fixture file key {key} must be a scalar")]
    NonScalarKey { key: String },

    #[error("casefile fixture file `{path}` must have string content")]
    FileNotString { path: String },

    #[error("casefile must declare at least one fixture file key")]
    NoFixtureFiles,

    #[error("fixture file path `{path}` collides with a reserved casefile key")]
    ReservedFileKey { path: String },

    #[error("fixture file path `{path}` is declared more than once")]
    DuplicateFileKey { path: String },
}

/// Errors surfaced by loading, running, or updating a casefile.
#[derive(Debug, Error)]
pub enum CasefileError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A stdout-only casefile exited non-zero.
    #[error("executor exited with code {exit_code}; stderr:\n{stderr}")]
    Execution { exit_code: i32, stderr: String },

    /// A stderr-only casefile exited zero.
    #[error("expected a non-zero exit code for a stderr-only casefile, but the executor succeeded; stdout:\n{stdout}")]
    Expectation { stdout: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("executor failed: {0}")]
    Executor(#[source] BoxError),

    #[error("failed to render casefile: {0}")]
    Render(#[from] serde_yaml::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
