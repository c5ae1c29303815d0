// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Casefile data model.

use serde::Serialize;

/// A virtual input file declared by a casefile
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FixtureFile {
    /// Path as written in the document
    pub path: String,
    pub content: String,
}

impl FixtureFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// A validated fixture document.
///
/// Built only by the parser; at least one file and at least one expected
/// channel are always present. Never mutated after construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Casefile {
    args: Vec<String>,
    files: Vec<FixtureFile>,
    expected_stdout: Option<String>,
    expected_stderr: Option<String>,
}

impl Casefile {
    pub(crate) fn new(
        args: Vec<String>,
        files: Vec<FixtureFile>,
        expected_stdout: Option<String>,
        expected_stderr: Option<String>,
    ) -> Self {
        Self {
            args,
            files,
            expected_stdout,
            expected_stderr,
        }
    }

    /// Invocation arguments, in positional order
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Virtual files, in document order
    pub fn files(&self) -> &[FixtureFile] {
        &self.files
    }

    /// Look up a virtual file's content by path
    pub fn file(&self, path: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.path == path)
            .map(|f| f.content.as_str())
    }

    pub fn expected_stdout(&self) -> Option<&str> {
        self.expected_stdout.as_deref()
    }

    /// Expected stderr with one trailing newline already stripped
    pub fn expected_stderr(&self) -> Option<&str> {
        self.expected_stderr.as_deref()
    }
}

/// Output captured from one executor invocation
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExecutorOutput {
    pub stdout: String,
    pub stderr: String,
    /// Process-style exit indicator (0 = success)
    pub exit_code: i32,
}

impl ExecutorOutput {
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>, exit_code: i32) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_code,
        }
    }

    /// Successful run that only wrote to stdout
    pub fn success(stdout: impl Into<String>) -> Self {
        Self::new(stdout, "", 0)
    }

    /// Failed run that only wrote to stderr
    pub fn failure(stderr: impl Into<String>, exit_code: i32) -> Self {
        Self::new("", stderr, exit_code)
    }
}

/// Actual and expected output of one run, for the caller to assert on
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RunResult {
    pub actual_stdout: String,
    pub expected_stdout: Option<String>,
    pub actual_stderr: String,
    pub expected_stderr: Option<String>,
}

impl RunResult {
    /// Whether stdout equals its expectation (`None` when not declared)
    pub fn stdout_matches(&self) -> Option<bool> {
        self.expected_stdout
            .as_deref()
            .map(|expected| expected == self.actual_stdout)
    }

    /// Whether stderr equals its expectation (`None` when not declared)
    pub fn stderr_matches(&self) -> Option<bool> {
        self.expected_stderr
            .as_deref()
            .map(|expected| expected == self.actual_stderr)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
