// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The contract between the engine and the code under test.

use crate::error::BoxError;
use crate::model::{Casefile, ExecutorOutput, FixtureFile};
use std::future::Future;

/// Inputs handed to an executor for one run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionRequest {
    pub files: Vec<FixtureFile>,
    pub args: Vec<String>,
}

impl ExecutionRequest {
    /// Look up a virtual file's content by path
    pub fn file(&self, path: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.path == path)
            .map(|f| f.content.as_str())
    }
}

impl From<&Casefile> for ExecutionRequest {
    fn from(casefile: &Casefile) -> Self {
        Self {
            files: casefile.files().to_vec(),
            args: casefile.args().to_vec(),
        }
    }
}

/// Runs the behavior under test against a casefile's files and args.
///
/// Implemented for any `Fn(ExecutionRequest) -> impl Future<Output =
/// Result<ExecutorOutput, E>>`, so an async closure is usually enough:
///
/// ```
/// use casefile::{ExecutionRequest, ExecutorOutput};
///
/// let echo = |request: ExecutionRequest| async move {
///     let first = request.args.first().cloned().unwrap_or_default();
///     let content = request.file(&first).unwrap_or_default().to_string();
///     Ok::<_, std::io::Error>(ExecutorOutput::success(content))
/// };
/// # let _ = echo;
/// ```
pub trait Executor {
    type Error: Into<BoxError>;

    fn execute(
        &self,
        request: ExecutionRequest,
    ) -> impl Future<Output = Result<ExecutorOutput, Self::Error>>;
}

impl<F, Fut, E> Executor for F
where
    F: Fn(ExecutionRequest) -> Fut,
    Fut: Future<Output = Result<ExecutorOutput, E>>,
    E: Into<BoxError>,
{
    type Error = E;

    fn execute(
        &self,
        request: ExecutionRequest,
    ) -> impl Future<Output = Result<ExecutorOutput, Self::Error>> {
        self(request)
    }
}
