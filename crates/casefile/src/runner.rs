// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runs a parsed casefile through an executor.

use crate::error::CasefileError;
use crate::executor::{ExecutionRequest, Executor};
use crate::model::{Casefile, ExecutorOutput, RunResult};
use tracing::debug;

/// Run a casefile and return actual vs expected output.
///
/// Only the exit code is validated here: a stdout-only casefile must exit 0
/// and a stderr-only casefile must exit non-zero. Content comparison is left
/// to the caller.
pub async fn run<E: Executor>(
    casefile: &Casefile,
    executor: &E,
) -> Result<RunResult, CasefileError> {
    let output = invoke(casefile, executor).await?;
    check_exit_code(casefile, &output)?;

    Ok(RunResult {
        actual_stdout: output.stdout,
        expected_stdout: casefile.expected_stdout().map(str::to_string),
        actual_stderr: output.stderr,
        expected_stderr: casefile.expected_stderr().map(str::to_string),
    })
}

/// Invoke the executor once, without any exit code checks.
pub(crate) async fn invoke<E: Executor>(
    casefile: &Casefile,
    executor: &E,
) -> Result<ExecutorOutput, CasefileError> {
    debug!(
        args = ?casefile.args(),
        files = casefile.files().len(),
        "dispatching casefile to executor"
    );
    let output = executor
        .execute(ExecutionRequest::from(casefile))
        .await
        .map_err(|e| CasefileError::Executor(e.into()))?;
    debug!(exit_code = output.exit_code, "executor finished");
    Ok(output)
}

fn check_exit_code(casefile: &Casefile, output: &ExecutorOutput) -> Result<(), CasefileError> {
    let has_stdout = casefile.expected_stdout().is_some();
    let has_stderr = casefile.expected_stderr().is_some();

    match (has_stdout, has_stderr) {
        (true, false) if output.exit_code != 0 => Err(CasefileError::Execution {
            exit_code: output.exit_code,
            stderr: output.stderr.clone(),
        }),
        (false, true) if output.exit_code == 0 => Err(CasefileError::Expectation {
            stdout: output.stdout.clone(),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
