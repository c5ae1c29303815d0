// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File-backed casefile loading, running, and updating.
//!
//! Each call performs at most one read and one conditional write. Concurrent
//! update runs against the same file are not synchronized.

use crate::error::CasefileError;
use crate::executor::Executor;
use crate::model::{Casefile, RunResult};
use crate::options::RunOptions;
use crate::parser::{normalize_line_endings, parse, parse_with_channels};
use crate::render::{render, CasefileDocument};
use crate::runner::{invoke, run};
use std::path::Path;
use tracing::{debug, info};

/// Read and parse a casefile from disk.
pub async fn load_casefile(path: impl AsRef<Path>) -> Result<Casefile, CasefileError> {
    let path = path.as_ref();
    let source = tokio::fs::read_to_string(path).await?;
    debug!(path = %path.display(), "loaded casefile");
    Ok(parse(&source)?)
}

/// Run the casefile stored at `path`.
///
/// With `update_expected` unset this is [`load_casefile`] followed by
/// [`run`]. With it set, the executor's output becomes the new expectation
/// and is written back to `path` when the document changes; exit code
/// checks are skipped in that mode.
pub async fn execute_casefile_file<E: Executor>(
    path: impl AsRef<Path>,
    executor: &E,
    options: RunOptions,
) -> Result<RunResult, CasefileError> {
    let path = path.as_ref();
    if options.update_expected {
        return update_casefile_file(path, executor).await;
    }

    let casefile = load_casefile(path).await?;
    run(&casefile, executor).await
}

async fn update_casefile_file<E: Executor>(
    path: &Path,
    executor: &E,
) -> Result<RunResult, CasefileError> {
    let source = normalize_line_endings(&tokio::fs::read_to_string(path).await?);
    let (casefile, declared) = parse_with_channels(&source)?;

    let output = invoke(&casefile, executor).await?;

    let stdout = (declared.stdout || !output.stdout.is_empty()).then(|| output.stdout.clone());
    let stderr = (declared.stderr || !output.stderr.is_empty() || output.exit_code != 0)
        .then(|| output.stderr.clone());

    let document = CasefileDocument {
        args: casefile.args().to_vec(),
        files: casefile.files().to_vec(),
        stdout: stdout.clone(),
        stderr: stderr.clone(),
    };
    let rendered = render(&document)?;

    if normalize_line_endings(&rendered) == source {
        debug!(path = %path.display(), "casefile already up to date");
    } else {
        info!(path = %path.display(), "updating casefile from executor output");
        tokio::fs::write(path, rendered).await?;
    }

    Ok(RunResult {
        actual_stdout: output.stdout,
        expected_stdout: stdout,
        actual_stderr: output.stderr,
        expected_stderr: stderr,
    })
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
