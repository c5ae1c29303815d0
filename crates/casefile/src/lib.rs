// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![doc = include_str!("../README.md")]

pub mod discovery;
pub mod env;
pub mod error;
pub mod executor;
pub mod model;
pub mod options;
pub mod orchestrator;
pub mod parser;
pub mod render;
pub mod runner;

pub use discovery::casefiles_in;
pub use error::{BoxError, CasefileError, SchemaError};
pub use executor::{ExecutionRequest, Executor};
pub use model::{Casefile, ExecutorOutput, FixtureFile, RunResult};
pub use options::RunOptions;
pub use orchestrator::{execute_casefile_file, load_casefile};
pub use parser::{normalize_line_endings, parse, RESERVED_KEYS};
pub use render::{render, CasefileDocument};
pub use runner::run;
