// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration.

use crate::env;

/// Options for [`execute_casefile_file`](crate::execute_casefile_file)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Rewrite the casefile's expected output from the executor instead of
    /// validating against it
    pub update_expected: bool,
}

impl RunOptions {
    /// Validate-only options
    pub const fn verify() -> Self {
        Self {
            update_expected: false,
        }
    }

    /// Capture-and-persist options
    pub const fn update() -> Self {
        Self {
            update_expected: true,
        }
    }

    /// Options seeded from `CASEFILE_UPDATE`, validate-only when unset
    pub fn from_env() -> Self {
        Self {
            update_expected: env::update_expected().unwrap_or(false),
        }
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
