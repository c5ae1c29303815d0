// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variables read by casefile.

/// Name of the variable that turns on update mode.
pub const CASEFILE_UPDATE: &str = "CASEFILE_UPDATE";

/// `CASEFILE_UPDATE` — rewrite casefiles from observed output.
///
/// Returns `None` when unset.
pub fn update_expected() -> Option<bool> {
    std::env::var(CASEFILE_UPDATE).ok().map(|v| parse_flag(&v))
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "overwrite"
    )
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
