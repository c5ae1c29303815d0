// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Casefile discovery.

use std::path::{Path, PathBuf};

/// List the casefiles (`.yaml` / `.yml`) directly inside `dir`, sorted by path.
///
/// Subdirectories are not searched. This reads the directory synchronously,
/// so call it while collecting test cases rather than inside a running task.
pub fn casefiles_in(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_casefile(&path) {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}

fn is_casefile(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "yaml" || e == "yml")
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
