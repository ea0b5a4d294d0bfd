//! Demo process test runner
//!
//! This crate provides utilities for running the proclab demo binaries from
//! host-side integration tests. It spawns a compiled demo, captures its
//! output, and offers assertion helpers over the lines it printed.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use anyhow::{Context, Result};

/// Result of a demo run, containing output and helper methods
pub struct DemoRun {
    pub output: Output,
}

impl DemoRun {
    /// Get stdout as a string
    pub fn stdout_str(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as a string
    pub fn stderr_str(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Exit code of the demo's root process, if it exited normally
    pub fn exit_code(&self) -> Option<i32> {
        self.output.status.code()
    }

    /// Assert that a marker appears in the demo's stdout
    pub fn assert_marker(&self, marker: &str) {
        let stdout = self.stdout_str();
        assert!(
            stdout.contains(marker),
            "marker '{}' not found in demo output:\n{}",
            marker, stdout
        );
    }

    /// Assert that every occurrence of `earlier` precedes the first
    /// occurrence of `later` in stdout
    pub fn assert_order(&self, earlier: &str, later: &str) {
        let stdout = self.stdout_str();
        let last_earlier = stdout.rfind(earlier).unwrap_or_else(|| {
            panic!("'{}' not found in demo output:\n{}", earlier, stdout)
        });
        let first_later = stdout.find(later).unwrap_or_else(|| {
            panic!("'{}' not found in demo output:\n{}", later, stdout)
        });
        assert!(
            last_earlier < first_later,
            "expected all '{}' before first '{}' in:\n{}",
            earlier, later, stdout
        );
    }

    /// Count occurrences of a pattern in the output
    pub fn count_pattern(&self, pattern: &str) -> usize {
        self.stdout_str().matches(pattern).count()
    }

    /// Assert that a pattern appears exactly N times
    pub fn assert_count(&self, pattern: &str, expected: usize) {
        let actual = self.count_pattern(pattern);
        assert_eq!(
            actual, expected,
            "expected {} occurrences of '{}', found {} in:\n{}",
            expected, pattern, actual, self.stdout_str()
        );
    }

    /// Parse the first integer that follows `prefix` in stdout. Panics if the
    /// prefix is missing or not followed by digits.
    pub fn int_after(&self, prefix: &str) -> i64 {
        let stdout = self.stdout_str();
        let at = stdout.find(prefix).unwrap_or_else(|| {
            panic!("'{}' not found in demo output:\n{}", prefix, stdout)
        });
        let digits: String = stdout[at + prefix.len()..]
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().unwrap_or_else(|_| {
            panic!("no integer after '{}' in demo output:\n{}", prefix, stdout)
        })
    }
}

/// Run a demo binary with extra arguments and an optional working directory.
///
/// A nonzero exit status is not an error here: several tests assert on the
/// failure paths, so the run is returned either way and the caller checks
/// `exit_code()`.
pub fn run_demo_with(
    exe: impl AsRef<Path>,
    args: &[&str],
    dir: Option<&Path>,
) -> Result<DemoRun> {
    let exe = exe.as_ref();
    let mut cmd = Command::new(exe);
    cmd.args(args);
    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }
    let output = cmd
        .output()
        .with_context(|| format!("failed to spawn demo '{}'", exe.display()))?;
    Ok(DemoRun { output })
}

/// Run a demo with no arguments in the current directory
pub fn run_demo(exe: impl AsRef<Path>) -> Result<DemoRun> {
    run_demo_with(exe, &[], None)
}

/// Run a demo with no arguments in the given working directory
pub fn run_demo_in(exe: impl AsRef<Path>, dir: &Path) -> Result<DemoRun> {
    run_demo_with(exe, &[], Some(dir))
}

/// Create a fresh scratch directory for a test's input files
pub fn scratch_dir(tag: &str) -> Result<PathBuf> {
    let dir = std::env::temp_dir().join(format!("proclab-{}-{}", tag, std::process::id()));
    if dir.exists() {
        fs::remove_dir_all(&dir)
            .with_context(|| format!("failed to clear scratch dir '{}'", dir.display()))?;
    }
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create scratch dir '{}'", dir.display()))?;
    Ok(dir)
}
