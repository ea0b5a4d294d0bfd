use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;

/// Simple developer utility tasks.
#[derive(Parser)]
enum Cmd {
    /// Build the demos, run each one in sequence, and validate its output.
    Check,
    /// Build the demos, run each one, and echo its raw output.
    RunAll,
}

fn main() -> Result<()> {
    match Cmd::parse() {
        Cmd::Check => check(),
        Cmd::RunAll => run_all(),
    }
}

/// Demo definition with expected output markers and failure info
struct Demo {
    bin: &'static str,
    what: &'static str,
    markers: &'static [&'static str],
    check_hint: &'static str,
}

/// All demos, in the order they are run
fn demos() -> Vec<Demo> {
    vec![
        Demo {
            bin: "seek_read",
            what: "positioned read at byte 10 of the 'seeking' file",
            markers: &["cursor now at position 10", "klmnopqrst"],
            check_hint: "open/lseek/read in src/seek_read.rs; is the fixture file present?",
        },
        Demo {
            bin: "fork_basic",
            what: "single fork, divergent parent/child prints",
            markers: &["[parent] running", "[child] running"],
            check_hint: "fork branches in src/fork_basic.rs",
        },
        Demo {
            bin: "fork_tree",
            what: "parent with two children, waitpid on the first",
            markers: &[
                "first child running",
                "second child running",
                "parent summary: pid",
            ],
            check_hint: "second fork must happen inside the parent branch (src/fork_tree.rs)",
        },
        Demo {
            bin: "orphan",
            what: "child re-parented after the parent exits",
            markers: &["original parent", "adopted by"],
            check_hint: "child nap must outlive the parent (src/orphan.rs)",
        },
        Demo {
            bin: "wait_sync",
            what: "blocking waitpid orders child output before parent output",
            markers: &["[child] exiting", "[parent] collected child"],
            check_hint: "waitpid call in src/wait_sync.rs",
        },
        Demo {
            bin: "fork_exec",
            what: "child image replaced by the listing utility",
            markers: &["seeking", "[parent] child task finished"],
            check_hint: "execv path in src/fork_exec.rs; is /bin/ls present?",
        },
    ]
}

/// Content of the seek_read fixture: bytes 10..20 are "klmnopqrst"
const FIXTURE_CONTENT: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

fn workspace_root() -> PathBuf {
    // xtask lives one level below the workspace root
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn build_demos(root: &Path) -> Result<()> {
    println!("🔨 Building demo binaries...");
    let status = Command::new("cargo")
        .args(["build", "--bins"])
        .current_dir(root)
        .status()
        .context("failed to spawn cargo build")?;
    if !status.success() {
        bail!("cargo build --bins failed");
    }
    Ok(())
}

/// Create the scratch directory the demos run in, with the seek_read fixture
fn prepare_scratch(root: &Path) -> Result<PathBuf> {
    let scratch = root.join("target").join("demo-scratch");
    fs::create_dir_all(&scratch)
        .with_context(|| format!("failed to create '{}'", scratch.display()))?;
    fs::write(scratch.join("seeking"), FIXTURE_CONTENT)
        .context("failed to write the seek_read fixture")?;
    Ok(scratch)
}

fn run_demo(root: &Path, scratch: &Path, bin: &str) -> Result<std::process::Output> {
    let exe = root.join("target").join("debug").join(bin);
    Command::new(&exe)
        .current_dir(scratch)
        .output()
        .with_context(|| format!("failed to spawn '{}'", exe.display()))
}

fn check() -> Result<()> {
    let root = workspace_root();
    build_demos(&root)?;
    let scratch = prepare_scratch(&root)?;

    let mut failures = 0usize;
    let mut total = Duration::ZERO;

    for demo in demos() {
        let started = Instant::now();
        let output = run_demo(&root, &scratch, demo.bin)?;
        let elapsed = started.elapsed();
        total += elapsed;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let missing: Vec<&str> = demo
            .markers
            .iter()
            .copied()
            .filter(|m| !stdout.contains(m))
            .collect();

        if output.status.success() && missing.is_empty() {
            println!("✅ {} ({:>4} ms) - {}", demo.bin, elapsed.as_millis(), demo.what);
        } else {
            failures += 1;
            println!("❌ {} - {}", demo.bin, demo.what);
            if !output.status.success() {
                println!("   exit status: {}", output.status);
            }
            for marker in missing {
                println!("   missing marker: '{marker}'");
            }
            println!("   check: {}", demo.check_hint);
            if !stdout.is_empty() {
                println!("   stdout:\n{}", indent(&stdout));
            }
            if !stderr.is_empty() {
                println!("   stderr:\n{}", indent(&stderr));
            }
        }
    }

    println!();
    println!("⏱️  total demo time: {} ms", total.as_millis());
    if failures > 0 {
        bail!("{failures} demo(s) failed validation");
    }
    println!("🎉 all demos passed validation");
    Ok(())
}

fn run_all() -> Result<()> {
    let root = workspace_root();
    build_demos(&root)?;
    let scratch = prepare_scratch(&root)?;

    for demo in demos() {
        println!("=== {} - {} ===", demo.bin, demo.what);
        let output = run_demo(&root, &scratch, demo.bin)?;
        print!("{}", String::from_utf8_lossy(&output.stdout));
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.is_empty() {
            eprint!("{stderr}");
        }
        println!();
    }
    Ok(())
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("      {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
