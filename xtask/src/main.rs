//! Custom cargo commands for the dbc workspace.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (build, test, clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz <t>  - Run one fuzz target (needs cargo-fuzz)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["format_template", "checks"];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests, both feature sets, clippy, docs)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz      Run a fuzz target: {}
"#,
        FUZZ_TARGETS.join(", ")
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("dbc Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking default contract phrases...");
    check_default_phrases()?;
    println!("✓ Default phrases intact\n");

    println!("[2/5] Running workspace tests...");
    run_cargo(&["test", "--workspace", "--quiet"])?;
    println!("✓ All tests passed\n");

    println!("[3/5] Building without the attribute macros...");
    run_cargo(&["check", "--no-default-features", "--quiet"])?;
    println!("✓ Builds with --no-default-features\n");

    println!("[4/5] Running clippy...");
    run_cargo(&["clippy", "--workspace", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[5/5] Building docs...");
    run_cargo(&["doc", "--no-deps", "--quiet"])?;
    println!("✓ Docs build\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test", "--workspace"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--workspace"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench", "--bench", "checks"])
}

fn fuzz(target: Option<&str>) -> Result<()> {
    let Some(target) = target else {
        bail!("fuzz needs a target: {}", FUZZ_TARGETS.join(", "));
    };
    if !FUZZ_TARGETS.contains(&target) {
        bail!("unknown fuzz target '{}'", target);
    }
    run_cargo(&["fuzz", "run", target, "--", "-max_total_time=60"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// The default phrases are part of the public contract; make sure nobody
/// reworded them in `violation.rs`.
fn check_default_phrases() -> Result<()> {
    let root = project_root()?;
    let source = std::fs::read_to_string(root.join("src/violation.rs"))
        .context("Failed to read src/violation.rs")?;

    let expected = [
        "\"Precondition failed.\"",
        "\"Postcondition failed.\"",
        "\"Invariant failed.\"",
        "\"Assertion failed.\"",
    ];
    let missing: Vec<_> = expected
        .iter()
        .filter(|phrase| !source.contains(*phrase))
        .collect();

    if !missing.is_empty() {
        bail!("Default contract phrases changed, missing: {:?}", missing);
    }

    Ok(())
}
