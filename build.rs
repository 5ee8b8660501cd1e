//! Build script for kargo-wire
//!
//! Stamps build metadata into compile-time environment variables read by
//! `Version::current()`:
//!
//! - `KARGO_WIRE_GIT_COMMIT` - HEAD commit hash
//! - `KARGO_WIRE_GIT_TREE_DIRTY` - `true` if the work tree has local changes
//! - `KARGO_WIRE_BUILD_DATE` - build time, UNIX seconds
//! - `KARGO_WIRE_RUSTC_VERSION` - output of `rustc --version`
//!
//! Each value is skipped if it cannot be determined (no git checkout, no
//! rustc on PATH), and the library falls back to a placeholder.

use std::env;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");

    // =========================================================================
    // Git
    // =========================================================================

    if let Some(commit) = run("git", &["rev-parse", "HEAD"]) {
        println!("cargo:rustc-env=KARGO_WIRE_GIT_COMMIT={}", commit);
    }

    if let Some(status) = run("git", &["status", "--porcelain"]) {
        println!(
            "cargo:rustc-env=KARGO_WIRE_GIT_TREE_DIRTY={}",
            !status.is_empty()
        );
    }

    // =========================================================================
    // Build Date
    // =========================================================================

    // SOURCE_DATE_EPOCH keeps reproducible builds reproducible
    let build_date = env::var("SOURCE_DATE_EPOCH").ok().or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .ok()
            .map(|d| d.as_secs().to_string())
    });
    if let Some(secs) = build_date {
        println!("cargo:rustc-env=KARGO_WIRE_BUILD_DATE={}", secs);
    }

    // =========================================================================
    // Toolchain
    // =========================================================================

    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    if let Some(version) = run(&rustc, &["--version"]) {
        println!("cargo:rustc-env=KARGO_WIRE_RUSTC_VERSION={}", version);
    }
}

/// Run a command and return its trimmed stdout if it succeeded.
fn run(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
