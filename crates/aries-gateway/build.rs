//! Build script to capture git version information at compile time.

use std::process::Command;

fn main() {
    // Rerun when the checked-out commit or tags move
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");

    // Fall back to the package version outside a git checkout
    let version = git_version().unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=ARIES_VERSION={}", version);
}

fn git_version() -> Option<String> {
    // Tags first, bare commit hash otherwise
    let output = Command::new("git")
        .args(["describe", "--tags", "--always"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let version = String::from_utf8(output.stdout).ok()?;
    let version = version.trim();

    if version.is_empty() {
        return None;
    }

    // "v0.1.0" -> "0.1.0"
    Some(version.strip_prefix('v').unwrap_or(version).to_string())
}
