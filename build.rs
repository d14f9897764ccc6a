//! Writes `build_info.rs` into OUT_DIR: commit, date and the `--version` line.

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Value of `key` with surrounding whitespace removed, if set and non-blank.
fn env_override(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_string())
}

fn main() {
    let commit = env_override("BUILD_COMMIT")
        .or_else(git_short_hash)
        .unwrap_or_else(|| "unknown".to_string());
    let date = env_override("BUILD_DATE")
        .unwrap_or_else(|| chrono::Utc::now().format("%Y-%m-%d").to_string());
    let version = env!("CARGO_PKG_VERSION");

    let generated = format!(
        "pub const BUILD_COMMIT: &str = {commit:?};\n\
         pub const BUILD_DATE: &str = {date:?};\n\
         pub const VERSION_LINE: &str = {line:?};\n",
        line = format!("{} ({} {})", version, date, commit),
    );

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set for build scripts");
    fs::write(Path::new(&out_dir).join("build_info.rs"), generated)
        .expect("write build_info.rs");

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=BUILD_DATE");
}
