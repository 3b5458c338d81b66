//! Stamps the binary with where and when it was built, for `--version`.
//!
//! Exposes `SMARTBANNER_BUILD_TIMESTAMP` (UTC, RFC 3339) and
//! `SMARTBANNER_GIT_COMMIT` (abbreviated hash, "unknown" outside a checkout).

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads");

    let built_at = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    println!("cargo:rustc-env=SMARTBANNER_BUILD_TIMESTAMP={built_at}");

    let commit = short_commit().unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=SMARTBANNER_GIT_COMMIT={commit}");
}

fn short_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=9", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())?;
    let commit = String::from_utf8(output.stdout).ok()?;
    Some(commit.trim().to_owned()).filter(|c| !c.is_empty())
}
