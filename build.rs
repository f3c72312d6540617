//! Stamps the git commit and build time into `devops-tools --version`.
//!
//! Either value can be pinned through the environment for reproducible
//! builds; when git or `date` is missing the stamp degrades instead of
//! failing the build.

use std::env;
use std::fs;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

/// `(rustc env var, fallback when the var is not pinned)`.
const STAMPS: [(&str, fn() -> String); 2] = [
    ("DEVOPS_TOOLS_BUILD_GIT_HASH", commit_stamp),
    ("DEVOPS_TOOLS_BUILD_TIMESTAMP", time_stamp),
];

fn main() {
    rebuild_on_new_commit();
    for (var, fallback) in STAMPS {
        println!("cargo:rerun-if-env-changed={var}");
        let value = env::var(var).unwrap_or_else(|_| fallback());
        println!("cargo:rustc-env={var}={value}");
    }
}

fn rebuild_on_new_commit() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    let branch = fs::read_to_string(".git/HEAD")
        .ok()
        .and_then(|head| head.trim().strip_prefix("ref: ").map(str::to_owned));
    if let Some(branch) = branch {
        println!("cargo:rerun-if-changed=.git/{branch}");
    }
}

fn commit_stamp() -> String {
    stdout_of("git", &["rev-parse", "--short=12", "HEAD"]).unwrap_or_else(|| "unknown".into())
}

fn time_stamp() -> String {
    stdout_of("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]).unwrap_or_else(|| {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        format!("unix:{secs}")
    })
}

fn stdout_of(program: &str, args: &[&str]) -> Option<String> {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}
