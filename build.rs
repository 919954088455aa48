use std::process::Command;

/// Exposes `GIT_VERSION` to the crate for `/health` and the startup log.
fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
    println!("cargo:rerun-if-env-changed=GIT_VERSION");

    let version = pinned_version()
        .or_else(describe_checkout)
        .unwrap_or_else(|| "dev".to_string());
    println!("cargo:rustc-env=GIT_VERSION={}", version);
}

/// Version handed in by the build environment (container images, CI).
fn pinned_version() -> Option<String> {
    std::env::var("GIT_VERSION")
        .ok()
        .filter(|v| !v.is_empty() && v != "dev")
}

fn describe_checkout() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }

    let described = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!described.is_empty()).then_some(described)
}
