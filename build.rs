use std::process::Command;

/// Output of `git rev-parse <args> HEAD`, or "unknown" outside a git checkout.
fn git_rev(short: bool) -> String {
    let mut cmd = Command::new("git");
    cmd.arg("rev-parse");
    if short {
        cmd.arg("--short");
    }
    match cmd.arg("HEAD").output() {
        Ok(output) if output.status.success() => String::from_utf8(output.stdout)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|_| "unknown".to_string()),
        _ => "unknown".to_string(),
    }
}

fn main() {
    // shown by `boggler --version`
    println!("cargo:rustc-env=GIT_HASH={}", git_rev(true));
    println!("cargo:rustc-env=GIT_HASH_FULL={}", git_rev(false));

    println!("cargo:rerun-if-changed=.git/HEAD");
}
