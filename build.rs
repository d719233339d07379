use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// バナー用のバージョン: `<crate version>+<short hash>[-dirty]`
fn main() {
    for path in [".git/HEAD", ".git/index"] {
        println!("cargo:rerun-if-changed={}", path);
    }

    let crate_version = std::env::var("CARGO_PKG_VERSION").unwrap_or_default();
    let version = match git(&["rev-parse", "--short", "HEAD"]) {
        Some(hash) => {
            let dirty = git(&["status", "--porcelain"]).is_some_and(|s| !s.is_empty());
            format!("{}+{}{}", crate_version, hash, if dirty { "-dirty" } else { "" })
        }
        None => crate_version,
    };

    println!("cargo:rustc-env=POSE_OVERLAY_VERSION={}", version);
}
