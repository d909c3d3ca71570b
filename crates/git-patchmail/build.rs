use std::process::Command;

use chrono::Utc;

const RELEASE_TAG_PREFIX: &str = "git-patchmail@v";

fn main() {
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs/");

    let version = env!("CARGO_PKG_VERSION");

    // Only a checkout sitting exactly on the release tag gets the bare version.
    let version_string = match git(&["describe", "--tags", "--always", "--dirty"]) {
        Some(describe) if describe == format!("{RELEASE_TAG_PREFIX}{version}") => {
            version.to_owned()
        }
        Some(describe) => {
            let describe = describe.trim_start_matches(RELEASE_TAG_PREFIX);
            format!("{version}+{describe}.{}", Utc::now().format("%Y%m%d"))
        }
        None => format!("{version}+unknown"),
    };

    println!("cargo:rustc-env=GIT_PATCHMAIL_VERSION={version_string}");
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_owned())
}
