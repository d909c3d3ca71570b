#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const GSM_VARS: &[&str] = &[
    "GSM_SMTP_SERVER",
    "GSM_FROM",
    "GSM_TO_LIST",
    "GSM_CC_LIST",
    "GSM_GIT",
    "GSM_TIMEOUT",
    "GSM_NO_TTY",
    "GSM_FORCE_TTY",
];

pub const MAINTAINER_OUTPUT: &str = "\
John Doe <jd@x.com> (maintainer:FOO DRIVER)
Jane Roe <jr@x.com> (supporter:FOO DRIVER)
foo-devel@lists.x.org (moderated list:FOO DRIVER)
linux-kernel@vger.kernel.org (open list)
Rev Iewer <rev@x.com> (reviewer:FOO DRIVER)
";

/// A throwaway kernel tree with a scripted `get_maintainer.pl` and a fake
/// `git` that records its arguments instead of sending mail.
pub struct Kernel {
    pub dir: TempDir,
}

impl Kernel {
    pub fn new() -> Self {
        let kernel = Self::bare();
        fs::write(kernel.path().join("Makefile"), "VERSION = 6\n").expect("write Makefile");
        kernel.maintainer_script(&format!(
            "cat <<'OUTPUT_EOF'\n{MAINTAINER_OUTPUT}OUTPUT_EOF"
        ));
        kernel.fake_git(0);
        kernel
    }

    pub fn bare() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn maintainer_script(&self, body: &str) {
        let scripts = self.path().join("scripts");
        fs::create_dir_all(&scripts).expect("create scripts dir");
        write_executable(&scripts.join("get_maintainer.pl"), body);
    }

    pub fn fake_git(&self, exit_code: i32) {
        let log = self.sent_log();
        write_executable(
            &self.git_path(),
            &format!("printf '%s\\n' \"$@\" > '{}'\nexit {exit_code}", log.display()),
        );
    }

    pub fn git_path(&self) -> PathBuf {
        self.path().join("fake-git")
    }

    pub fn sent_log(&self) -> PathBuf {
        self.path().join("sent.log")
    }

    /// Arguments the fake git was called with, or `None` if it never ran.
    pub fn sent_args(&self) -> Option<Vec<String>> {
        let content = fs::read_to_string(self.sent_log()).ok()?;
        Some(content.lines().map(str::to_string).collect())
    }

    pub fn patch(&self, relative: &str) -> PathBuf {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create patch dir");
        }
        fs::write(&path, "From: me\nSubject: [PATCH] fix\n\ndiff --git a/x b/x\n")
            .expect("write patch");
        path
    }
}

fn write_executable(path: &Path, body: &str) {
    fs::write(path, format!("#!/bin/sh\n{body}\n")).expect("write script");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).expect("make executable");
}
