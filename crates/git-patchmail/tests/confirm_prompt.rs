#![cfg(unix)]

mod common;

use std::process::Command;
use std::time::Duration;

use expectrl::Expect;
use expectrl::process::unix::WaitStatus;
use expectrl::session::OsSession;

use common::{GSM_VARS, Kernel};

fn spawn_send(kernel: &Kernel, patch: &str) -> OsSession {
    let bin_path = assert_cmd::cargo::cargo_bin!("git-patchmail");

    let mut cmd = Command::new(bin_path);
    for var in GSM_VARS {
        cmd.env_remove(var);
    }
    cmd.args(["-p", patch, "--from", "me@x.org", "--smtp-server", "smtp.x.org"]);
    cmd.current_dir(kernel.path());
    cmd.env("GSM_FORCE_TTY", "1");
    cmd.env("GSM_GIT", kernel.git_path());

    let mut session = OsSession::spawn(cmd).expect("failed to spawn session");
    session.set_expect_timeout(Some(Duration::from_secs(30)));
    session
}

#[test]
fn shows_command_before_asking() {
    let kernel = Kernel::new();
    kernel.patch("0001-a.patch");
    let mut session = spawn_send(&kernel, "0001-a.patch");

    session
        .expect("--to=jd@x.com")
        .expect("Expected the pending command");
    session
        .expect("do you want to send it?")
        .expect("Expected the confirmation prompt");
}

#[test]
fn declining_sends_nothing() {
    let kernel = Kernel::new();
    kernel.patch("0001-a.patch");
    let mut session = spawn_send(&kernel, "0001-a.patch");

    session
        .expect("do you want to send it?")
        .expect("Expected prompt");
    session.send("n").expect("failed to send answer");

    session.expect("Not sending").expect("Expected decline notice");
    session.expect(expectrl::Eof).expect("Process should exit");

    assert!(kernel.sent_args().is_none(), "declined send must not run git");
}

#[test]
fn confirming_runs_git_send_email_with_each_recipient_once() {
    let kernel = Kernel::new();
    kernel.patch("outgoing/0001-a.patch");
    kernel.patch("outgoing/0002-b.patch");
    let mut session = spawn_send(&kernel, "outgoing");

    session
        .expect("do you want to send it?")
        .expect("Expected prompt");
    session.send("y").expect("failed to send answer");
    session.expect(expectrl::Eof).expect("Process should exit");

    let args = kernel.sent_args().expect("git should have been run");
    assert_eq!(
        args,
        [
            "send-email",
            "--no-thread",
            "--smtp-server=smtp.x.org",
            "--from=me@x.org",
            "--to=jd@x.com",
            "--to=jr@x.com",
            "--cc=foo-devel@lists.x.org",
            "--cc=linux-kernel@vger.kernel.org",
            "outgoing",
        ]
    );
}

#[test]
fn send_failure_exit_code_is_propagated() {
    let kernel = Kernel::new();
    kernel.fake_git(3);
    kernel.patch("0001-a.patch");
    let mut session = spawn_send(&kernel, "0001-a.patch");

    session
        .expect("do you want to send it?")
        .expect("Expected prompt");
    session.send("y").expect("failed to send answer");

    session
        .expect("git send-email exited with status 3")
        .expect("Expected failure diagnostic");
    session.expect(expectrl::Eof).expect("Process should exit");

    let status = session.get_process().wait().expect("failed to reap process");
    assert!(
        matches!(status, WaitStatus::Exited(_, 3)),
        "unexpected exit: {status:?}"
    );
    assert!(kernel.sent_args().is_some());
}
