use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "git-patchmail")]
#[command(bin_name = "git-patchmail")]
#[command(version = env!("GIT_PATCHMAIL_VERSION"))]
#[command(
    about = "Send kernel patches upstream to the recipients reported by scripts/get_maintainer.pl",
    long_about = None
)]
pub(crate) struct Cli {
    /// Patch file or directory of patches
    #[arg(long = "patch-dir", short = 'p', value_name = "PATH")]
    pub patch_dir: PathBuf,

    /// SMTP server address [env: GSM_SMTP_SERVER]
    #[arg(long = "smtp-server", value_name = "HOST")]
    pub smtp_server: Option<String>,

    /// Sender address [env: GSM_FROM]
    #[arg(long = "from", value_name = "ADDR")]
    pub from: Option<String>,

    /// Extra To recipients for this series, added to GSM_TO_LIST
    #[arg(long = "to-list", value_name = "ADDR", num_args = 1..)]
    pub to_list: Vec<String>,

    /// Extra Cc recipients for this series, added to GSM_CC_LIST
    #[arg(long = "cc-list", value_name = "ADDR", num_args = 1..)]
    pub cc_list: Vec<String>,

    /// Message id to send the series in reply to
    #[arg(long = "reply-to", value_name = "MSGID")]
    pub reply_to: Option<String>,

    /// git executable used for send-email [env: GSM_GIT]
    #[arg(long = "git", value_name = "PATH")]
    pub git: Option<PathBuf>,

    /// Kill external tools that run longer than this many seconds [env: GSM_TIMEOUT]
    #[arg(long = "timeout", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print the git send-email command instead of running it
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Log what is being looked up and sent
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,
}
