use std::path::PathBuf;
use std::time::Duration;

use patchmail_operations::operations::SubmitInput;

use crate::cli::Cli;
use crate::error::{CliError, Result};

pub(crate) const ENV_SMTP_SERVER: &str = "GSM_SMTP_SERVER";
pub(crate) const ENV_FROM: &str = "GSM_FROM";
pub(crate) const ENV_TO_LIST: &str = "GSM_TO_LIST";
pub(crate) const ENV_CC_LIST: &str = "GSM_CC_LIST";
pub(crate) const ENV_GIT: &str = "GSM_GIT";
pub(crate) const ENV_TIMEOUT: &str = "GSM_TIMEOUT";

const DEFAULT_GIT: &str = "git";

/// Command-line flags merged with their `GSM_*` environment defaults.
///
/// Resolved once at startup; nothing else reads the environment afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub patch_path: PathBuf,
    pub from: String,
    pub smtp_server: String,
    pub extra_to: Vec<String>,
    pub extra_cc: Vec<String>,
    pub reply_to: Option<String>,
    pub git: PathBuf,
    pub timeout: Option<Duration>,
    pub dry_run: bool,
}

impl Settings {
    pub(crate) fn resolve<F>(cli: &Cli, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let from = cli
            .from
            .clone()
            .or_else(|| env(ENV_FROM))
            .ok_or(CliError::MissingFrom)?;

        let smtp_server = cli
            .smtp_server
            .clone()
            .or_else(|| env(ENV_SMTP_SERVER))
            .ok_or(CliError::MissingSmtpServer)?;

        let timeout = match cli.timeout {
            Some(secs) => Some(secs),
            None => env(ENV_TIMEOUT).map(parse_timeout).transpose()?,
        }
        .map(Duration::from_secs);

        let git = cli
            .git
            .clone()
            .or_else(|| env(ENV_GIT).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_GIT));

        let mut extra_to = cli.to_list.clone();
        extra_to.extend(env(ENV_TO_LIST).as_deref().map(split_list).unwrap_or_default());

        let mut extra_cc = cli.cc_list.clone();
        extra_cc.extend(env(ENV_CC_LIST).as_deref().map(split_list).unwrap_or_default());

        Ok(Self {
            patch_path: cli.patch_dir.clone(),
            from,
            smtp_server,
            extra_to,
            extra_cc,
            reply_to: cli.reply_to.clone(),
            git,
            timeout,
            dry_run: cli.dry_run,
        })
    }

    pub(crate) fn submit_input(&self, kernel_root: PathBuf) -> SubmitInput {
        SubmitInput {
            kernel_root,
            patch_path: self.patch_path.clone(),
            from: self.from.clone(),
            smtp_server: self.smtp_server.clone(),
            reply_to: self.reply_to.clone(),
            extra_to: self.extra_to.clone(),
            extra_cc: self.extra_cc.clone(),
            dry_run: self.dry_run,
        }
    }
}

/// Reads a variable from the process environment, treating empty as unset.
pub(crate) fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_timeout(value: String) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|source| CliError::InvalidTimeout { value, source })
}

/// Splits an address list on commas and whitespace.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
