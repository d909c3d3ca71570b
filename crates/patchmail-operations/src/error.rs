use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

/// Coarse classification of every failure, used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    Precondition,
    MissingTool,
    MissingPatch,
    ToolExecution,
    Interaction,
    Io,
}

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Core(#[from] patchmail_core::PatchmailError),

    #[error("'{path}' invalid input: no such file or directory")]
    PatchNotFound { path: PathBuf },

    #[error("the patch file '{path}' extension is incorrect, expected '.patch'")]
    InvalidPatchExtension { path: PathBuf },

    #[error("the directory '{path}' does not have valid patches")]
    NoPatchesFound { path: PathBuf },

    #[error("failed to scan patch directory '{path}'")]
    PatchScan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid glob pattern '{pattern}'")]
    GlobPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("'{path}' is not a valid kernel source tree (no Makefile found)")]
    NotAKernelTree { path: PathBuf },

    #[error("maintainer script not found at '{path}'")]
    MissingTool { path: PathBuf },

    #[error("patch '{path}' does not exist")]
    MissingPatch { path: PathBuf },

    #[error("failed to run '{program}'")]
    ToolSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' failed with {status}{}", format_stderr(stderr))]
    ToolFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("'{program}' did not finish within {}s and was killed", timeout.as_secs())]
    ToolTimeout { program: String, timeout: Duration },

    #[error("confirmation required but no terminal is available")]
    InteractionRequired,

    #[error("IO error")]
    Io(#[from] std::io::Error),
}

impl OperationError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Core(_)
            | Self::PatchNotFound { .. }
            | Self::InvalidPatchExtension { .. }
            | Self::NoPatchesFound { .. }
            | Self::GlobPattern { .. } => ErrorKind::InvalidInput,
            Self::NotAKernelTree { .. } => ErrorKind::Precondition,
            Self::MissingTool { .. } => ErrorKind::MissingTool,
            Self::MissingPatch { .. } => ErrorKind::MissingPatch,
            Self::ToolSpawn { .. } | Self::ToolFailed { .. } | Self::ToolTimeout { .. } => {
                ErrorKind::ToolExecution
            }
            Self::InteractionRequired => ErrorKind::Interaction,
            Self::PatchScan { .. } | Self::Io(_) => ErrorKind::Io,
        }
    }
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}

pub type Result<T> = std::result::Result<T, OperationError>;
