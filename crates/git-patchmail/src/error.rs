use patchmail_operations::OperationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("missing from email address (use --from or set GSM_FROM)")]
    MissingFrom,

    #[error("missing SMTP server address (use --smtp-server or set GSM_SMTP_SERVER)")]
    MissingSmtpServer,

    #[error("invalid timeout '{value}' in GSM_TIMEOUT: expected whole seconds")]
    InvalidTimeout {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("git send-email exited with status {code}")]
    SendFailed { code: i32 },
}

impl CliError {
    /// Process exit status for this error. A failed send reports the tool's
    /// own status.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::SendFailed { code } => u8::try_from(*code)
                .ok()
                .filter(|code| *code != 0)
                .unwrap_or(1),
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
