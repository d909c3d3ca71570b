use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatchmailError {
    #[error("patch set for '{source_path}' contains no patches")]
    EmptyPatchSet { source_path: PathBuf },
}

pub type Result<T> = std::result::Result<T, PatchmailError>;
