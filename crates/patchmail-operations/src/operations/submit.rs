use std::ffi::OsString;
use std::path::{Path, PathBuf};

use patchmail_core::{PatchSet, RecipientLists, RecipientRole, SendRequest};
use tracing::info;

use super::dispatch::{DispatchOperation, DispatchOutcome};
use super::locate::LocateOperation;
use super::resolve::ResolveOperation;
use crate::Result;
use crate::error::OperationError;
use crate::traits::{ConfirmationProvider, MailSender, MaintainerLookup, SendEmailCommand};

/// File whose presence marks the root of a kernel source tree.
pub const KERNEL_TREE_MARKER: &str = "Makefile";

/// # Errors
///
/// Returns [`OperationError::NotAKernelTree`] unless `root` is a directory
/// containing a `Makefile`.
pub fn validate_kernel_tree(root: &Path) -> Result<()> {
    if root.is_dir() && root.join(KERNEL_TREE_MARKER).is_file() {
        Ok(())
    } else {
        Err(OperationError::NotAKernelTree {
            path: root.to_path_buf(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct SubmitInput {
    pub kernel_root: PathBuf,
    pub patch_path: PathBuf,
    pub from: String,
    pub smtp_server: String,
    pub reply_to: Option<String>,
    /// Added after the resolved To recipients, in order.
    pub extra_to: Vec<String>,
    /// Added after the resolved Cc recipients, in order.
    pub extra_cc: Vec<String>,
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct SubmitOutput {
    pub patches: PatchSet,
    pub request: SendRequest,
    pub command: SendEmailCommand,
    pub outcome: DispatchOutcome,
}

/// Runs a whole submission: validate the tree, locate the patches, resolve
/// recipients, merge the extra lists and dispatch.
pub struct SubmitOperation<M, S, C> {
    resolve: ResolveOperation<M>,
    dispatch: DispatchOperation<S, C>,
}

impl<M, S, C> SubmitOperation<M, S, C>
where
    M: MaintainerLookup,
    S: MailSender,
    C: ConfirmationProvider,
{
    pub fn new(lookup: M, sender: S, confirmation: C) -> Self {
        Self {
            resolve: ResolveOperation::new(lookup),
            dispatch: DispatchOperation::new(sender, confirmation),
        }
    }

    #[must_use]
    pub fn with_git(mut self, git: impl Into<OsString>) -> Self {
        self.dispatch = self.dispatch.with_git(git);
        self
    }

    /// # Errors
    ///
    /// Returns the first error hit by any stage; nothing is sent in that case.
    pub fn execute(&self, input: SubmitInput) -> Result<SubmitOutput> {
        validate_kernel_tree(&input.kernel_root)?;

        let patches = LocateOperation::new()?.execute(&input.patch_path)?;
        info!(count = patches.len(), "located patches");

        let resolved = self.resolve.execute(&input.kernel_root, &patches)?;

        let mut recipients = RecipientLists::from(resolved);
        recipients.extend(RecipientRole::To, input.extra_to);
        recipients.extend(RecipientRole::Cc, input.extra_cc);

        let request = SendRequest {
            from: input.from,
            smtp_server: input.smtp_server,
            recipients,
            reply_to: input.reply_to,
            patch_path: patches.source().to_path_buf(),
        };

        let command = self.dispatch.prepare(&request);
        let outcome = if input.dry_run {
            DispatchOutcome::DryRun
        } else {
            self.dispatch.execute(&command)?
        };

        Ok(SubmitOutput {
            patches,
            request,
            command,
            outcome,
        })
    }
}
