use std::path::Path;

use patchmail_core::{PatchSet, RecipientSets};
use tracing::{debug, warn};

use crate::Result;
use crate::error::OperationError;
use crate::traits::MaintainerLookup;

pub struct ResolveOperation<M> {
    lookup: M,
}

impl<M> ResolveOperation<M>
where
    M: MaintainerLookup,
{
    pub fn new(lookup: M) -> Self {
        Self { lookup }
    }

    /// Runs the maintainer lookup for every patch and collects the To and Cc
    /// recipients across the whole set.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup tool is missing, a patch has vanished, or
    /// the tool fails for any patch. Recipients gathered before the failure are
    /// discarded.
    pub fn execute(&self, kernel_root: &Path, patches: &PatchSet) -> Result<RecipientSets> {
        let tool = self.lookup.locate_tool(kernel_root)?;
        let mut recipients = RecipientSets::new();

        for patch in patches {
            debug!(patch = %patch.display(), "finding maintainers");

            if !patch.exists() {
                return Err(OperationError::MissingPatch {
                    path: patch.clone(),
                });
            }

            let output = self.lookup.lookup(&tool, patch)?;
            let summary = recipients.scan_output(&output);
            debug!(patch = %patch.display(), ?summary, "scanned maintainer output");

            if summary.unparsed > 0 {
                warn!(
                    patch = %patch.display(),
                    lines = summary.unparsed,
                    "could not extract an address from maintainer output; keeping an empty entry"
                );
            }
        }

        if recipients.is_empty() {
            warn!("maintainer lookup returned no recipients for any patch");
        }
        debug!(to = ?recipients.to, cc = ?recipients.cc, "resolved recipients");

        Ok(recipients)
    }
}
