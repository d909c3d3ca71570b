use std::path::{Path, PathBuf};

use crate::Result;

pub trait MaintainerLookup: Send + Sync {
    /// Locates the lookup script inside the kernel tree.
    ///
    /// # Errors
    ///
    /// Returns [`crate::OperationError::MissingTool`] if the script is absent.
    fn locate_tool(&self, kernel_root: &Path) -> Result<PathBuf>;

    /// Runs the lookup for one patch and returns its standard output.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool cannot be started, exits unsuccessfully or
    /// times out.
    fn lookup(&self, tool: &Path, patch: &Path) -> Result<String>;
}
