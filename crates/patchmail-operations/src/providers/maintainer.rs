use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use crate::Result;
use crate::error::OperationError;
use crate::providers::process::{program_name, run_captured};
use crate::traits::MaintainerLookup;

/// Location of the maintainer lookup script relative to the kernel root.
pub const GET_MAINTAINER_SCRIPT: &str = "scripts/get_maintainer.pl";

/// Runs the kernel's own `scripts/get_maintainer.pl`.
pub struct ScriptMaintainerLookup {
    timeout: Option<Duration>,
}

impl ScriptMaintainerLookup {
    #[must_use]
    pub fn new() -> Self {
        Self { timeout: None }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ScriptMaintainerLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl MaintainerLookup for ScriptMaintainerLookup {
    fn locate_tool(&self, kernel_root: &Path) -> Result<PathBuf> {
        let tool = kernel_root.join(GET_MAINTAINER_SCRIPT);
        if tool.exists() {
            Ok(tool)
        } else {
            Err(OperationError::MissingTool { path: tool })
        }
    }

    fn lookup(&self, tool: &Path, patch: &Path) -> Result<String> {
        let mut command = Command::new(tool);
        command.arg(patch);
        let program = program_name(&command);

        let output = run_captured(command, self.timeout)?;
        if !output.status.success() {
            return Err(OperationError::ToolFailed {
                program,
                status: output.status,
                stderr: output.stderr,
            });
        }

        Ok(output.stdout)
    }
}
