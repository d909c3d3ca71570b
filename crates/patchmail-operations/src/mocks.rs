use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::Result;
use crate::error::OperationError;
use crate::traits::{
    Confirmation, ConfirmationProvider, MailSender, MaintainerLookup, SendEmailCommand,
};

pub struct MockMaintainerLookup {
    tool_present: bool,
    outputs: HashMap<PathBuf, String>,
    failing: Vec<PathBuf>,
    calls: Mutex<Vec<PathBuf>>,
}

impl MockMaintainerLookup {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tool_present: true,
            outputs: HashMap::new(),
            failing: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn without_tool(mut self) -> Self {
        self.tool_present = false;
        self
    }

    #[must_use]
    pub fn with_output(mut self, patch: impl Into<PathBuf>, output: &str) -> Self {
        self.outputs.insert(patch.into(), output.to_string());
        self
    }

    #[must_use]
    pub fn with_failure(mut self, patch: impl Into<PathBuf>) -> Self {
        self.failing.push(patch.into());
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().expect("lock poisoned").clone()
    }
}

impl MaintainerLookup for MockMaintainerLookup {
    fn locate_tool(&self, kernel_root: &Path) -> Result<PathBuf> {
        let tool = kernel_root.join("scripts/get_maintainer.pl");
        if self.tool_present {
            Ok(tool)
        } else {
            Err(OperationError::MissingTool { path: tool })
        }
    }

    fn lookup(&self, _tool: &Path, patch: &Path) -> Result<String> {
        self.calls
            .lock()
            .expect("lock poisoned")
            .push(patch.to_path_buf());

        if self.failing.iter().any(|p| p == patch) {
            return Err(OperationError::ToolSpawn {
                program: "get_maintainer.pl".to_string(),
                source: std::io::Error::other("mock failure"),
            });
        }

        Ok(self.outputs.get(patch).cloned().unwrap_or_default())
    }
}

pub struct MockMailSender {
    exit_code: i32,
    sent: Mutex<Vec<SendEmailCommand>>,
}

impl MockMailSender {
    #[must_use]
    pub fn new() -> Self {
        Self::with_exit_code(0)
    }

    #[must_use]
    pub fn with_exit_code(exit_code: i32) -> Self {
        Self {
            exit_code,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn sent(&self) -> Vec<SendEmailCommand> {
        self.sent.lock().expect("lock poisoned").clone()
    }
}

impl MailSender for MockMailSender {
    fn send(&self, command: &SendEmailCommand) -> Result<i32> {
        self.sent
            .lock()
            .expect("lock poisoned")
            .push(command.clone());
        Ok(self.exit_code)
    }
}

impl MailSender for &MockMailSender {
    fn send(&self, command: &SendEmailCommand) -> Result<i32> {
        (*self).send(command)
    }
}

pub struct MockConfirmation {
    answer: Confirmation,
    prompts: Mutex<usize>,
}

impl MockConfirmation {
    #[must_use]
    pub fn answering(answer: Confirmation) -> Self {
        Self {
            answer,
            prompts: Mutex::new(0),
        }
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn prompts(&self) -> usize {
        *self.prompts.lock().expect("lock poisoned")
    }
}

impl ConfirmationProvider for MockConfirmation {
    fn confirm_send(&self, _command: &SendEmailCommand) -> Result<Confirmation> {
        *self.prompts.lock().expect("lock poisoned") += 1;
        Ok(self.answer)
    }
}

impl ConfirmationProvider for &MockConfirmation {
    fn confirm_send(&self, command: &SendEmailCommand) -> Result<Confirmation> {
        (*self).confirm_send(command)
    }
}

impl MaintainerLookup for &MockMaintainerLookup {
    fn locate_tool(&self, kernel_root: &Path) -> Result<PathBuf> {
        (*self).locate_tool(kernel_root)
    }

    fn lookup(&self, tool: &Path, patch: &Path) -> Result<String> {
        (*self).lookup(tool, patch)
    }
}
