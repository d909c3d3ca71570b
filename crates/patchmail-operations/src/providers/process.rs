use std::io::{self, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::Result;
use crate::error::OperationError;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub(crate) struct CapturedOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

pub(crate) fn program_name(command: &Command) -> String {
    command.get_program().to_string_lossy().into_owned()
}

/// Runs `command` with stdout and stderr captured as (lossy) UTF-8.
pub(crate) fn run_captured(
    mut command: Command,
    timeout: Option<Duration>,
) -> Result<CapturedOutput> {
    let program = program_name(&command);
    debug!(?command, "running captured");

    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| OperationError::ToolSpawn {
            program: program.clone(),
            source,
        })?;

    // Pipes must be drained while waiting or a full pipe stalls the child.
    let stdout = child.stdout.take().map(drain);
    let stderr = child.stderr.take().map(drain);

    let status = wait(&mut child, &program, timeout)?;

    Ok(CapturedOutput {
        status,
        stdout: collect(stdout)?,
        stderr: collect(stderr)?,
    })
}

/// Runs `command` attached to the current terminal.
pub(crate) fn run_inherited(mut command: Command, timeout: Option<Duration>) -> Result<ExitStatus> {
    let program = program_name(&command);
    debug!(?command, "running attached");

    let mut child = command
        .spawn()
        .map_err(|source| OperationError::ToolSpawn {
            program: program.clone(),
            source,
        })?;

    wait(&mut child, &program, timeout)
}

fn wait(child: &mut Child, program: &str, timeout: Option<Duration>) -> Result<ExitStatus> {
    let Some(timeout) = timeout else {
        return Ok(child.wait()?);
    };

    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }

        if Instant::now() >= deadline {
            if let Err(e) = child.kill() {
                warn!(program, error = %e, "failed to kill timed out process");
            }
            child.wait()?;
            return Err(OperationError::ToolTimeout {
                program: program.to_string(),
                timeout,
            });
        }

        thread::sleep(POLL_INTERVAL);
    }
}

fn drain<R>(mut reader: R) -> JoinHandle<io::Result<Vec<u8>>>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(buf)
    })
}

fn collect(handle: Option<JoinHandle<io::Result<Vec<u8>>>>) -> Result<String> {
    let Some(handle) = handle else {
        return Ok(String::new());
    };

    let bytes = handle
        .join()
        .map_err(|_| io::Error::other("output reader thread panicked"))??;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
