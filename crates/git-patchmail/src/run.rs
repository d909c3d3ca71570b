use patchmail_operations::operations::{DispatchOutcome, SubmitOperation, SubmitOutput};
use patchmail_operations::providers::{GitSendEmail, ScriptMaintainerLookup};
use tracing::debug;

use crate::cli::Cli;
use crate::environment::non_interactive_reason;
use crate::error::{CliError, Result};
use crate::interaction::{NonInteractiveConfirmation, TerminalConfirmation};
use crate::settings::{Settings, process_env};

pub(crate) fn run(cli: Cli) -> Result<()> {
    let settings = Settings::resolve(&cli, process_env)?;
    debug!(?settings, "resolved settings");

    let kernel_root = std::env::current_dir().map_err(CliError::CurrentDir)?;
    let input = settings.submit_input(kernel_root);

    let lookup = ScriptMaintainerLookup::new().with_timeout(settings.timeout);
    let sender = GitSendEmail::new().with_timeout(settings.timeout);

    let output = match non_interactive_reason() {
        Some(reason) if !settings.dry_run => {
            SubmitOperation::new(lookup, sender, NonInteractiveConfirmation::new(reason))
                .with_git(&settings.git)
                .execute(input)?
        }
        _ => SubmitOperation::new(lookup, sender, TerminalConfirmation)
            .with_git(&settings.git)
            .execute(input)?,
    };

    report(&output)
}

fn report(output: &SubmitOutput) -> Result<()> {
    match output.outcome {
        DispatchOutcome::DryRun => {
            println!(
                "{} patch(es) from {}",
                output.patches.len(),
                output.patches.source().display()
            );
            println!("{}", output.command);
            Ok(())
        }
        DispatchOutcome::Declined => {
            println!("Not sending.");
            Ok(())
        }
        DispatchOutcome::Sent { exit_code: 0 } => Ok(()),
        DispatchOutcome::Sent { exit_code } => Err(CliError::SendFailed { code: exit_code }),
    }
}
