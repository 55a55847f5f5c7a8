use std::io::Write;

use crate::{
    app_state::CommandRunnerType,
    domain::{ExitStatus, ImportError, Invocation},
};

mod add_user;
mod import_member;
mod set_email;

pub use add_user::*;
pub use import_member::*;
pub use set_email::*;

/// Echoes the command line, runs it, then echoes its merged output and exit
/// status. A non-zero exit is only reported.
async fn run_and_echo<W: Write>(
    command_runner: &CommandRunnerType,
    label: &str,
    invocation: &Invocation,
    out: &mut W,
) -> Result<ExitStatus, ImportError> {
    writeln!(
        out,
        "Executing {} command: {}",
        label,
        invocation.command_line()
    )
    .and_then(|_| out.flush())
    .map_err(ImportError::OutputError)?;

    let output = command_runner.write().await.run(invocation).await?;

    // Output is echoed as is, a line break is only added when it lacks one.
    let line_break = if output.output.ends_with('\n') { "" } else { "\n" };
    write!(
        out,
        "Output of {} command: {}{}",
        label, output.output, line_break
    )
    .and_then(|_| {
        writeln!(out, "Exit status of {} command: {}", label, output.status)
    })
    .and_then(|_| out.flush())
    .map_err(ImportError::OutputError)?;

    if !output.status.success {
        tracing::warn!(
            "{} command exited with status {}",
            label,
            output.status
        );
    }

    Ok(output.status)
}
