use color_eyre::eyre::{eyre, WrapErr};
use secrecy::ExposeSecret;
use std::io::Read;
use std::process::Stdio;
use tokio::process::Command;

use crate::domain::{
    CommandOutput, CommandRunner, CommandRunnerError, Invocation,
};

/// Runs invocations as real child processes with stdout and stderr merged
/// into one stream.
#[derive(Debug, Default)]
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl CommandRunner for ProcessCommandRunner {
    #[tracing::instrument(name = "Running external command", skip_all, fields(program = %invocation.program))]
    async fn run(
        &mut self,
        invocation: &Invocation,
    ) -> Result<CommandOutput, CommandRunnerError> {
        let launch_failed =
            |source: std::io::Error| CommandRunnerError::LaunchFailed {
                command: invocation.command_line(),
                source,
            };

        let (mut reader, writer) = std::io::pipe().map_err(launch_failed)?;

        // The command holds the parent's copies of the write end, it has to
        // be dropped before the reader can see end of file.
        let mut child = {
            let mut command = Command::new(&invocation.program);
            command
                .args(&invocation.args)
                .stdin(Stdio::null())
                .stdout(writer.try_clone().map_err(launch_failed)?)
                .stderr(writer)
                .kill_on_drop(true);
            for (name, value) in &invocation.env {
                command.env(name, value.expose_secret());
            }
            command.spawn().map_err(launch_failed)?
        };

        let drain = tokio::task::spawn_blocking(move || {
            let mut buffer = Vec::new();
            reader.read_to_end(&mut buffer).map(|_| buffer)
        });

        let status = child
            .wait()
            .await
            .wrap_err("failed to wait for command to exit")
            .map_err(CommandRunnerError::UnexpectedError)?;

        let buffer = drain
            .await
            .map_err(|e| CommandRunnerError::UnexpectedError(eyre!(e)))?
            .wrap_err("failed to read command output")
            .map_err(CommandRunnerError::UnexpectedError)?;

        Ok(CommandOutput {
            output: String::from_utf8_lossy(&buffer).into_owned(),
            status: status.into(),
        })
    }
}
