use std::collections::VecDeque;

use crate::domain::{
    CommandOutput, CommandRunner, CommandRunnerError, ExitStatus, Invocation,
};

#[derive(Debug)]
enum ScriptedResponse {
    Output(CommandOutput),
    LaunchFailure,
}

/// Records invocations instead of running them. Backs dry runs and tests.
///
/// Responses queued with [`push_output`](Self::push_output) and
/// [`push_launch_failure`](Self::push_launch_failure) are returned in order;
/// once the queue is empty every command succeeds with no output.
#[derive(Debug, Default)]
pub struct RecordingCommandRunner {
    invocations: Vec<Invocation>,
    responses: VecDeque<ScriptedResponse>,
}

impl RecordingCommandRunner {
    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    pub fn push_output(&mut self, output: &str, code: i32) {
        self.responses.push_back(ScriptedResponse::Output(CommandOutput {
            output: output.to_owned(),
            status: ExitStatus::from_code(code),
        }));
    }

    pub fn push_launch_failure(&mut self) {
        self.responses.push_back(ScriptedResponse::LaunchFailure);
    }
}

#[async_trait::async_trait]
impl CommandRunner for RecordingCommandRunner {
    async fn run(
        &mut self,
        invocation: &Invocation,
    ) -> Result<CommandOutput, CommandRunnerError> {
        self.invocations.push(invocation.clone());

        match self.responses.pop_front() {
            Some(ScriptedResponse::Output(output)) => Ok(output),
            Some(ScriptedResponse::LaunchFailure) => {
                Err(CommandRunnerError::LaunchFailed {
                    command: invocation.command_line(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "scripted launch failure",
                    ),
                })
            }
            None => Ok(CommandOutput {
                output: String::new(),
                status: ExitStatus::from_code(0),
            }),
        }
    }
}
