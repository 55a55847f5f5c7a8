use super::CommandRunnerError;
use secrecy::Secret;

/// One external command: program, arguments and the variables set on the
/// child process only.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub env: Vec<(String, Secret<String>)>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn env(mut self, name: impl Into<String>, value: Secret<String>) -> Self {
        self.env.push((name.into(), value));
        self
    }

    /// Command line as echoed to the operator. Never includes the overlay.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatus {
    pub code: Option<i32>,
    pub success: bool,
}

impl ExitStatus {
    pub fn from_code(code: i32) -> Self {
        Self {
            code: Some(code),
            success: code == 0,
        }
    }
}

impl From<std::process::ExitStatus> for ExitStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
            success: status.success(),
        }
    }
}

impl std::fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}", code),
            None => f.write_str("terminated by signal"),
        }
    }
}

/// Merged stdout and stderr of a finished command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub output: String,
    pub status: ExitStatus,
}

#[async_trait::async_trait]
pub trait CommandRunner {
    /// Runs the command to completion. Only failing to launch or to collect
    /// the output is an error, a non-zero exit is reported in the output.
    async fn run(
        &mut self,
        invocation: &Invocation,
    ) -> Result<CommandOutput, CommandRunnerError>;
}
