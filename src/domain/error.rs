use color_eyre::eyre::Report;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Malformed CSV on line: {line}")]
    MalformedRow { line: usize, fields: usize },
    #[error("Missing first name on line: {0}")]
    MissingFirstName(usize),
    #[error("Missing last name on line: {0}")]
    MissingLastName(usize),
    #[error("Missing UID email on line: {0}")]
    MissingUidEmail(usize),
    #[error("Failed to read roster")]
    ReadFailed(#[source] Report),
}

impl RosterError {
    pub fn line(&self) -> Option<usize> {
        match self {
            RosterError::MalformedRow { line, .. }
            | RosterError::MissingFirstName(line)
            | RosterError::MissingLastName(line)
            | RosterError::MissingUidEmail(line) => Some(*line),
            RosterError::ReadFailed(_) => None,
        }
    }
}

impl PartialEq for RosterError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::MalformedRow { line: a, fields: x },
                Self::MalformedRow { line: b, fields: y },
            ) => a == b && x == y,
            (Self::MissingFirstName(a), Self::MissingFirstName(b))
            | (Self::MissingLastName(a), Self::MissingLastName(b))
            | (Self::MissingUidEmail(a), Self::MissingUidEmail(b)) => a == b,
            (Self::ReadFailed(_), Self::ReadFailed(_)) => true,
            _ => false,
        }
    }
}

#[derive(Debug, Error)]
pub enum CommandRunnerError {
    #[error("Failed to launch command: {command}")]
    LaunchFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Command failed")]
    CommandFailed(#[from] CommandRunnerError),
    #[error("Failed to write import transcript")]
    OutputError(#[source] std::io::Error),
    #[error("Invalid configuration")]
    ConfigError(#[from] ValidationError),
}

#[derive(Debug, Error)]
#[error("Validation error: {0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: String) -> Self {
        Self(message)
    }

    pub fn as_ref(&self) -> &String {
        &self.0
    }
}
