use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{
    CommandRunner, EnvVarName, PasswordGenerator, ValidationError,
};

pub type CommandRunnerType = Arc<RwLock<dyn CommandRunner + Send + Sync>>;
pub type PasswordGeneratorType = Arc<dyn PasswordGenerator + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    pub command_runner: CommandRunnerType,
    pub password_generator: PasswordGeneratorType,
}

impl AppState {
    pub fn new(
        command_runner: CommandRunnerType,
        password_generator: PasswordGeneratorType,
    ) -> Self {
        Self {
            command_runner,
            password_generator,
        }
    }
}

/// How the administration tool is invoked.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportConfig {
    pub interpreter: String,
    pub tool_path: PathBuf,
    pub group: String,
    pub password_env: EnvVarName,
    pub dry_run: bool,
}

impl ImportConfig {
    /// Validates the settings and resolves `tool_path` against the current
    /// directory.
    pub fn new(
        interpreter: &str,
        tool_path: &Path,
        group: &str,
        password_env: &str,
    ) -> Result<Self, ValidationError> {
        if interpreter.trim().is_empty() {
            return Err(ValidationError::new(
                "Interpreter cannot be blank".to_string(),
            ));
        }
        if group.trim().is_empty() {
            return Err(ValidationError::new(
                "Group cannot be blank".to_string(),
            ));
        }
        let password_env = EnvVarName::parse(password_env)?;
        let tool_path = std::path::absolute(tool_path).map_err(|e| {
            ValidationError::new(format!(
                "Cannot resolve tool path {}: {}",
                tool_path.display(),
                e
            ))
        })?;

        Ok(Self {
            interpreter: interpreter.to_owned(),
            tool_path,
            group: group.to_owned(),
            password_env,
            dry_run: false,
        })
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
