use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    app_state::{
        AppState, CommandRunnerType, ImportConfig, PasswordGeneratorType,
    },
    domain::ImportError,
    services::{
        ProcessCommandRunner, RandomPasswordGenerator, RecordingCommandRunner,
        SuffixPasswordGenerator,
    },
    utils::constants::{
        env, DEFAULT_GROUP, DEFAULT_INTERPRETER, DEFAULT_PASSWORD_ENV,
    },
    Importer,
};

/// Create accounts on an administration tool from a CSV roster of
/// `first name,last name,uid email` rows.
#[derive(Debug, Parser)]
#[command(name = "roster-importer", version, about)]
pub struct Cli {
    /// Roster file, one member per line, no header row
    pub roster: PathBuf,

    /// Entry script of the administration tool (for example Nextcloud's occ)
    pub tool: PathBuf,

    /// Interpreter used to run the tool
    #[arg(long, env = env::INTERPRETER_ENV_VAR, default_value = DEFAULT_INTERPRETER)]
    pub interpreter: String,

    /// Group every created account is added to
    #[arg(long, env = env::GROUP_ENV_VAR, default_value = DEFAULT_GROUP)]
    pub group: String,

    /// Environment variable the tool reads the new password from
    #[arg(long, env = env::PASSWORD_ENV_ENV_VAR, default_value = DEFAULT_PASSWORD_ENV)]
    pub password_env: String,

    /// Use `<username><suffix>` passwords instead of random ones
    #[arg(long, env = env::PASSWORD_SUFFIX_ENV_VAR)]
    pub password_suffix: Option<String>,

    /// Print the commands without running them
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    pub fn import_config(&self) -> Result<ImportConfig, ImportError> {
        let config = ImportConfig::new(
            &self.interpreter,
            &self.tool,
            &self.group,
            &self.password_env,
        )?;
        Ok(config.with_dry_run(self.dry_run))
    }

    /// Dry runs only record the commands.
    pub fn command_runner(&self) -> CommandRunnerType {
        if self.dry_run {
            Arc::new(RwLock::new(RecordingCommandRunner::default()))
        } else {
            Arc::new(RwLock::new(ProcessCommandRunner::new()))
        }
    }

    pub fn password_generator(&self) -> PasswordGeneratorType {
        match &self.password_suffix {
            Some(suffix) => {
                tracing::warn!(
                    "Using predictable username-based passwords, members should change them"
                );
                Arc::new(SuffixPasswordGenerator::new(suffix.as_str()))
            }
            None => Arc::new(RandomPasswordGenerator),
        }
    }

    pub fn build_importer(&self) -> Result<Importer, ImportError> {
        let config = self.import_config()?;
        let state =
            AppState::new(self.command_runner(), self.password_generator());
        Ok(Importer::new(state, config))
    }
}
