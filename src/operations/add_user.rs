use std::io::Write;

use crate::{
    app_state::{AppState, ImportConfig},
    domain::{ExitStatus, ImportError, Invocation, Member, Password},
    utils::constants::tool::{ADD_USER_SUBCOMMAND, PASSWORD_FROM_ENV_FLAG},
};

use super::run_and_echo;

pub const ADD_USER_LABEL: &str = "add user";

pub fn add_user_invocation(
    config: &ImportConfig,
    member: &Member,
    password: &Password,
) -> Invocation {
    Invocation::new(config.interpreter.as_str())
        .arg(config.tool_path.display().to_string())
        .arg(ADD_USER_SUBCOMMAND)
        .arg(format!("--display-name={}", member.display_name()))
        .arg(format!("--group={}", config.group))
        .arg(PASSWORD_FROM_ENV_FLAG)
        .arg(member.username().to_string())
        .env(config.password_env.to_string(), password.as_ref().clone())
}

#[tracing::instrument(name = "Add user", skip_all)]
pub async fn add_user<W: Write>(
    state: &AppState,
    config: &ImportConfig,
    member: &Member,
    password: &Password,
    out: &mut W,
) -> Result<ExitStatus, ImportError> {
    let invocation = add_user_invocation(config, member, password);
    run_and_echo(&state.command_runner, ADD_USER_LABEL, &invocation, out).await
}
