use std::io::Write;

use crate::{
    app_state::{AppState, ImportConfig},
    domain::{ExitStatus, ImportError, Invocation, Member},
    utils::constants::tool::{EMAIL_KEY, SETTINGS_APP, USER_SETTING_SUBCOMMAND},
};

use super::run_and_echo;

pub const SET_EMAIL_LABEL: &str = "set user email";

pub fn set_email_invocation(config: &ImportConfig, member: &Member) -> Invocation {
    Invocation::new(config.interpreter.as_str())
        .arg(config.tool_path.display().to_string())
        .arg(USER_SETTING_SUBCOMMAND)
        .arg(member.username().to_string())
        .arg(SETTINGS_APP)
        .arg(EMAIL_KEY)
        .arg(member.uid_email.as_ref().clone())
}

#[tracing::instrument(name = "Set user email", skip_all)]
pub async fn set_email<W: Write>(
    state: &AppState,
    config: &ImportConfig,
    member: &Member,
    out: &mut W,
) -> Result<ExitStatus, ImportError> {
    let invocation = set_email_invocation(config, member);
    run_and_echo(&state.command_runner, SET_EMAIL_LABEL, &invocation, out).await
}
