use std::io::Write;

use crate::{
    app_state::{AppState, ImportConfig},
    domain::{ImportError, Member, MemberOutcome},
};

use super::{add_user, set_email};

/// Creates the account, then sets its email once the first command exited.
#[tracing::instrument(name = "Import member", skip_all, fields(username = tracing::field::Empty))]
pub async fn import_member<W: Write>(
    state: &AppState,
    config: &ImportConfig,
    member: &Member,
    out: &mut W,
) -> Result<MemberOutcome, ImportError> {
    let username = member.username();
    tracing::Span::current()
        .record("username", tracing::field::display(&username));

    let password = state.password_generator.generate(&username);
    let mut outcome = MemberOutcome::new(username);

    let status = add_user(state, config, member, &password, out).await?;
    outcome.record_add_user(status);

    let status = set_email(state, config, member, out).await?;
    outcome.record_set_email(status);

    outcome.finish();
    tracing::debug!(stage = ?outcome.stage, "member processed");

    Ok(outcome)
}
