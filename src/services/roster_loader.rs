use color_eyre::eyre::WrapErr;
use std::path::Path;

use crate::domain::{Member, MemberName, Roster, RosterError, UidEmail};

const REQUIRED_FIELDS: usize = 3;

/// Members accepted from a roster file, plus a diagnostic for every row that
/// was skipped.
#[derive(Debug, Default)]
pub struct LoadedRoster {
    pub members: Roster,
    pub errors: Vec<RosterError>,
}

#[tracing::instrument(name = "Loading roster", skip_all, fields(path = %path.display()))]
pub async fn load_roster(path: &Path) -> Result<LoadedRoster, RosterError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .wrap_err_with(|| {
            format!("failed to read roster file {}", path.display())
        })
        .map_err(RosterError::ReadFailed)?;

    Ok(parse_roster(&contents))
}

pub fn parse_roster(contents: &str) -> LoadedRoster {
    let mut roster = LoadedRoster::default();

    for (index, line) in roster_lines(contents).enumerate() {
        let line_number = index + 1;
        match parse_row(line, line_number) {
            Ok(member) => {
                if !member.uid_email.looks_like_email() {
                    tracing::warn!(
                        "UID email on line {} does not look like an email address",
                        line_number
                    );
                }
                roster.members.push(member);
            }
            Err(e) => {
                tracing::warn!(line = e.line(), "{}", e);
                roster.errors.push(e);
            }
        }
    }

    roster
}

/// Lines ended by `\n`, `\r\n` or a lone `\r`. A trailing terminator does
/// not start an extra empty line.
fn roster_lines(contents: &str) -> impl Iterator<Item = &str> {
    let contents = contents
        .strip_suffix("\r\n")
        .or_else(|| contents.strip_suffix(['\n', '\r']))
        .unwrap_or(contents);

    let mut rest = Some(contents).filter(|c| !c.is_empty());
    std::iter::from_fn(move || {
        let remaining = rest?;
        match remaining.find(['\n', '\r']) {
            Some(end) => {
                let skip = if remaining[end..].starts_with("\r\n") {
                    2
                } else {
                    1
                };
                rest = Some(&remaining[end + skip..]);
                Some(&remaining[..end])
            }
            None => {
                rest = None;
                Some(remaining)
            }
        }
    })
}

fn parse_row(line: &str, line_number: usize) -> Result<Member, RosterError> {
    let fields = split_quote_escaped(line);
    if fields.len() < REQUIRED_FIELDS {
        return Err(RosterError::MalformedRow {
            line: line_number,
            fields: fields.len(),
        });
    }

    let first_name = MemberName::parse(fields[0].to_owned())
        .map_err(|_| RosterError::MissingFirstName(line_number))?;
    let last_name = MemberName::parse(fields[1].to_owned())
        .map_err(|_| RosterError::MissingLastName(line_number))?;
    let uid_email = UidEmail::parse(fields[2].to_owned())
        .map_err(|_| RosterError::MissingUidEmail(line_number))?;

    Ok(Member::new(first_name, last_name, uid_email))
}

/// Splits on every comma followed by an even number of double quotes up to
/// the end of the line, so commas inside a quoted field are kept. Quotes are
/// left in the returned fields.
pub fn split_quote_escaped(line: &str) -> Vec<&str> {
    let total_quotes = line.matches('"').count();
    let mut quotes_seen = 0;
    let mut start = 0;
    let mut fields = Vec::new();

    for (index, c) in line.char_indices() {
        match c {
            '"' => quotes_seen += 1,
            ',' if (total_quotes - quotes_seen) % 2 == 0 => {
                fields.push(&line[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    fields.push(&line[start..]);

    fields
}
