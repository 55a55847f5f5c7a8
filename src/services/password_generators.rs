use rand::{distributions::Alphanumeric, Rng};
use secrecy::Secret;

use crate::domain::{Password, PasswordGenerator, Username};

pub const RANDOM_PASSWORD_LENGTH: usize = 24;

/// Random alphanumeric passwords. Members are expected to reset theirs
/// through the email address set on the account.
#[derive(Debug, Default)]
pub struct RandomPasswordGenerator;

impl PasswordGenerator for RandomPasswordGenerator {
    fn generate(&self, _username: &Username) -> Password {
        let password: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(RANDOM_PASSWORD_LENGTH)
            .map(char::from)
            .collect();

        Password::parse(Secret::new(password))
            .expect("generated password is never empty")
    }
}

/// Username followed by a fixed suffix. Predictable, only for rosters that
/// were provisioned this way before.
#[derive(Debug)]
pub struct SuffixPasswordGenerator {
    suffix: String,
}

impl SuffixPasswordGenerator {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }
}

impl PasswordGenerator for SuffixPasswordGenerator {
    fn generate(&self, username: &Username) -> Password {
        let password = format!("{}{}", username, self.suffix);
        Password::parse(Secret::new(password))
            .expect("username-based password is never empty")
    }
}
