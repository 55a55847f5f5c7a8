use super::{Username, ValidationError};
use secrecy::{ExposeSecret, Secret};

#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Password {
    pub fn parse(s: Secret<String>) -> Result<Password, ValidationError> {
        if s.expose_secret().is_empty() {
            return Err(ValidationError::new(
                "Password cannot be empty".to_string(),
            ));
        }
        Ok(Self(s))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// Strategy used to pick the initial password of every created account.
pub trait PasswordGenerator {
    fn generate(&self, username: &Username) -> Password;
}
