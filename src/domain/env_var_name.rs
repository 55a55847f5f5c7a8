use lazy_static::lazy_static;
use regex::Regex;

use super::ValidationError;

lazy_static! {
    static ref ENV_VAR_NAME: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")
        .expect("Regex for EnvVarName parser is invalid");
}

/// Name of the variable that carries the password to the created account.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvVarName(String);

impl EnvVarName {
    pub fn parse(name: &str) -> Result<Self, ValidationError> {
        if ENV_VAR_NAME.is_match(name) {
            Ok(Self(name.to_owned()))
        } else {
            Err(ValidationError::new(format!(
                "Invalid environment variable name: {:?}",
                name
            )))
        }
    }
}

impl AsRef<str> for EnvVarName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EnvVarName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
