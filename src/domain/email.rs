use super::ValidationError;

/// Third roster column: login-adjacent identifier and contact email.
#[derive(Debug, Clone, PartialEq)]
pub struct UidEmail(String);

impl UidEmail {
    pub fn parse(s: String) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::new(
                "UID email cannot be blank".to_string(),
            ));
        }
        Ok(Self(s))
    }

    /// The administration tool stores any settings value, so a value that
    /// fails this check is still imported.
    pub fn looks_like_email(&self) -> bool {
        validator::validate_email(self.0.as_str())
    }
}

impl AsRef<String> for UidEmail {
    fn as_ref(&self) -> &String {
        &self.0
    }
}
