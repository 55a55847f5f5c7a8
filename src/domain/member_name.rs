use super::ValidationError;

/// A first or last name exactly as it appeared in the roster.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberName(String);

impl MemberName {
    pub fn parse(name: String) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::new(
                "Member name cannot be blank".to_string(),
            ));
        }
        Ok(Self(name))
    }

    /// Whitespace separated words, used to build display names.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

impl AsRef<String> for MemberName {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

#[test]
fn test_valid_member_names() {
    let valid_names = ["a", "mary jane", " O'Neil ", "\"Smith, Jr.\""];
    for valid_name in valid_names.iter() {
        let parsed = MemberName::parse(valid_name.to_string())
            .expect("Failed to parse valid member name");

        assert_eq!(parsed.as_ref(), valid_name);
    }
}

#[test]
fn test_blank_member_names() {
    let blank_names = ["", " ", "\t", "  \t "];
    for blank_name in blank_names.iter() {
        let result = MemberName::parse(blank_name.to_string());
        assert_eq!(
            result.unwrap_err().as_ref(),
            "Member name cannot be blank"
        );
    }
}

#[test]
fn test_member_name_tokens() {
    let name = MemberName::parse("  mary   jane ".to_string()).unwrap();
    assert_eq!(name.tokens().collect::<Vec<_>>(), vec!["mary", "jane"]);
}
