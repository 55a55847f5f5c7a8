use super::MemberName;

/// Account name on the administration tool, derived from a member's names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn from_names(first_name: &MemberName, last_name: &MemberName) -> Self {
        let username = format!(
            "{}{}",
            first_name.as_ref().to_lowercase(),
            last_name.as_ref().to_lowercase()
        )
        .replace(' ', "");

        Self(username)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
