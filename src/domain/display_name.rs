use super::MemberName;

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayName(String);

impl DisplayName {
    /// Capitalizes every word of the first then last name and joins them with
    /// single spaces. Only the first character of a word is uppercased, so
    /// `smith-doe` becomes `Smith-doe`.
    pub fn from_names(first_name: &MemberName, last_name: &MemberName) -> Self {
        let display_name = first_name
            .tokens()
            .chain(last_name.tokens())
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ");

        Self(display_name)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DisplayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
