use super::{DisplayName, MemberName, UidEmail, Username};

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub first_name: MemberName,
    pub last_name: MemberName,
    pub uid_email: UidEmail,
}

impl Member {
    pub fn new(
        first_name: MemberName,
        last_name: MemberName,
        uid_email: UidEmail,
    ) -> Self {
        Self {
            first_name,
            last_name,
            uid_email,
        }
    }

    pub fn username(&self) -> Username {
        Username::from_names(&self.first_name, &self.last_name)
    }

    pub fn display_name(&self) -> DisplayName {
        DisplayName::from_names(&self.first_name, &self.last_name)
    }
}

/// Validated members in roster file order.
pub type Roster = Vec<Member>;
