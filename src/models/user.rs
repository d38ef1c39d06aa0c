use serde::{Deserialize, Serialize};

/// Closed role enumeration. The backend enforces the real authorization
/// boundary; the client only uses this to gate affordances.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Whether moderation and tool edit/delete affordances are shown at all.
    pub fn can_moderate(self) -> bool {
        match self {
            Role::Admin => true,
            Role::User => false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// The authenticated identity plus its bearer token, as persisted to
/// local storage and provided through context to the component tree.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_lowercase_wire_form() {
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    }

    #[test]
    fn only_admins_can_moderate() {
        assert!(Role::Admin.can_moderate());
        assert!(!Role::User.can_moderate());
    }

    #[test]
    fn session_round_trips_through_json() {
        let session = Session {
            user: User {
                id: "u1".into(),
                email: "ada@example.com".into(),
                name: "Ada".into(),
                role: Role::User,
            },
            token: "tok-123".into(),
        };
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}
