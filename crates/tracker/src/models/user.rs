//! User record.

use serde::{Deserialize, Serialize};

use verdant_core::{Email, UserId};

/// A registered user.
///
/// Created at registration and never updated or deleted. The session
/// store holds a copy of one of these records while logged in. No
/// password or credential material is ever part of this record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID (within the registered-users store).
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address; uniqueness is enforced at registration time only.
    pub email: Email,
    /// Optional profile photo URL.
    #[serde(
        rename = "photoURL",
        default,
        deserialize_with = "crate::models::plant::de::empty_string_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub photo_url: Option<String>,
}

impl User {
    /// Build a new user record with a freshly generated ID.
    #[must_use]
    pub fn new(name: impl Into<String>, email: Email, photo_url: Option<String>) -> Self {
        Self {
            id: UserId::generate(),
            name: name.into(),
            email,
            photo_url: photo_url.filter(|url| !url.is_empty()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_field_names() {
        let user = User {
            id: UserId::new("1721049600000"),
            name: "Flora".to_owned(),
            email: Email::parse("flora@example.com").unwrap(),
            photo_url: Some("https://example.com/flora.png".to_owned()),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["photoURL"], "https://example.com/flora.png");
        assert_eq!(json["email"], "flora@example.com");
    }

    #[test]
    fn test_empty_photo_url_reads_as_absent() {
        let json = r#"{"id":"1","name":"Flora","email":"flora@example.com","photoURL":""}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.photo_url, None);
    }

    #[test]
    fn test_missing_photo_url_reads_as_absent() {
        let json = r#"{"id":"1","name":"Flora","email":"flora@example.com"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.photo_url, None);
    }
}
