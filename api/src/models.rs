//! Wire types for the shared-links backend.

use serde::{Deserialize, Serialize};

/// A user account as the profile endpoint returns it.
///
/// Link rows nest a reduced copy of the reporter (`id` and `username` only),
/// so the remaining fields default to empty when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// A shared link.
///
/// `reporter` is nullable on the wire: the backend keeps links whose
/// reporting account has been deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub reporter: Option<UserProfile>,
    pub vote_rank: i64,
}

impl Link {
    /// The reporter's username, if the reporting account still exists.
    pub fn reporter_name(&self) -> Option<&str> {
        self.reporter.as_ref().map(|user| user.username.as_str())
    }
}

/// An auth token together with the profile it authenticates. The two only
/// ever travel as a pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Authentication {
    pub token: String,
    pub user: UserProfile,
}

/// Registration form payload, serialized with the backend's field names.
/// Password confirmation is checked by the backend, not here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub password_confirm: String,
}

/// Parameters from an email-verification link, passed through to the backend
/// as the opaque strings they arrive as.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verification {
    pub user_id: String,
    pub timestamp: String,
    pub signature: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn link_deserializes_with_a_nested_reporter() {
        let link: Link = serde_json::from_value(json!({
            "id": 42,
            "title": "Interesting article",
            "url": "https://example.com/article",
            "reporter": {"id": 1, "username": "alice"},
            "vote_rank": 3,
        }))
        .unwrap();

        assert_eq!(link.id, 42);
        assert_eq!(link.reporter_name(), Some("alice"));
        assert_eq!(link.vote_rank, 3);
    }

    #[test]
    fn link_deserializes_with_a_deleted_reporter() {
        let link: Link = serde_json::from_value(json!({
            "id": 7,
            "title": "Orphaned",
            "url": "https://example.com/orphan",
            "reporter": null,
            "vote_rank": -2,
        }))
        .unwrap();

        assert!(link.reporter.is_none());
        assert_eq!(link.reporter_name(), None);
    }

    #[test]
    fn profile_fills_in_missing_name_fields() {
        let profile: UserProfile =
            serde_json::from_value(json!({"id": 1, "username": "alice"})).unwrap();

        assert_eq!(profile.username, "alice");
        assert_eq!(profile.email, "");
        assert_eq!(profile.first_name, "");
        assert_eq!(profile.last_name, "");
    }

    #[test]
    fn registration_serializes_the_backend_field_names() {
        let registration = Registration {
            username: "alice".into(),
            email: "alice@example.com".into(),
            first_name: "Alice".into(),
            last_name: "Liddell".into(),
            password: "secret".into(),
            password_confirm: "secret".into(),
        };

        let value = serde_json::to_value(&registration).unwrap();
        assert_eq!(
            value,
            json!({
                "username": "alice",
                "email": "alice@example.com",
                "first_name": "Alice",
                "last_name": "Liddell",
                "password": "secret",
                "password_confirm": "secret",
            })
        );
    }
}
