/// User domain type
use super::ids::UserId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User account
///
/// Profile fields this backend does not know about are kept in `extra` and
/// returned unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Login name
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub username: String,

    /// Contact address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Display name shown in clients
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Create a user with only the required profile fields
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: None,
            display_name: None,
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_profile_fields_round_trip() {
        let raw = json!({
            "id": "u9",
            "username": "zoe",
            "avatar_url": "http://x/a.png",
            "premium": true,
        });

        let user: User = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(user.extra["premium"], json!(true));
        assert_eq!(serde_json::to_value(&user).unwrap(), raw);
    }

    #[test]
    fn username_is_optional() {
        let raw = json!({ "id": "u1", "name": "Alice" });

        let user: User = serde_json::from_value(raw.clone()).unwrap();
        assert!(user.username.is_empty());
        assert_eq!(serde_json::to_value(&user).unwrap(), raw);
    }
}
