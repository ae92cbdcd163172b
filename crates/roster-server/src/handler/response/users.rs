//! User response types.

use jiff::Timestamp;
use roster_postgres::model;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PageInfo;

/// Represents a stored user record.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    /// Unique identifier of the user.
    pub id: Uuid,
    /// Name of the user.
    pub name: String,
    /// Email address of the user.
    pub email: String,
    /// Timestamp when the user was created.
    pub created_at: Timestamp,
}

impl UserData {
    pub fn from_model(user: model::User) -> Self {
        Self {
            id: user.id,
            name: user.display_name,
            email: user.email_address,
            created_at: user.created_at.into(),
        }
    }
}

/// Response body for a paginated user listing.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserList {
    /// Always `true` for successful responses.
    pub success: bool,
    /// Human-readable outcome description.
    pub message: String,
    /// Pagination descriptor for this page.
    pub pagination: PageInfo,
    /// The requested page of users.
    pub users: Vec<UserData>,
}

impl UserList {
    pub fn new(pagination: PageInfo, users: Vec<UserData>) -> Self {
        Self {
            success: true,
            message: "Data fetched successfully".to_owned(),
            pagination,
            users,
        }
    }
}

/// Response body for a newly created user.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreated {
    /// Always `true` for successful responses.
    pub success: bool,
    /// Human-readable outcome description.
    pub message: String,
    /// The created user with its store-assigned identifier.
    pub user: UserData,
}

impl UserCreated {
    pub fn new(user: UserData) -> Self {
        Self {
            success: true,
            message: "User created successfully".to_owned(),
            user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> UserData {
        UserData {
            id: Uuid::nil(),
            name: "Alice".to_owned(),
            email: "a@x.com".to_owned(),
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn list_envelope_is_successful() {
        let response = UserList::new(PageInfo::new(1, 15, 1), vec![sample_user()]);
        let body = serde_json::to_value(&response).unwrap();

        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Data fetched successfully");
        assert_eq!(body["pagination"]["totalUsers"], 1);
        assert_eq!(body["users"][0]["name"], "Alice");
        assert_eq!(body["users"][0]["email"], "a@x.com");
    }

    #[test]
    fn created_envelope_carries_the_user() {
        let response = UserCreated::new(sample_user());
        let body = serde_json::to_value(&response).unwrap();

        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "User created successfully");
        assert_eq!(body["user"]["email"], "a@x.com");
    }
}
