//! User request types.

use serde::{Deserialize, Serialize};

/// Request payload to create a user record.
///
/// Both fields are required and must be non-empty; they are kept optional at
/// the deserialization layer so that absent fields are reported through the
/// service's own validation message rather than a body rejection.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Name of the user to create.
    #[serde(default)]
    pub name: Option<String>,

    /// Email address of the user to create, unique across all users.
    #[serde(default)]
    pub email: Option<String>,
}

impl CreateUser {
    /// Returns the validated `(name, email)` pair.
    ///
    /// Yields `None` when either field is absent or empty. Values are passed
    /// through exactly as sent; no trimming or case normalization is applied.
    pub fn into_fields(self) -> Option<(String, String)> {
        let name = self.name.filter(|name| !name.is_empty())?;
        let email = self.email.filter(|email| !email.is_empty())?;
        Some((name, email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: Option<&str>, email: Option<&str>) -> CreateUser {
        CreateUser {
            name: name.map(str::to_owned),
            email: email.map(str::to_owned),
        }
    }

    #[test]
    fn complete_request_yields_fields() {
        let fields = request(Some("Alice"), Some("a@x.com")).into_fields();
        assert_eq!(fields, Some(("Alice".to_owned(), "a@x.com".to_owned())));
    }

    #[test]
    fn absent_fields_are_rejected() {
        assert_eq!(request(None, Some("a@x.com")).into_fields(), None);
        assert_eq!(request(Some("Alice"), None).into_fields(), None);
        assert_eq!(request(None, None).into_fields(), None);
    }

    #[test]
    fn empty_fields_are_rejected() {
        assert_eq!(request(Some(""), Some("a@x.com")).into_fields(), None);
        assert_eq!(request(Some("Alice"), Some("")).into_fields(), None);
    }

    #[test]
    fn values_are_not_normalized() {
        let fields = request(Some("  Alice  "), Some("A@X.com")).into_fields();
        assert_eq!(
            fields,
            Some(("  Alice  ".to_owned(), "A@X.com".to_owned()))
        );
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let request: CreateUser = serde_json::from_str("{}").unwrap();
        assert_eq!(request.into_fields(), None);

        let request: CreateUser =
            serde_json::from_str(r#"{"name": "Bob", "email": "b@x.com"}"#).unwrap();
        assert!(request.into_fields().is_some());
    }
}
