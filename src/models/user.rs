use serde::{Deserialize, Serialize};

/// Maximum name length, counting the terminator slot
pub const MAX_NAME_LENGTH: usize = 128;

/// Maximum email length, counting the terminator slot
pub const MAX_EMAIL_LENGTH: usize = 256;

/// Identifier assigned to a user by its owning service
pub type UserId = u32;

/// A single managed user record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub is_active: bool,
}

impl User {
    /// Build a user from the given fields.
    ///
    /// Missing fields become empty strings and long values are truncated to
    /// fit. The email is stored as given; validating it is the caller's job.
    pub fn create(id: UserId, name: Option<&str>, email: Option<&str>) -> Self {
        let mut user = Self::default();
        user.init(id, name, email);
        user
    }

    /// Reinitialize this record in place, marking it active
    pub fn init(&mut self, id: UserId, name: Option<&str>, email: Option<&str>) {
        self.id = id;
        self.is_active = true;
        self.name = name.map(truncate_name).unwrap_or_default();
        self.email = email.map(truncate_email).unwrap_or_default();
    }

    /// Overwrite the name, truncating like `init`
    pub fn set_name(&mut self, name: &str) {
        self.name = truncate_name(name);
    }

    /// Overwrite the email, truncating like `init`. No validation is done here.
    pub fn set_email(&mut self, email: &str) {
        self.email = truncate_email(email);
    }

    /// Render the single-line key/value form of this user.
    ///
    /// Field values are embedded verbatim; quotes or backslashes in `name`
    /// or `email` are not escaped.
    pub fn to_dict(&self) -> String {
        format!(
            "{{\"id\": {}, \"name\": \"{}\", \"email\": \"{}\", \"is_active\": {}}}",
            self.id, self.name, self.email, self.is_active
        )
    }
}

fn truncate_name(value: &str) -> String {
    truncate_to(value, MAX_NAME_LENGTH)
}

fn truncate_email(value: &str) -> String {
    truncate_to(value, MAX_EMAIL_LENGTH)
}

/// Keep at most `max_len - 1` bytes, cutting back to a char boundary
fn truncate_to(value: &str, max_len: usize) -> String {
    let keep = max_len.saturating_sub(1);
    if value.len() <= keep {
        return value.to_string();
    }
    let end = value
        .char_indices()
        .take_while(|(idx, c)| idx + c.len_utf8() <= keep)
        .last()
        .map_or(0, |(idx, c)| idx + c.len_utf8());
    value[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_sets_active() {
        let user = User::create(7, Some("Alice Johnson"), Some("alice@example.com"));
        assert_eq!(user.id, 7);
        assert_eq!(user.name, "Alice Johnson");
        assert_eq!(user.email, "alice@example.com");
        assert!(user.is_active);
    }

    #[test]
    fn test_create_with_missing_fields() {
        let user = User::create(1, None, None);
        assert_eq!(user.name, "");
        assert_eq!(user.email, "");
        assert!(user.is_active);
    }

    #[test]
    fn test_create_does_not_validate_email() {
        let user = User::create(1, Some("Bob"), Some("not-an-email"));
        assert_eq!(user.email, "not-an-email");
    }

    #[test]
    fn test_init_reuses_record() {
        let mut user = User::create(1, Some("Old"), Some("old@example.com"));
        user.is_active = false;
        user.init(2, Some("New"), None);
        assert_eq!(user.id, 2);
        assert_eq!(user.name, "New");
        assert_eq!(user.email, "");
        assert!(user.is_active);
    }

    #[test]
    fn test_name_truncation() {
        let long_name = "a".repeat(500);
        let user = User::create(1, Some(&long_name), Some("a@b.c"));
        assert_eq!(user.name.chars().count(), MAX_NAME_LENGTH - 1);
    }

    #[test]
    fn test_email_truncation() {
        let long_email = format!("{}@example.com", "x".repeat(400));
        let user = User::create(1, Some("X"), Some(&long_email));
        assert_eq!(user.email.chars().count(), MAX_EMAIL_LENGTH - 1);
        assert!(long_email.starts_with(&user.email));
    }

    #[test]
    fn test_truncation_keeps_char_boundaries() {
        let long_name = "é".repeat(200);
        let user = User::create(1, Some(&long_name), None);
        assert!(user.name.len() <= MAX_NAME_LENGTH - 1);
        assert_eq!(user.name.len(), 126);
        assert!(user.name.chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_truncation_mixed_widths() {
        // 126 ASCII bytes then a 4-byte char that cannot fit in the last slot
        let name = format!("{}🦀 tail", "a".repeat(MAX_NAME_LENGTH - 2));
        let mut user = User::create(1, Some("X"), Some("x@y.z"));
        user.set_name(&name);
        assert_eq!(user.name, "a".repeat(MAX_NAME_LENGTH - 2));

        let wide_email = "ü".repeat(MAX_EMAIL_LENGTH);
        user.set_email(&wide_email);
        assert!(user.email.len() <= MAX_EMAIL_LENGTH - 1);
        assert!(wide_email.starts_with(&user.email));
    }

    #[test]
    fn test_exact_limit_is_truncated_by_one() {
        let name = "n".repeat(MAX_NAME_LENGTH);
        let user = User::create(1, Some(&name), None);
        assert_eq!(user.name.len(), MAX_NAME_LENGTH - 1);

        let short = "n".repeat(MAX_NAME_LENGTH - 1);
        let user = User::create(1, Some(&short), None);
        assert_eq!(user.name, short);
    }

    #[test]
    fn test_to_dict() {
        let user = User::create(1, Some("Alice Johnson"), Some("alice@example.com"));
        let dict = user.to_dict();
        assert_eq!(
            dict,
            r#"{"id": 1, "name": "Alice Johnson", "email": "alice@example.com", "is_active": true}"#
        );
    }

    #[test]
    fn test_to_dict_inactive_and_unescaped() {
        let mut user = User::create(3, Some("Quote \"Q\""), Some("q@x.y"));
        user.is_active = false;
        let dict = user.to_dict();
        assert!(dict.contains(r#""name": "Quote "Q"""#));
        assert!(dict.ends_with(r#""is_active": false}"#));
    }

    #[test]
    fn test_user_serialization() {
        let user = User::create(4, Some("Dana"), Some("dana@example.com"));
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"is_active\":true"));
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
