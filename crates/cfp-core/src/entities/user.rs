use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// Authenticated user profile from `GET /profile`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl User {
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_user_role_is_student() {
        let user: User = serde_json::from_value(serde_json::json!({
            "user_id": "u-1",
            "username": "jdoe",
            "email": "jdoe@students.example.ac.ke",
            "role": "user"
        }))
        .expect("should deserialize");
        assert_eq!(user.role, Role::Student);
        assert!(!user.is_admin());
    }
}
