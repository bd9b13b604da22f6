use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::{Role, User};

/// 사용자 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let id = user.id_string().unwrap_or_default();
        let User {
            first_name,
            last_name,
            role,
            created_at,
            ..
        } = user;

        Self {
            id,
            first_name,
            last_name,
            role,
            created_at,
        }
    }
}
