//! # 사용자 부분 수정 요청 DTO
//!
//! `PATCH /users/{id}` 본문입니다. 각 필드는 독립적으로 존재하거나 없으며,
//! 존재하는 필드만 기존 엔티티에 덮어씁니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::{Role, User};
use crate::validation::rules::validate_role;
use crate::validation::{FieldName, validate_in_order};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 2, max = 20, message = "firstName must be between 2 and 20 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 2, max = 20, message = "lastName must be between 2 and 20 characters"))]
    pub last_name: Option<String>,

    #[validate(custom(function = "validate_role"))]
    pub role: Option<String>,
}

impl UpdateUserRequest {
    const FIELDS: &'static [FieldName] = &[
        FieldName::new("first_name", "firstName"),
        FieldName::new("last_name", "lastName"),
        FieldName::new("role", "role"),
    ];

    /// 이름 필드 중 하나라도 포함되어 있는지
    pub fn touches_name(&self) -> bool {
        self.first_name.is_some() || self.last_name.is_some()
    }

    /// 검증 후 존재하는 필드만 `user`에 적용합니다.
    pub fn apply_to(self, user: &mut User) -> AppResult<()> {
        validate_in_order(&self, Self::FIELDS).into_result()?;

        if let Some(first_name) = self.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            user.last_name = last_name;
        }
        if let Some(role) = self.role {
            user.role = Role::parse(&role)
                .ok_or_else(|| AppError::InternalError(format!("validated role {} is unknown", role)))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_present_fields_are_applied() {
        let mut user = User::new("John".to_string(), "Doe".to_string(), Role::Citizen);
        let original_created_at = user.created_at;

        let patch = UpdateUserRequest {
            role: Some("manager".to_string()),
            ..Default::default()
        };
        assert!(!patch.touches_name());
        patch.apply_to(&mut user).unwrap();

        assert_eq!(user.first_name, "John");
        assert_eq!(user.last_name, "Doe");
        assert_eq!(user.role, Role::Manager);
        assert_eq!(user.created_at, original_created_at);
    }

    #[test]
    fn test_invalid_patch_leaves_user_untouched() {
        let mut user = User::new("John".to_string(), "Doe".to_string(), Role::Citizen);

        let patch = UpdateUserRequest {
            first_name: Some("Jane".to_string()),
            last_name: Some("X".to_string()),
            role: None,
        };
        let err = patch.apply_to(&mut user).unwrap_err();

        assert!(matches!(err, AppError::ValidationError(v) if v.has_field("lastName")));
        assert_eq!(user.first_name, "John");
    }

    #[test]
    fn test_empty_patch_is_valid() {
        let mut user = User::new("John".to_string(), "Doe".to_string(), Role::Citizen);
        let before = user.clone();

        UpdateUserRequest::default().apply_to(&mut user).unwrap();

        assert_eq!(user, before);
    }
}
