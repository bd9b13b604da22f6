//! # 사용자 생성 요청 DTO
//!
//! `POST /users` 본문을 표현합니다. 필수 필드도 `Option`으로 받아서,
//! 누락된 필드를 JSON 파싱 에러가 아닌 `required` 위반으로 보고합니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 |
//! |------|------|
//! | `firstName` | 필수, 2-20자 |
//! | `lastName` | 필수, 2-20자 |
//! | `role` | 필수, `citizen` \| `manager` |
//!
//! `(firstName, lastName)` 쌍의 유일성은 서비스 계층의 유일성 검사기가 확인합니다.
//!
//! ```json
//! {
//!   "firstName": "John",
//!   "lastName": "Doe",
//!   "role": "citizen"
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::{Role, User};
use crate::validation::rules::validate_role;
use crate::validation::{FieldName, validate_in_order};

/// 새로운 사용자 생성을 위한 요청 DTO
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(
        required(message = "firstName is required"),
        length(min = 2, max = 20, message = "firstName must be between 2 and 20 characters")
    )]
    pub first_name: Option<String>,

    #[validate(
        required(message = "lastName is required"),
        length(min = 2, max = 20, message = "lastName must be between 2 and 20 characters")
    )]
    pub last_name: Option<String>,

    #[validate(required(message = "role is required"), custom(function = "validate_role"))]
    pub role: Option<String>,
}

impl CreateUserRequest {
    const FIELDS: &'static [FieldName] = &[
        FieldName::new("first_name", "firstName"),
        FieldName::new("last_name", "lastName"),
        FieldName::new("role", "role"),
    ];

    /// 검증을 통과하면 아직 저장되지 않은 [`User`]로 변환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 하나 이상의 필드 위반 (선언 순서)
    pub fn into_user(self) -> AppResult<User> {
        validate_in_order(&self, Self::FIELDS).into_result()?;

        let (Some(first_name), Some(last_name), Some(role)) = (self.first_name, self.last_name, self.role) else {
            return Err(AppError::InternalError("validated user request is missing fields".to_string()));
        };
        let role = Role::parse(&role)
            .ok_or_else(|| AppError::InternalError(format!("validated role {} is unknown", role)))?;

        Ok(User::new(first_name, last_name, role))
    }
}
