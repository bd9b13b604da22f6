//! 엔티티 필드 규칙
//!
//! `validator` derive의 `custom(function = ...)`에서 참조하는 함수들과,
//! derive로 표현하기 어려운 숫자 형식 검사를 모아 둡니다.
//! enum 값은 대소문자 정규화 없이 저장 형식 그대로만 허용합니다.

use validator::ValidationError;

use crate::core::errors::FieldViolation;
use crate::domain::entities::issues::IssueStatus;
use crate::domain::entities::users::Role;

/// 태그 하나의 최소 글자 수
pub const TAG_MIN_CHARS: usize = 3;

/// `role` 필드: `citizen` | `manager`
pub fn validate_role(role: &str) -> Result<(), ValidationError> {
    match Role::parse(role) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("enum").with_message(
            format!("role must be one of: {}", Role::ALLOWED.join(", ")).into(),
        )),
    }
}

/// `status` 필드: `new` | `inProgress` | `completed` | `canceled`
pub fn validate_status(status: &str) -> Result<(), ValidationError> {
    match IssueStatus::parse(status) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("enum").with_message(
            format!("status must be one of: {}", IssueStatus::ALLOWED.join(", ")).into(),
        )),
    }
}

/// `tags` 필드: 각 태그는 최소 3글자
pub fn validate_tags(tags: &[String]) -> Result<(), ValidationError> {
    match tags.iter().position(|tag| tag.chars().count() < TAG_MIN_CHARS) {
        None => Ok(()),
        Some(index) => Err(ValidationError::new("length").with_message(
            format!("tags[{}] must be at least {} characters", index, TAG_MIN_CHARS).into(),
        )),
    }
}

/// 위도/경도는 유한한 숫자여야 합니다.
///
/// 값이 없는 경우는 `required` 규칙이 처리하므로 여기서는 건너뜁니다.
pub fn check_finite(field: &str, value: Option<f64>) -> Option<FieldViolation> {
    match value {
        Some(number) if !number.is_finite() => Some(FieldViolation::new(
            field,
            "number",
            format!("{} must be a finite number", field),
        )),
        _ => None,
    }
}
