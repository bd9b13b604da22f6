//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 리소스 서비스가 반환하는 모든 실패는 하나의 [`AppError`]로 표현됩니다.
//! 이 모듈은 에러의 *종류*만 정의하며, HTTP 상태 코드로의 변환은
//! 전송 계층(`handlers::errors`)에서 담당합니다.
//!
//! ## 에러 분류
//!
//! | 종류 | 의미 |
//! |------|------|
//! | [`ErrorKind::NotFound`] | ID 형식이 잘못되었거나 문서가 없음 |
//! | [`ErrorKind::FieldValidation`] | 필드 제약 위반 (길이, enum, 필수값, 숫자 형식, 태그 길이) |
//! | [`ErrorKind::ReferentialViolation`] | 참조하는 사용자 ID가 존재하지 않음 |
//! | [`ErrorKind::UniquenessConflict`] | (firstName, lastName) 쌍이 이미 사용 중 |
//! | [`ErrorKind::StoreFailure`] | 저장소 자체의 실패 (연결, 내부 오류) |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn get_user(&self, id: &str) -> AppResult<UserResponse> {
//!     let user = self.users
//!         .find_by_id(&object_id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound(format!("No user found with ID {}", id)))?;
//!     Ok(UserResponse::from(user))
//! }
//! ```

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// 단일 필드에 대한 검증 위반
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// 위반이 발생한 필드 (JSON 이름, 예: `firstName`)
    pub field: String,
    /// 기계가 읽을 수 있는 위반 코드 (`required`, `length`, `enum`, ...)
    pub code: String,
    /// 사람이 읽을 수 있는 메시지
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// 순서가 보존되는 필드 위반 목록
///
/// 검증기가 선언한 필드 순서대로 위반이 쌓이므로, 클라이언트는 항상
/// 같은 순서로 에러를 받습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldViolations(Vec<FieldViolation>);

impl FieldViolations {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// 위반 하나만 담은 목록
    pub fn single(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![FieldViolation::new(field, code, message)])
    }

    pub fn push(&mut self, violation: FieldViolation) {
        self.0.push(violation);
    }

    pub fn extend(&mut self, other: FieldViolations) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.0.iter()
    }

    /// 특정 필드에 위반이 있는지 확인합니다.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

    /// 위반이 없으면 `Ok(())`, 있으면 [`AppError::ValidationError`]
    pub fn into_result(self) -> AppResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AppError::ValidationError(self))
        }
    }
}

impl fmt::Display for FieldViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl IntoIterator for FieldViolations {
    type Item = FieldViolation;
    type IntoIter = std::vec::IntoIter<FieldViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// 전송 계층이 상태 코드로 매핑하는 에러 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    FieldValidation,
    ReferentialViolation,
    UniquenessConflict,
    StoreFailure,
    Internal,
}

impl ErrorKind {
    /// 응답 본문의 `error` 필드에 쓰이는 안정적인 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::FieldValidation => "validation_failed",
            ErrorKind::ReferentialViolation => "invalid_reference",
            ErrorKind::UniquenessConflict => "already_exists",
            ErrorKind::StoreFailure => "store_failure",
            ErrorKind::Internal => "internal_error",
        }
    }
}

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 저장소 관련 에러
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 필드 검증 에러
    #[error("Validation error: {0}")]
    ValidationError(FieldViolations),

    /// 리소스를 찾을 수 없음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 유일성 충돌
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 존재하지 않는 엔티티를 가리키는 참조
    #[error("Reference error: {field} references unknown id {id}")]
    ReferenceError { field: String, id: String },

    /// 내부 불변식 위반
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::DatabaseError(_) => ErrorKind::StoreFailure,
            AppError::ValidationError(_) => ErrorKind::FieldValidation,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::ConflictError(_) => ErrorKind::UniquenessConflict,
            AppError::ReferenceError { .. } => ErrorKind::ReferentialViolation,
            AppError::InternalError(_) => ErrorKind::Internal,
        }
    }

    /// 단일 필드 위반으로 된 검증 에러를 만듭니다.
    pub fn invalid_field(field: &str, code: &str, message: impl Into<String>) -> Self {
        AppError::ValidationError(FieldViolations::single(field, code, message))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 저장소 드라이버 에러를 [`AppError::DatabaseError`]로 변환하는 확장 trait
///
/// ```rust,ignore
/// let count = self.collection
///     .count_documents(filter)
///     .await
///     .store_context("issues.count")?;
/// ```
pub trait StoreContext<T> {
    fn store_context(self, operation: &str) -> AppResult<T>;
}

impl<T, E> StoreContext<T> for Result<T, E>
where
    E: fmt::Display,
{
    fn store_context(self, operation: &str) -> AppResult<T> {
        self.map_err(|e| AppError::DatabaseError(format!("{}: {}", operation, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(AppError::NotFound("x".to_string()).kind(), ErrorKind::NotFound);
        assert_eq!(AppError::ConflictError("x".to_string()).kind(), ErrorKind::UniquenessConflict);
        assert_eq!(AppError::DatabaseError("x".to_string()).kind(), ErrorKind::StoreFailure);
        assert_eq!(
            AppError::ReferenceError { field: "user".to_string(), id: "abc".to_string() }.kind(),
            ErrorKind::ReferentialViolation
        );
        assert_eq!(
            AppError::invalid_field("role", "enum", "bad role").kind(),
            ErrorKind::FieldValidation
        );
    }

    #[test]
    fn test_violations_keep_insertion_order() {
        let mut violations = FieldViolations::new();
        violations.push(FieldViolation::new("lastName", "length", "too short"));
        violations.push(FieldViolation::new("firstName", "required", "missing"));

        let fields: Vec<_> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["lastName", "firstName"]);
        assert_eq!(violations.to_string(), "lastName: too short; firstName: missing");
    }

    #[test]
    fn test_empty_violations_are_ok() {
        assert!(FieldViolations::new().into_result().is_ok());

        let result = FieldViolations::single("tags", "length", "too short").into_result();
        assert!(matches!(result, Err(AppError::ValidationError(v)) if v.has_field("tags")));
    }

    #[test]
    fn test_store_context_trait() {
        let result: Result<(), &str> = Err("connection reset");
        let app_result = result.store_context("users.insert");

        if let Err(AppError::DatabaseError(msg)) = app_result {
            assert!(msg.contains("users.insert"));
            assert!(msg.contains("connection reset"));
        } else {
            panic!("Expected DatabaseError");
        }
    }
}
