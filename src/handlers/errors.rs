//! # HTTP 에러 응답 변환
//!
//! 서비스 계층은 에러 종류([`ErrorKind`])만 알고, 상태 코드는 여기서 정합니다.
//!
//! | 종류 | 상태 코드 |
//! |------|-----------|
//! | `NotFound` | 404 |
//! | `FieldValidation` | 400 |
//! | `ReferentialViolation` | 400 |
//! | `UniquenessConflict` | 422 |
//! | `StoreFailure`, `Internal` | 500 |
//!
//! ## 응답 본문
//!
//! ```json
//! {
//!   "error": "validation_failed",
//!   "message": "firstName: firstName must be between 2 and 20 characters",
//!   "violations": [{ "field": "firstName", "code": "length", "message": "..." }]
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError, error::{JsonPayloadError, QueryPayloadError}};
use log::error;
use serde::Serialize;

use crate::core::errors::{AppError, ErrorKind, FieldViolations};

/// 에러 응답 본문
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<&'a FieldViolations>,
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::FieldValidation | ErrorKind::ReferentialViolation => StatusCode::BAD_REQUEST,
        ErrorKind::UniquenessConflict => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::StoreFailure | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl AppError {
    /// 클라이언트에게 보여줄 메시지. 저장소/내부 에러의 상세는 숨깁니다.
    fn public_message(&self) -> String {
        match self {
            AppError::NotFound(message) | AppError::ConflictError(message) => message.clone(),
            AppError::ValidationError(violations) => violations.to_string(),
            AppError::ReferenceError { field, id } => format!("{} references unknown user {}", field, id),
            AppError::DatabaseError(_) | AppError::InternalError(_) => "Internal server error".to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        status_for(self.kind())
    }

    fn error_response(&self) -> HttpResponse {
        let kind = self.kind();
        if matches!(kind, ErrorKind::StoreFailure | ErrorKind::Internal) {
            error!("요청 처리 실패: {}", self);
        }

        let violations = match self {
            AppError::ValidationError(violations) => Some(violations),
            _ => None,
        };

        HttpResponse::build(status_for(kind)).json(ErrorBody {
            error: kind.as_str(),
            message: self.public_message(),
            violations,
        })
    }
}

/// JSON 본문 파싱 실패(잘못된 타입 등)를 필드 검증 에러로 바꿉니다.
///
/// 예: `latitude`에 문자열이 오면 숫자로 변환하지 않고 400으로 거절합니다.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::invalid_field("body", "parse", err.to_string()).into()
}

/// 쿼리 문자열 파싱 실패(`user`와 `userId`를 함께 보낸 경우 등)도 같은 형식으로 응답합니다.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::invalid_field("query", "parse", err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::NotFound("x".to_string()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::ConflictError("User already exists".to_string()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::ReferenceError { field: "user".to_string(), id: "x".to_string() }.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::DatabaseError("timeout".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn test_validation_body_lists_violations() {
        let err = AppError::invalid_field("role", "enum", "role must be one of: citizen, manager");

        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"], "validation_failed");
        assert_eq!(body["violations"][0]["field"], "role");
        assert_eq!(body["violations"][0]["code"], "enum");
    }

    #[actix_web::test]
    async fn test_store_failure_details_are_hidden() {
        let response = AppError::DatabaseError("users.find: connection refused".to_string()).error_response();

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"], "store_failure");
        assert_eq!(body["message"], "Internal server error");
        assert!(body.get("violations").is_none());
    }
}
