//! # 사용자 관련 요청 DTO 모듈
//!
//! - [`CreateUserRequest`] - `POST /users`
//! - [`UpdateUserRequest`] - `PATCH /users/{id}`
//!
//! 필수 필드도 `Option`으로 선언하여, 누락을 `required` 필드 위반으로 보고합니다.
//! 검증 실패는 `AppError::ValidationError`가 되며 전송 계층에서 400으로 변환됩니다.

pub mod create_user;
pub mod update_user;

pub use create_user::CreateUserRequest;
pub use update_user::UpdateUserRequest;
