//! 사용자 도메인 DTO
//!
//! - [`request`] - 생성/부분 수정 요청
//! - [`response`] - 사용자 응답

pub mod request;
pub mod response;

pub use request::{CreateUserRequest, UpdateUserRequest};
pub use response::UserResponse;
