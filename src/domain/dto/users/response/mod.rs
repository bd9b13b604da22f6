//! # 사용자 관련 응답 DTO 모듈
//!
//! 저장된 [`User`](crate::domain::entities::users::User) 엔티티를 클라이언트에
//! 노출하는 형태로 변환합니다. `_id`는 16진수 문자열 `id`로 바뀝니다.
//!
//! ```json
//! {
//!   "id": "58b2926f5e1def0123e97188",
//!   "firstName": "John",
//!   "lastName": "Doe",
//!   "role": "citizen",
//!   "createdAt": "2017-02-28T14:16:25Z"
//! }
//! ```

pub mod user_response;

pub use user_response::UserResponse;
