//! 이슈 도메인 DTO
//!
//! - [`request`] - 생성/부분 수정 요청, 목록 쿼리
//! - [`response`] - 이슈 응답

pub mod request;
pub mod response;

pub use request::{CreateIssueRequest, IssueDraft, IssueListQuery, UpdateIssueRequest};
pub use response::IssueResponse;
