//! 이슈 응답 DTO

pub mod issue_response;

pub use issue_response::IssueResponse;
