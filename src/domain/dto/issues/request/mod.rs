//! # 이슈 관련 요청 DTO 모듈
//!
//! - [`CreateIssueRequest`] - `POST /issues`
//! - [`UpdateIssueRequest`] - `PATCH /issues/{id}`
//! - [`IssueListQuery`] - `GET /issues?page=&pageSize=&user=`

pub mod create_issue;
pub mod list_issues;
pub mod update_issue;

pub use create_issue::{CreateIssueRequest, IssueDraft};
pub use list_issues::IssueListQuery;
pub use update_issue::UpdateIssueRequest;
