//! 이슈 리소스 서비스

pub mod issue_service;

pub use issue_service::IssueService;
