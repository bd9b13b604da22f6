//! 이슈 컬렉션(`issues`)에 대한 MongoDB 리포지토리

pub mod issue_repo;

pub use issue_repo::IssueRepository;
