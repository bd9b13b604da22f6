//! Issues Entity Module
//!
//! 위치 기반 문제 보고(이슈)와 그 처리 상태를 정의합니다.

pub mod issue;

pub use issue::{Issue, IssueStatus};
