//! # Domain Layer Module
//!
//! 시민 이슈 보고 서비스의 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 저장되는 핵심 객체 (User, Issue)
//! └── DTOs      - 요청/응답 계약과 페이지네이션
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 관계
//!
//! `Issue.user`는 `User`를 ID로만 가리킵니다. 사용자 쪽에서는 이슈를
//! 알지 못하며, 참조의 유효성은 이슈를 쓸 때만 확인합니다.

pub mod dto;
pub mod entities;

pub use entities::issues::{Issue, IssueStatus};
pub use entities::users::{Role, User};
