//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 핵심 엔티티들을 정의합니다.
//!
//! ```text
//! entities/
//! ├── users/    ← User, Role
//! └── issues/   ← Issue, IssueStatus
//! ```
//!
//! - 모든 엔티티는 `_id`를 `Option<ObjectId>`로 가지며, 저장소가 생성 시 할당합니다.
//! - 필드 이름은 camelCase로 저장됩니다 (`firstName`, `createdAt`, ...).
//! - 이슈는 사용자를 ID로만 참조합니다. 사용자는 이슈를 알지 못합니다.

pub mod issues;
pub mod users;
