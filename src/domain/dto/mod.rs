//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청/응답 객체를 정의합니다.
//! 요청 DTO는 클라이언트 입력을 그대로 받아 검증하고 엔티티로 변환하며,
//! 응답 DTO는 저장 형식(`_id`, `ObjectId`)을 JSON 계약(`id`, 16진수 문자열)으로 바꿉니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── users/              # 사용자 DTO
//! │   ├── request/        # create_user.rs, update_user.rs
//! │   └── response/       # user_response.rs
//! ├── issues/             # 이슈 DTO
//! │   ├── request/        # create_issue.rs, update_issue.rs, list_issues.rs
//! │   └── response/       # issue_response.rs
//! └── common/
//!     └── pagination.rs   # 페이지 해석기, Page<T>
//! ```
//!
//! ## 변환 패턴
//!
//! | 방향 | 방법 |
//! |------|------|
//! | 생성 요청 → 엔티티 | `CreateUserRequest::into_user`, `CreateIssueRequest::into_draft` |
//! | 수정 요청 → 엔티티 | `apply_to(&mut entity)` (존재하는 필드만) |
//! | 엔티티 → 응답 | `impl From<Entity> for Response` |
//!
//! ```rust,ignore
//! use crate::domain::dto::users::{CreateUserRequest, UserResponse};
//!
//! let user = request.into_user()?;
//! let saved = user_store.insert(user).await?;
//! let response = UserResponse::from(saved);
//! ```

pub mod common;
pub mod issues;
pub mod users;

pub use common::{Page, PageMeta, PageQuery, PageRequest};
pub use issues::{CreateIssueRequest, IssueDraft, IssueListQuery, IssueResponse, UpdateIssueRequest};
pub use users::{CreateUserRequest, UpdateUserRequest, UserResponse};
