//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 서비스는 `OnceCell` 싱글톤으로 관리되며, `inventory`로 등록되어
//! 시작 시 `ServiceLocator::initialize_all()`에서 미리 생성됩니다.
//! 테스트에서는 `new(&Stores)`로 직접 만들 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{issues::IssueService, users::UserService};
//!
//! let user_service = UserService::instance();
//! let issue_service = IssueService::instance();
//! ```

pub mod integrity;
pub mod issues;
pub mod users;

use mongodb::bson::oid::ObjectId;

pub use issues::IssueService;
pub use users::UserService;

/// 경로나 쿼리로 받은 ID 문자열을 해석합니다. 형식이 잘못되면 `None`.
pub fn parse_id(raw: &str) -> Option<ObjectId> {
    ObjectId::parse_str(raw).ok()
}
