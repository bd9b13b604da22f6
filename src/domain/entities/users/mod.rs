//! Users Entity Module
//!
//! 이슈를 등록하는 시민과 이를 처리하는 관리자를 표현하는 사용자 엔티티입니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{Role, User};
//!
//! let user = User::new("John".to_string(), "Doe".to_string(), Role::Citizen);
//! ```

pub mod user;

pub use user::{Role, User};
