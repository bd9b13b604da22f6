use std::sync::Arc;

use log::warn;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};
use crate::repositories::{USER_EXISTS_MESSAGE, UserStore};

/// 사용자 이름 쌍 유일성 검사기
///
/// 두 필드를 함께, 대소문자를 구분하여 비교합니다.
#[derive(Clone)]
pub struct UniquenessChecker {
    users: Arc<dyn UserStore>,
}

impl UniquenessChecker {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// 다른 사용자가 같은 이름 쌍을 쓰고 있지 않으면 `true`.
    ///
    /// 수정 시에는 자기 자신의 ID를 `excluding`으로 넘깁니다.
    pub async fn is_unique(&self, first_name: &str, last_name: &str, excluding: Option<ObjectId>) -> AppResult<bool> {
        let existing = self.users.find_by_name(first_name, last_name).await?;

        Ok(match existing {
            None => true,
            Some(user) => excluding.is_some() && user.id == excluding,
        })
    }

    /// 유일하지 않으면 `ConflictError`.
    pub async fn require_unique(&self, first_name: &str, last_name: &str, excluding: Option<ObjectId>) -> AppResult<()> {
        if self.is_unique(first_name, last_name, excluding).await? {
            return Ok(());
        }

        warn!("이름 쌍 충돌: {} {}", first_name, last_name);
        Err(AppError::ConflictError(USER_EXISTS_MESSAGE.to_string()))
    }
}
