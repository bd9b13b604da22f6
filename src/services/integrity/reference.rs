use std::sync::Arc;

use log::warn;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};
use crate::repositories::UserStore;
use crate::services::parse_id;

/// 이슈가 참조하는 사용자 필드 이름
pub const USER_FIELD: &str = "user";

/// 사용자 참조 무결성 검사기
#[derive(Clone)]
pub struct ReferenceChecker {
    users: Arc<dyn UserStore>,
}

impl ReferenceChecker {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// 해당 ID의 사용자가 존재하는지 확인합니다.
    ///
    /// ID 형식이 잘못되었으면 저장소를 조회하지 않고 `false`.
    pub async fn exists(&self, raw_id: &str) -> AppResult<bool> {
        Ok(self.resolve(raw_id).await?.is_some())
    }

    /// 사용자가 존재하면 그 ID를, 없으면 `ReferenceError`를 반환합니다.
    pub async fn require(&self, raw_id: &str) -> AppResult<ObjectId> {
        match self.resolve(raw_id).await? {
            Some(id) => Ok(id),
            None => {
                warn!("존재하지 않는 사용자 참조: {}", raw_id);
                Err(AppError::ReferenceError {
                    field: USER_FIELD.to_string(),
                    id: raw_id.to_string(),
                })
            }
        }
    }

    async fn resolve(&self, raw_id: &str) -> AppResult<Option<ObjectId>> {
        let Some(id) = parse_id(raw_id) else {
            return Ok(None);
        };

        Ok(self.users.find_by_id(&id).await?.and(Some(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::{Role, User};
    use crate::repositories::InMemoryUserStore;

    async fn checker_with_user() -> (ReferenceChecker, String) {
        let users = Arc::new(InMemoryUserStore::new());
        let saved = users
            .insert(User::new("John".to_string(), "Doe".to_string(), Role::Citizen))
            .await
            .unwrap();

        (ReferenceChecker::new(users), saved.id_string().unwrap())
    }

    #[actix_web::test]
    async fn test_existing_user_resolves() {
        let (checker, id) = checker_with_user().await;

        assert!(checker.exists(&id).await.unwrap());
        assert_eq!(checker.require(&id).await.unwrap().to_hex(), id);
    }

    #[actix_web::test]
    async fn test_unknown_and_malformed_ids_fail() {
        let (checker, _) = checker_with_user().await;

        assert!(!checker.exists(&ObjectId::new().to_hex()).await.unwrap());
        assert!(!checker.exists("not-an-id").await.unwrap());

        let err = checker.require("not-an-id").await.unwrap_err();
        match err {
            AppError::ReferenceError { field, id } => {
                assert_eq!(field, "user");
                assert_eq!(id, "not-an-id");
            }
            other => panic!("Expected ReferenceError, got {:?}", other),
        }
    }
}
