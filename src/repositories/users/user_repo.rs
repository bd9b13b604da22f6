//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 [`UserStore`] 구현입니다.
//!
//! ## 인덱스
//!
//! - `{ firstName: 1, lastName: 1 }` UNIQUE (`user_name_unique`)
//! - `{ lastName: 1, firstName: 1 }` 목록 정렬용 (`user_sort`)
//!
//! 서비스의 사전 유일성 검사와 별개로, 동시 삽입 경쟁은 유니크 인덱스가
//! 막습니다. 중복 키 에러(11000)는 `ConflictError`로 변환됩니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::{Collection, IndexModel, bson::{doc, oid::ObjectId}, options::IndexOptions};

use crate::core::errors::{AppError, AppResult, StoreContext};
use crate::db::Database;
use crate::domain::entities::users::User;
use crate::repositories::{PageWindow, USER_EXISTS_MESSAGE, UserStore, driver_window, is_duplicate_key};

/// 사용자 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub const COLLECTION: &'static str = "users";

    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<User>(Self::COLLECTION),
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 이미 중복된 이름 쌍이 있으면 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let name_index = IndexModel::builder()
            .keys(doc! { "firstName": 1, "lastName": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("user_name_unique".to_string())
                .build())
            .build();

        let sort_index = IndexModel::builder()
            .keys(doc! { "lastName": 1, "firstName": 1 })
            .options(IndexOptions::builder()
                .name("user_sort".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([name_index, sort_index])
            .await
            .store_context("users.create_indexes")?;

        debug!("users 인덱스 생성 완료");
        Ok(())
    }
}

/// 쓰기 에러 중 중복 키는 유일성 충돌로 바꿉니다.
fn map_write_error(error: mongodb::error::Error, operation: &str) -> AppError {
    if is_duplicate_key(&error) {
        AppError::ConflictError(USER_EXISTS_MESSAGE.to_string())
    } else {
        AppError::DatabaseError(format!("{}: {}", operation, error))
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn insert(&self, mut user: User) -> AppResult<User> {
        let result = self.collection
            .insert_one(&user)
            .await
            .map_err(|e| map_write_error(e, "users.insert"))?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::InternalError("users.insert returned a non-ObjectId id".to_string()))?;
        user.id = Some(id);

        Ok(user)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "_id": *id })
            .await
            .store_context("users.find_by_id")
    }

    async fn find_by_name(&self, first_name: &str, last_name: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "firstName": first_name, "lastName": last_name })
            .await
            .store_context("users.find_by_name")
    }

    async fn find(&self, window: PageWindow) -> AppResult<Vec<User>> {
        let (skip, limit) = driver_window(window);

        let cursor = self.collection
            .find(doc! {})
            .sort(doc! { "lastName": 1, "firstName": 1, "_id": 1 })
            .skip(skip)
            .limit(limit)
            .await
            .store_context("users.find")?;

        cursor.try_collect::<Vec<_>>().await.store_context("users.find")
    }

    async fn count(&self) -> AppResult<u64> {
        self.collection
            .count_documents(doc! {})
            .await
            .store_context("users.count")
    }

    async fn update(&self, user: User) -> AppResult<Option<User>> {
        let Some(id) = user.id else {
            return Ok(None);
        };

        let result = self.collection
            .replace_one(doc! { "_id": id }, &user)
            .await
            .map_err(|e| map_write_error(e, "users.update"))?;

        if result.matched_count == 0 {
            return Ok(None);
        }
        Ok(Some(user))
    }
}
