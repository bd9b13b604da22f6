//! # 이슈 리포지토리 구현
//!
//! `issues` 컬렉션에 대한 [`IssueStore`] 구현입니다.
//! `{ user: 1, status: 1 }` 인덱스가 작성자 필터 조회를 받칩니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::{Collection, IndexModel, bson::{Document, doc, oid::ObjectId}, options::IndexOptions};

use crate::core::errors::{AppError, AppResult, StoreContext};
use crate::db::Database;
use crate::domain::entities::issues::Issue;
use crate::repositories::{IssueFilter, IssueStore, PageWindow, driver_window};

/// 이슈 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct IssueRepository {
    collection: Collection<Issue>,
}

impl IssueRepository {
    pub const COLLECTION: &'static str = "issues";

    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Issue>(Self::COLLECTION),
        }
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let user_index = IndexModel::builder()
            .keys(doc! { "user": 1, "status": 1 })
            .options(IndexOptions::builder()
                .name("issue_user_status".to_string())
                .build())
            .build();

        self.collection
            .create_index(user_index)
            .await
            .store_context("issues.create_indexes")?;

        debug!("issues 인덱스 생성 완료");
        Ok(())
    }

    fn filter_document(filter: IssueFilter) -> Document {
        match filter.user {
            Some(user) => doc! { "user": user },
            None => doc! {},
        }
    }
}

#[async_trait]
impl IssueStore for IssueRepository {
    async fn insert(&self, mut issue: Issue) -> AppResult<Issue> {
        let result = self.collection
            .insert_one(&issue)
            .await
            .store_context("issues.insert")?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::InternalError("issues.insert returned a non-ObjectId id".to_string()))?;
        issue.id = Some(id);

        Ok(issue)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Issue>> {
        self.collection
            .find_one(doc! { "_id": *id })
            .await
            .store_context("issues.find_by_id")
    }

    async fn find(&self, filter: IssueFilter, window: PageWindow) -> AppResult<Vec<Issue>> {
        let (skip, limit) = driver_window(window);

        let cursor = self.collection
            .find(Self::filter_document(filter))
            .sort(doc! { "status": 1, "_id": 1 })
            .skip(skip)
            .limit(limit)
            .await
            .store_context("issues.find")?;

        cursor.try_collect::<Vec<_>>().await.store_context("issues.find")
    }

    async fn count(&self, filter: IssueFilter) -> AppResult<u64> {
        self.collection
            .count_documents(Self::filter_document(filter))
            .await
            .store_context("issues.count")
    }

    async fn update(&self, issue: Issue) -> AppResult<Option<Issue>> {
        let Some(id) = issue.id else {
            return Ok(None);
        };

        let result = self.collection
            .replace_one(doc! { "_id": id }, &issue)
            .await
            .store_context("issues.update")?;

        if result.matched_count == 0 {
            return Ok(None);
        }
        Ok(Some(issue))
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self.collection
            .delete_one(doc! { "_id": *id })
            .await
            .store_context("issues.delete")?;

        Ok(result.deleted_count > 0)
    }
}
