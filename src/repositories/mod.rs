//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스는 저장소 구현을 직접 알지 못하고 [`UserStore`]와 [`IssueStore`]
//! trait 객체만 사용합니다. 구현은 두 가지입니다.
//!
//! | 구현 | 모듈 | 용도 |
//! |------|------|------|
//! | MongoDB | [`users`], [`issues`] | 운영 (`STORE_BACKEND=mongodb`) |
//! | 메모리 | [`memory`] | 로컬 실행, 테스트 (`STORE_BACKEND=memory`) |
//!
//! 두 구현은 같은 정렬 순서와 같은 유일성 보장을 가집니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::Stores;
//!
//! let stores = Stores::in_memory();
//! let saved = stores.users.insert(user).await?;
//! ```

pub mod issues;
pub mod memory;
pub mod users;

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::error::{Error as MongoError, ErrorKind as MongoErrorKind, WriteFailure};

use crate::core::errors::AppResult;
use crate::db::Database;
use crate::domain::dto::common::PageRequest;
use crate::domain::entities::issues::Issue;
use crate::domain::entities::users::User;

pub use issues::IssueRepository;
pub use memory::{InMemoryIssueStore, InMemoryUserStore};
pub use users::UserRepository;

/// 유니크 인덱스 위반 시 사용자에게 돌려주는 메시지
pub const USER_EXISTS_MESSAGE: &str = "User already exists";

/// 정렬된 결과에서 잘라낼 구간
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: u64,
    pub limit: u64,
}

impl From<PageRequest> for PageWindow {
    fn from(request: PageRequest) -> Self {
        Self {
            skip: request.skip,
            limit: request.limit,
        }
    }
}

/// 이슈 목록 필터
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IssueFilter {
    /// 작성자 ID가 같은 이슈만
    pub user: Option<ObjectId>,
}

impl IssueFilter {
    pub fn by_user(user: ObjectId) -> Self {
        Self { user: Some(user) }
    }

    pub fn matches(&self, issue: &Issue) -> bool {
        self.user.map_or(true, |user| issue.user == user)
    }
}

/// 사용자 저장소
///
/// 목록은 `lastName`, `firstName`, `_id` 오름차순으로 정렬됩니다.
/// `(firstName, lastName)` 쌍이 겹치는 쓰기는 `ConflictError`로 실패합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 사용자를 저장하고 ID가 할당된 사용자를 반환합니다.
    async fn insert(&self, user: User) -> AppResult<User>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    async fn find_by_name(&self, first_name: &str, last_name: &str) -> AppResult<Option<User>>;

    async fn find(&self, window: PageWindow) -> AppResult<Vec<User>>;

    async fn count(&self) -> AppResult<u64>;

    /// 같은 ID의 문서를 통째로 교체합니다. 대상이 없으면 `None`.
    async fn update(&self, user: User) -> AppResult<Option<User>>;
}

/// 이슈 저장소
///
/// 목록은 `status` 문자열, `_id` 오름차순으로 정렬됩니다.
#[async_trait]
pub trait IssueStore: Send + Sync {
    async fn insert(&self, issue: Issue) -> AppResult<Issue>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Issue>>;

    async fn find(&self, filter: IssueFilter, window: PageWindow) -> AppResult<Vec<Issue>>;

    /// 필터에 맞는 전체 개수 (페이지와 무관)
    async fn count(&self, filter: IssueFilter) -> AppResult<u64>;

    /// 같은 ID의 문서를 통째로 교체합니다. 대상이 없으면 `None`.
    async fn update(&self, issue: Issue) -> AppResult<Option<Issue>>;

    /// 삭제 여부를 반환합니다.
    async fn delete(&self, id: &ObjectId) -> AppResult<bool>;
}

/// 서비스가 공유하는 저장소 묶음
///
/// 시작 시 한 번 만들어 `ServiceLocator`에 등록합니다.
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub issues: Arc<dyn IssueStore>,
}

impl Stores {
    /// 프로세스 내 메모리 저장소
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserStore::new()),
            issues: Arc::new(InMemoryIssueStore::new()),
        }
    }

    /// MongoDB 컬렉션 저장소. 필요한 인덱스를 함께 생성합니다.
    pub async fn mongo(db: &Database) -> AppResult<Self> {
        let users = UserRepository::new(db);
        users.create_indexes().await?;

        let issues = IssueRepository::new(db);
        issues.create_indexes().await?;

        Ok(Self {
            users: Arc::new(users),
            issues: Arc::new(issues),
        })
    }
}

/// MongoDB 중복 키 에러(11000)인지 확인합니다.
pub(crate) fn is_duplicate_key(error: &MongoError) -> bool {
    if let MongoErrorKind::Write(WriteFailure::WriteError(write_error)) = error.kind.as_ref() {
        return write_error.code == 11000;
    }
    false
}

/// 드라이버가 받을 수 있는 범위로 구간을 맞춥니다.
pub(crate) fn driver_window(window: PageWindow) -> (u64, i64) {
    let skip = window.skip.min(i64::MAX as u64);
    let limit = i64::try_from(window.limit).unwrap_or(i64::MAX);
    (skip, limit)
}
