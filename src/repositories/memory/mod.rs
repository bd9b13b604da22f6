//! # 메모리 저장소
//!
//! MongoDB 없이 서비스를 실행하거나 테스트할 때 쓰는 [`UserStore`],
//! [`IssueStore`] 구현입니다. 정렬 순서와 이름 쌍 유일성은 MongoDB
//! 구현과 같습니다. 유일성 검사와 삽입은 같은 쓰기 잠금 안에서 일어나므로
//! 동시 삽입 경쟁에서도 중복이 생기지 않습니다.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::issues::Issue;
use crate::domain::entities::users::User;
use crate::repositories::{IssueFilter, IssueStore, PageWindow, USER_EXISTS_MESSAGE, UserStore};

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

fn id_key(id: Option<ObjectId>) -> [u8; 12] {
    id.map(|id| id.bytes()).unwrap_or_default()
}

/// 정렬된 항목에서 구간을 잘라냅니다.
fn window_of<T: Clone>(items: &[T], window: PageWindow) -> Vec<T> {
    let skip = usize::try_from(window.skip).unwrap_or(usize::MAX);
    let limit = usize::try_from(window.limit).unwrap_or(usize::MAX);

    items.iter().skip(skip).take(limit).cloned().collect()
}

#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn name_taken(users: &[User], candidate: &User) -> bool {
        users
            .iter()
            .any(|u| u.id != candidate.id && u.has_name(&candidate.first_name, &candidate.last_name))
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, mut user: User) -> AppResult<User> {
        let mut users = write(&self.users);

        user.id = Some(ObjectId::new());
        if Self::name_taken(&users, &user) {
            return Err(AppError::ConflictError(USER_EXISTS_MESSAGE.to_string()));
        }

        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        Ok(read(&self.users).iter().find(|u| u.id == Some(*id)).cloned())
    }

    async fn find_by_name(&self, first_name: &str, last_name: &str) -> AppResult<Option<User>> {
        Ok(read(&self.users)
            .iter()
            .find(|u| u.has_name(first_name, last_name))
            .cloned())
    }

    async fn find(&self, window: PageWindow) -> AppResult<Vec<User>> {
        let mut users = read(&self.users).clone();
        users.sort_by(|a, b| {
            (&a.last_name, &a.first_name, id_key(a.id)).cmp(&(&b.last_name, &b.first_name, id_key(b.id)))
        });

        Ok(window_of(&users, window))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(read(&self.users).len() as u64)
    }

    async fn update(&self, user: User) -> AppResult<Option<User>> {
        let mut users = write(&self.users);

        let Some(position) = users.iter().position(|u| u.id.is_some() && u.id == user.id) else {
            return Ok(None);
        };
        if Self::name_taken(&users, &user) {
            return Err(AppError::ConflictError(USER_EXISTS_MESSAGE.to_string()));
        }

        users[position] = user.clone();
        Ok(Some(user))
    }
}

#[derive(Default)]
pub struct InMemoryIssueStore {
    issues: RwLock<Vec<Issue>>,
}

impl InMemoryIssueStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn matching(&self, filter: IssueFilter) -> Vec<Issue> {
        read(&self.issues)
            .iter()
            .filter(|issue| filter.matches(issue))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl IssueStore for InMemoryIssueStore {
    async fn insert(&self, mut issue: Issue) -> AppResult<Issue> {
        issue.id = Some(ObjectId::new());
        write(&self.issues).push(issue.clone());
        Ok(issue)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Issue>> {
        Ok(read(&self.issues).iter().find(|i| i.id == Some(*id)).cloned())
    }

    async fn find(&self, filter: IssueFilter, window: PageWindow) -> AppResult<Vec<Issue>> {
        let mut issues = self.matching(filter);
        issues.sort_by(|a, b| (a.status.as_str(), id_key(a.id)).cmp(&(b.status.as_str(), id_key(b.id))));

        Ok(window_of(&issues, window))
    }

    async fn count(&self, filter: IssueFilter) -> AppResult<u64> {
        Ok(read(&self.issues).iter().filter(|issue| filter.matches(issue)).count() as u64)
    }

    async fn update(&self, issue: Issue) -> AppResult<Option<Issue>> {
        let mut issues = write(&self.issues);

        let Some(slot) = issues.iter_mut().find(|i| i.id.is_some() && i.id == issue.id) else {
            return Ok(None);
        };
        *slot = issue.clone();
        Ok(Some(issue))
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let mut issues = write(&self.issues);
        let before = issues.len();
        issues.retain(|i| i.id != Some(*id));

        Ok(issues.len() < before)
    }
}
