//! # 사용자 관리 서비스 구현
//!
//! `/users` 리소스의 생성, 조회, 목록, 부분 수정을 담당합니다.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 UserService                  │
//! │                                              │
//! │  request ──► 필드 검증 ──► 유일성 검사 ──► 저장 │
//! └──────────────────────────────────────────────┘
//!                       │
//!                       ▼
//!          UserStore (MongoDB 또는 메모리)
//! ```
//!
//! 사용자는 삭제되지 않습니다.

use std::sync::Arc;

use log::{debug, info};
use once_cell::sync::OnceCell;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::ServiceLocator;
use crate::domain::dto::common::{Page, PageQuery};
use crate::domain::dto::users::{CreateUserRequest, UpdateUserRequest};
use crate::domain::entities::users::User;
use crate::repositories::{Stores, UserStore};
use crate::services::integrity::UniquenessChecker;
use crate::services::parse_id;

/// 사용자 리소스 비즈니스 로직 서비스
///
/// ## 에러
///
/// - `ValidationError` - 필드 규칙 위반 (길이, 필수, 역할 값)
/// - `ConflictError` - 같은 `(firstName, lastName)` 쌍이 이미 존재
/// - `NotFound` - ID 형식이 잘못되었거나 해당 사용자가 없음
/// - `DatabaseError` - 저장소 실패
///
/// ```rust,ignore
/// let user_service = UserService::instance();
/// let user = user_service.create(request).await?;
/// ```
pub struct UserService {
    users: Arc<dyn UserStore>,
    uniqueness: UniquenessChecker,
}

static USER_SERVICE_INSTANCE: OnceCell<Arc<UserService>> = OnceCell::new();

impl UserService {
    /// 싱글톤 인스턴스를 가져옵니다.
    ///
    /// 첫 호출 전에 `ServiceLocator`에 [`Stores`]가 등록되어 있어야 합니다.
    pub fn instance() -> Arc<Self> {
        USER_SERVICE_INSTANCE
            .get_or_init(|| {
                let stores = ServiceLocator::get::<Stores>();
                Arc::new(Self::new(&stores))
            })
            .clone()
    }

    pub fn new(stores: &Stores) -> Self {
        Self {
            users: stores.users.clone(),
            uniqueness: UniquenessChecker::new(stores.users.clone()),
        }
    }

    pub async fn create(&self, request: CreateUserRequest) -> AppResult<User> {
        let user = request.into_user()?;
        self.uniqueness
            .require_unique(&user.first_name, &user.last_name, None)
            .await?;

        let saved = self.users.insert(user).await?;
        info!(
            "사용자 생성: {} ({} {})",
            saved.id_string().unwrap_or_default(),
            saved.first_name,
            saved.last_name
        );

        Ok(saved)
    }

    pub async fn get(&self, id: &str) -> AppResult<User> {
        let not_found = || AppError::NotFound(format!("No user found with ID {}", id));

        let object_id = parse_id(id).ok_or_else(not_found)?;
        self.users.find_by_id(&object_id).await?.ok_or_else(not_found)
    }

    /// 이름 순으로 정렬된 사용자 페이지
    pub async fn list(&self, query: &PageQuery) -> AppResult<Page<User>> {
        let request = query.resolve();

        let total = self.users.count().await?;
        let items = self.users.find(request.into()).await?;
        debug!("사용자 목록: page={} size={} total={}", request.page, request.page_size, total);

        Ok(Page::new(items, request, total))
    }

    /// 존재하는 필드만 덮어씁니다.
    ///
    /// 이름 필드가 포함되면 자기 자신을 제외하고 유일성을 다시 확인합니다.
    pub async fn patch(&self, id: &str, patch: UpdateUserRequest) -> AppResult<User> {
        let current = self.get(id).await?;
        let touches_name = patch.touches_name();

        let mut updated = current.clone();
        patch.apply_to(&mut updated)?;

        if touches_name {
            self.uniqueness
                .require_unique(&updated.first_name, &updated.last_name, current.id)
                .await?;
        }

        let saved = self
            .users
            .update(updated)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No user found with ID {}", id)))?;
        info!("사용자 수정: {}", id);

        Ok(saved)
    }
}

/// 서비스 레지스트리 생성자 함수
fn user_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(UserService::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "user_service",
        constructor: user_service_constructor,
    }
}
