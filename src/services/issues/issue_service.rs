//! # 이슈 관리 서비스 구현
//!
//! `/issues` 리소스의 생성, 조회, 목록, 부분 수정, 삭제를 담당합니다.
//!
//! ## 처리 순서
//!
//! | 연산 | 단계 |
//! |------|------|
//! | 생성 | 필드 검증 → 사용자 참조 검사 → 저장 |
//! | 수정 | 조회 → 필드 검증, 상태 전이 검사 → (`user` 포함 시) 참조 검사 → `updatedAt` 갱신 → 저장 |
//! | 목록 | 페이지 해석 → 필터 구성 → 같은 필터로 count, find |
//! | 삭제 | 삭제 → 대상이 없었으면 `NotFound` |
//!
//! 검증은 언제나 저장보다 먼저 끝나므로, 실패한 요청은 부분 쓰기를 남기지 않습니다.

use std::sync::Arc;

use log::{debug, info};
use once_cell::sync::OnceCell;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::ServiceLocator;
use crate::domain::dto::common::Page;
use crate::domain::dto::issues::{CreateIssueRequest, IssueListQuery, UpdateIssueRequest};
use crate::domain::entities::issues::Issue;
use crate::repositories::{IssueFilter, IssueStore, Stores};
use crate::services::integrity::ReferenceChecker;
use crate::services::parse_id;

/// 이슈 리소스 비즈니스 로직 서비스
pub struct IssueService {
    issues: Arc<dyn IssueStore>,
    references: ReferenceChecker,
}

static ISSUE_SERVICE_INSTANCE: OnceCell<Arc<IssueService>> = OnceCell::new();

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("No issue found with ID {}", id))
}

impl IssueService {
    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        ISSUE_SERVICE_INSTANCE
            .get_or_init(|| {
                let stores = ServiceLocator::get::<Stores>();
                Arc::new(Self::new(&stores))
            })
            .clone()
    }

    pub fn new(stores: &Stores) -> Self {
        Self {
            issues: stores.issues.clone(),
            references: ReferenceChecker::new(stores.users.clone()),
        }
    }

    pub async fn create(&self, request: CreateIssueRequest) -> AppResult<Issue> {
        let draft = request.into_draft()?;
        let user = self.references.require(&draft.user).await?;

        let saved = self.issues.insert(draft.into_issue(user)).await?;
        info!(
            "이슈 생성: {} (user={}, status={})",
            saved.id_string().unwrap_or_default(),
            saved.user,
            saved.status.as_str()
        );

        Ok(saved)
    }

    pub async fn get(&self, id: &str) -> AppResult<Issue> {
        let object_id = parse_id(id).ok_or_else(|| not_found(id))?;
        self.issues
            .find_by_id(&object_id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// 상태 순으로 정렬된 이슈 페이지
    ///
    /// `total`은 같은 필터로 센 값입니다. 작성자 필터가 ID 형식이 아니면
    /// 일치하는 이슈가 있을 수 없으므로 빈 페이지를 돌려줍니다.
    pub async fn list(&self, query: &IssueListQuery) -> AppResult<Page<Issue>> {
        let request = query.page_query().resolve();

        let filter = match query.user_filter() {
            None => IssueFilter::default(),
            Some(raw) => match parse_id(raw) {
                Some(user) => IssueFilter::by_user(user),
                None => {
                    debug!("잘못된 작성자 필터: {}", raw);
                    return Ok(Page::empty(request));
                }
            },
        };

        let total = self.issues.count(filter).await?;
        let items = self.issues.find(filter, request.into()).await?;
        debug!(
            "이슈 목록: page={} size={} total={} filter={:?}",
            request.page, request.page_size, total, filter
        );

        Ok(Page::new(items, request, total))
    }

    /// 존재하는 필드만 덮어쓰고 `updatedAt`을 갱신합니다.
    pub async fn patch(&self, id: &str, patch: UpdateIssueRequest) -> AppResult<Issue> {
        let current = self.get(id).await?;
        patch.check_against(&current)?;

        let user = match patch.user.as_deref() {
            Some(raw) => Some(self.references.require(raw).await?),
            None => None,
        };

        let mut updated = current;
        patch.apply_to(&mut updated, user)?;
        updated.touch();

        let saved = self.issues.update(updated).await?.ok_or_else(|| not_found(id))?;
        info!("이슈 수정: {} (status={})", id, saved.status.as_str());

        Ok(saved)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let object_id = parse_id(id).ok_or_else(|| not_found(id))?;

        if !self.issues.delete(&object_id).await? {
            return Err(not_found(id));
        }

        info!("이슈 삭제: {}", id);
        Ok(())
    }
}

/// 서비스 레지스트리 생성자 함수
fn issue_service_constructor() -> Box<dyn std::any::Any + Send + Sync> {
    Box::new(IssueService::instance() as Arc<dyn std::any::Any + Send + Sync>)
}

inventory::submit! {
    crate::core::registry::ServiceRegistration {
        name: "issue_service",
        constructor: issue_service_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::issues::IssueStatus;
    use crate::domain::entities::users::{Role, User};
    use mongodb::bson::oid::ObjectId;

    struct Fixture {
        service: IssueService,
        stores: Stores,
    }

    impl Fixture {
        fn new() -> Self {
            let stores = Stores::in_memory();
            Self {
                service: IssueService::new(&stores),
                stores,
            }
        }

        async fn user(&self, first: &str, last: &str) -> String {
            self.stores
                .users
                .insert(User::new(first.to_string(), last.to_string(), Role::Citizen))
                .await
                .unwrap()
                .id_string()
                .unwrap()
        }
    }

    fn create_request(user: &str) -> CreateIssueRequest {
        CreateIssueRequest {
            latitude: Some(46.5),
            longitude: Some(6.6),
            tags: Some(vec!["light".to_string(), "urgent".to_string()]),
            user: Some(user.to_string()),
            ..Default::default()
        }
    }

    fn list_query(user: Option<&str>) -> IssueListQuery {
        IssueListQuery {
            user: user.map(str::to_string),
            ..Default::default()
        }
    }

    #[actix_web::test]
    async fn test_create_with_existing_user() {
        let fixture = Fixture::new();
        let user = fixture.user("John", "Doe").await;

        let issue = fixture.service.create(create_request(&user)).await.unwrap();

        assert!(issue.id.is_some());
        assert_eq!(issue.status, IssueStatus::New);
        assert_eq!(issue.user.to_hex(), user);
        assert_eq!(issue.tags, vec!["light", "urgent"]);
    }

    #[actix_web::test]
    async fn test_create_with_unknown_user_is_referential_violation() {
        let fixture = Fixture::new();

        let err = fixture
            .service
            .create(create_request(&ObjectId::new().to_hex()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ReferenceError { .. }));

        let err = fixture.service.create(create_request("nope")).await.unwrap_err();
        assert!(matches!(err, AppError::ReferenceError { .. }));
    }

    #[actix_web::test]
    async fn test_field_violations_win_over_reference_check() {
        let fixture = Fixture::new();
        let request = CreateIssueRequest {
            latitude: None,
            ..create_request("nope")
        };

        let err = fixture.service.create(request).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[actix_web::test]
    async fn test_empty_patch_only_refreshes_updated_at() {
        let fixture = Fixture::new();
        let user = fixture.user("John", "Doe").await;
        let created = fixture.service.create(create_request(&user)).await.unwrap();
        let id = created.id_string().unwrap();

        let patched = fixture.service.patch(&id, UpdateIssueRequest::default()).await.unwrap();

        assert!(patched.updated_at > created.updated_at);
        assert_eq!(patched.created_at, created.created_at);
        assert_eq!(Issue { updated_at: created.updated_at, ..patched }, created);
    }

    #[actix_web::test]
    async fn test_patch_status_follows_transition_table() {
        let fixture = Fixture::new();
        let user = fixture.user("John", "Doe").await;
        let id = fixture
            .service
            .create(create_request(&user))
            .await
            .unwrap()
            .id_string()
            .unwrap();

        let to = |status: &str| UpdateIssueRequest {
            status: Some(status.to_string()),
            ..Default::default()
        };

        let err = fixture.service.patch(&id, to("completed")).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));

        fixture.service.patch(&id, to("inProgress")).await.unwrap();
        let done = fixture.service.patch(&id, to("completed")).await.unwrap();
        assert_eq!(done.status, IssueStatus::Completed);
    }

    #[actix_web::test]
    async fn test_patch_user_reference_is_checked() {
        let fixture = Fixture::new();
        let john = fixture.user("John", "Doe").await;
        let jane = fixture.user("Jane", "Doe").await;
        let id = fixture
            .service
            .create(create_request(&john))
            .await
            .unwrap()
            .id_string()
            .unwrap();

        let dangling = UpdateIssueRequest {
            user: Some(ObjectId::new().to_hex()),
            ..Default::default()
        };
        let err = fixture.service.patch(&id, dangling).await.unwrap_err();
        assert!(matches!(err, AppError::ReferenceError { .. }));
        assert_eq!(fixture.service.get(&id).await.unwrap().user.to_hex(), john);

        let reassign = UpdateIssueRequest {
            user: Some(jane.clone()),
            ..Default::default()
        };
        let patched = fixture.service.patch(&id, reassign).await.unwrap();
        assert_eq!(patched.user.to_hex(), jane);
    }

    #[actix_web::test]
    async fn test_list_total_respects_user_filter() {
        let fixture = Fixture::new();
        let john = fixture.user("John", "Doe").await;
        let jane = fixture.user("Jane", "Doe").await;
        for user in [&john, &john, &jane] {
            fixture.service.create(create_request(user)).await.unwrap();
        }

        let all = fixture.service.list(&list_query(None)).await.unwrap();
        assert_eq!(all.meta.total, 3);

        let johns = fixture.service.list(&list_query(Some(&john))).await.unwrap();
        assert_eq!(johns.meta.total, 2);
        assert!(johns.items.iter().all(|issue| issue.user.to_hex() == john));

        let malformed = fixture.service.list(&list_query(Some("zzz"))).await.unwrap();
        assert_eq!(malformed.meta.total, 0);
        assert!(malformed.items.is_empty());

        let blank = fixture.service.list(&list_query(Some(""))).await.unwrap();
        assert_eq!(blank.meta.total, 3);
    }

    #[actix_web::test]
    async fn test_delete_then_get_is_not_found() {
        let fixture = Fixture::new();
        let user = fixture.user("John", "Doe").await;
        let id = fixture
            .service
            .create(create_request(&user))
            .await
            .unwrap()
            .id_string()
            .unwrap();

        fixture.service.delete(&id).await.unwrap();

        assert!(matches!(fixture.service.get(&id).await, Err(AppError::NotFound(_))));
        assert!(matches!(fixture.service.delete(&id).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            fixture.service.delete(&ObjectId::new().to_hex()).await,
            Err(AppError::NotFound(_))
        ));
    }
}
