//! # 이슈 부분 수정 요청 DTO
//!
//! `PATCH /issues/{id}` 본문입니다. 존재하는 필드만 적용되며 `tags`는
//! 병합하지 않고 통째로 교체합니다. 상태 변경은 전이 테이블을 따라야 합니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::{AppError, AppResult, FieldViolation};
use crate::domain::entities::issues::{Issue, IssueStatus};
use crate::validation::rules::{check_finite, validate_status, validate_tags};
use crate::validation::{FieldName, validate_in_order};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIssueRequest {
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,

    #[validate(length(max = 1000, message = "description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 50, message = "imageUrl must be at most 50 characters"))]
    pub image_url: Option<String>,

    pub latitude: Option<f64>,

    pub longitude: Option<f64>,

    #[validate(custom(function = "validate_tags"))]
    pub tags: Option<Vec<String>>,

    pub user: Option<String>,
}

impl UpdateIssueRequest {
    const FIELDS: &'static [FieldName] = &[
        FieldName::new("status", "status"),
        FieldName::new("description", "description"),
        FieldName::new("image_url", "imageUrl"),
        FieldName::new("tags", "tags"),
    ];

    /// 필드 검증과 상태 전이 검사를 수행합니다.
    ///
    /// `user` 참조의 존재 여부는 여기서 확인하지 않습니다.
    pub fn check_against(&self, current: &Issue) -> AppResult<()> {
        let mut violations = validate_in_order(self, Self::FIELDS);

        for (field, value) in [("latitude", self.latitude), ("longitude", self.longitude)] {
            if let Some(violation) = check_finite(field, value) {
                violations.push(violation);
            }
        }

        if let Some(next) = self.status.as_deref().and_then(IssueStatus::parse) {
            if !current.status.can_transition_to(next) {
                violations.push(FieldViolation::new(
                    "status",
                    "transition",
                    format!(
                        "status cannot change from {} to {}",
                        current.status.as_str(),
                        next.as_str()
                    ),
                ));
            }
        }

        violations.into_result()
    }

    /// 존재하는 필드만 `issue`에 적용합니다.
    ///
    /// `check_against`가 성공한 뒤, 확인된 사용자 참조와 함께 호출합니다.
    /// `updated_at`은 호출자가 갱신합니다.
    pub fn apply_to(self, issue: &mut Issue, user: Option<ObjectId>) -> AppResult<()> {
        if let Some(raw) = self.status {
            issue.status = IssueStatus::parse(&raw)
                .ok_or_else(|| AppError::InternalError(format!("validated status {} is unknown", raw)))?;
        }
        if let Some(description) = self.description {
            issue.description = Some(description);
        }
        if let Some(image_url) = self.image_url {
            issue.image_url = Some(image_url);
        }
        if let Some(latitude) = self.latitude {
            issue.latitude = latitude;
        }
        if let Some(longitude) = self.longitude {
            issue.longitude = longitude;
        }
        if let Some(tags) = self.tags {
            issue.tags = tags;
        }
        if let Some(user) = user {
            issue.user = user;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn issue(status: IssueStatus) -> Issue {
        let now = Utc::now();
        Issue {
            id: Some(ObjectId::new()),
            status,
            description: Some("Broken street light".to_string()),
            image_url: None,
            latitude: 46.5,
            longitude: 6.6,
            tags: vec!["light".to_string(), "urgent".to_string()],
            user: ObjectId::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_legal_transition_passes() {
        let patch = UpdateIssueRequest {
            status: Some("inProgress".to_string()),
            ..Default::default()
        };

        assert!(patch.check_against(&issue(IssueStatus::New)).is_ok());
    }

    #[test]
    fn test_illegal_transition_is_a_status_violation() {
        let patch = UpdateIssueRequest {
            status: Some("new".to_string()),
            ..Default::default()
        };

        let err = patch.check_against(&issue(IssueStatus::Completed)).unwrap_err();
        match err {
            AppError::ValidationError(violations) => {
                let first = violations.iter().next().unwrap();
                assert_eq!(first.field, "status");
                assert_eq!(first.code, "transition");
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_tags_are_replaced_not_merged() {
        let mut current = issue(IssueStatus::New);
        let patch = UpdateIssueRequest {
            tags: Some(vec!["pothole".to_string()]),
            ..Default::default()
        };

        patch.check_against(&current).unwrap();
        patch.apply_to(&mut current, None).unwrap();

        assert_eq!(current.tags, vec!["pothole"]);
        assert_eq!(current.description.as_deref(), Some("Broken street light"));
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let mut current = issue(IssueStatus::InProgress);
        let before = current.clone();

        let patch = UpdateIssueRequest::default();
        patch.check_against(&current).unwrap();
        patch.apply_to(&mut current, None).unwrap();

        assert_eq!(current, before);
    }
}
