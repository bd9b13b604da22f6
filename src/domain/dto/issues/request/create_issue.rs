//! # 이슈 생성 요청 DTO
//!
//! `POST /issues` 본문을 표현합니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 |
//! |------|------|
//! | `status` | 선택, `new` \| `inProgress` \| `completed` \| `canceled` (기본값 `new`) |
//! | `description` | 선택, 최대 1000자 |
//! | `imageUrl` | 선택, 최대 50자 |
//! | `latitude`, `longitude` | 필수, 유한한 숫자 |
//! | `tags` | 선택, 각 태그 최소 3자, 순서 유지 |
//! | `user` | 필수, 기존 사용자 ID (존재 여부는 참조 무결성 검사기가 확인) |

use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::issues::{Issue, IssueStatus};
use crate::validation::rules::{check_finite, validate_status, validate_tags};
use crate::validation::{FieldName, validate_in_order};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateIssueRequest {
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,

    #[validate(length(max = 1000, message = "description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 50, message = "imageUrl must be at most 50 characters"))]
    pub image_url: Option<String>,

    #[validate(required(message = "latitude is required"))]
    pub latitude: Option<f64>,

    #[validate(required(message = "longitude is required"))]
    pub longitude: Option<f64>,

    #[validate(custom(function = "validate_tags"))]
    pub tags: Option<Vec<String>>,

    #[validate(required(message = "user is required"))]
    pub user: Option<String>,
}

/// 필드 검증을 통과한 이슈 후보
///
/// `user`는 아직 문자열이며, 참조 무결성 검사를 거쳐야 [`Issue`]가 됩니다.
#[derive(Debug, Clone)]
pub struct IssueDraft {
    pub status: IssueStatus,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub tags: Vec<String>,
    pub user: String,
}

impl IssueDraft {
    /// 확인된 사용자 참조로 저장 가능한 이슈를 만듭니다.
    pub fn into_issue(self, user: ObjectId) -> Issue {
        let now = Utc::now();

        Issue {
            id: None,
            status: self.status,
            description: self.description,
            image_url: self.image_url,
            latitude: self.latitude,
            longitude: self.longitude,
            tags: self.tags,
            user,
            created_at: now,
            updated_at: now,
        }
    }
}

impl CreateIssueRequest {
    const FIELDS: &'static [FieldName] = &[
        FieldName::new("status", "status"),
        FieldName::new("description", "description"),
        FieldName::new("image_url", "imageUrl"),
        FieldName::new("latitude", "latitude"),
        FieldName::new("longitude", "longitude"),
        FieldName::new("tags", "tags"),
        FieldName::new("user", "user"),
    ];

    /// 필드 검증을 수행하고 [`IssueDraft`]를 반환합니다.
    pub fn into_draft(self) -> AppResult<IssueDraft> {
        let mut violations = validate_in_order(&self, Self::FIELDS);
        for (field, value) in [("latitude", self.latitude), ("longitude", self.longitude)] {
            if let Some(violation) = check_finite(field, value) {
                violations.push(violation);
            }
        }
        violations.into_result()?;

        let (Some(latitude), Some(longitude), Some(user)) = (self.latitude, self.longitude, self.user) else {
            return Err(AppError::InternalError("validated issue request is missing fields".to_string()));
        };
        let status = match self.status {
            Some(raw) => IssueStatus::parse(&raw)
                .ok_or_else(|| AppError::InternalError(format!("validated status {} is unknown", raw)))?,
            None => IssueStatus::default(),
        };

        Ok(IssueDraft {
            status,
            description: self.description,
            image_url: self.image_url,
            latitude,
            longitude,
            tags: self.tags.unwrap_or_default(),
            user,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateIssueRequest {
        CreateIssueRequest {
            latitude: Some(46.5),
            longitude: Some(6.6),
            tags: Some(vec!["light".to_string(), "urgent".to_string()]),
            user: Some(ObjectId::new().to_hex()),
            ..Default::default()
        }
    }

    fn violation_fields(err: AppError) -> Vec<String> {
        match err {
            AppError::ValidationError(violations) => violations.into_iter().map(|v| v.field).collect(),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_status_defaults_to_new() {
        let draft = valid_request().into_draft().unwrap();

        assert_eq!(draft.status, IssueStatus::New);
        assert_eq!(draft.tags, vec!["light", "urgent"]);
    }

    #[test]
    fn test_missing_coordinates_and_user_are_required() {
        let err = CreateIssueRequest::default().into_draft().unwrap_err();

        assert_eq!(violation_fields(err), vec!["latitude", "longitude", "user"]);
    }

    #[test]
    fn test_length_and_enum_violations() {
        let request = CreateIssueRequest {
            status: Some("done".to_string()),
            description: Some("x".repeat(1001)),
            image_url: Some(format!("https://{}", "a".repeat(50))),
            tags: Some(vec!["ok".to_string()]),
            ..valid_request()
        };

        let err = request.into_draft().unwrap_err();

        assert_eq!(violation_fields(err), vec!["status", "description", "imageUrl", "tags"]);
    }

    #[test]
    fn test_non_finite_coordinates_are_rejected() {
        let request = CreateIssueRequest {
            latitude: Some(f64::NAN),
            ..valid_request()
        };

        assert_eq!(violation_fields(request.into_draft().unwrap_err()), vec!["latitude"]);
    }

    #[test]
    fn test_draft_into_issue_sets_timestamps() {
        let user = ObjectId::new();
        let issue = valid_request().into_draft().unwrap().into_issue(user);

        assert_eq!(issue.user, user);
        assert_eq!(issue.created_at, issue.updated_at);
        assert!(issue.id.is_none());
    }

    #[test]
    fn test_string_coordinate_fails_to_parse() {
        let body = r#"{"latitude":"north","longitude":6.6,"user":"58b2926f5e1def0123e97188"}"#;
        assert!(serde_json::from_str::<CreateIssueRequest>(body).is_err());
    }
}
