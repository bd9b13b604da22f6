use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::issues::{Issue, IssueStatus};

/// 이슈 응답 DTO
///
/// `user`는 작성자 ID의 16진수 문자열입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueResponse {
    pub id: String,
    pub status: IssueStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub tags: Vec<String>,
    pub user: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Issue> for IssueResponse {
    fn from(issue: Issue) -> Self {
        let id = issue.id_string().unwrap_or_default();

        Self {
            id,
            status: issue.status,
            description: issue.description,
            image_url: issue.image_url,
            latitude: issue.latitude,
            longitude: issue.longitude,
            tags: issue.tags,
            user: issue.user.to_hex(),
            created_at: issue.created_at,
            updated_at: issue.updated_at,
        }
    }
}
