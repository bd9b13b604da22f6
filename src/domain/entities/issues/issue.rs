//! Issue Entity Implementation
//!
//! 시민이 보고한 위치 기반 문제 기록입니다. `user` 필드는 기존 사용자를
//! ID로만 가리키는 비소유 참조이며, 쓰기 시점에만 존재 여부가 검사됩니다.

use chrono::{DateTime, Duration, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 이슈 처리 상태
///
/// ```text
/// new ──► inProgress ──► completed
///  │           │
///  └─────┬─────┘
///        ▼
///    canceled
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IssueStatus {
    #[default]
    New,
    InProgress,
    Completed,
    Canceled,
}

impl IssueStatus {
    pub const ALLOWED: [&'static str; 4] = ["new", "inProgress", "completed", "canceled"];

    /// 저장 형식 그대로의 문자열에서 상태를 읽습니다. 대소문자를 정규화하지 않습니다.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "new" => Some(IssueStatus::New),
            "inProgress" => Some(IssueStatus::InProgress),
            "completed" => Some(IssueStatus::Completed),
            "canceled" => Some(IssueStatus::Canceled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::New => "new",
            IssueStatus::InProgress => "inProgress",
            IssueStatus::Completed => "completed",
            IssueStatus::Canceled => "canceled",
        }
    }

    /// 상태 전이 테이블
    ///
    /// 현재 상태를 다시 쓰는 것은 항상 허용됩니다.
    pub fn can_transition_to(&self, next: IssueStatus) -> bool {
        use IssueStatus::*;

        if *self == next {
            return true;
        }

        matches!(
            (*self, next),
            (New, InProgress) | (InProgress, Completed) | (New, Canceled) | (InProgress, Canceled)
        )
    }
}

/// 이슈 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub status: IssueStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// 삽입 순서를 유지하며, 수정 시 통째로 교체됩니다.
    #[serde(default)]
    pub tags: Vec<String>,
    /// 이슈를 등록한 사용자
    pub user: ObjectId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Issue {
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// `updated_at`을 갱신합니다.
    ///
    /// 시계 해상도와 관계없이 이전 값보다 엄격히 큰 값이 됩니다.
    pub fn touch(&mut self) {
        let floor = self.updated_at + Duration::microseconds(1);
        self.updated_at = Utc::now().max(floor);
    }
}
