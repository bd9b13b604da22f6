//! User Entity Implementation
//!
//! 이슈를 등록하고 수정하는 행위자(시민 또는 관리자)를 표현합니다.
//! `(firstName, lastName)` 쌍은 전체 사용자 사이에서 유일해야 하며,
//! 이 제약은 저장소의 유니크 복합 인덱스로도 강제됩니다.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Citizen,
    Manager,
}

impl Role {
    pub const ALLOWED: [&'static str; 2] = ["citizen", "manager"];

    /// 저장 형식 그대로의 문자열에서 역할을 읽습니다. 대소문자를 정규화하지 않습니다.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "citizen" => Some(Role::Citizen),
            "manager" => Some(Role::Manager),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Citizen => "citizen",
            Role::Manager => "manager",
        }
    }
}

/// 사용자 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// 저장소가 생성 시 할당하는 식별자
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    /// 생성 시각 (불변)
    pub created_at: DateTime<Utc>,
}

impl User {
    /// 아직 저장되지 않은 새 사용자
    pub fn new(first_name: String, last_name: String, role: Role) -> Self {
        Self {
            id: None,
            first_name,
            last_name,
            role,
            created_at: Utc::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 같은 이름 쌍인지 확인합니다 (대소문자 구분).
    pub fn has_name(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name == first_name && self.last_name == last_name
    }
}
