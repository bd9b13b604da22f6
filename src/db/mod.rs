//! MongoDB 연결 관리 모듈
//!
//! `STORE_BACKEND=mongodb`일 때 사용되는 데이터베이스 연결 래퍼입니다.
//! 연결 정보는 [`DatabaseConfig`](crate::config::DatabaseConfig)에서 읽어옵니다.

use log::info;
use mongodb::{Client, Collection, options::ClientOptions};
use serde::{Serialize, de::DeserializeOwned};

use crate::config::DatabaseConfig;
use crate::core::errors::{AppResult, StoreContext};

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// ## 환경 변수
    /// - `MONGODB_URI`: MongoDB 연결 URI (기본값: "mongodb://localhost:27017")
    /// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: "civic_issues_dev")
    ///
    /// 연결 직후 `ping`으로 서버 응답을 확인합니다.
    pub async fn new() -> AppResult<Self> {
        let mongodb_uri = DatabaseConfig::uri();
        let database_name = DatabaseConfig::database_name();

        let mut client_options = ClientOptions::parse(&mongodb_uri)
            .await
            .store_context("mongodb.parse_uri")?;
        client_options.app_name = Some("civic_issue_service".to_string());

        let client = Client::with_options(client_options).store_context("mongodb.client")?;

        client
            .database(&database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .store_context("mongodb.ping")?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 타입이 지정된 컬렉션 핸들
    pub fn collection<T>(&self, name: &str) -> Collection<T>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
    {
        self.get_database().collection::<T>(name)
    }
}
