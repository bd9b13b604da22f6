//! 데이터 및 서버 설정 관리 모듈
//!
//! 저장소, 서버, 실행 환경, 요청 제한 관련 설정을 환경 변수에서 읽어옵니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우
    /// `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_name(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`.
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트. 기본값: 8080 (`PORT`)
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소. 기본값: "0.0.0.0" (`HOST`)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// 연결 URI. 기본값: `mongodb://localhost:27017` (`MONGODB_URI`)
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 데이터베이스 이름. 기본값: `civic_issues_dev` (`DATABASE_NAME`)
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "civic_issues_dev".to_string())
    }
}

/// 문서 저장소 구현 선택
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// MongoDB 컬렉션 (기본값)
    MongoDb,
    /// 프로세스 내 메모리 저장소 (로컬 실행 및 테스트용)
    Memory,
}

impl StoreBackend {
    /// `STORE_BACKEND` 환경 변수에서 저장소 구현을 선택합니다.
    pub fn current() -> Self {
        Self::from_name(&env::var("STORE_BACKEND").unwrap_or_default())
    }

    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StoreBackend::Memory,
            _ => StoreBackend::MongoDb,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::MongoDb => "mongodb",
            StoreBackend::Memory => "memory",
        }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경 변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn load() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        let config = Self { per_second, burst_size };
        log::info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}
