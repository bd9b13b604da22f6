//! 시민 이슈 보고 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! `STORE_BACKEND`에 따라 MongoDB 또는 메모리 저장소를 사용합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{info, warn};

use civic_issue_service::config::{Environment, RateLimitConfig, ServerConfig, StoreBackend};
use civic_issue_service::core::registry::ServiceLocator;
use civic_issue_service::db::Database;
use civic_issue_service::repositories::Stores;
use civic_issue_service::routes::configure_all_routes;
use civic_issue_service::services::{IssueService, UserService};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let env_source = load_env_file();
    init_logging();

    info!("🚀 시민 이슈 서비스 시작중... ({:?})", Environment::current());
    info!("환경 파일: {}", env_source);

    // 저장소 초기화 후 ServiceLocator에 등록
    let stores = initialize_stores().await?;
    ServiceLocator::set(Arc::new(stores));

    // 모든 서비스 초기화
    let count = ServiceLocator::initialize_all();
    info!("✅ {}개 서비스가 초기화되었습니다", count);

    start_http_server().await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
async fn start_http_server() -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("잘못된 Rate Limiting 설정 (0 값은 허용되지 않습니다)"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let user_service = web::Data::from(UserService::instance());
    let issue_service = web::Data::from(IssueService::instance());

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(user_service.clone())
            .app_data(issue_service.clone())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - `.env.dev` (기본값)
/// * `PROFILE=prod` - `.env.prod`
/// * 기타 - `.env`
///
/// 로깅 초기화 전에 호출되므로 결과를 문자열로 돌려줍니다.
fn load_env_file() -> String {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let filename = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => {
            return match dotenv() {
                Ok(path) => format!("{} 로드 됨", path.display()),
                Err(e) => format!(".env 파일 로드 실패: {}", e),
            };
        }
    };

    match dotenv::from_filename(filename) {
        Ok(_) => format!("{} 로드 됨 (PROFILE={})", filename, profile),
        Err(e) => format!("{} 로드 실패 (PROFILE={}): {}", filename, profile, e),
    }
}

/// `RUST_LOG` 기반 로깅 초기화. 기본값: "info,actix_web=debug"
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// `STORE_BACKEND`에 맞는 저장소를 만듭니다.
async fn initialize_stores() -> io::Result<Stores> {
    match StoreBackend::current() {
        StoreBackend::Memory => {
            warn!("💾 메모리 저장소 사용: 재시작 시 데이터가 사라집니다");
            Ok(Stores::in_memory())
        }
        StoreBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::new().await.map_err(io::Error::other)?;
            Stores::mongo(&database).await.map_err(io::Error::other)
        }
    }
}

fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers(vec![
            header::LOCATION,
            header::HeaderName::from_static("x-pagination-page"),
            header::HeaderName::from_static("x-pagination-page-size"),
            header::HeaderName::from_static("x-pagination-total"),
        ])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
