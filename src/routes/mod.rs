//! # 라우트 구성
//!
//! ```text
//! GET    /health
//! POST   /users            GET /users            GET /users/{id}    PATCH /users/{id}
//! POST   /issues           GET /issues           GET /issues/{id}   PATCH /issues/{id}
//! DELETE /issues/{id}
//! ```
//!
//! 서비스(`web::Data<UserService>`, `web::Data<IssueService>`)는 앱 구성 시
//! `app_data`로 따로 등록해야 합니다.

use actix_web::{HttpResponse, get, web};
use serde_json::json;

use crate::config::StoreBackend;
use crate::handlers;
use crate::handlers::errors::{json_error_handler, query_error_handler};

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler));

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
    configure_issue_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::create_user)
            .service(handlers::users::list_users)
            .service(handlers::users::get_user)
            .service(handlers::users::patch_user),
    );
}

fn configure_issue_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/issues")
            .service(handlers::issues::create_issue)
            .service(handlers::issues::list_issues)
            .service(handlers::issues::get_issue)
            .service(handlers::issues::patch_issue)
            .service(handlers::issues::delete_issue),
    );
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "civic_issue_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "store": StoreBackend::current().as_str(),
    }))
}
