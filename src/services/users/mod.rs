//! 사용자 리소스 서비스

pub mod user_service;

pub use user_service::UserService;
