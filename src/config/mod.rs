//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리합니다.
//! `.env.dev` / `.env.prod` 파일은 `main.rs`에서 `PROFILE`에 따라 로드됩니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 저장소
//! export STORE_BACKEND="mongodb"          # mongodb | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="civic_issues_dev"
//!
//! # 요청 제한
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```

pub mod data_config;

pub use data_config::*;
