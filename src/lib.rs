//! # Civic Issue Service
//!
//! 시민이 위치 기반 문제(이슈)를 보고하고, 시민과 관리자(사용자)가 이를
//! 생성하고 수정하는 HTTP API입니다.
//!
//! ## 계층 구조
//!
//! ```text
//! routes / handlers      HTTP ↔ DTO, AppError → 상태 코드
//!        │
//!        ▼
//! services               검증 → 무결성 검사 → 저장
//!   └─ integrity         참조 무결성, 이름 쌍 유일성
//!        │
//!        ▼
//! repositories           UserStore / IssueStore (MongoDB, 메모리)
//! ```
//!
//! ## 보조 모듈
//!
//! - [`core`] - 에러 타입, 서비스 레지스트리
//! - [`config`] - 환경 변수 기반 설정
//! - [`validation`] - 필드 검증 규칙과 위반 순서 보존
//! - [`domain`] - 엔티티와 DTO

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;
