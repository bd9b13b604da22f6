//! HTTP 요청 핸들러 모듈
//!
//! 핸들러는 요청을 DTO로 받아 서비스에 넘기고, 결과를 응답 DTO로 바꿉니다.
//! 서비스는 `web::Data`로 주입됩니다.
//!
//! - [`users`] - `/users`
//! - [`issues`] - `/issues`
//! - [`errors`] - `AppError` → HTTP 응답
//! - [`pagination`] - 페이지 메타데이터 헤더

pub mod errors;
pub mod issues;
pub mod pagination;
pub mod users;
