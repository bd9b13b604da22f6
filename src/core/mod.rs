//! # Core Framework Module
//!
//! 서비스 전반에서 공유하는 기반 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 인프라 컴포넌트를 타입 기반으로 보관
//! - **자동 레지스트리**: `inventory` 기반 서비스 등록 및 초기화
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 리소스 서비스가 반환하는 단일 에러 타입
//! - **ErrorKind**: 전송 계층이 상태 코드로 매핑하는 에러 분류
//! - **FieldViolations**: 순서가 보존되는 필드 위반 목록

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
