//! 공통 유틸리티 함수 모듈
//!
//! - [`display_terminal`] - 시작 시 레지스트리 초기화 과정 출력

pub mod display_terminal;
