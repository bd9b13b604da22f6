//! # Entity Validators
//!
//! 요청 DTO에 선언된 `validator` 규칙의 결과를 순서가 보존된
//! [`FieldViolations`]로 변환합니다.
//!
//! `validator`는 필드 에러를 `HashMap`으로 돌려주므로 순서가 없습니다.
//! 각 DTO는 자신의 필드 선언 순서를 [`FieldName`] 목록으로 넘기고,
//! 이 순서대로 위반을 모읍니다.
//!
//! ```rust,ignore
//! const FIELDS: &[FieldName] = &[
//!     FieldName::new("first_name", "firstName"),
//!     FieldName::new("last_name", "lastName"),
//! ];
//!
//! let violations = validate_in_order(&request, FIELDS);
//! ```

pub mod rules;

use validator::{Validate, ValidationErrors};

use crate::core::errors::{FieldViolation, FieldViolations};

/// Rust 필드 이름과 JSON 필드 이름의 쌍
#[derive(Debug, Clone, Copy)]
pub struct FieldName {
    pub rust: &'static str,
    pub json: &'static str,
}

impl FieldName {
    pub const fn new(rust: &'static str, json: &'static str) -> Self {
        Self { rust, json }
    }
}

/// 대상을 검증하고 위반을 선언 순서대로 반환합니다.
pub fn validate_in_order<T: Validate>(target: &T, fields: &[FieldName]) -> FieldViolations {
    match target.validate() {
        Ok(()) => FieldViolations::new(),
        Err(errors) => ordered_violations(&errors, fields),
    }
}

/// `ValidationErrors`를 `fields` 순서대로 정렬된 위반 목록으로 변환합니다.
///
/// 위반은 JSON 필드 이름으로 보고됩니다.
pub fn ordered_violations(errors: &ValidationErrors, fields: &[FieldName]) -> FieldViolations {
    let field_errors = errors.field_errors();
    let mut violations = FieldViolations::new();

    for name in fields {
        let found = field_errors
            .get(name.rust)
            .or_else(|| field_errors.get(name.json));

        let Some(list) = found else { continue };

        for error in list.iter() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid ({})", name.json, error.code));

            violations.push(FieldViolation::new(name.json, error.code.to_string(), message));
        }
    }

    violations
}
