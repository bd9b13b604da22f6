//! # 무결성 검사기
//!
//! 쓰기 직전에 저장소를 조회하여 컬렉션 수준 규칙을 확인합니다.
//!
//! - [`ReferenceChecker`] - `Issue.user`가 존재하는 사용자를 가리키는지
//! - [`UniquenessChecker`] - `(firstName, lastName)` 쌍이 유일한지
//!
//! 두 검사 모두 조회 후 쓰기(check-then-act)이므로 동시 요청 사이의 경쟁을
//! 막지 못합니다. 이름 쌍 유일성은 저장소의 유니크 인덱스가 최종적으로 보장하고,
//! 사용자 참조는 쓰기 시점의 상태만 확인합니다.

pub mod reference;
pub mod uniqueness;

pub use reference::ReferenceChecker;
pub use uniqueness::UniquenessChecker;
