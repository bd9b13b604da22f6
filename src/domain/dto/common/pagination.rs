//! # Pagination Resolver
//!
//! 원시 쿼리 값(`page`, `pageSize`)을 정규화된 페이지 창으로 변환합니다.
//!
//! ## 규칙
//!
//! | 입력 | 결과 |
//! |------|------|
//! | `page` 없음, 정수 아님, 1 미만 | `1` |
//! | `pageSize` 없음, 정수 아님, 1 미만 | [`DEFAULT_PAGE_SIZE`] |
//! | `pageSize` > [`MAX_PAGE_SIZE`] | [`MAX_PAGE_SIZE`] |
//!
//! `skip = (page - 1) * pageSize`, `limit = pageSize`.

use serde::{Deserialize, Serialize};

/// `pageSize`가 없거나 유효하지 않을 때의 기본값
pub const DEFAULT_PAGE_SIZE: u64 = 100;

/// 허용되는 최대 `pageSize`
pub const MAX_PAGE_SIZE: u64 = 100;

/// 목록 조회 쿼리의 페이지 파라미터 (원시 문자열)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl PageQuery {
    pub fn resolve(&self) -> PageRequest {
        resolve(self.page.as_deref(), self.page_size.as_deref())
    }
}

/// 정규화된 페이지 요청
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1부터 시작하는 페이지 번호
    pub page: u64,
    pub page_size: u64,
    pub skip: u64,
    pub limit: u64,
}

/// 원시 값을 [`PageRequest`]로 해석합니다. 실패하지 않습니다.
pub fn resolve(raw_page: Option<&str>, raw_page_size: Option<&str>) -> PageRequest {
    let page = parse_positive(raw_page).unwrap_or(1);
    let page_size = parse_positive(raw_page_size)
        .map(|size| size.min(MAX_PAGE_SIZE))
        .unwrap_or(DEFAULT_PAGE_SIZE);

    PageRequest {
        page,
        page_size,
        skip: (page - 1).saturating_mul(page_size),
        limit: page_size,
    }
}

/// 1 이상의 정수만 받아들입니다.
fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw.map(str::trim)
        .and_then(|value| value.parse::<i64>().ok())
        .filter(|value| *value >= 1)
        .map(|value| value as u64)
}

/// 응답 헤더로 노출되는 페이지 메타데이터
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u64,
    pub page_size: u64,
    /// 필터에 맞는 전체 항목 수 (페이지와 무관)
    pub total: u64,
}

/// 페이지 단위 조회 결과
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            meta: PageMeta {
                page: request.page,
                page_size: request.page_size,
                total,
            },
        }
    }

    /// 항목이 없는 페이지 (`total = 0`)
    pub fn empty(request: PageRequest) -> Self {
        Self::new(Vec::new(), request, 0)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}
