//! 페이지 응답 헬퍼
//!
//! 본문은 항목 배열이고, 페이지 메타데이터는 헤더로 전달합니다.

use actix_web::HttpResponse;
use serde::Serialize;

use crate::domain::dto::common::Page;

pub const PAGE_HEADER: &str = "X-Pagination-Page";
pub const PAGE_SIZE_HEADER: &str = "X-Pagination-Page-Size";
pub const TOTAL_HEADER: &str = "X-Pagination-Total";

pub fn paged_response<T: Serialize>(page: Page<T>) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((PAGE_HEADER, page.meta.page.to_string()))
        .insert_header((PAGE_SIZE_HEADER, page.meta.page_size.to_string()))
        .insert_header((TOTAL_HEADER, page.meta.total.to_string()))
        .json(page.items)
}
