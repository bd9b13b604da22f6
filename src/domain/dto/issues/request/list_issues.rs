use serde::Deserialize;

use crate::domain::dto::common::pagination::PageQuery;

/// 이슈 목록 조회 쿼리 파라미터
///
/// 모든 값은 문자열로 받고, 해석은 페이지네이션 해석기와 서비스가 담당합니다.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueListQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
    /// 작성자 필터 (`user` 또는 `userId`)
    #[serde(alias = "userId")]
    pub user: Option<String>,
}

impl IssueListQuery {
    pub fn page_query(&self) -> PageQuery {
        PageQuery {
            page: self.page.clone(),
            page_size: self.page_size.clone(),
        }
    }

    /// 비어 있지 않은 작성자 필터 값
    pub fn user_filter(&self) -> Option<&str> {
        self.user.as_deref().filter(|raw| !raw.is_empty())
    }
}
