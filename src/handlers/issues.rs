//! `/issues` 핸들러

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, patch, post, web};

use crate::core::errors::AppError;
use crate::domain::dto::issues::{CreateIssueRequest, IssueListQuery, IssueResponse, UpdateIssueRequest};
use crate::handlers::pagination::paged_response;
use crate::services::IssueService;

#[post("")]
pub async fn create_issue(
    service: web::Data<IssueService>,
    payload: web::Json<CreateIssueRequest>,
) -> Result<HttpResponse, AppError> {
    let issue = IssueResponse::from(service.create(payload.into_inner()).await?);

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/issues/{}", issue.id)))
        .json(issue))
}

/// 상태 순 이슈 목록 (`page`, `pageSize`, `user` 또는 `userId`)
#[get("")]
pub async fn list_issues(
    service: web::Data<IssueService>,
    query: web::Query<IssueListQuery>,
) -> Result<HttpResponse, AppError> {
    let page = service.list(&query).await?;

    Ok(paged_response(page.map(IssueResponse::from)))
}

#[get("/{issue_id}")]
pub async fn get_issue(
    service: web::Data<IssueService>,
    issue_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let issue = service.get(&issue_id).await?;

    Ok(HttpResponse::Ok().json(IssueResponse::from(issue)))
}

#[patch("/{issue_id}")]
pub async fn patch_issue(
    service: web::Data<IssueService>,
    issue_id: web::Path<String>,
    payload: web::Json<UpdateIssueRequest>,
) -> Result<HttpResponse, AppError> {
    let issue = service.patch(&issue_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(IssueResponse::from(issue)))
}

#[delete("/{issue_id}")]
pub async fn delete_issue(
    service: web::Data<IssueService>,
    issue_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete(&issue_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
