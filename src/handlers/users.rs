//! `/users` 핸들러

use actix_web::http::header;
use actix_web::{HttpResponse, get, patch, post, web};

use crate::core::errors::AppError;
use crate::domain::dto::common::PageQuery;
use crate::domain::dto::users::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::handlers::pagination::paged_response;
use crate::services::UserService;

#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = UserResponse::from(service.create(payload.into_inner()).await?);

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/users/{}", user.id)))
        .json(user))
}

/// 이름 순 사용자 목록 (`page`, `pageSize`)
#[get("")]
pub async fn list_users(
    service: web::Data<UserService>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let page = service.list(&query).await?;

    Ok(paged_response(page.map(UserResponse::from)))
}

#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get(&user_id).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[patch("/{user_id}")]
pub async fn patch_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = service.patch(&user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
