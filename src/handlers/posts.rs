//! 게시물 HTTP 핸들러
//!
//! 게시물 CRUD와 좋아요 엔드포인트를 처리합니다. 작성/수정/삭제는
//! 인증이 필요하며, 수정과 삭제는 소유자 본인만 가능합니다.

use actix_web::{HttpResponse, delete, get, post, web};
use serde_json::json;
use validator::Validate;

use crate::domain::auth::authenticated_user::AuthenticatedUser;
use crate::domain::dto::posts::request::{CreatePostRequest, EditPostRequest};
use crate::errors::errors::AppError;
use crate::services::posts::PostService;

/// 전체 게시물 목록 조회
///
/// # Endpoint
/// `GET /api/posts`
#[get("")]
pub async fn get_all_posts(
    post_service: web::Data<PostService>,
) -> Result<HttpResponse, AppError> {
    let posts = post_service.get_all().await?;
    Ok(HttpResponse::Ok().json(json!({ "posts": posts })))
}

/// ID로 단일 게시물 조회
///
/// # Endpoint
/// `GET /api/posts/{postId}`
#[get("/{post_id}")]
pub async fn get_post_by_id(
    post_service: web::Data<PostService>,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let post = post_service.get_by_id(&post_id).await?;
    Ok(HttpResponse::Ok().json(json!({ "post": post })))
}

/// 특정 사용자의 게시물 목록 조회
///
/// # Endpoint
/// `GET /api/posts/user/{username}`
#[get("/user/{username}")]
pub async fn get_posts_by_username(
    post_service: web::Data<PostService>,
    username: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let posts = post_service.get_by_username(&username).await?;
    Ok(HttpResponse::Ok().json(json!({ "posts": posts })))
}

/// 게시물 작성
///
/// # Endpoint
/// `POST /api/posts`
#[post("")]
pub async fn create_post(
    post_service: web::Data<PostService>,
    identity: AuthenticatedUser,
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let new_post = post_service
        .create(&identity, payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(json!({ "newPost": new_post })))
}

/// 게시물 수정
///
/// 성공 시 수정된 게시물과 전체 게시물 목록을 함께 반환합니다.
///
/// # Endpoint
/// `POST /api/posts/edit/{postId}`
#[post("/{post_id}")]
pub async fn edit_post(
    post_service: web::Data<PostService>,
    identity: AuthenticatedUser,
    post_id: web::Path<String>,
    payload: web::Json<EditPostRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let (post, posts) = post_service
        .edit(&identity, &post_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(json!({ "post": post, "posts": posts })))
}

/// 게시물 삭제
///
/// # Endpoint
/// `DELETE /api/posts/{postId}`
#[delete("/{post_id}")]
pub async fn delete_post(
    post_service: web::Data<PostService>,
    identity: AuthenticatedUser,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let posts = post_service.delete(&identity, &post_id).await?;
    Ok(HttpResponse::Ok().json(json!({ "posts": posts })))
}

/// 게시물 좋아요
///
/// # Endpoint
/// `POST /api/posts/like/{postId}`
#[post("/{post_id}")]
pub async fn like_post(
    post_service: web::Data<PostService>,
    identity: AuthenticatedUser,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let posts = post_service.like(&identity.user_id, &post_id).await?;
    Ok(HttpResponse::Ok().json(json!({ "posts": posts })))
}

/// 게시물 좋아요 취소
///
/// # Endpoint
/// `POST /api/posts/dislike/{postId}`
#[post("/{post_id}")]
pub async fn dislike_post(
    post_service: web::Data<PostService>,
    identity: AuthenticatedUser,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let posts = post_service.dislike(&identity.user_id, &post_id).await?;
    Ok(HttpResponse::Ok().json(json!({ "posts": posts })))
}
