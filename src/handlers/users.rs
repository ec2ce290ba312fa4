//! 사용자 HTTP 핸들러
//!
//! 사용자 조회, 프로필 수정, 팔로우 그래프, 북마크 엔드포인트를
//! 처리합니다. 보호된 엔드포인트는 인증 미들웨어가 첨부한
//! [`AuthenticatedUser`]로 요청자를 식별합니다.
//!
//! [`AuthenticatedUser`]: crate::domain::auth::authenticated_user::AuthenticatedUser

use actix_web::{HttpResponse, get, post, web};
use serde_json::json;
use validator::Validate;

use crate::domain::auth::authenticated_user::AuthenticatedUser;
use crate::domain::dto::users::request::EditUserRequest;
use crate::errors::errors::AppError;
use crate::services::users::UserService;

/// 전체 사용자 목록 조회
///
/// # Endpoint
/// `GET /api/users`
#[get("")]
pub async fn get_all_users(
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let users = user_service.get_all().await?;
    Ok(HttpResponse::Ok().json(json!({ "users": users })))
}

/// 사용자명으로 단일 사용자 조회
///
/// # Endpoint
/// `GET /api/users/{username}`
#[get("/{username}")]
pub async fn get_user_by_username(
    user_service: web::Data<UserService>,
    username: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = user_service.get_by_username(&username).await?;
    Ok(HttpResponse::Ok().json(json!({ "user": user })))
}

/// 본인 프로필 수정
///
/// 요청 본문의 `userData` 객체에 포함된 필드만 갱신됩니다.
///
/// # Endpoint
/// `POST /api/users/edit`
#[post("")]
pub async fn edit_profile(
    user_service: web::Data<UserService>,
    identity: AuthenticatedUser,
    payload: web::Json<EditUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = user_service
        .edit_profile(&identity.user_id, payload.into_inner().user_data)
        .await?;

    log::info!("프로필 수정: {}", identity.username);

    Ok(HttpResponse::Ok().json(json!({ "user": user })))
}

/// 사용자 팔로우
///
/// # Endpoint
/// `POST /api/users/follow/{followUserId}`
#[post("/{follow_user_id}")]
pub async fn follow_user(
    user_service: web::Data<UserService>,
    identity: AuthenticatedUser,
    follow_user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let (user, users) = user_service
        .follow(&identity.user_id, &follow_user_id)
        .await?;

    log::info!("팔로우: {} -> {}", identity.username, follow_user_id);

    Ok(HttpResponse::Ok().json(json!({ "user": user, "users": users })))
}

/// 사용자 언팔로우
///
/// # Endpoint
/// `POST /api/users/unfollow/{unfollowUserId}`
#[post("/{unfollow_user_id}")]
pub async fn unfollow_user(
    user_service: web::Data<UserService>,
    identity: AuthenticatedUser,
    unfollow_user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let (user, users) = user_service
        .unfollow(&identity.user_id, &unfollow_user_id)
        .await?;

    log::info!("언팔로우: {} -> {}", identity.username, unfollow_user_id);

    Ok(HttpResponse::Ok().json(json!({ "user": user, "users": users })))
}

/// 북마크 목록 조회 (게시물 확장)
///
/// 삭제된 게시물을 가리키는 북마크는 결과에서 조용히 생략됩니다.
///
/// # Endpoint
/// `GET /api/users/bookmark`
#[get("")]
pub async fn get_bookmarks(
    user_service: web::Data<UserService>,
    identity: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let bookmarks = user_service.list_bookmarks(&identity.user_id).await?;
    Ok(HttpResponse::Ok().json(json!({ "bookmarks": bookmarks })))
}

/// 게시물 북마크 추가
///
/// # Endpoint
/// `POST /api/users/bookmark/{postId}`
#[post("/{post_id}")]
pub async fn add_bookmark(
    user_service: web::Data<UserService>,
    identity: AuthenticatedUser,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let bookmarks = user_service
        .add_bookmark(&identity.user_id, &post_id)
        .await?;
    Ok(HttpResponse::Ok().json(json!({ "bookmarks": bookmarks })))
}

/// 게시물 북마크 제거
///
/// # Endpoint
/// `POST /api/users/remove-bookmark/{postId}`
#[post("/{post_id}")]
pub async fn remove_bookmark(
    user_service: web::Data<UserService>,
    identity: AuthenticatedUser,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let bookmarks = user_service
        .remove_bookmark(&identity.user_id, &post_id)
        .await?;
    Ok(HttpResponse::Ok().json(json!({ "bookmarks": bookmarks })))
}
