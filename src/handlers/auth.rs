//! 인증 HTTP 핸들러
//!
//! 회원가입과 로그인 엔드포인트를 처리합니다. 두 엔드포인트 모두
//! 성공 시 사용자 문서와 HS256 JWT를 함께 반환합니다.

use actix_web::{HttpResponse, post, web};
use serde_json::json;
use validator::Validate;

use crate::domain::dto::users::request::{LoginRequest, SignupRequest};
use crate::domain::dto::users::response::AuthUserResponse;
use crate::errors::errors::AppError;
use crate::services::auth::TokenService;
use crate::services::users::UserService;

/// 회원가입 핸들러
///
/// 사용자명/이메일 중복을 검사하고 비밀번호를 해시한 뒤 사용자를
/// 생성합니다. 생성된 사용자 명의의 토큰을 즉시 발급합니다.
///
/// # Endpoint
/// `POST /api/auth/signup`
#[post("/signup")]
pub async fn signup(
    user_service: web::Data<UserService>,
    token_service: web::Data<TokenService>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let created = user_service.signup(payload.into_inner()).await?;
    let encoded_token = token_service.issue(&created)?;

    Ok(HttpResponse::Created().json(json!({
        "createdUser": AuthUserResponse::from(created),
        "encodedToken": encoded_token,
    })))
}

/// 로그인 핸들러
///
/// 사용자명으로 조회한 뒤 비밀번호를 검증합니다. 미등록 사용자명은
/// 404, 비밀번호 불일치는 401입니다.
///
/// # Endpoint
/// `POST /api/auth/login`
#[post("/login")]
pub async fn login(
    user_service: web::Data<UserService>,
    token_service: web::Data<TokenService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let found = user_service.login(&payload).await?;
    let encoded_token = token_service.issue(&found)?;

    log::info!("로그인 성공: {}", found.username);

    Ok(HttpResponse::Ok().json(json!({
        "foundUser": AuthUserResponse::from(found),
        "encodedToken": encoded_token,
    })))
}
