//! 미들웨어 모듈
//!
//! 보호된 라우트 스코프에 적용되는 JWT 인증 미들웨어를 제공합니다.
//! 인증에 성공하면 요청 extension에 [`AuthenticatedUser`]가 저장되어
//! 핸들러에서 extractor로 꺼내 쓸 수 있습니다.
//!
//! [`AuthenticatedUser`]: crate::domain::auth::authenticated_user::AuthenticatedUser

mod auth_inner;
pub mod auth_middleware;

pub use auth_middleware::AuthMiddleware;
