//! JWT 인증 미들웨어
//!
//! 보호된 스코프에서 `authorization` 헤더의 토큰을 검증하고
//! 요청 정체성을 첨부합니다.
//!
//! 요청마다 두 상태를 가집니다:
//!
//! - 헤더 없음 -> 401로 즉시 종료 (핸들러 미실행)
//! - 토큰 검증 실패 -> 403으로 즉시 종료
//! - 검증 성공 -> [`AuthenticatedUser`]를 첨부하고 다음 핸들러로 진행
//!
//! [`AuthenticatedUser`]: crate::domain::auth::authenticated_user::AuthenticatedUser

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 보호된 스코프에 `.wrap()`으로 적용하는 인증 미들웨어
///
/// 토큰 검증은 `web::Data`로 공유된 `TokenService`에 위임합니다.
#[derive(Debug, Clone, Default)]
pub struct AuthMiddleware;

impl AuthMiddleware {
    /// 새로운 인증 미들웨어 생성
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
