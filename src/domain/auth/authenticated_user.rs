//! 타입 안전한 요청 정체성
//!
//! 인증 미들웨어가 검증한 토큰에서 추출하여 요청 컨텍스트에 첨부하는
//! 구조체입니다. 핸들러는 `FromRequest` 추출자를 통해 읽기 전용으로
//! 접근하며, 미들웨어 외의 어떤 코드도 이 값을 생성하지 않습니다.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::domain::auth::token::TokenClaims;
use crate::errors::AppError;

/// 검증된 토큰에서 추출된 사용자 정체성
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 ID (MongoDB ObjectId의 hex 문자열)
    pub user_id: String,

    /// 사용자명 (게시물 소유권 검사에 사용)
    pub username: String,
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.sub,
            username: claims.username,
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    /// Request Extensions에서 정체성을 꺼냅니다.
    ///
    /// 미들웨어를 거치지 않은 라우트에서 사용되면(라우트 설정 오류)
    /// 401로 응답합니다.
    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extractor_returns_attached_identity() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(AuthenticatedUser {
            user_id: "507f1f77bcf86cd799439011".to_string(),
            username: "hong_gildong".to_string(),
        });

        let user = AuthenticatedUser::extract(&req).await.unwrap();
        assert_eq!(user.username, "hong_gildong");
    }

    #[actix_web::test]
    async fn test_extractor_rejects_missing_identity() {
        let req = TestRequest::default().to_http_request();

        let result = AuthenticatedUser::extract(&req).await;
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_identity_from_claims() {
        let claims = TokenClaims {
            sub: "507f1f77bcf86cd799439011".to_string(),
            username: "hong_gildong".to_string(),
            iat: 0,
        };

        let user = AuthenticatedUser::from(claims);
        assert_eq!(user.user_id, "507f1f77bcf86cd799439011");
        assert_eq!(user.username, "hong_gildong");
    }
}
