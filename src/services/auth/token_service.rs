//! JWT 토큰 관리 서비스 구현
//!
//! 회원가입/로그인 시 정체성 토큰을 발급하고, 보호된 요청에서
//! 토큰을 검증합니다. HMAC-SHA256 서명을 사용합니다.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::domain::auth::token::TokenClaims;
use crate::domain::entities::users::user::User;
use crate::errors::{AppError, ErrorContext};

/// JWT 토큰 관리 서비스
///
/// 서명 비밀키는 서버 시작 시 설정에서 한 번 읽혀 생성자로 전달되며,
/// 이후 프로세스 전체에서 읽기 전용입니다.
///
/// 발급되는 토큰에는 `exp` 클레임이 없습니다. 기존 클라이언트 계약을
/// 유지하기 위한 것으로, 검증 시에도 `exp`를 요구하지 않습니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// 서명 비밀키로부터 새 토큰 서비스를 생성합니다.
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // 토큰에 exp가 없으므로 만료 검증을 끄고 필수 클레임에서 제외
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// 사용자를 위한 정체성 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 저장되지 않은 사용자(ID 없음) 또는 인코딩 실패
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let sub = user.id_string().ok_or_else(|| {
            AppError::InternalError("저장되지 않은 사용자에게는 토큰을 발급할 수 없습니다".to_string())
        })?;

        let claims = TokenClaims {
            sub,
            username: user.username.clone(),
            iat: Utc::now().timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).context("JWT 토큰 생성 실패")
    }

    /// 토큰을 검증하고 클레임을 추출합니다.
    ///
    /// 서명 불일치, 잘못된 형식, 필수 클레임(`sub`, `username`) 누락은
    /// 모두 `AuthorizationError`로 보고됩니다. 미들웨어는 이를 403으로
    /// 변환합니다. 예상 가능한 무효 토큰으로 패닉하지 않습니다.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AppError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::AuthorizationError(format!("유효하지 않은 토큰입니다: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;
    use serde::Serialize;

    fn saved_user() -> User {
        let mut user = User::new(
            "길동".to_string(),
            "홍".to_string(),
            "hong@example.com".to_string(),
            "hong_gildong".to_string(),
            "$2b$10$hashedpassword".to_string(),
            None,
        );
        user.id = Some(ObjectId::new());
        user
    }

    #[test]
    fn test_issue_then_verify_roundtrip() {
        let service = TokenService::new("test-secret");
        let user = saved_user();

        let token = service.issue(&user).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, user.id_string().unwrap());
        assert_eq!(claims.username, "hong_gildong");
    }

    #[test]
    fn test_issue_fails_for_unsaved_user() {
        let service = TokenService::new("test-secret");
        let mut user = saved_user();
        user.id = None;

        assert!(matches!(
            service.issue(&user),
            Err(AppError::InternalError(_))
        ));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let service = TokenService::new("test-secret");
        let token = service.issue(&saved_user()).unwrap();

        // 서명 마지막 글자를 변조
        let mut tampered = token[..token.len() - 1].to_string();
        tampered.push(if token.ends_with('A') { 'B' } else { 'A' });

        assert!(matches!(
            service.verify(&tampered),
            Err(AppError::AuthorizationError(_))
        ));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let issuer = TokenService::new("secret-one");
        let verifier = TokenService::new("secret-two");

        let token = issuer.issue(&saved_user()).unwrap();
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let service = TokenService::new("test-secret");

        assert!(matches!(
            service.verify("not.a.jwt"),
            Err(AppError::AuthorizationError(_))
        ));
    }

    #[test]
    fn test_token_without_username_claim_is_rejected() {
        #[derive(Serialize)]
        struct PartialClaims {
            sub: String,
            iat: i64,
        }

        let claims = PartialClaims {
            sub: "507f1f77bcf86cd799439011".to_string(),
            iat: 0,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let service = TokenService::new("test-secret");
        assert!(matches!(
            service.verify(&token),
            Err(AppError::AuthorizationError(_))
        ));
    }

    #[test]
    fn test_token_has_no_expiry() {
        let service = TokenService::new("test-secret");
        let token = service.issue(&saved_user()).unwrap();

        // 페이로드에 exp 클레임이 없어야 함
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        let payload = decode::<serde_json::Value>(
            &token,
            &DecodingKey::from_secret(b"test-secret"),
            &validation,
        )
        .unwrap()
        .claims;

        assert!(payload.get("exp").is_none());
        assert!(payload.get("sub").is_some());
    }
}
