//! 자격 증명 저장소
//!
//! 비밀번호의 단방향 해싱과 검증을 담당합니다.
//! 평문 비밀번호는 영속화 전에 반드시 이 모듈을 거쳐야 합니다.

use bcrypt::{hash, verify};

use crate::config::PasswordConfig;
use crate::errors::{AppResult, ErrorContext};

/// 평문 비밀번호를 bcrypt로 해싱합니다.
///
/// cost는 설정값(기본 10)을 따르며, 솔트는 bcrypt가 자동 생성합니다.
pub fn hash_password(plaintext: &str) -> AppResult<String> {
    hash(plaintext, PasswordConfig::bcrypt_cost()).context("비밀번호 해싱 실패")
}

/// 평문 비밀번호를 저장된 해시와 비교합니다.
///
/// 비밀번호 불일치는 `Ok(false)`로 보고되며, 저장된 해시 자체가
/// 손상된 경우에만 내부 에러로 실패합니다.
pub fn verify_password(plaintext: &str, hashed: &str) -> AppResult<bool> {
    verify(plaintext, hashed).context("비밀번호 해시 형식이 올바르지 않습니다")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[test]
    fn test_hash_then_verify_roundtrip() {
        let hashed = hash_password("secret123").unwrap();

        assert_ne!(hashed, "secret123");
        assert!(verify_password("secret123", &hashed).unwrap());
    }

    #[test]
    fn test_wrong_password_is_rejected_without_error() {
        let hashed = hash_password("secret123").unwrap();

        assert!(!verify_password("wrong-password", &hashed).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_internal_error() {
        let result = verify_password("secret123", "not-a-bcrypt-hash");

        assert!(matches!(result, Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        // 솔트 덕분에 해시는 매번 달라야 함
        let first = hash_password("secret123").unwrap();
        let second = hash_password("secret123").unwrap();

        assert_ne!(first, second);
    }
}
