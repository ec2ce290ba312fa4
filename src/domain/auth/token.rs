//! JWT 토큰 클레임 구조체
//!
//! 회원가입/로그인 시 발급되는 토큰의 페이로드를 정의합니다.

use serde::{Deserialize, Serialize};

/// JWT 클레임
///
/// `sub`와 `username`은 필수이며, 역직렬화 시 둘 중 하나라도 없으면
/// 토큰 검증이 실패합니다. `exp` 클레임은 의도적으로 없습니다:
/// 토큰은 서명이 유효한 한 만료되지 않습니다 (기존 계약 유지).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 ID (MongoDB ObjectId의 hex 문자열)
    pub sub: String,

    /// 사용자명
    pub username: String,

    /// 발급 시각 (Unix timestamp)
    pub iat: i64,
}
