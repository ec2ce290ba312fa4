//! # Authentication Configuration Module
//!
//! JWT 토큰 서명 관련 설정을 관리하는 모듈입니다.
//! Spring Security의 `jwt.secret` 설정과 유사한 역할을 수행합니다.
//!
//! ## 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET_KEY="your-super-secret-jwt-key"
//! ```

use std::env;

/// JSON Web Token (JWT) 관련 설정을 관리하는 구조체
///
/// 토큰 서명에 사용할 비밀키를 관리합니다. 서명키는 서버 시작 시 한 번 읽혀
/// `TokenService` 생성자로 전달되며, 이후 프로세스 전체에서 읽기 전용입니다.
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 이 키는 JWT 토큰의 무결성을 보장하는 핵심 요소입니다.
    /// 강력한 암호화 키를 사용해야 하며, 절대 노출되어서는 안 됩니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 "your-secret-key"를 사용하지만,
    /// 이는 개발 환경에서만 안전하며 경고 로그가 출력됩니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// # 안전한 JWT 키 생성
    /// openssl rand -base64 32
    /// ```
    ///
    /// # 환경 변수 설정
    ///
    /// ```bash
    /// export JWT_SECRET_KEY="your-super-secret-256-bit-key-generated-securely"
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET_KEY").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET_KEY not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        })
    }
}
