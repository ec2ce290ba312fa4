//! 서버 및 보안 관련 설정 관리 모듈
//!
//! 서버 바인딩, CORS, 패스워드 해싱 관련 설정을 관리합니다.

use std::env;

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: 3000
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Returns
    ///
    /// 호스트 주소. 기본값: "0.0.0.0" (모든 인터페이스)
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 요청을 허용할 프론트엔드 오리진을 반환합니다.
    ///
    /// # Returns
    ///
    /// 허용된 오리진. 기본값: "http://localhost:3000"
    ///
    /// # Environment Variables
    ///
    /// - `CORS_ORIGIN`: 허용할 오리진 (예: "https://app.example.com")
    pub fn allowed_origin() -> String {
        env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string())
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 기본 bcrypt cost
    pub const DEFAULT_BCRYPT_COST: u32 = 10;

    /// bcrypt cost를 반환합니다.
    ///
    /// # Returns
    ///
    /// 4-15 범위의 bcrypt cost 값. 기본값: 10
    ///
    /// # Environment Variables
    ///
    /// - `BCRYPT_COST`: 커스텀 cost 설정 (범위를 벗어나면 무시)
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
        }

        Self::DEFAULT_BCRYPT_COST
    }
}
