//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, CORS, 패스워드 해싱 관련 설정
//! - [`auth_config`] - JWT 서명키 관련 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{ServerConfig, JwtConfig};
//!
//! let host = ServerConfig::host();
//! let port = ServerConfig::port();
//! println!("Server will bind to {}:{}", host, port);
//!
//! let secret = JwtConfig::secret();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="3000"
//!
//! # 데이터베이스 설정
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="socialmedia"
//!
//! # CORS 설정
//! export CORS_ORIGIN="http://localhost:3000"
//!
//! # JWT 설정
//! export JWT_SECRET_KEY="your-super-secret-key"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
