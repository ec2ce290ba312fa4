//! Authentication Services Module
//!
//! 인증 관련 서비스들을 정의하는 모듈입니다.
//!
//! - [`credential`] - 비밀번호 해싱/검증 (bcrypt)
//! - [`token_service`] - JWT 정체성 토큰 발급/검증 (HS256)

pub mod credential;
pub mod token_service;

pub use token_service::TokenService;
