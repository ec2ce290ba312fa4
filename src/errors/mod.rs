//! 에러 처리 모듈
//!
//! 애플리케이션 전역에서 사용하는 에러 타입과 HTTP 변환 로직을 제공합니다.

pub mod errors;

pub use errors::*;
