//! Users DTO Module
//!
//! 사용자 관련 요청/응답 DTO를 정의하는 모듈입니다.
//! 요청 DTO는 `validator`를 통한 입력 검증을, 응답 DTO는
//! 비밀번호 해시가 절대 포함되지 않는 직렬화를 보장합니다.

pub mod request;
pub mod response;
