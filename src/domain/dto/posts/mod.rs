//! Posts DTO Module
//!
//! 게시물 관련 요청/응답 DTO를 정의하는 모듈입니다.
//! 응답 DTO는 게시물과 함께 소유자 요약 정보를 붙여 내려줍니다.

pub mod request;
pub mod response;
