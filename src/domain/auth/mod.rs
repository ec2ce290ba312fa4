//! Auth Domain Module
//!
//! 인증과 관련된 도메인 타입들을 정의합니다.
//! JWT 클레임 구조와 미들웨어가 요청에 첨부하는 타입 안전한
//! 요청 정체성(identity)을 포함합니다.

pub mod authenticated_user;
pub mod token;
