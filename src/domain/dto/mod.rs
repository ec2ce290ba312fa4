//! # Data Transfer Objects Module
//!
//! 계층 간 데이터 전송을 담당하는 DTO들을 정의합니다.
//! 요청 DTO는 `serde` 역직렬화와 `validator` 검증을 결합하여
//! HTTP 경계에서 잘못된 입력을 차단하고, 응답 DTO는 엔티티에서
//! 민감 정보(비밀번호 해시)를 제거한 형태만 노출합니다.
//!
//! ## 모듈 구성
//!
//! - [`users`] - 회원가입/로그인/프로필 수정 요청과 사용자 응답
//! - [`posts`] - 게시물 작성/수정 요청과 게시물 응답
//!
//! ## 직렬화 규약
//!
//! 기존 클라이언트와의 호환을 위해 모든 필드는 camelCase로 직렬화되며
//! (`firstName`, `mediaURL`, `likeCount`, ...), ID는 hex 문자열,
//! 시간은 RFC 3339 문자열로 내려갑니다.

pub mod users;
pub mod posts;
