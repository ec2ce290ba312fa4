//! # Business Services Module
//!
//! 비즈니스 로직 계층을 구성하는 서비스들을 정의합니다.
//! 핸들러와 리포지토리 사이에서 도메인 규칙(중복 검사, 소유권 검사,
//! 팔로우/좋아요/북마크 집합 의미론)을 집행합니다.
//!
//! ## 모듈 구성
//!
//! - [`auth`] - 자격 증명 해싱과 JWT 토큰 발급/검증
//! - [`users`] - 회원가입/로그인, 디렉터리 조회, 팔로우 그래프, 북마크
//! - [`posts`] - 게시물 작성/수정/삭제, 좋아요
//!
//! 모든 서비스는 시작 시 `main`에서 명시적으로 생성되어
//! `web::Data`로 공유됩니다. 전역 싱글톤은 사용하지 않습니다.

pub mod auth;
pub mod posts;
pub mod users;
