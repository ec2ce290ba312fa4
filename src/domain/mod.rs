//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 규칙과 데이터 구조를 담당합니다.
//!
//! ## 모듈 구성
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 핵심 비즈니스 엔티티 (MongoDB 문서와 1:1 매핑)
//! ├── dto       - 데이터 전송 객체 (Request/Response)
//! └── auth      - 인증 도메인 (JWT 클레임, 요청 정체성)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 설계 원칙
//!
//! - **엔티티 불변식**: 팔로우/좋아요/북마크 집합 연산은 엔티티 메서드로
//!   캡슐화되어 중복 금지와 `likeCount == |likedBy|` 불변식을 지킵니다.
//! - **민감 정보 격리**: 비밀번호 해시는 엔티티에만 존재하며 어떤 응답
//!   DTO에도 포함되지 않습니다.
//! - **타입 안전한 정체성**: 미들웨어가 첨부하는 요청 정체성은 동적 blob이
//!   아니라 [`auth::authenticated_user::AuthenticatedUser`] 구조체입니다.

pub mod auth;
pub mod dto;
pub mod entities;
