//! 소셜 미디어 백엔드
//!
//! Rust 기반의 소셜 미디어 REST API 서버입니다. JWT 토큰 기반 인증과
//! 게시물, 팔로우, 북마크, 좋아요 기능을 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 회원가입, 로그인, 프로필 수정
//! - **JWT 인증**: HS256 토큰 기반 상태 없는 인증
//! - **게시물**: 작성, 수정, 삭제, 좋아요
//! - **소셜 그래프**: 팔로우/언팔로우, 북마크
//! - **MongoDB**: 사용자/게시물 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use social_media_backend::repositories::posts::PostRepository;
//! use social_media_backend::repositories::users::UserRepository;
//! use social_media_backend::services::users::UserService;
//!
//! let user_repo = UserRepository::new(&database);
//! let post_repo = PostRepository::new(&database);
//! let user_service = UserService::new(user_repo, post_repo);
//!
//! let created = user_service.signup(request).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
