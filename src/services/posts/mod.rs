//! Posts Service Module
//!
//! 게시물 작성/수정/삭제와 좋아요의 비즈니스 로직을 제공합니다.

pub mod post_service;

pub use post_service::PostService;
