//! Posts Entity Module
//!
//! 게시물 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//! 좋아요 집합의 불변식을 유지하는 Post 엔티티를 포함합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::posts::post::Post;
//!
//! let mut post = Post::new(
//!     "안녕하세요!".to_string(),
//!     String::new(),
//!     String::new(),
//!     owner_id,
//!     "hong_gildong".to_string(),
//! );
//! post.register_like(liker_id);
//! ```

pub mod post;
