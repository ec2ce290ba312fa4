//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//! 프로필, 팔로우 그래프, 북마크 집합을 보유하는 User 엔티티를 포함합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! let user = User::new(
//!     "길동".to_string(),
//!     "홍".to_string(),
//!     "hong@example.com".to_string(),
//!     "hong_gildong".to_string(),
//!     hashed_password,
//!     Some(true),
//! );
//! ```

pub mod user;
