//! Users Service Module
//!
//! 사용자 계정, 팔로우 그래프, 북마크 집합의 비즈니스 로직을 제공합니다.

pub mod user_service;

pub use user_service::UserService;
