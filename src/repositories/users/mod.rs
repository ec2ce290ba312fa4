//! Users Repository Module
//!
//! `users` 컬렉션에 대한 데이터 액세스를 제공합니다.

pub mod user_repo;

pub use user_repo::UserRepository;
