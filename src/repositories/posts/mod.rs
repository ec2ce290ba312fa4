//! Posts Repository Module
//!
//! `posts` 컬렉션에 대한 데이터 액세스를 제공합니다.

pub mod post_repo;

pub use post_repo::PostRepository;
