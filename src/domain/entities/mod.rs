//! # Domain Entities Module
//!
//! 이 모듈은 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! MongoDB 문서와 직접 매핑되는 데이터 구조체들을 포함합니다.
//!
//! ## 주요 역할
//!
//! - **도메인 모델링**: 비즈니스 도메인의 핵심 개념들을 Rust 구조체로 표현
//! - **데이터베이스 매핑**: MongoDB 컬렉션과 1:1 대응되는 문서 구조 정의
//! - **불변식 보장**: 좋아요/북마크 집합 연산을 엔티티 메서드로 캡슐화
//!
//! ## MongoDB 통합
//!
//! 모든 엔티티는 다음 특징을 가집니다:
//! - **BSON 직렬화**: `serde`와 `bson` 크레이트를 통한 자동 변환
//! - **ObjectId 지원**: MongoDB의 `_id` 필드와 매핑
//! - **camelCase 필드명**: 기존 컬렉션 문서와의 호환성 유지

pub mod users;
pub mod posts;
