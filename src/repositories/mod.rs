//! # Data Access Layer Module
//!
//! MongoDB 컬렉션에 대한 데이터 액세스를 담당하는 리포지토리들을 정의합니다.
//! 서비스 계층은 이 모듈을 통해서만 데이터베이스에 접근합니다.
//!
//! ## 모듈 구성
//!
//! - [`users`] - `users` 컬렉션 (유니크 인덱스, 팔로우 edge 조건부 갱신)
//! - [`posts`] - `posts` 컬렉션 (좋아요 상태 갱신, 소유자 조회)
//!
//! ## 일관성 모델
//!
//! 다중 문서 트랜잭션은 사용하지 않습니다. 팔로우/언팔로우의 양방향
//! edge 갱신은 두 번의 순차적 단일 문서 갱신으로 수행되며, 그 사이의
//! 공백은 관찰 가능합니다 (기존 동작 유지).

use mongodb::bson::oid::ObjectId;

use crate::errors::AppError;

pub mod posts;
pub mod users;

/// 경로/토큰에서 전달된 hex 문자열을 ObjectId로 파싱합니다.
pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_object_id() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);
    }

    #[test]
    fn test_parse_invalid_object_id() {
        assert!(matches!(
            parse_object_id("not-an-id"),
            Err(AppError::ValidationError(_))
        ));
    }
}
