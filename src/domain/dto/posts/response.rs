//! 게시물 관련 응답 DTO
//!
//! 클라이언트에게 전달되는 게시물 데이터 구조를 정의합니다.
//! 소유자 참조는 사용자 요약 정보로 확장되며, 디렉터리에 없는
//! 참조(탈퇴한 사용자 등)는 `null`로 내려갑니다.

use std::collections::HashMap;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::dto::users::response::UserSummary;
use crate::domain::entities::posts::post::{Post, PostLikes};

/// 좋아요 상태 응답
///
/// `likedBy`/`dislikedBy`의 사용자 ID는 hex 문자열로 직렬화됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikesResponse {
    pub like_count: i64,
    pub liked_by: Vec<String>,
    pub disliked_by: Vec<String>,
}

impl From<&PostLikes> for LikesResponse {
    fn from(likes: &PostLikes) -> Self {
        Self {
            like_count: likes.like_count,
            liked_by: likes.liked_by.iter().map(|id| id.to_hex()).collect(),
            disliked_by: likes.disliked_by.iter().map(|id| id.to_hex()).collect(),
        }
    }
}

/// 게시물 응답 DTO (소유자가 요약 정보로 확장된 형태)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub content: String,
    #[serde(rename = "mediaURL")]
    pub media_url: String,
    pub media_alt: String,
    pub likes: LikesResponse,
    /// 소유자 요약 정보. 디렉터리에 없는 참조면 `null`
    pub user: Option<UserSummary>,
    /// 비정규화된 소유자 사용자명
    pub username: String,
    pub created_at: String,
    pub updated_at: String,
}

impl PostResponse {
    /// 엔티티와 사용자 요약 디렉터리로부터 응답을 생성합니다.
    pub fn from_post(post: Post, directory: &HashMap<ObjectId, UserSummary>) -> Self {
        let owner = directory.get(&post.user).cloned();
        let likes = LikesResponse::from(&post.likes);

        let Post {
            id,
            content,
            media_url,
            media_alt,
            username,
            created_at,
            updated_at,
            ..
        } = post;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            content,
            media_url,
            media_alt,
            likes,
            user: owner,
            username,
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::user::User;

    fn saved_owner() -> User {
        let mut user = User::new(
            "길동".to_string(),
            "홍".to_string(),
            "hong@example.com".to_string(),
            "hong_gildong".to_string(),
            "$2b$10$hashedpassword".to_string(),
            None,
        );
        user.id = Some(ObjectId::new());
        user
    }

    fn saved_post(owner: &User) -> Post {
        let mut post = Post::new(
            "오늘의 게시물".to_string(),
            String::new(),
            String::new(),
            owner.id.unwrap(),
            owner.username.clone(),
        );
        post.id = Some(ObjectId::new());
        post
    }

    #[test]
    fn test_owner_expands_to_summary() {
        let owner = saved_owner();
        let post = saved_post(&owner);

        let mut directory = HashMap::new();
        directory.insert(owner.id.unwrap(), UserSummary::from(&owner));

        let response = PostResponse::from_post(post, &directory);
        assert_eq!(response.user.unwrap().username, "hong_gildong");
    }

    #[test]
    fn test_dangling_owner_serializes_as_null() {
        let owner = saved_owner();
        let post = saved_post(&owner);

        let response = PostResponse::from_post(post, &HashMap::new());
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("user").unwrap().is_null());
    }

    #[test]
    fn test_media_url_keeps_original_casing() {
        let owner = saved_owner();
        let mut post = saved_post(&owner);
        post.media_url = "https://example.com/a.png".to_string();

        let response = PostResponse::from_post(post, &HashMap::new());
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("mediaURL").is_some());
        assert!(json.get("mediaUrl").is_none());
    }

    #[test]
    fn test_liked_by_serializes_as_hex_strings() {
        let owner = saved_owner();
        let mut post = saved_post(&owner);
        let liker = ObjectId::new();
        post.register_like(liker);

        let response = PostResponse::from_post(post, &HashMap::new());
        assert_eq!(response.likes.like_count, 1);
        assert_eq!(response.likes.liked_by, vec![liker.to_hex()]);
    }
}
