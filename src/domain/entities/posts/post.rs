//! Post Entity Implementation
//!
//! 게시물 엔티티의 핵심 구현체입니다.
//! 좋아요 집합의 불변식(likeCount == |likedBy|)을 엔티티 수준에서 보장합니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 게시물 좋아요 상태
///
/// `like_count`는 항상 `liked_by`의 원소 수와 일치해야 하며,
/// 이 불변식은 [`Post::register_like`]와 [`Post::remove_like`]가 유지합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostLikes {
    /// 좋아요 수 (== liked_by.len())
    pub like_count: i64,
    /// 좋아요한 사용자 ID 집합
    #[serde(default)]
    pub liked_by: Vec<ObjectId>,
    /// 좋아요를 취소한 사용자 ID 집합
    #[serde(default)]
    pub disliked_by: Vec<ObjectId>,
}

/// 게시물 엔티티
///
/// MongoDB `posts` 컬렉션에 저장되며, 소유자 참조와 함께
/// 소유자의 사용자명을 비정규화하여 보관합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 게시물 본문
    pub content: String,
    /// 첨부 미디어 URL
    #[serde(rename = "mediaURL", default)]
    pub media_url: String,
    /// 미디어 대체 텍스트
    #[serde(default)]
    pub media_alt: String,
    /// 좋아요 상태
    #[serde(default)]
    pub likes: PostLikes,
    /// 소유자 사용자 ID
    pub user: ObjectId,
    /// 소유자 사용자명 (비정규화, 소유권 검사에 사용)
    pub username: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Post {
    /// 새 게시물 생성
    pub fn new(
        content: String,
        media_url: String,
        media_alt: String,
        user: ObjectId,
        username: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            content,
            media_url,
            media_alt,
            likes: PostLikes::default(),
            user,
            username,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 요청자가 이 게시물의 소유자인지 확인
    pub fn owned_by(&self, username: &str) -> bool {
        self.username == username
    }

    /// 좋아요를 등록합니다.
    ///
    /// 이미 좋아요한 사용자면 상태를 변경하지 않고 `false`를 반환합니다.
    /// 성공 시 `like_count`를 `liked_by` 크기로 재계산하며,
    /// 한 사용자는 `liked_by`와 `disliked_by`에 동시에 존재할 수 없습니다.
    pub fn register_like(&mut self, user_id: ObjectId) -> bool {
        if self.likes.liked_by.contains(&user_id) {
            return false;
        }

        self.likes.liked_by.push(user_id);
        self.likes.disliked_by.retain(|disliker| disliker != &user_id);
        self.likes.like_count = self.likes.liked_by.len() as i64;
        true
    }

    /// 좋아요를 취소합니다.
    ///
    /// 좋아요하지 않은 사용자면 `false`를 반환합니다.
    /// 성공 시 해당 사용자를 `liked_by`에서 제거하고 `disliked_by`에 기록하며,
    /// `like_count`를 재계산합니다.
    pub fn remove_like(&mut self, user_id: &ObjectId) -> bool {
        if !self.likes.liked_by.contains(user_id) {
            return false;
        }

        self.likes.liked_by.retain(|liker| liker != user_id);
        if !self.likes.disliked_by.contains(user_id) {
            self.likes.disliked_by.push(*user_id);
        }
        self.likes.like_count = self.likes.liked_by.len() as i64;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post(owner: ObjectId) -> Post {
        Post::new(
            "오늘의 게시물".to_string(),
            String::new(),
            String::new(),
            owner,
            "hong_gildong".to_string(),
        )
    }

    #[test]
    fn test_new_post_has_zero_likes() {
        let post = sample_post(ObjectId::new());

        assert_eq!(post.likes.like_count, 0);
        assert!(post.likes.liked_by.is_empty());
        assert!(post.likes.disliked_by.is_empty());
    }

    #[test]
    fn test_register_like_keeps_count_in_sync() {
        let mut post = sample_post(ObjectId::new());
        let first = ObjectId::new();
        let second = ObjectId::new();

        assert!(post.register_like(first));
        assert!(post.register_like(second));

        assert_eq!(post.likes.like_count, 2);
        assert_eq!(post.likes.like_count as usize, post.likes.liked_by.len());
    }

    #[test]
    fn test_register_like_rejects_duplicate() {
        let mut post = sample_post(ObjectId::new());
        let liker = ObjectId::new();

        assert!(post.register_like(liker));
        assert!(!post.register_like(liker));
        assert_eq!(post.likes.like_count, 1);
    }

    #[test]
    fn test_owner_can_like_own_post() {
        let owner = ObjectId::new();
        let mut post = sample_post(owner);

        assert!(post.register_like(owner));
        assert_eq!(post.likes.like_count, 1);
    }

    #[test]
    fn test_remove_like_requires_existing_like() {
        let mut post = sample_post(ObjectId::new());
        let liker = ObjectId::new();

        assert!(!post.remove_like(&liker));

        post.register_like(liker);
        assert!(post.remove_like(&liker));
        assert_eq!(post.likes.like_count, 0);
        assert!(post.likes.liked_by.is_empty());
        assert_eq!(post.likes.disliked_by, vec![liker]);
    }

    #[test]
    fn test_like_then_remove_roundtrip() {
        let mut post = sample_post(ObjectId::new());
        let liker = ObjectId::new();

        post.register_like(liker);
        post.remove_like(&liker);

        assert_eq!(post.likes.like_count as usize, post.likes.liked_by.len());
        assert!(!post.likes.liked_by.contains(&liker));
    }

    #[test]
    fn test_like_and_dislike_sets_stay_exclusive() {
        let mut post = sample_post(ObjectId::new());
        let liker = ObjectId::new();

        post.register_like(liker);
        post.remove_like(&liker);
        assert!(post.likes.disliked_by.contains(&liker));

        // 다시 좋아요하면 disliked_by에서 제거되어야 함
        assert!(post.register_like(liker));
        assert!(post.likes.liked_by.contains(&liker));
        assert!(!post.likes.disliked_by.contains(&liker));
    }

    #[test]
    fn test_owned_by() {
        let post = sample_post(ObjectId::new());

        assert!(post.owned_by("hong_gildong"));
        assert!(!post.owned_by("someone_else"));
    }
}
