//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 프로필 정보와 함께 팔로우 그래프, 북마크 집합을 보유합니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// MongoDB `users` 컬렉션에 저장되며, 필드명은 camelCase로 직렬화됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 이름
    pub first_name: String,
    /// 성
    pub last_name: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 사용자명 (unique, 가입 후 변경 불가)
    pub username: String,
    /// bcrypt로 해시된 비밀번호 (응답 DTO에는 절대 포함되지 않음)
    pub password: String,
    /// 프로필 이미지 URL
    #[serde(default)]
    pub profile_pic: String,
    /// 배너 이미지 URL
    #[serde(default)]
    pub banner_img: String,
    /// 자기소개
    #[serde(default)]
    pub bio: String,
    /// 자기소개 링크
    #[serde(default)]
    pub bio_link: String,
    /// 약관 동의 여부
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_terms_cond: Option<bool>,
    /// 나를 팔로우하는 사용자 ID 집합
    pub followers: Vec<ObjectId>,
    /// 내가 팔로우하는 사용자 ID 집합
    pub following: Vec<ObjectId>,
    /// 북마크한 게시물 ID 집합
    pub bookmarks: Vec<ObjectId>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 비밀번호는 반드시 해시된 상태로 전달되어야 합니다.
    /// 팔로우 그래프와 북마크는 빈 집합으로 시작합니다.
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        username: String,
        password_hash: String,
        accept_terms_cond: Option<bool>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            first_name,
            last_name,
            email,
            username,
            password: password_hash,
            profile_pic: String::new(),
            banner_img: String::new(),
            bio: String::new(),
            bio_link: String::new(),
            accept_terms_cond,
            followers: Vec::new(),
            following: Vec::new(),
            bookmarks: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 북마크 집합에 게시물을 추가합니다.
    ///
    /// 이미 북마크된 게시물이면 집합을 변경하지 않고 `false`를 반환합니다.
    pub fn add_bookmark(&mut self, post_id: ObjectId) -> bool {
        if self.bookmarks.contains(&post_id) {
            return false;
        }

        self.bookmarks.push(post_id);
        true
    }

    /// 북마크 집합에서 게시물을 제거합니다.
    ///
    /// 값 동등성으로 비교하며, 북마크되지 않은 게시물이면 `false`를 반환합니다.
    pub fn remove_bookmark(&mut self, post_id: &ObjectId) -> bool {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|bookmarked| bookmarked != post_id);

        self.bookmarks.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "길동".to_string(),
            "홍".to_string(),
            "hong@example.com".to_string(),
            "hong_gildong".to_string(),
            "$2b$10$hashedpassword".to_string(),
            Some(true),
        )
    }

    #[test]
    fn test_new_user_starts_with_empty_relations() {
        let user = sample_user();

        assert!(user.id.is_none());
        assert!(user.followers.is_empty());
        assert!(user.following.is_empty());
        assert!(user.bookmarks.is_empty());
        assert_eq!(user.profile_pic, "");
        assert_eq!(user.accept_terms_cond, Some(true));
    }

    #[test]
    fn test_add_bookmark_rejects_duplicate() {
        let mut user = sample_user();
        let post_id = ObjectId::new();

        assert!(user.add_bookmark(post_id));
        assert!(!user.add_bookmark(post_id));
        assert_eq!(user.bookmarks.len(), 1);
    }

    #[test]
    fn test_remove_bookmark_requires_membership() {
        let mut user = sample_user();
        let post_id = ObjectId::new();

        assert!(!user.remove_bookmark(&post_id));

        user.add_bookmark(post_id);
        assert!(user.remove_bookmark(&post_id));
        assert!(user.bookmarks.is_empty());
    }

    #[test]
    fn test_remove_bookmark_compares_by_value() {
        let mut user = sample_user();
        let post_id = ObjectId::new();
        user.add_bookmark(post_id);

        // 같은 hex에서 파싱한 별도 인스턴스로도 제거 가능해야 함
        let same_id = ObjectId::parse_str(post_id.to_hex()).unwrap();
        assert!(user.remove_bookmark(&same_id));
        assert!(user.bookmarks.is_empty());
    }

    #[test]
    fn test_id_string_for_unsaved_user() {
        let user = sample_user();
        assert!(user.id_string().is_none());
    }
}
