//! 사용자 관련 응답 DTO
//!
//! 클라이언트에게 전달되는 사용자 데이터 구조를 정의합니다.
//! 어떤 응답에도 비밀번호 해시는 포함되지 않습니다.

use std::collections::HashMap;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::User;

/// 팔로우 목록 등에 포함되는 사용자 요약 정보
///
/// 기존 API가 `_id firstName lastName username profilePic`만
/// 선택하여 내려주던 형태와 동일합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub profile_pic: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            username: user.username.clone(),
            profile_pic: user.profile_pic.clone(),
        }
    }
}

/// 사용자 응답 DTO (팔로우 관계가 요약 정보로 확장된 형태)
///
/// 사용자 목록/조회/수정/팔로우 응답에 사용됩니다.
/// `followers`와 `following`은 [`UserSummary`]로 확장되며,
/// 디렉터리에 없는 참조(삭제된 사용자 등)는 조용히 생략됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub profile_pic: String,
    pub banner_img: String,
    pub bio: String,
    pub bio_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_terms_cond: Option<bool>,
    pub followers: Vec<UserSummary>,
    pub following: Vec<UserSummary>,
    pub bookmarks: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl UserResponse {
    /// 엔티티와 사용자 요약 디렉터리로부터 응답을 생성합니다.
    ///
    /// `directory`는 팔로우 관계에 등장하는 사용자 ID를 요약 정보로
    /// 매핑한 것으로, 서비스 계층에서 한 번의 조회로 구성합니다.
    pub fn from_user(user: User, directory: &HashMap<ObjectId, UserSummary>) -> Self {
        let followers = user
            .followers
            .iter()
            .filter_map(|id| directory.get(id).cloned())
            .collect();
        let following = user
            .following
            .iter()
            .filter_map(|id| directory.get(id).cloned())
            .collect();

        let User {
            id,
            first_name,
            last_name,
            email,
            username,
            profile_pic,
            banner_img,
            bio,
            bio_link,
            accept_terms_cond,
            bookmarks,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            first_name,
            last_name,
            email,
            username,
            profile_pic,
            banner_img,
            bio,
            bio_link,
            accept_terms_cond,
            followers,
            following,
            bookmarks: bookmarks.iter().map(|id| id.to_hex()).collect(),
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

/// 인증 응답용 사용자 DTO (팔로우 관계가 ID 문자열로 남아있는 형태)
///
/// 회원가입/로그인 응답은 기존 API와 동일하게 관계를 확장하지 않고
/// ID 목록 그대로 내려줍니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub profile_pic: String,
    pub banner_img: String,
    pub bio: String,
    pub bio_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_terms_cond: Option<bool>,
    pub followers: Vec<String>,
    pub following: Vec<String>,
    pub bookmarks: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for AuthUserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            first_name,
            last_name,
            email,
            username,
            profile_pic,
            banner_img,
            bio,
            bio_link,
            accept_terms_cond,
            followers,
            following,
            bookmarks,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            first_name,
            last_name,
            email,
            username,
            profile_pic,
            banner_img,
            bio,
            bio_link,
            accept_terms_cond,
            followers: followers.iter().map(|id| id.to_hex()).collect(),
            following: following.iter().map(|id| id.to_hex()).collect(),
            bookmarks: bookmarks.iter().map(|id| id.to_hex()).collect(),
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved_user() -> User {
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

    #[test]
    fn test_auth_response_never_contains_password() {
        let response = AuthUserResponse::from(saved_user());
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("password").is_none());
        assert!(json.get("_id").is_some());
    }

    #[test]
    fn test_user_response_never_contains_password() {
        let response = UserResponse::from_user(saved_user(), &HashMap::new());
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_response_fields_use_camel_case() {
        let response = AuthUserResponse::from(saved_user());
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("firstName").is_some());
        assert!(json.get("bioLink").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn test_followers_expand_to_summaries() {
        let follower = saved_user();
        let follower_id = follower.id.unwrap();

        let mut user = saved_user();
        user.followers.push(follower_id);

        let mut directory = HashMap::new();
        directory.insert(follower_id, UserSummary::from(&follower));

        let response = UserResponse::from_user(user, &directory);
        assert_eq!(response.followers.len(), 1);
        assert_eq!(response.followers[0].username, "hong_gildong");
    }

    #[test]
    fn test_dangling_follower_reference_is_skipped() {
        let mut user = saved_user();
        user.followers.push(ObjectId::new());

        let response = UserResponse::from_user(user, &HashMap::new());
        assert!(response.followers.is_empty());
    }

    #[test]
    fn test_bookmarks_serialize_as_hex_strings() {
        let bookmark = ObjectId::new();
        let mut user = saved_user();
        user.bookmarks.push(bookmark);

        let response = AuthUserResponse::from(user);
        assert_eq!(response.bookmarks, vec![bookmark.to_hex()]);
    }
}
