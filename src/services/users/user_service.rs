//! # 사용자 관리 서비스 구현
//!
//! 회원가입/로그인, 사용자 디렉터리 조회, 프로필 수정, 팔로우 그래프,
//! 북마크 집합의 비즈니스 규칙을 구현합니다.
//!
//! ## 팔로우 edge 의미론
//!
//! 팔로우는 두 문서에 걸친 대칭 관계입니다
//! (A ∈ B.followers ⟺ B ∈ A.following). 갱신은 actor 측의 조건부
//! 쓰기(중복 방지)와 target 측의 대칭 쓰기, 두 번의 순차적 쓰기로
//! 수행되며 원자적이지 않습니다. 첫 쓰기가 0건에 매칭되면 충돌로
//! 보고합니다.
//!
//! ## 전체 컬렉션 반환
//!
//! 팔로우/언팔로우는 갱신된 사용자와 함께 전체 사용자 목록을
//! 반환합니다. 기존 클라이언트 계약이므로 유지합니다.

use std::collections::HashMap;

use mongodb::bson::{Document, doc, oid::ObjectId};

use crate::domain::dto::posts::response::PostResponse;
use crate::domain::dto::users::request::{LoginRequest, SignupRequest, UserProfilePatch};
use crate::domain::dto::users::response::{UserResponse, UserSummary};
use crate::domain::entities::users::user::User;
use crate::errors::AppError;
use crate::repositories::parse_object_id;
use crate::repositories::posts::PostRepository;
use crate::repositories::users::UserRepository;
use crate::services::auth::credential;

/// 사용자 관리 비즈니스 로직 서비스
pub struct UserService {
    users: UserRepository,
    posts: PostRepository,
}

impl UserService {
    /// 리포지토리들로부터 서비스를 생성합니다.
    pub fn new(users: UserRepository, posts: PostRepository) -> Self {
        Self { users, posts }
    }

    /// 새 사용자 계정을 생성합니다.
    ///
    /// 사용자명 또는 이메일이 이미 사용 중이면 `ConflictError`,
    /// 비밀번호는 영속화 전에 bcrypt로 해시됩니다.
    pub async fn signup(&self, request: SignupRequest) -> Result<User, AppError> {
        if self
            .users
            .find_duplicate(&request.username, &request.email)
            .await?
            .is_some()
        {
            return Err(AppError::ConflictError(
                "이미 사용 중인 사용자명 또는 이메일입니다".to_string(),
            ));
        }

        let password_hash = credential::hash_password(&request.password)?;

        let user = User::new(
            request.first_name,
            request.last_name,
            request.email,
            request.username,
            password_hash,
            request.accept_terms_cond,
        );

        let created = self.users.insert(user).await?;
        log::info!("회원가입 완료: {}", created.username);

        Ok(created)
    }

    /// 자격 증명을 검증하고 사용자를 반환합니다.
    ///
    /// 사용자명이 없으면 `NotFound`(기존 계약의 404 구분 유지),
    /// 비밀번호 불일치는 `AuthenticationError`.
    pub async fn login(&self, request: &LoginRequest) -> Result<User, AppError> {
        let user = self
            .users
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        if !credential::verify_password(&request.password, &user.password)? {
            log::warn!("로그인 실패 (비밀번호 불일치): {}", request.username);
            return Err(AppError::AuthenticationError(
                "비밀번호가 올바르지 않습니다".to_string(),
            ));
        }

        Ok(user)
    }

    /// 전체 사용자 목록을 조회합니다 (팔로우 관계 확장).
    pub async fn get_all(&self) -> Result<Vec<UserResponse>, AppError> {
        let all = self.users.find_all().await?;
        let directory = summary_directory(&all);

        Ok(all
            .into_iter()
            .map(|user| UserResponse::from_user(user, &directory))
            .collect())
    }

    /// 사용자명으로 한 사용자를 조회합니다.
    pub async fn get_by_username(&self, username: &str) -> Result<UserResponse, AppError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let all = self.users.find_all().await?;
        let directory = summary_directory(&all);

        Ok(UserResponse::from_user(user, &directory))
    }

    /// 인증된 사용자 본인의 프로필을 수정합니다.
    ///
    /// `username`은 가입 후 변경할 수 없습니다. 패치에 `password`가
    /// 포함되면 영속화 전에 재해시됩니다.
    pub async fn edit_profile(
        &self,
        user_id: &str,
        patch: UserProfilePatch,
    ) -> Result<UserResponse, AppError> {
        let id = parse_object_id(user_id)?;

        let current = self
            .users
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let fields = profile_update_fields(&patch, &current.username)?;

        let updated = if fields.is_empty() {
            current
        } else {
            self.users
                .update_fields(&id, fields)
                .await?
                .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?
        };

        let all = self.users.find_all().await?;
        let directory = summary_directory(&all);

        Ok(UserResponse::from_user(updated, &directory))
    }

    /// target을 팔로우합니다.
    ///
    /// 자기 팔로우는 검증 에러, 이미 팔로우 중이면 충돌입니다.
    /// 성공 시 갱신된 actor와 전체 사용자 목록을 반환합니다.
    pub async fn follow(
        &self,
        actor_id: &str,
        target_id: &str,
    ) -> Result<(UserResponse, Vec<UserResponse>), AppError> {
        let actor = parse_object_id(actor_id)?;
        let target = parse_object_id(target_id)?;

        if actor == target {
            return Err(AppError::ValidationError(
                "자기 자신을 팔로우할 수 없습니다".to_string(),
            ));
        }

        // 첫 번째 쓰기: actor 측 조건부 갱신. 0건 매칭이면 edge가 이미 존재
        let updated_actor = self
            .users
            .add_following(&actor, &target)
            .await?
            .ok_or_else(|| {
                AppError::ConflictError("이미 팔로우한 사용자입니다".to_string())
            })?;

        // 두 번째 쓰기: target 측 대칭 갱신. target 부재는 검사하지 않음 (기존 동작)
        self.users.add_follower(&target, &actor).await?;

        self.listing_with(updated_actor).await
    }

    /// target 팔로우를 해제합니다.
    pub async fn unfollow(
        &self,
        actor_id: &str,
        target_id: &str,
    ) -> Result<(UserResponse, Vec<UserResponse>), AppError> {
        let actor = parse_object_id(actor_id)?;
        let target = parse_object_id(target_id)?;

        if actor == target {
            return Err(AppError::ValidationError(
                "자기 자신을 언팔로우할 수 없습니다".to_string(),
            ));
        }

        let updated_actor = self
            .users
            .remove_following(&actor, &target)
            .await?
            .ok_or_else(|| {
                AppError::ConflictError("팔로우하지 않은 사용자입니다".to_string())
            })?;

        self.users.remove_follower(&target, &actor).await?;

        self.listing_with(updated_actor).await
    }

    /// 게시물을 북마크에 추가하고 북마크 ID 목록을 반환합니다.
    ///
    /// 게시물 존재 여부는 검사하지 않습니다 (기존 동작). 댕글링 참조는
    /// [`Self::list_bookmarks`]에서 조용히 생략됩니다.
    pub async fn add_bookmark(
        &self,
        user_id: &str,
        post_id: &str,
    ) -> Result<Vec<String>, AppError> {
        let id = parse_object_id(user_id)?;
        let post = parse_object_id(post_id)?;

        let mut user = self
            .users
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        if !user.add_bookmark(post) {
            return Err(AppError::ConflictError(
                "이미 북마크한 게시물입니다".to_string(),
            ));
        }

        let updated = self
            .users
            .set_bookmarks(&id, &user.bookmarks)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(bookmark_ids(&updated))
    }

    /// 게시물을 북마크에서 제거하고 북마크 ID 목록을 반환합니다.
    pub async fn remove_bookmark(
        &self,
        user_id: &str,
        post_id: &str,
    ) -> Result<Vec<String>, AppError> {
        let id = parse_object_id(user_id)?;
        let post = parse_object_id(post_id)?;

        let mut user = self
            .users
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        if !user.remove_bookmark(&post) {
            return Err(AppError::ConflictError(
                "북마크하지 않은 게시물입니다".to_string(),
            ));
        }

        let updated = self
            .users
            .set_bookmarks(&id, &user.bookmarks)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(bookmark_ids(&updated))
    }

    /// 북마크 목록을 게시물(소유자 요약 포함)로 확장하여 반환합니다.
    ///
    /// 삭제된 게시물을 가리키는 북마크는 조용히 생략됩니다.
    pub async fn list_bookmarks(&self, user_id: &str) -> Result<Vec<PostResponse>, AppError> {
        let id = parse_object_id(user_id)?;

        let user = self
            .users
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let all = self.users.find_all().await?;
        let directory = summary_directory(&all);

        let mut bookmarks = Vec::with_capacity(user.bookmarks.len());
        for post_id in &user.bookmarks {
            if let Some(post) = self.posts.find_by_id(post_id).await? {
                bookmarks.push(PostResponse::from_post(post, &directory));
            }
        }

        Ok(bookmarks)
    }

    /// 갱신된 사용자와 전체 사용자 목록을 함께 구성합니다.
    async fn listing_with(
        &self,
        updated: User,
    ) -> Result<(UserResponse, Vec<UserResponse>), AppError> {
        let all = self.users.find_all().await?;
        let directory = summary_directory(&all);

        let user = UserResponse::from_user(updated, &directory);
        let users = all
            .into_iter()
            .map(|u| UserResponse::from_user(u, &directory))
            .collect();

        Ok((user, users))
    }
}

/// 사용자 목록에서 ID -> 요약 정보 디렉터리를 구성합니다.
fn summary_directory(users: &[User]) -> HashMap<ObjectId, UserSummary> {
    users
        .iter()
        .filter_map(|user| user.id.map(|id| (id, UserSummary::from(user))))
        .collect()
}

/// 프로필 패치에서 `$set` 필드 문서를 구성합니다.
///
/// `username` 변경 시도는 검증 에러로 거부됩니다 (현재 값과 같으면 무시).
/// `password`는 저장 전에 재해시됩니다.
fn profile_update_fields(
    patch: &UserProfilePatch,
    current_username: &str,
) -> Result<Document, AppError> {
    if let Some(username) = &patch.username {
        if username != current_username {
            return Err(AppError::ValidationError(
                "사용자명은 변경할 수 없습니다".to_string(),
            ));
        }
    }

    let mut fields = doc! {};

    if let Some(first_name) = &patch.first_name {
        fields.insert("firstName", first_name);
    }
    if let Some(last_name) = &patch.last_name {
        fields.insert("lastName", last_name);
    }
    if let Some(email) = &patch.email {
        fields.insert("email", email);
    }
    if let Some(password) = &patch.password {
        fields.insert("password", credential::hash_password(password)?);
    }
    if let Some(profile_pic) = &patch.profile_pic {
        fields.insert("profilePic", profile_pic);
    }
    if let Some(banner_img) = &patch.banner_img {
        fields.insert("bannerImg", banner_img);
    }
    if let Some(bio) = &patch.bio {
        fields.insert("bio", bio);
    }
    if let Some(bio_link) = &patch.bio_link {
        fields.insert("bioLink", bio_link);
    }

    Ok(fields)
}

/// 북마크 ID 목록을 hex 문자열로 변환합니다.
fn bookmark_ids(user: &User) -> Vec<String> {
    user.bookmarks.iter().map(|id| id.to_hex()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_patch() -> UserProfilePatch {
        UserProfilePatch {
            first_name: None,
            last_name: None,
            email: None,
            username: None,
            password: None,
            profile_pic: None,
            banner_img: None,
            bio: None,
            bio_link: None,
        }
    }

    #[test]
    fn test_username_change_is_rejected() {
        let patch = UserProfilePatch {
            username: Some("new_name".to_string()),
            ..empty_patch()
        };

        let result = profile_update_fields(&patch, "hong_gildong");
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_same_username_is_ignored() {
        let patch = UserProfilePatch {
            username: Some("hong_gildong".to_string()),
            bio: Some("새로운 자기소개".to_string()),
            ..empty_patch()
        };

        let fields = profile_update_fields(&patch, "hong_gildong").unwrap();
        assert!(!fields.contains_key("username"));
        assert_eq!(fields.get_str("bio").unwrap(), "새로운 자기소개");
    }

    #[test]
    fn test_password_is_rehashed_before_persistence() {
        let patch = UserProfilePatch {
            password: Some("new-secret".to_string()),
            ..empty_patch()
        };

        let fields = profile_update_fields(&patch, "hong_gildong").unwrap();
        let stored = fields.get_str("password").unwrap();

        assert_ne!(stored, "new-secret");
        assert!(credential::verify_password("new-secret", stored).unwrap());
    }

    #[test]
    fn test_absent_fields_are_not_touched() {
        let fields = profile_update_fields(&empty_patch(), "hong_gildong").unwrap();
        assert!(fields.is_empty());
    }

    #[test]
    fn test_field_names_use_document_casing() {
        let patch = UserProfilePatch {
            first_name: Some("길동".to_string()),
            bio_link: Some("https://example.com".to_string()),
            ..empty_patch()
        };

        let fields = profile_update_fields(&patch, "hong_gildong").unwrap();
        assert!(fields.contains_key("firstName"));
        assert!(fields.contains_key("bioLink"));
    }

    #[test]
    fn test_summary_directory_skips_unsaved_users() {
        let saved = {
            let mut user = User::new(
                "길동".to_string(),
                "홍".to_string(),
                "hong@example.com".to_string(),
                "hong_gildong".to_string(),
                "$2b$10$hash".to_string(),
                None,
            );
            user.id = Some(ObjectId::new());
            user
        };
        let unsaved = User::new(
            "몽룡".to_string(),
            "이".to_string(),
            "lee@example.com".to_string(),
            "lee_mongryong".to_string(),
            "$2b$10$hash".to_string(),
            None,
        );

        let directory = summary_directory(&[saved.clone(), unsaved]);
        assert_eq!(directory.len(), 1);
        assert!(directory.contains_key(&saved.id.unwrap()));
    }
}
