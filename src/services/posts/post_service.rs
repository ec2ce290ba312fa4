//! # 게시물 관리 서비스 구현
//!
//! 게시물 작성/수정/삭제의 소유권 규칙과 좋아요 집합 의미론을 구현합니다.
//!
//! ## 소유권 검사
//!
//! 수정/삭제는 게시물에 비정규화된 소유자 사용자명과 요청 정체성의
//! 사용자명을 비교하여 허용됩니다. 불일치는 `OwnershipError`(400).
//!
//! ## 좋아요 의미론
//!
//! 좋아요는 한 사용자당 한 번만 가능하며, `likeCount`는 매 쓰기마다
//! `likedBy` 크기로 재계산됩니다. 좋아요 취소(dislike 엔드포인트)는
//! 좋아요한 적이 있는 사용자에게만 허용됩니다.
//!
//! ## 전체 컬렉션 반환
//!
//! 수정/삭제/좋아요 계열 변이는 전체 게시물 목록을 함께 반환합니다
//! (기존 클라이언트 계약 유지).

use std::collections::HashMap;

use mongodb::bson::{Document, doc, oid::ObjectId};

use crate::domain::auth::authenticated_user::AuthenticatedUser;
use crate::domain::dto::posts::request::{CreatePostRequest, EditPostRequest};
use crate::domain::dto::posts::response::PostResponse;
use crate::domain::dto::users::response::UserSummary;
use crate::domain::entities::posts::post::Post;
use crate::errors::AppError;
use crate::repositories::parse_object_id;
use crate::repositories::posts::PostRepository;
use crate::repositories::users::UserRepository;

/// 게시물 관리 비즈니스 로직 서비스
pub struct PostService {
    posts: PostRepository,
    users: UserRepository,
}

impl PostService {
    /// 리포지토리들로부터 서비스를 생성합니다.
    pub fn new(posts: PostRepository, users: UserRepository) -> Self {
        Self { posts, users }
    }

    /// 전체 게시물 목록을 조회합니다 (소유자 요약 포함).
    pub async fn get_all(&self) -> Result<Vec<PostResponse>, AppError> {
        let posts = self.posts.find_all().await?;
        let directory = self.owner_directory().await?;

        Ok(posts
            .into_iter()
            .map(|post| PostResponse::from_post(post, &directory))
            .collect())
    }

    /// ID로 한 게시물을 조회합니다.
    pub async fn get_by_id(&self, post_id: &str) -> Result<PostResponse, AppError> {
        let id = parse_object_id(post_id)?;

        let post = self
            .posts
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound("게시물을 찾을 수 없습니다".to_string()))?;

        let directory = self.single_owner_directory(&post.user).await?;
        Ok(PostResponse::from_post(post, &directory))
    }

    /// 특정 사용자의 게시물 목록을 조회합니다.
    pub async fn get_by_username(&self, username: &str) -> Result<Vec<PostResponse>, AppError> {
        let posts = self.posts.find_by_owner_username(username).await?;
        let directory = self.owner_directory().await?;

        Ok(posts
            .into_iter()
            .map(|post| PostResponse::from_post(post, &directory))
            .collect())
    }

    /// 인증된 사용자 명의로 새 게시물을 작성합니다.
    pub async fn create(
        &self,
        identity: &AuthenticatedUser,
        request: CreatePostRequest,
    ) -> Result<PostResponse, AppError> {
        let owner = parse_object_id(&identity.user_id)?;

        let post = Post::new(
            request.content,
            request.media_url,
            request.media_alt,
            owner,
            identity.username.clone(),
        );

        let created = self.posts.insert(post).await?;
        log::info!("게시물 작성: {} ({})", identity.username, created.id_string().unwrap_or_default());

        let directory = self.single_owner_directory(&owner).await?;
        Ok(PostResponse::from_post(created, &directory))
    }

    /// 본인 게시물을 수정합니다.
    ///
    /// 성공 시 갱신된 게시물과 전체 게시물 목록을 반환합니다.
    pub async fn edit(
        &self,
        identity: &AuthenticatedUser,
        post_id: &str,
        request: EditPostRequest,
    ) -> Result<(PostResponse, Vec<PostResponse>), AppError> {
        let id = parse_object_id(post_id)?;
        let post = self.owned_post(&id, identity).await?;

        let fields = post_update_fields(&request);
        let updated = if fields.is_empty() {
            post
        } else {
            self.posts
                .update_fields(&id, fields)
                .await?
                .ok_or_else(|| AppError::NotFound("게시물을 찾을 수 없습니다".to_string()))?
        };

        let directory = self.owner_directory().await?;
        let response = PostResponse::from_post(updated, &directory);
        let listing = self.listing(&directory).await?;

        Ok((response, listing))
    }

    /// 본인 게시물을 삭제하고 남은 전체 목록을 반환합니다.
    pub async fn delete(
        &self,
        identity: &AuthenticatedUser,
        post_id: &str,
    ) -> Result<Vec<PostResponse>, AppError> {
        let id = parse_object_id(post_id)?;
        self.owned_post(&id, identity).await?;

        self.posts.delete(&id).await?;
        log::info!("게시물 삭제: {} ({})", identity.username, post_id);

        let directory = self.owner_directory().await?;
        self.listing(&directory).await
    }

    /// 게시물에 좋아요를 등록하고 전체 목록을 반환합니다.
    ///
    /// 본인 게시물 좋아요도 허용됩니다. 같은 사용자의 두 번째 좋아요는
    /// 충돌입니다.
    pub async fn like(
        &self,
        user_id: &str,
        post_id: &str,
    ) -> Result<Vec<PostResponse>, AppError> {
        let liker = parse_object_id(user_id)?;
        let id = parse_object_id(post_id)?;

        let mut post = self
            .posts
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound("게시물을 찾을 수 없습니다".to_string()))?;

        if !post.register_like(liker) {
            return Err(AppError::ConflictError(
                "이미 좋아요한 게시물입니다".to_string(),
            ));
        }

        self.posts.set_likes(&id, &post.likes).await?;

        let directory = self.owner_directory().await?;
        self.listing(&directory).await
    }

    /// 게시물 좋아요를 취소하고 전체 목록을 반환합니다.
    ///
    /// 좋아요한 적이 없는 사용자의 취소는 충돌입니다.
    pub async fn dislike(
        &self,
        user_id: &str,
        post_id: &str,
    ) -> Result<Vec<PostResponse>, AppError> {
        let disliker = parse_object_id(user_id)?;
        let id = parse_object_id(post_id)?;

        let mut post = self
            .posts
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound("게시물을 찾을 수 없습니다".to_string()))?;

        if !post.remove_like(&disliker) {
            return Err(AppError::ConflictError(
                "좋아요하지 않은 게시물은 취소할 수 없습니다".to_string(),
            ));
        }

        self.posts.set_likes(&id, &post.likes).await?;

        let directory = self.owner_directory().await?;
        self.listing(&directory).await
    }

    /// 게시물을 조회하고 요청자가 소유자인지 확인합니다.
    async fn owned_post(
        &self,
        id: &ObjectId,
        identity: &AuthenticatedUser,
    ) -> Result<Post, AppError> {
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("게시물을 찾을 수 없습니다".to_string()))?;

        if !post.owned_by(&identity.username) {
            return Err(AppError::OwnershipError(
                "본인의 게시물만 수정하거나 삭제할 수 있습니다".to_string(),
            ));
        }

        Ok(post)
    }

    /// 전체 게시물 목록을 응답 형태로 구성합니다.
    async fn listing(
        &self,
        directory: &HashMap<ObjectId, UserSummary>,
    ) -> Result<Vec<PostResponse>, AppError> {
        let posts = self.posts.find_all().await?;

        Ok(posts
            .into_iter()
            .map(|post| PostResponse::from_post(post, directory))
            .collect())
    }

    /// 전체 사용자 디렉터리를 구성합니다 (목록 응답의 소유자 확장에 사용).
    async fn owner_directory(&self) -> Result<HashMap<ObjectId, UserSummary>, AppError> {
        let users = self.users.find_all().await?;

        Ok(users
            .iter()
            .filter_map(|user| user.id.map(|id| (id, UserSummary::from(user))))
            .collect())
    }

    /// 단일 소유자만 확장하면 되는 경우의 디렉터리입니다.
    async fn single_owner_directory(
        &self,
        owner: &ObjectId,
    ) -> Result<HashMap<ObjectId, UserSummary>, AppError> {
        let mut directory = HashMap::new();

        if let Some(user) = self.users.find_by_id(owner).await? {
            if let Some(id) = user.id {
                directory.insert(id, UserSummary::from(&user));
            }
        }

        Ok(directory)
    }
}

/// 게시물 패치에서 `$set` 필드 문서를 구성합니다.
fn post_update_fields(request: &EditPostRequest) -> Document {
    let mut fields = doc! {};

    if let Some(content) = &request.content {
        fields.insert("content", content);
    }
    if let Some(media_url) = &request.media_url {
        fields.insert("mediaURL", media_url);
    }
    if let Some(media_alt) = &request.media_alt {
        fields.insert("mediaAlt", media_alt);
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_fields_only_include_present_values() {
        let request = EditPostRequest {
            content: Some("수정된 본문".to_string()),
            media_url: None,
            media_alt: None,
        };

        let fields = post_update_fields(&request);
        assert_eq!(fields.get_str("content").unwrap(), "수정된 본문");
        assert!(!fields.contains_key("mediaURL"));
        assert!(!fields.contains_key("mediaAlt"));
    }

    #[test]
    fn test_update_fields_use_document_casing() {
        let request = EditPostRequest {
            content: None,
            media_url: Some("https://example.com/a.png".to_string()),
            media_alt: Some("대체 텍스트".to_string()),
        };

        let fields = post_update_fields(&request);
        assert!(fields.contains_key("mediaURL"));
        assert!(fields.contains_key("mediaAlt"));
    }

    #[test]
    fn test_empty_patch_builds_empty_document() {
        let request = EditPostRequest {
            content: None,
            media_url: None,
            media_alt: None,
        };

        assert!(post_update_fields(&request).is_empty());
    }
}
