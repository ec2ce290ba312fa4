//! # 게시물 리포지토리 구현
//!
//! `posts` 컬렉션의 데이터 액세스 계층입니다.
//! 조회는 ID 또는 비정규화된 소유자 사용자명 기준이며, 좋아요 상태는
//! 엔티티에서 재계산된 값으로 통째로 교체됩니다.

use futures_util::TryStreamExt;
use mongodb::{
    Collection,
    bson::{DateTime, Document, doc, oid::ObjectId, to_bson},
    options::ReturnDocument,
};

use crate::db::Database;
use crate::domain::entities::posts::post::{Post, PostLikes};
use crate::errors::AppError;

/// 게시물 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct PostRepository {
    collection: Collection<Post>,
}

impl PostRepository {
    /// 데이터베이스 연결로부터 리포지토리를 생성합니다.
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection("posts"),
        }
    }

    /// 전체 게시물 목록을 조회합니다.
    pub async fn find_all(&self) -> Result<Vec<Post>, AppError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 게시물을 조회합니다.
    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Post>, AppError> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 소유자 사용자명으로 게시물 목록을 조회합니다.
    pub async fn find_by_owner_username(&self, username: &str) -> Result<Vec<Post>, AppError> {
        let cursor = self
            .collection
            .find(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 게시물을 저장하고 할당된 ID를 채워 반환합니다.
    pub async fn insert(&self, mut post: Post) -> Result<Post, AppError> {
        let result = self
            .collection
            .insert_one(&post)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        post.id = result.inserted_id.as_object_id();
        Ok(post)
    }

    /// 게시물 문서의 필드들을 `$set`으로 갱신하고 갱신된 문서를 반환합니다.
    ///
    /// `updatedAt`은 항상 함께 갱신됩니다. 문서가 없으면 `None`.
    pub async fn update_fields(
        &self,
        id: &ObjectId,
        mut fields: Document,
    ) -> Result<Option<Post>, AppError> {
        fields.insert("updatedAt", DateTime::now());

        self.collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": fields })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 좋아요 상태 서브문서를 교체합니다.
    ///
    /// `likeCount`는 호출 전에 엔티티가 `likedBy` 크기로 재계산한 값입니다.
    pub async fn set_likes(
        &self,
        id: &ObjectId,
        likes: &PostLikes,
    ) -> Result<Option<Post>, AppError> {
        let likes_bson =
            to_bson(likes).map_err(|e| AppError::InternalError(e.to_string()))?;

        self.update_fields(id, doc! { "likes": likes_bson }).await
    }

    /// 게시물을 삭제합니다. 삭제된 문서가 있으면 `true`.
    pub async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
