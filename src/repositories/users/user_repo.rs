//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션의 데이터 액세스 계층입니다.
//! 유니크 인덱스 관리, `$or` 중복 검사, 팔로우 edge의 조건부 갱신을
//! 담당합니다.
//!
//! ## 팔로우 edge 갱신 규약
//!
//! `add_following`/`remove_following`은 필터에 현재 멤버십 조건을 포함한
//! `find_one_and_update`로 수행됩니다. 갱신이 문서 0건에 매칭되면 `None`을
//! 반환하며, 서비스 계층은 이를 충돌(이미 팔로우/팔로우하지 않음)로
//! 해석합니다. 반대 방향(`add_follower`/`remove_follower`)은 두 번째
//! 쓰기로 수행되며 두 쓰기는 원자적이지 않습니다.

use futures_util::TryStreamExt;
use mongodb::{
    Collection, IndexModel,
    bson::{DateTime, Document, doc, oid::ObjectId},
    options::{IndexOptions, ReturnDocument},
};

use crate::db::Database;
use crate::domain::entities::users::user::User;
use crate::errors::AppError;

/// 사용자 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    /// 데이터베이스 연결로부터 리포지토리를 생성합니다.
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection("users"),
        }
    }

    /// 전체 사용자 목록을 조회합니다.
    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
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

    /// ID로 사용자를 조회합니다.
    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 사용자명으로 사용자를 조회합니다.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 사용자명 또는 이메일이 겹치는 기존 사용자를 조회합니다.
    ///
    /// 회원가입 시 중복 검사에 사용됩니다. 유니크 인덱스가 최종
    /// 방어선이지만, 이 검사로 충돌을 409로 먼저 보고합니다.
    pub async fn find_duplicate(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! {
                "$or": [
                    { "username": username },
                    { "email": email },
                ]
            })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 사용자를 저장하고 할당된 ID를 채워 반환합니다.
    pub async fn insert(&self, mut user: User) -> Result<User, AppError> {
        let result = self
            .collection
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        user.id = result.inserted_id.as_object_id();
        Ok(user)
    }

    /// 사용자 문서의 필드들을 `$set`으로 갱신하고 갱신된 문서를 반환합니다.
    ///
    /// `updatedAt`은 항상 함께 갱신됩니다. 문서가 없으면 `None`.
    pub async fn update_fields(
        &self,
        id: &ObjectId,
        mut fields: Document,
    ) -> Result<Option<User>, AppError> {
        fields.insert("updatedAt", DateTime::now());

        self.collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": fields })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// actor의 `following`에 target을 조건부로 추가합니다.
    ///
    /// 이미 팔로우 중이면(또는 actor 문서가 없으면) 0건에 매칭되어
    /// `None`을 반환합니다.
    pub async fn add_following(
        &self,
        actor: &ObjectId,
        target: &ObjectId,
    ) -> Result<Option<User>, AppError> {
        self.collection
            .find_one_and_update(
                doc! { "_id": actor, "following": { "$ne": target } },
                doc! {
                    "$addToSet": { "following": target },
                    "$set": { "updatedAt": DateTime::now() },
                },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// target의 `followers`에 actor를 추가합니다 (edge의 반대 방향).
    pub async fn add_follower(
        &self,
        target: &ObjectId,
        actor: &ObjectId,
    ) -> Result<Option<User>, AppError> {
        self.collection
            .find_one_and_update(
                doc! { "_id": target, "followers": { "$ne": actor } },
                doc! {
                    "$addToSet": { "followers": actor },
                    "$set": { "updatedAt": DateTime::now() },
                },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// actor의 `following`에서 target을 조건부로 제거합니다.
    ///
    /// 팔로우 중이 아니면 0건에 매칭되어 `None`을 반환합니다.
    pub async fn remove_following(
        &self,
        actor: &ObjectId,
        target: &ObjectId,
    ) -> Result<Option<User>, AppError> {
        self.collection
            .find_one_and_update(
                doc! { "_id": actor, "following": target },
                doc! {
                    "$pull": { "following": target },
                    "$set": { "updatedAt": DateTime::now() },
                },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// target의 `followers`에서 actor를 제거합니다 (edge의 반대 방향).
    pub async fn remove_follower(
        &self,
        target: &ObjectId,
        actor: &ObjectId,
    ) -> Result<Option<User>, AppError> {
        self.collection
            .find_one_and_update(
                doc! { "_id": target, "followers": actor },
                doc! {
                    "$pull": { "followers": actor },
                    "$set": { "updatedAt": DateTime::now() },
                },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 사용자의 북마크 집합 전체를 교체합니다.
    pub async fn set_bookmarks(
        &self,
        id: &ObjectId,
        bookmarks: &[ObjectId],
    ) -> Result<Option<User>, AppError> {
        self.update_fields(id, doc! { "bookmarks": bookmarks.to_vec() })
            .await
    }

    /// `users` 컬렉션의 유니크 인덱스를 생성합니다.
    ///
    /// 애플리케이션 시작 시 한 번 호출됩니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("username_unique".to_string())
                    .build(),
            )
            .build();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_indexes([username_index, email_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
