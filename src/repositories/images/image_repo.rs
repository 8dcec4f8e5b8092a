//! # 이미지 리포지토리 구현
//!
//! `images` 컬렉션에 대한 MongoDB 데이터 액세스입니다.
//! 이미지 바이트는 문서 안에 Binary로 함께 저장됩니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::Image,
    repositories::ImageStore,
};

const COLLECTION_NAME: &str = "images";

/// 이미지 데이터 액세스 리포지토리
///
/// - **컬렉션명**: `images`
/// - **인덱스**: `{ userId: 1, createdAt: -1 }` (소유자별 최신순 목록)
pub struct ImageRepository {
    db: Arc<Database>,
}

impl ImageRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Image> {
        self.db.get_database().collection::<Image>(COLLECTION_NAME)
    }

    /// 소유자별 목록 조회용 복합 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let owner_recent_index = IndexModel::builder()
            .keys(doc! { "userId": 1, "createdAt": -1 })
            .options(IndexOptions::builder()
                .name("user_created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([owner_recent_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ImageStore for ImageRepository {
    fn name(&self) -> &'static str {
        COLLECTION_NAME
    }

    async fn insert(&self, image: Image) -> AppResult<Image> {
        self.collection()
            .insert_one(&image)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(image)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Image>> {
        self.collection()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 소유자의 이미지 목록
    ///
    /// ObjectId는 생성 순서대로 증가하므로 같은 `createdAt` 안에서는
    /// `_id` 내림차순이 최근 업로드 순서가 됩니다.
    async fn list_by_owner(&self, owner: &ObjectId) -> AppResult<Vec<Image>> {
        let cursor = self.collection()
            .find(doc! { "userId": *owner })
            .sort(doc! { "createdAt": -1, "_id": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect::<Vec<Image>>()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn delete_by_id(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self.collection()
            .delete_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
