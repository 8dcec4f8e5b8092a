//! Image Entity Implementation
//!
//! 사용자가 업로드한 이미지 한 장을 표현합니다.
//! 생성 이후에는 수정되지 않고, 소유자만 삭제할 수 있습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::entities::{Owned, blob::StoredBlob};

/// 제목이 주어지지 않았을 때 사용하는 기본 제목
pub const DEFAULT_IMAGE_TITLE: &str = "Untitled";

/// 이미지 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 소유자 사용자 ID
    pub user_id: ObjectId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// 이미지 바이트와 MIME 타입
    pub image: StoredBlob,
    #[serde(default = "DateTime::now")]
    pub created_at: DateTime,
    #[serde(default = "DateTime::now")]
    pub updated_at: DateTime,
}

impl Image {
    pub fn new(owner: ObjectId, title: String, description: String, image: StoredBlob) -> Self {
        let now = DateTime::now();

        Self {
            id: ObjectId::new(),
            user_id: owner,
            title,
            description,
            image,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> String {
        self.id.to_hex()
    }

    /// 클라이언트가 `<img src>`에 바로 넣을 수 있는 data URI
    pub fn image_url(&self) -> String {
        self.image.to_data_uri().unwrap_or_default()
    }
}

impl Owned for Image {
    fn owner_id(&self) -> &ObjectId {
        &self.user_id
    }
}
